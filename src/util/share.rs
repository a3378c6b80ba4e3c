//! Social share link construction.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Where a share link posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Facebook,
    Twitter,
}

/// Build the share URL for `target`.
///
/// `message` and `page_url` are percent-encoded into the query string.
/// WhatsApp takes a single text parameter, so the page URL is appended to
/// the message there.
#[must_use]
pub fn share_url(target: ShareTarget, message: &str, page_url: &str) -> String {
    match target {
        ShareTarget::WhatsApp => format!(
            "https://wa.me/?text={}",
            urlencoding::encode(&format!("{message} {page_url}"))
        ),
        ShareTarget::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            urlencoding::encode(page_url)
        ),
        ShareTarget::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(message),
            urlencoding::encode(page_url)
        ),
    }
}
