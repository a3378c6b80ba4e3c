use super::*;

const URL: &str = "https://example.org/campaign?ref=home";

#[test]
fn whatsapp_appends_the_url_to_the_message() {
    let link = share_url(ShareTarget::WhatsApp, "Help Amal!", URL);
    assert!(link.starts_with("https://wa.me/?text="));
    assert!(link.contains("Help%20Amal%21"));
    assert!(link.contains("https%3A%2F%2Fexample.org%2Fcampaign%3Fref%3Dhome"));
}

#[test]
fn facebook_takes_only_the_url() {
    let link = share_url(ShareTarget::Facebook, "ignored", URL);
    assert_eq!(
        link,
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.org%2Fcampaign%3Fref%3Dhome"
    );
}

#[test]
fn twitter_separates_text_and_url_parameters() {
    let link = share_url(ShareTarget::Twitter, "Help Amal!", URL);
    assert!(link.starts_with("https://twitter.com/intent/tweet?text="));
    assert!(link.contains("text=Help%20Amal%21"));
    assert!(link.contains("&url=https%3A%2F%2Fexample.org%2Fcampaign%3Fref%3Dhome"));
}

#[test]
fn reserved_characters_in_the_message_are_encoded() {
    let link = share_url(ShareTarget::Twitter, "a&b=c", URL);
    assert!(link.contains("text=a%26b%3Dc"));
}
