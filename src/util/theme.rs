//! Theme preference: parsing, toggling, and DOM application.
//!
//! The preference is stored under the `"theme"` key as `"light"` / `"dark"`
//! and applied as the `data-theme` attribute on `<html>`. When nothing is
//! stored, the system preference decides. Unknown stored values fall back to
//! light. Requires a browser environment for application and the system
//! fallback; parsing and toggling are pure.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use campaign::store::{ProgressStore, THEME_KEY};

/// Color theme for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// The safe default.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value stored under the `"theme"` key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is light.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the theme preference from the store, falling back to the system
/// preference when nothing is stored.
#[must_use]
pub fn read_preference(store: &dyn ProgressStore) -> Theme {
    if let Some(raw) = store.read(THEME_KEY) {
        return Theme::parse(&raw);
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

/// Apply the theme as the `data-theme` attribute on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle, apply, and persist the theme. Persistence is best-effort.
pub fn toggle(current: Theme, store: &dyn ProgressStore) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(err) = store.write(THEME_KEY, next.as_str()) {
        leptos::logging::warn!("failed to persist theme: {err}");
    }
    next
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
