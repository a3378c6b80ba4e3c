//! Top navigation with in-page anchors and the theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::BrowserStore;
use crate::util::theme::{self, Theme};

/// Fixed navigation bar.
///
/// The theme toggle flips, applies, and persists the preference in one go;
/// the button label always names the theme a click would switch to.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().theme, &BrowserStore);
        ui.update(|u| u.theme = next);
    };

    let toggle_label = move || match ui.get().theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };
    let toggle_icon = move || match ui.get().theme {
        Theme::Light => "\u{1f319}",
        Theme::Dark => "\u{2600}\u{fe0f}",
    };

    view! {
        <nav class="nav">
            <a href="#top" class="nav__brand">"GiveSpark"</a>
            <div class="nav__links">
                <a href="#story">"Story"</a>
                <a href="#donate">"Donate"</a>
                <a href="#voices">"Voices"</a>
            </div>
            <button
                class="nav__theme-toggle"
                aria-label=toggle_label
                title=toggle_label
                on:click=on_toggle
            >
                {toggle_icon}
            </button>
        </nav>
    }
}
