//! Root application component with shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use campaign::state::CampaignState;

use crate::content;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStore;
use crate::util::theme;

/// Root application component.
///
/// Hydrates campaign totals and the theme preference from localStorage and
/// provides the shared state contexts for all child components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial_theme = theme::read_preference(&BrowserStore);
    theme::apply(initial_theme);

    let campaign = RwSignal::new(CampaignState::load(
        &BrowserStore,
        content::TESTIMONIALS.len(),
    ));
    let ui = RwSignal::new(UiState {
        theme: initial_theme,
        ..UiState::default()
    });

    provide_context(campaign);
    provide_context(ui);

    #[cfg(feature = "csr")]
    provide_context(crate::util::timers::SharedTimers::new());

    view! {
        <Title text=content::PAGE_TITLE/>
        <HomePage/>
    }
}
