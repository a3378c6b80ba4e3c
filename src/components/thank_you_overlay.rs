//! Thank-you overlay shown after a completed donation.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::money::format_pkr;

/// Modal overlay acknowledging the donation in `UiState::overlay`.
///
/// Every close path (button, backdrop, Escape) also cancels the pending
/// `OverlayDismiss` task, so a stale timer cannot act on a later overlay.
#[component]
pub fn ThankYouOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "csr")]
    let timers = expect_context::<crate::util::timers::SharedTimers>();

    let close = move |_| {
        ui.update(|u| u.overlay = None);
        #[cfg(feature = "csr")]
        timers.cancel(campaign::task::TaskPurpose::OverlayDismiss);
    };

    let amount_text = move || {
        ui.get()
            .overlay
            .map(|o| format_pkr(o.amount))
            .unwrap_or_default()
    };
    let goal_reached = move || ui.get().overlay.is_some_and(|o| o.goal_reached);

    view! {
        <Show when=move || ui.get().overlay.is_some()>
            <div class="thank-you-overlay" on:click=close.clone()>
                <div class="thank-you-content" on:click=move |ev| ev.stop_propagation()>
                    <div class="thank-you-icon">"\u{2764}"</div>
                    <h3>"Thank You!"</h3>
                    <p>
                        "Your donation of " <strong>{amount_text}</strong>
                        " brings Amal closer to her exam hall."
                    </p>
                    <p>"Together, we're making education possible."</p>
                    <Show when=goal_reached>
                        <p class="thank-you-goal">"You pushed the campaign past its goal!"</p>
                    </Show>
                    <button class="close-thank-you" on:click=close.clone()>
                        "Continue"
                    </button>
                </div>
            </div>
        </Show>
    }
}
