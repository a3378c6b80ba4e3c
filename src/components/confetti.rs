//! Celebratory confetti burst for the goal crossing.

use leptos::prelude::*;

use campaign::consts::{CONFETTI_COLORS, CONFETTI_COUNT, CONFETTI_FALL_MS, CONFETTI_STAGGER_MS};

use crate::state::ui::UiState;

/// Horizontal scatter as a percentage of the viewport width.
fn scatter() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random() * 100.0
    }
    #[cfg(not(feature = "csr"))]
    {
        50.0
    }
}

/// Full-viewport confetti layer, rendered only while celebrating.
///
/// The stylesheet owns the fall animation; each piece gets its own launch
/// delay and scatter position. The `Celebration` task clears the flag once
/// the last piece has landed.
#[component]
pub fn Confetti() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().celebrating>
            <div class="confetti-layer" aria-hidden="true">
                {(0..CONFETTI_COUNT)
                    .map(|i| {
                        let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
                        let left = format!("{}%", scatter());
                        #[allow(clippy::cast_possible_truncation)]
                        let delay = format!("{}ms", i as u32 * CONFETTI_STAGGER_MS);
                        let duration = format!("{CONFETTI_FALL_MS}ms");
                        view! {
                            <span
                                class="confetti"
                                style:left=left
                                style:background=color
                                style:animation-delay=delay
                                style:animation-duration=duration
                            ></span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Show>
    }
}
