//! Page-wide keyboard shortcuts.
//!
//! Escape dismisses the thank-you overlay (and cancels its auto-dismiss
//! timer); the arrow keys drive the testimonial carousel.

use campaign::state::{CampaignState, Direction};
use campaign::task::TaskPurpose;
use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::state::ui::UiState;
use crate::util::timers::SharedTimers;

/// Install the page-wide keydown listener. Lives for the page session.
pub fn install(campaign: RwSignal<CampaignState>, ui: RwSignal<UiState>, timers: SharedTimers) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
            "Escape" => {
                if ui.get_untracked().overlay.is_some() {
                    ui.update(|u| u.overlay = None);
                    timers.cancel(TaskPurpose::OverlayDismiss);
                }
            }
            "ArrowRight" => {
                campaign.update(|s| {
                    s.advance_testimonial(Direction::Next);
                });
            }
            "ArrowLeft" => {
                campaign.update(|s| {
                    s.advance_testimonial(Direction::Previous);
                });
            }
            _ => {}
        },
    );

    if window
        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}
