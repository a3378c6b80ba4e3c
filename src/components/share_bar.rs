//! Share bar: social share links and the copy-link button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::share::ShareTarget;

/// Share section at the bottom of the page.
///
/// Share buttons open the target's composer in a new tab with the campaign
/// message and the current page URL; copy-link acknowledges for two seconds
/// via the `CopyReset` task.
#[component]
pub fn ShareBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "csr")]
    let timers = expect_context::<crate::util::timers::SharedTimers>();

    let open_share = move |target: ShareTarget| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let href = window.location().href().unwrap_or_default();
                let url =
                    crate::util::share::share_url(target, crate::content::SHARE_MESSAGE, &href);
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = target;
        }
    };

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            use campaign::consts::COPY_RESET_MS;
            use campaign::task::TaskPurpose;

            let timers = timers.clone();
            let href = web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            crate::util::clipboard::copy_text(href, move |copied| {
                if copied {
                    ui.update(|u| u.link_copied = true);
                    timers.schedule(TaskPurpose::CopyReset, COPY_RESET_MS, move || {
                        ui.update(|u| u.link_copied = false);
                    });
                } else {
                    leptos::logging::warn!("clipboard write failed");
                }
            });
        }
    };

    let copy_label = move || if ui.get().link_copied { "Copied!" } else { "Copy link" };

    view! {
        <section class="share-bar reveal">
            <h2 class="share-bar__heading">"Share this campaign"</h2>
            <p class="share-bar__note">"A share reaches further than any single donation."</p>
            <div class="share-bar__buttons">
                <button
                    class="share-btn share-btn--whatsapp"
                    on:click=move |_| open_share(ShareTarget::WhatsApp)
                >
                    "WhatsApp"
                </button>
                <button
                    class="share-btn share-btn--facebook"
                    on:click=move |_| open_share(ShareTarget::Facebook)
                >
                    "Facebook"
                </button>
                <button
                    class="share-btn share-btn--twitter"
                    on:click=move |_| open_share(ShareTarget::Twitter)
                >
                    "X"
                </button>
                <button
                    class="share-btn share-btn--copy"
                    class:copied=move || ui.get().link_copied
                    on:click=on_copy
                >
                    {copy_label}
                </button>
            </div>
        </section>
    }
}
