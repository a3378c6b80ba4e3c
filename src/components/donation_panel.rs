//! Donation panel: amount picker and the simulated donation flow.
//!
//! Confirming a pledge schedules a named `ProcessingDelay` task; when it
//! fires, the donation is recorded against `CampaignState`, the thank-you
//! overlay opens, and the follow-up tasks (`ButtonReset`, `OverlayDismiss`,
//! and on a goal crossing `Celebration`) are scheduled. Superseding
//! donations replace the pending tasks rather than racing them.

use leptos::prelude::*;

use campaign::consts::AMOUNT_PRESETS;
use campaign::state::CampaignState;

use crate::state::ui::{DonatePhase, UiState};
use crate::util::money::{format_pkr, parse_amount};

/// Amount picker plus donate button.
#[component]
pub fn DonationPanel() -> impl IntoView {
    let campaign = expect_context::<RwSignal<CampaignState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "csr")]
    let timers = expect_context::<crate::util::timers::SharedTimers>();

    let custom_open = RwSignal::new(false);
    let custom_value = RwSignal::new(String::new());

    let select_preset = move |amount: u64| {
        custom_open.set(false);
        campaign.update(|s| s.select_amount(amount));
    };

    let open_custom = move |_| {
        custom_open.set(true);
        campaign.update(|s| s.select_amount(parse_amount(&custom_value.get_untracked())));
    };

    let on_custom_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        campaign.update(|s| s.select_amount(parse_amount(&raw)));
        custom_value.set(raw);
    };

    let selected = move || campaign.get().selected_amount();
    let phase = move || ui.get().donate_phase;
    let donate_disabled = move || selected() == 0 || phase() != DonatePhase::Idle;

    let donate_class = move || match phase() {
        DonatePhase::Thanks => "donate-btn donate-btn--thanks",
        DonatePhase::Idle | DonatePhase::Processing => "donate-btn",
    };

    let donate_label = move || match phase() {
        DonatePhase::Idle => {
            let amount = selected();
            if amount > 0 {
                format!("Donate {}", format_pkr(amount))
            } else {
                "Donate Now".to_owned()
            }
        }
        DonatePhase::Processing => "Processing...".to_owned(),
        DonatePhase::Thanks => "Thank You!".to_owned(),
    };

    let on_donate = move |_| {
        let amount = campaign.get_untracked().selected_amount();
        if amount == 0 || ui.get_untracked().donate_phase != DonatePhase::Idle {
            return;
        }
        ui.update(|u| u.donate_phase = DonatePhase::Processing);

        #[cfg(feature = "csr")]
        {
            use campaign::consts::{
                BUTTON_RESET_MS, CELEBRATION_CLEAR_MS, OVERLAY_DISMISS_MS, PROCESSING_DELAY_MS,
            };
            use campaign::task::TaskPurpose;

            use crate::util::storage::BrowserStore;

            let timers = timers.clone();
            let confirm = {
                let timers = timers.clone();
                move || {
                    let mut recorded = None;
                    campaign.update(|s| match s.record_donation(amount, &BrowserStore) {
                        Ok(result) => recorded = Some(result),
                        Err(err) => leptos::logging::warn!("donation rejected: {err}"),
                    });
                    let Some(result) = recorded else {
                        ui.update(|u| u.donate_phase = DonatePhase::Idle);
                        return;
                    };

                    ui.update(|u| {
                        u.donate_phase = DonatePhase::Thanks;
                        u.overlay = Some(result);
                        if result.goal_reached {
                            u.celebrating = true;
                        }
                    });

                    timers.schedule(TaskPurpose::ButtonReset, BUTTON_RESET_MS, move || {
                        ui.update(|u| u.donate_phase = DonatePhase::Idle);
                    });
                    timers.schedule(TaskPurpose::OverlayDismiss, OVERLAY_DISMISS_MS, move || {
                        ui.update(|u| u.overlay = None);
                    });
                    if result.goal_reached {
                        timers.schedule(TaskPurpose::Celebration, CELEBRATION_CLEAR_MS, move || {
                            ui.update(|u| u.celebrating = false);
                        });
                    }
                }
            };
            timers.schedule(TaskPurpose::ProcessingDelay, PROCESSING_DELAY_MS, confirm);
        }
    };

    view! {
        <div class="donation-panel">
            <div class="donation-panel__amounts">
                {AMOUNT_PRESETS
                    .iter()
                    .map(|&amount| {
                        view! {
                            <button
                                class="amount-btn"
                                class:selected=move || !custom_open.get() && selected() == amount
                                aria-label=format!("Select donation amount PKR {amount}")
                                on:click=move |_| select_preset(amount)
                            >
                                {format_pkr(amount)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="amount-btn"
                    class:selected=move || custom_open.get()
                    aria-label="Enter a custom donation amount"
                    on:click=open_custom
                >
                    "Custom"
                </button>
            </div>
            <Show when=move || custom_open.get()>
                <label class="donation-panel__custom">
                    "Custom amount (PKR)"
                    <input
                        class="donation-panel__input"
                        type="number"
                        min="0"
                        placeholder="1000"
                        prop:value=move || custom_value.get()
                        on:input=on_custom_input
                    />
                </label>
            </Show>
            <button class=donate_class disabled=donate_disabled on:click=on_donate>
                <span>{donate_label}</span>
            </button>
        </div>
    }
}
