//! Campaign progress: bar, totals, and donor count.

use leptos::prelude::*;

use campaign::consts::TARGET_AMOUNT;
use campaign::state::CampaignState;

use crate::util::money::{format_pkr, group_thousands};

/// Progress card under the hero.
///
/// Renders a fresh [`campaign::state::Progress`] snapshot on every change;
/// the ARIA progressbar attributes are part of the view rather than patched
/// in afterwards.
#[component]
pub fn ProgressCard() -> impl IntoView {
    let campaign = expect_context::<RwSignal<CampaignState>>();
    let progress = move || campaign.get().progress();

    let fill_width = move || format!("{}%", progress().percentage_complete);
    let percent_label = move || format!("{}%", progress().percentage_complete.round());
    let raised = move || format_pkr(progress().total_raised);
    let remaining = move || format_pkr(progress().remaining_amount);
    let donors = move || progress().donors_count.to_string();
    let value_now = move || progress().total_raised.to_string();
    let value_text = move || {
        format!(
            "{} rupees raised out of {}",
            group_thousands(progress().total_raised),
            group_thousands(TARGET_AMOUNT)
        )
    };

    view! {
        <section class="progress-card">
            <div class="progress-card__figures">
                <div class="progress-card__figure">
                    <span class="progress-card__value">{raised}</span>
                    <span class="progress-card__label">"raised"</span>
                </div>
                <div class="progress-card__figure">
                    <span class="progress-card__value">{donors}</span>
                    <span class="progress-card__label">"donors"</span>
                </div>
                <div class="progress-card__figure">
                    <span class="progress-card__value">{remaining}</span>
                    <span class="progress-card__label">"still needed"</span>
                </div>
            </div>
            <div
                class="progress-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax=TARGET_AMOUNT.to_string()
                aria-valuenow=value_now
                aria-valuetext=value_text
            >
                <div class="progress-bar__fill" style:width=fill_width></div>
            </div>
            <span class="progress-card__percentage">{percent_label}</span>
        </section>
    }
}
