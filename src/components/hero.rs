//! Campaign hero: headline, goal figure, and deadline chip.

use leptos::prelude::*;

use campaign::consts::TARGET_AMOUNT;

use crate::content;
use crate::util::money::format_pkr;

/// Hero section at the top of the page.
#[component]
pub fn Hero(countdown_label: RwSignal<String>) -> impl IntoView {
    view! {
        <header class="hero" id="top">
            <p class="hero__kicker">"Education fundraiser"</p>
            <h1 class="hero__title">{content::CAMPAIGN_HEADLINE}</h1>
            <p class="hero__subtitle">{content::CAMPAIGN_SUBHEAD}</p>
            <div class="hero__meta">
                <span class="hero__goal">{format!("Goal: {}", format_pkr(TARGET_AMOUNT))}</span>
                <span class="hero__deadline">
                    <span class="hero__deadline-label">"Exams in"</span>
                    <span class="hero__deadline-value">{move || countdown_label.get()}</span>
                </span>
            </div>
        </header>
    }
}
