//! Campaign story sections, revealed as the reader scrolls.

use leptos::prelude::*;

use crate::content;
use crate::util::money::format_pkr;

/// The story section: narrative paragraphs plus impact cards.
#[component]
pub fn Story() -> impl IntoView {
    view! {
        <section class="story" id="story">
            <h2 class="story__heading">"Her Story"</h2>
            {content::STORY_PARAGRAPHS
                .iter()
                .map(|text| view! { <p class="story__paragraph reveal">{*text}</p> })
                .collect::<Vec<_>>()}
            <div class="story__impact">
                {content::IMPACT_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="impact-card reveal">
                                <span class="impact-card__amount">{format_pkr(card.amount)}</span>
                                <span class="impact-card__label">{card.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
