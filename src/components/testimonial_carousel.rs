//! Rotating testimonial carousel with manual controls.

use leptos::prelude::*;

use campaign::state::{CampaignState, Direction};

use crate::content;

/// Testimonial carousel: one active quote, arrows, and indicator dots.
///
/// Navigation goes through `CampaignState` so the keyboard shortcuts, the
/// auto-rotation loop, and these controls all share one cursor.
#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let campaign = expect_context::<RwSignal<CampaignState>>();
    let active = move || campaign.get().testimonial_index();

    let go = move |direction: Direction| {
        campaign.update(|s| {
            s.advance_testimonial(direction);
        });
    };

    view! {
        <section class="testimonials reveal" id="voices">
            <h2 class="testimonials__heading">"Voices for Amal"</h2>
            <div class="testimonials__stage">
                <button
                    class="testimonials__arrow"
                    aria-label="Previous testimonial"
                    on:click=move |_| go(Direction::Previous)
                >
                    "\u{2190}"
                </button>
                <div class="testimonials__track">
                    {content::TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <blockquote class="testimonial" class:active=move || active() == i>
                                    <p class="testimonial__quote">{t.quote}</p>
                                    <footer class="testimonial__source">
                                        <span class="testimonial__name">{t.name}</span>
                                        <span class="testimonial__role">{t.role}</span>
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="testimonials__arrow"
                    aria-label="Next testimonial"
                    on:click=move |_| go(Direction::Next)
                >
                    "\u{2192}"
                </button>
            </div>
            <div class="testimonials__dots">
                {(0..content::TESTIMONIALS.len())
                    .map(|i| {
                        view! {
                            <button
                                class="dot"
                                class:active=move || active() == i
                                aria-label=format!("Show testimonial {}", i + 1)
                                on:click=move |_| {
                                    campaign.update(|s| {
                                        s.set_testimonial(i);
                                    });
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
