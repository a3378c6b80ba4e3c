//! The campaign page: section assembly and page-session wiring.
//!
//! Everything that runs for the lifetime of the page (the carousel
//! auto-rotation, the countdown tick, the keyboard shortcuts, and the
//! reveal observer) is started here, once, on mount.

use leptos::prelude::*;

use crate::components::confetti::Confetti;
use crate::components::donation_panel::DonationPanel;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::progress_card::ProgressCard;
use crate::components::share_bar::ShareBar;
use crate::components::story::Story;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::components::thank_you_overlay::ThankYouOverlay;
use crate::util::countdown::Countdown;
use crate::util::time;

/// The single page of the site.
#[component]
pub fn HomePage() -> impl IntoView {
    let countdown = Countdown::starting_at(time::now_ms());
    let countdown_label = RwSignal::new(countdown.label(time::now_ms()));

    #[cfg(feature = "csr")]
    {
        use std::time::Duration;

        use campaign::consts::{COUNTDOWN_TICK_MS, TESTIMONIAL_ROTATE_MS};
        use campaign::state::{CampaignState, Direction};

        let campaign = expect_context::<RwSignal<CampaignState>>();
        let ui = expect_context::<RwSignal<crate::state::ui::UiState>>();
        let timers = expect_context::<crate::util::timers::SharedTimers>();

        crate::util::keys::install(campaign, ui, timers);

        // Auto-rotate the carousel for as long as the page is open.
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(
                    TESTIMONIAL_ROTATE_MS,
                )))
                .await;
                campaign.update(|s| {
                    s.advance_testimonial(Direction::Next);
                });
            }
        });

        // Refresh the deadline label once a minute until it expires.
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(COUNTDOWN_TICK_MS)))
                    .await;
                countdown_label.set(countdown.label(time::now_ms()));
                if countdown.is_expired(time::now_ms()) {
                    break;
                }
            }
        });

        // Reveal-on-scroll can only attach once the sections are mounted.
        Effect::new(move || crate::util::reveal::observe_reveals());
    }

    view! {
        <NavBar/>
        <main class="page">
            <Hero countdown_label=countdown_label/>
            <ProgressCard/>
            <Story/>
            <section class="donate" id="donate">
                <h2 class="donate__heading">"Make a Donation"</h2>
                <DonationPanel/>
            </section>
            <TestimonialCarousel/>
            <ShareBar/>
        </main>
        <footer class="footer">
            <p class="footer__note">
                "Donations on this page are simulated — totals live only in your browser."
            </p>
        </footer>
        <ThankYouOverlay/>
        <Confetti/>
    }
}
