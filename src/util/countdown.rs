//! Deadline label derivation for the urgency banner.
//!
//! The deadline is computed relative to page-load time; it is display-only
//! and nothing about it is persisted, which is why it lives here rather than
//! in the `campaign` crate.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use campaign::consts::CAMPAIGN_DAYS;

const HOUR_MS: u64 = 60 * 60 * 1000;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Deadline clock, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline_ms: u64,
}

impl Countdown {
    /// Deadline [`CAMPAIGN_DAYS`] days after `now_ms`.
    #[must_use]
    pub fn starting_at(now_ms: u64) -> Self {
        Self { deadline_ms: now_ms + CAMPAIGN_DAYS * DAY_MS }
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn is_expired(self, now_ms: u64) -> bool {
        now_ms > self.deadline_ms
    }

    /// Label text: whole days remaining, then whole hours, then
    /// `"Final Hours"`, and `"Urgent"` once the deadline passes.
    #[must_use]
    pub fn label(self, now_ms: u64) -> String {
        if self.is_expired(now_ms) {
            return "Urgent".to_owned();
        }
        let distance = self.deadline_ms - now_ms;
        let days = distance / DAY_MS;
        let hours = (distance % DAY_MS) / HOUR_MS;
        if days > 0 {
            format!("{days} Day{}", plural(days))
        } else if hours > 0 {
            format!("{hours} Hour{}", plural(hours))
        } else {
            "Final Hours".to_owned()
        }
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
