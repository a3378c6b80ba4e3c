//! Campaign state: authoritative totals and their derived progress values.
//!
//! `CampaignState` is a plain value object created once at page load,
//! hydrated from the [`crate::store`] boundary, and mutated in place by each
//! simulated donation event. The UI never reads its fields directly in a
//! render path; it takes [`Progress`] snapshots, which keeps this module
//! testable with no rendering surface present.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_PLEDGE, TARGET_AMOUNT};
use crate::store::{DONORS_COUNT_KEY, ProgressStore, TOTAL_RAISED_KEY, read_count};

/// Carousel navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the following testimonial, wrapping to the first.
    Next,
    /// Step back to the preceding testimonial, wrapping to the last.
    Previous,
}

/// A donation was rejected before touching any totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DonationError {
    /// Donations must be for a positive amount.
    #[error("donation amount must be positive")]
    InvalidAmount,
}

/// Immutable snapshot of campaign progress for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Percentage of the goal reached, clamped to `[0, 100]`.
    pub percentage_complete: f64,
    /// Whole rupees still needed; never negative.
    pub remaining_amount: u64,
    /// Number of completed donations.
    pub donors_count: u64,
    /// Cumulative whole rupees raised.
    pub total_raised: u64,
}

/// Outcome of a successfully recorded donation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonationResult {
    /// The amount this donation added, in whole rupees.
    pub amount: u64,
    /// New cumulative total.
    pub total_raised: u64,
    /// New donor count.
    pub donors_count: u64,
    /// Percentage of the goal reached, clamped to `[0, 100]`.
    pub percentage_complete: f64,
    /// Whole rupees still needed; never negative.
    pub remaining_amount: u64,
    /// True only when this donation crossed the goal from below.
    pub goal_reached: bool,
}

/// Authoritative campaign totals, the selected pledge, and the testimonial
/// cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignState {
    total_raised: u64,
    donors_count: u64,
    selected_amount: u64,
    testimonial_index: usize,
    testimonial_count: usize,
}

impl CampaignState {
    /// Fresh state with zero totals and the default pledge pre-selected.
    #[must_use]
    pub fn new(testimonial_count: usize) -> Self {
        Self {
            total_raised: 0,
            donors_count: 0,
            selected_amount: DEFAULT_PLEDGE,
            testimonial_index: 0,
            testimonial_count,
        }
    }

    /// Hydrate state from the durable store.
    ///
    /// Missing or malformed values default to 0. Never fails: a broken or
    /// absent store yields the same state as a first visit.
    #[must_use]
    pub fn load(store: &dyn ProgressStore, testimonial_count: usize) -> Self {
        Self {
            total_raised: read_count(store, TOTAL_RAISED_KEY),
            donors_count: read_count(store, DONORS_COUNT_KEY),
            ..Self::new(testimonial_count)
        }
    }

    /// Cumulative whole rupees raised.
    #[must_use]
    pub fn total_raised(&self) -> u64 {
        self.total_raised
    }

    /// Number of completed donations.
    #[must_use]
    pub fn donors_count(&self) -> u64 {
        self.donors_count
    }

    /// The pledge amount currently selected; 0 means no selection.
    #[must_use]
    pub fn selected_amount(&self) -> u64 {
        self.selected_amount
    }

    /// Index of the testimonial currently showing.
    #[must_use]
    pub fn testimonial_index(&self) -> usize {
        self.testimonial_index
    }

    /// Number of testimonials in the carousel.
    #[must_use]
    pub fn testimonial_count(&self) -> usize {
        self.testimonial_count
    }

    /// Set the pledge amount. Callers clamp invalid typed input to 0 first.
    pub fn select_amount(&mut self, amount: u64) {
        self.selected_amount = amount;
    }

    /// Record a completed donation and persist the new totals.
    ///
    /// Persistence is best-effort: a failed write is logged and the
    /// in-memory totals remain authoritative for the session.
    ///
    /// # Errors
    ///
    /// Returns [`DonationError::InvalidAmount`] for a zero amount, leaving
    /// both totals untouched.
    pub fn record_donation(
        &mut self,
        amount: u64,
        store: &dyn ProgressStore,
    ) -> Result<DonationResult, DonationError> {
        if amount == 0 {
            return Err(DonationError::InvalidAmount);
        }

        let goal_reached = self.total_raised < TARGET_AMOUNT
            && self.total_raised.saturating_add(amount) >= TARGET_AMOUNT;

        self.total_raised = self.total_raised.saturating_add(amount);
        self.donors_count += 1;
        self.persist(store);

        let progress = self.progress();
        Ok(DonationResult {
            amount,
            total_raised: progress.total_raised,
            donors_count: progress.donors_count,
            percentage_complete: progress.percentage_complete,
            remaining_amount: progress.remaining_amount,
            goal_reached,
        })
    }

    /// Derive the current progress snapshot. Pure; no side effects.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Progress {
        let percentage = (self.total_raised as f64 / TARGET_AMOUNT as f64) * 100.0;
        Progress {
            percentage_complete: percentage.min(100.0),
            remaining_amount: TARGET_AMOUNT.saturating_sub(self.total_raised),
            donors_count: self.donors_count,
            total_raised: self.total_raised,
        }
    }

    /// Move the testimonial cursor one step, wrapping cyclically.
    ///
    /// A no-op returning the current index when the carousel is empty.
    pub fn advance_testimonial(&mut self, direction: Direction) -> usize {
        if self.testimonial_count == 0 {
            return self.testimonial_index;
        }
        self.testimonial_index = match direction {
            Direction::Next => (self.testimonial_index + 1) % self.testimonial_count,
            Direction::Previous => {
                (self.testimonial_index + self.testimonial_count - 1) % self.testimonial_count
            }
        };
        self.testimonial_index
    }

    /// Jump the testimonial cursor to `index`, wrapped into range.
    ///
    /// A no-op returning the current index when the carousel is empty.
    pub fn set_testimonial(&mut self, index: usize) -> usize {
        if self.testimonial_count == 0 {
            return self.testimonial_index;
        }
        self.testimonial_index = index % self.testimonial_count;
        self.testimonial_index
    }

    fn persist(&self, store: &dyn ProgressStore) {
        for (key, value) in [
            (TOTAL_RAISED_KEY, self.total_raised),
            (DONORS_COUNT_KEY, self.donors_count),
        ] {
            if let Err(err) = store.write(key, &value.to_string()) {
                log::warn!("failed to persist {key}: {err}");
            }
        }
    }
}
