#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use campaign::state::DonationResult;

use crate::util::theme::Theme;

/// Donate-button lifecycle during the simulated payment flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DonatePhase {
    /// Ready to accept a donation.
    #[default]
    Idle,
    /// Simulated payment processing is underway.
    Processing,
    /// Briefly acknowledging the completed donation.
    Thanks,
}

/// UI state for the theme, the donate flow, and transient acknowledgements.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub donate_phase: DonatePhase,
    /// The donation being acknowledged by the thank-you overlay, if any.
    pub overlay: Option<DonationResult>,
    /// Confetti burst in progress after a goal crossing.
    pub celebrating: bool,
    /// Copy-link button acknowledgement in progress.
    pub link_copied: bool,
}
