//! Shared constants for the campaign crate and its UI layer.

// ── Campaign ────────────────────────────────────────────────────

/// Fundraising goal in whole rupees.
pub const TARGET_AMOUNT: u64 = 50_000;

/// Preset pledge amounts offered by the donation panel, in whole rupees.
pub const AMOUNT_PRESETS: [u64; 4] = [1_000, 2_500, 5_000, 10_000];

/// Pledge amount pre-selected on first load.
pub const DEFAULT_PLEDGE: u64 = 5_000;

/// Days from first page load until the campaign deadline.
pub const CAMPAIGN_DAYS: u64 = 5;

// ── Effect timings ──────────────────────────────────────────────

/// Simulated payment-processing delay before a donation is confirmed.
pub const PROCESSING_DELAY_MS: u32 = 1_500;

/// How long the donate button shows its "Thank You!" state.
pub const BUTTON_RESET_MS: u32 = 2_000;

/// How long the thank-you overlay stays up before auto-dismissing.
pub const OVERLAY_DISMISS_MS: u32 = 5_000;

/// How long the copy-link button shows its acknowledgement.
pub const COPY_RESET_MS: u32 = 2_000;

/// Interval between automatic testimonial rotations.
pub const TESTIMONIAL_ROTATE_MS: u32 = 5_000;

/// Interval between countdown label refreshes.
pub const COUNTDOWN_TICK_MS: u32 = 60_000;

// ── Celebration ─────────────────────────────────────────────────

/// Number of confetti pieces in the goal-reached burst.
pub const CONFETTI_COUNT: usize = 50;

/// Launch stagger between consecutive confetti pieces.
pub const CONFETTI_STAGGER_MS: u32 = 50;

/// Fall duration of a single confetti piece.
pub const CONFETTI_FALL_MS: u32 = 3_000;

/// Confetti palette.
pub const CONFETTI_COLORS: [&str; 4] = ["#d2691e", "#ff6b35", "#8b4513", "#ff8a65"];

/// When the celebration is over: the full launch stagger plus one fall.
pub const CELEBRATION_CLEAR_MS: u32 = 5_500;
