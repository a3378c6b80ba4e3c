//! Shared client-side state modules.
//!
//! The authoritative campaign totals live in the `campaign` crate and are
//! provided as a `RwSignal<CampaignState>` context; this module holds only
//! the presentation-side state layered on top.

pub mod ui;
