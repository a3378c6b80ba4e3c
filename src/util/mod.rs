//! Browser glue and pure display helpers.
//!
//! The pure modules (`money`, `countdown`, `share`, the `Theme` type) build
//! and test natively; everything that touches the browser is gated behind
//! the `csr` feature.

pub mod clipboard;
pub mod countdown;
#[cfg(feature = "csr")]
pub mod keys;
pub mod money;
pub mod reveal;
pub mod share;
pub mod storage;
pub mod theme;
pub mod time;
#[cfg(feature = "csr")]
pub mod timers;
