//! Wall-clock access for display timers.

/// Current time in milliseconds since the Unix epoch.
///
/// Returns 0 outside a browser build, where nothing ticks anyway.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            js_sys::Date::now() as u64
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
