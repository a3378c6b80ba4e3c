//! Currency formatting and pledge-input parsing.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Group a whole-rupee amount with comma separators: `12345` → `"12,345"`.
#[must_use]
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount the way it appears everywhere on the page: `"PKR 12,000"`.
#[must_use]
pub fn format_pkr(amount: u64) -> String {
    format!("PKR {}", group_thousands(amount))
}

/// Clamp user-typed pledge input to a non-negative whole amount.
///
/// Empty, non-numeric, negative, and fractional input all map to 0, the
/// no-selection sentinel.
#[must_use]
pub fn parse_amount(input: &str) -> u64 {
    input.trim().parse::<u64>().unwrap_or(0)
}
