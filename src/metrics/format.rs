//! Display formatting for amounts and percentages.
//!
//! Amounts are in rupees. Compact forms divide down to thousands or
//! millions; the full form groups digits in threes.

/// `94.2` becomes `94.2%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `58_412_000` becomes `₹58.4M`.
#[must_use]
pub fn format_millions(amount: f64) -> String {
    format!("₹{:.1}M", amount / 1_000_000.0)
}

/// Two-decimal millions, used where single-decimal rounding hides the
/// difference between rows.
#[must_use]
pub fn format_millions_precise(amount: f64) -> String {
    format!("₹{:.2}M", amount / 1_000_000.0)
}

/// `969_900` becomes `₹970K`.
#[must_use]
pub fn format_thousands(amount: f64) -> String {
    format!("₹{:.0}K", amount / 1_000.0)
}

/// Fixed-precision number with a leading `+` for strictly positive values.
#[must_use]
pub fn format_signed(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{value:.decimals$}")
    } else {
        format!("{value:.decimals$}")
    }
}

#[must_use]
pub fn format_signed_percent(value: f64) -> String {
    format!("{}%", format_signed(value, 1))
}

/// Integer with comma separators: `12847` becomes `12,847`.
#[must_use]
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-rupee amount with grouping: `25000.0` becomes `₹25,000`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_inr(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() as i64 } else { 0 };
    format!("₹{}", format_grouped(rounded))
}
