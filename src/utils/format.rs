//! Number formatting for on-screen text: thousands separators, bounded fraction
//! digits and `K`/`M`/`B` abbreviations.

use num_format::{Locale, ToFormattedString};

/// `8140000000` -> `8,140,000,000`
pub fn format_integer(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Grouped decimal with at least `min_frac` and at most `max_frac` fraction digits.
///
/// Rounds the exact binary value of `value` to nearest, ties to even. Decimal inputs
/// that are not exactly representable round by where the stored value falls, so
/// `0.000025` (stored just above the tie) becomes `0.00003`.
///
/// `1220000.0, 2, 2` -> `1,220,000.00`; `0.000025, 2, 5` -> `0.00003`; `0.8, 2, 5` -> `0.80`
pub fn format_decimal(value: f64, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let max_frac = max_frac.max(min_frac);
    let raw = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    let grouped = match int_part.parse::<u128>() {
        Ok(whole) => whole.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };

    // Trim trailing zeros, but never below min_frac digits.
    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }

    // "-0.00" reads wrong; only keep the sign if a non-zero digit survived rounding.
    let is_negative = value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if is_negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// Grouped decimal with exactly `digits` fraction digits.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format_decimal(value, digits, digits)
}

/// `$` prefixed [`format_decimal`].
pub fn format_currency(value: f64, min_frac: usize, max_frac: usize) -> String {
    let body = format_decimal(value, min_frac, max_frac);
    match body.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", body),
    }
}

/// Short magnitude form used for axis labels: `1.4M`, `1.02K`, `2.5B`, `995.00`.
pub fn format_abbreviated(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000_000_000.0 {
        format!("{}{:.1}T", sign, abs / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("{}{:.1}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.2}K", sign, abs / 1_000.0)
    } else {
        format!("{}{:.2}", sign, abs)
    }
}
