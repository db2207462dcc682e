use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

/// Format an amount for display: rounded half-up to whole đồng, thousands
/// grouped with `.`, ` ₫` suffix. Negative values keep the formatted magnitude
/// behind a plain `-` prefix.
pub fn format_vnd(amount: &BigDecimal) -> String {
    let rounded = amount.with_scale_round(0, RoundingMode::HalfUp);
    let negative = rounded < BigDecimal::from(0);
    let digits = rounded.abs().to_string();
    let grouped = group_thousands(&digits);
    if negative {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

/// Optional-amount variant for fields the backend may omit entirely.
pub fn format_vnd_opt(amount: Option<&BigDecimal>) -> String {
    match amount {
        Some(amount) => format_vnd(amount),
        None => "N/A".to_string(),
    }
}

/// Recover the integer magnitude from a formatted display string. Inverse of
/// [`format_vnd`] up to rounding.
pub fn parse_vnd(text: &str) -> Option<BigDecimal> {
    let trimmed = text.trim();
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value = BigDecimal::from_str(&digits).ok()?;
    Some(if negative { -value } else { value })
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 && (bytes.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*byte as char);
    }
    grouped
}
