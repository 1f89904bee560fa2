//! Catalog-wide constants and value formatting.

use crate::validation::validators::decimal;

/// Card types accepted by the `type` field.
pub const CARD_TYPES: &[&str] = &["Monster", "Magic", "Trap"];

/// Image extensions accepted by the `extension` field (case-sensitive).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Integer digits that fit the `NUMERIC(8, 2)` amount column.
pub const AMOUNT_MAX_WHOLE_DIGITS: usize = 6;

/// Render a decimal amount the way the `NUMERIC(8, 2)` column stores it:
/// no leading zeros and exactly two fraction digits.
///
/// Returns `None` when `raw` is not a valid non-negative decimal.
pub fn normalize_amount(raw: &str) -> Option<String> {
    if !decimal(raw) {
        return None;
    }
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    Some(format!("{whole}.{fraction:0<2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_fraction_to_two_digits() {
        assert_eq!(normalize_amount("1500").as_deref(), Some("1500.00"));
        assert_eq!(normalize_amount("1.5").as_deref(), Some("1.50"));
        assert_eq!(normalize_amount("1500.00").as_deref(), Some("1500.00"));
    }

    #[test]
    fn strips_leading_zeros() {
        assert_eq!(normalize_amount("007.25").as_deref(), Some("7.25"));
        assert_eq!(normalize_amount("0.5").as_deref(), Some("0.50"));
        assert_eq!(normalize_amount("000").as_deref(), Some("0.00"));
    }

    #[test]
    fn rejects_invalid_amounts() {
        assert_eq!(normalize_amount("1500.005"), None);
        assert_eq!(normalize_amount("-1"), None);
        assert_eq!(normalize_amount(""), None);
    }
}
