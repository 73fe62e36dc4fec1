//! Share-of-total strings shown in card footers.

/// Value shown until a fetch resolves.
pub const PLACEHOLDER: &str = "...";

/// Express `part` as a percentage of `total`.
///
/// Both arguments are display strings and may carry thousands separators.
/// Only the whole part of each side counts, so `"1,234.56"` is read as
/// `1234`. Anything unparsable (including the placeholder) or a zero total
/// gives `"..."`; shares under one percent collapse to `"<1"`.
pub fn percentage(part: &str, total: &str) -> String {
    let (Some(part), Some(total)) = (parse_display_number(part), parse_display_number(total))
    else {
        return PLACEHOLDER.to_string();
    };

    if total == 0 {
        return PLACEHOLDER.to_string();
    }

    let ratio = part as f64 / total as f64 * 100.0;
    if !ratio.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if ratio < 1.0 {
        return "<1".to_string();
    }
    format!("{:.2}", ratio)
}

/// Whole part of a display number; the fraction is dropped, not rounded.
fn parse_display_number(value: &str) -> Option<u128> {
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    let whole = match cleaned.trim().split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b.is_ascii_digit()) => whole,
        Some(_) => return None,
        None => cleaned.trim(),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    whole.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_percentage() {
        assert_eq!(percentage("25", "200"), "12.50");
        assert_eq!(percentage("1,000", "4,000"), "25.00");
    }

    #[test]
    fn test_below_one_percent() {
        assert_eq!(percentage("1", "1,000"), "<1");
        assert_eq!(percentage("0", "10"), "<1");
    }

    #[test]
    fn test_placeholder_inputs() {
        assert_eq!(percentage("...", "100"), "...");
        assert_eq!(percentage("5", "..."), "...");
        assert_eq!(percentage("", "100"), "...");
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(percentage("5", "0"), "...");
    }

    #[test]
    fn test_fraction_is_truncated_before_dividing() {
        assert_eq!(percentage("1,234.5678", "5,000"), "24.68");
        assert_eq!(percentage("2,500.25", "10,000.99"), "25.00");
        assert_eq!(percentage("0.5", "1"), "<1");
    }

    #[test]
    fn test_total_below_one_is_zero() {
        assert_eq!(percentage("5", "0.75"), "...");
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(percentage("12abc", "100"), "...");
        assert_eq!(percentage("1.2.3", "100"), "...");
        assert_eq!(percentage(".5", "100"), "...");
    }

    #[test]
    fn test_over_one_hundred() {
        assert_eq!(percentage("300", "200"), "150.00");
    }
}
