//! Digit-group formatting for price display
//!
//! Grouping is a presentation-only transform: stripping the separators
//! from a formatted value must reproduce the raw numeric string exactly.

/// Separator inserted between digit groups in the integer part.
pub const GROUP_SEPARATOR: char = ',';

/// Removes all grouping separators, recovering the raw numeric string.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
}

/// Checks that a raw string is a well-formed non-negative decimal literal
/// or an in-progress prefix of one: zero or more digits, an optional single
/// decimal point, then zero or more digits. The empty string is valid.
pub fn is_valid_raw(raw: &str) -> bool {
    let mut seen_point = false;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Formats a raw numeric string with thousands separators.
///
/// Only the integer part is grouped; the decimal part (everything from the
/// first `.` on) is carried through untouched.
pub fn group_digits(raw: &str) -> String {
    let (integer, fraction) = match raw.find('.') {
        Some(idx) => (&raw[..idx], &raw[idx..]),
        None => (raw, ""),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(*ch);
    }

    grouped.push_str(fraction);
    grouped
}

/// Normalizes user-entered price text into its canonical display form.
///
/// Strips any grouping separators left over from prior formatting, rejects
/// text that is not a well-formed decimal literal (or prefix of one), and
/// re-applies grouping. Returns `None` when the edit must be discarded.
pub fn normalize(text: &str) -> Option<String> {
    let raw = strip_separators(text);
    if !is_valid_raw(&raw) {
        return None;
    }
    if raw.is_empty() {
        return Some(String::new());
    }
    Some(group_digits(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits_basic() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("5"), "5");
        assert_eq!(group_digits("500"), "500");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("952380"), "952,380");
        assert_eq!(group_digits("1000000"), "1,000,000");
    }

    #[test]
    fn test_group_digits_decimal_untouched() {
        assert_eq!(group_digits("1234.5"), "1,234.5");
        assert_eq!(group_digits("1234.56789"), "1,234.56789");
        assert_eq!(group_digits("12."), "12.");
        assert_eq!(group_digits(".5"), ".5");
    }

    #[test]
    fn test_group_digits_leading_zeros() {
        assert_eq!(group_digits("0012"), "0,012");
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("1,000,000"), "1000000");
        assert_eq!(strip_separators("1,234.5"), "1234.5");
        assert_eq!(strip_separators("500"), "500");
        assert_eq!(strip_separators(""), "");
    }

    #[test]
    fn test_round_trip() {
        for raw in ["0", "7", "42", "999", "1000", "123456", "9876543210", "0012"] {
            assert_eq!(strip_separators(&group_digits(raw)), raw);
        }
    }

    #[test]
    fn test_is_valid_raw() {
        assert!(is_valid_raw(""));
        assert!(is_valid_raw("12"));
        assert!(is_valid_raw("12."));
        assert!(is_valid_raw(".5"));
        assert!(is_valid_raw("."));
        assert!(is_valid_raw("12.34"));

        assert!(!is_valid_raw("12a"));
        assert!(!is_valid_raw("1.2.3"));
        assert!(!is_valid_raw("-5"));
        assert!(!is_valid_raw("1 000"));
        assert!(!is_valid_raw("+1"));
    }

    #[test]
    fn test_normalize_accepts_and_groups() {
        assert_eq!(normalize("1000000").as_deref(), Some("1,000,000"));
        assert_eq!(normalize("1,000,000").as_deref(), Some("1,000,000"));
        assert_eq!(normalize("12.").as_deref(), Some("12."));
        assert_eq!(normalize("").as_deref(), Some(""));
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        assert_eq!(normalize("12a"), None);
        assert_eq!(normalize("1.2.3"), None);
        assert_eq!(normalize("-1"), None);
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["1,000,000", "1,234.5", "12.", "", "0"] {
            let once = normalize(input).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(once, twice);
        }
    }
}
