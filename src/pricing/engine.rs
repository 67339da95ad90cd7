//! Consignment price derivation
//!
//! Given the desired net price and the daily tax rate, the listing price is
//! `desired / (1 + rate)`, floored to a whole unit. Flooring is the defined
//! tie-break: a listing is never rounded up past what nets the desired
//! amount. An empty, malformed, or non-positive desired price yields no
//! value at all; that is the normal placeholder state, not an error.

use crate::pricing::format::{group_digits, strip_separators};
use crate::pricing::tax::TaxRate;

/// Computes the floored consignment price in whole units.
///
/// Accepts either a raw numeric string or a grouped display string.
/// Returns `None` when there is no usable input.
pub fn consignment_value(desired: &str, rate: TaxRate) -> Option<u64> {
    let raw = strip_separators(desired);
    if raw.is_empty() {
        return None;
    }

    let desired_value: f64 = raw.parse().ok()?;
    if !desired_value.is_finite() || desired_value <= 0.0 {
        return None;
    }

    let listed = desired_value / (1.0 + rate.as_fraction());
    Some(listed.floor() as u64)
}

/// Computes the consignment price formatted for display, or `None` when the
/// desired price carries no usable value.
pub fn consignment_display(desired: &str, rate: TaxRate) -> Option<String> {
    consignment_value(desired, rate).map(|value| group_digits(&value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(percent: u8) -> TaxRate {
        TaxRate::new(percent).unwrap()
    }

    #[test]
    fn test_million_at_five_percent() {
        // 1000000 / 1.05 = 952380.95..., floored
        assert_eq!(consignment_value("1,000,000", rate(5)), Some(952_380));
        assert_eq!(
            consignment_display("1,000,000", rate(5)).as_deref(),
            Some("952,380")
        );
    }

    #[test]
    fn test_zero_rate_is_floor() {
        assert_eq!(consignment_display("500", rate(0)).as_deref(), Some("500"));
        assert_eq!(consignment_value("123.9", rate(0)), Some(123));
    }

    #[test]
    fn test_empty_and_non_positive_yield_none() {
        for tax in 0..=6 {
            assert_eq!(consignment_value("", rate(tax)), None);
        }
        assert_eq!(consignment_value("0", rate(3)), None);
        assert_eq!(consignment_value("0.0", rate(3)), None);
        assert_eq!(consignment_value(".", rate(2)), None);
    }

    #[test]
    fn test_malformed_yields_none() {
        assert_eq!(consignment_value("abc", rate(1)), None);
        assert_eq!(consignment_value("1.2.3", rate(1)), None);
    }

    #[test]
    fn test_trailing_point_parses_as_integer() {
        assert_eq!(consignment_value("12.", rate(0)), Some(12));
    }

    #[test]
    fn test_monotonic_in_rate() {
        let mut previous = u64::MAX;
        for tax in 0..=6 {
            let value = consignment_value("1,000,000", rate(tax)).unwrap();
            assert!(value <= previous, "rate {}% increased the price", tax);
            previous = value;
        }
    }

    #[test]
    fn test_fractional_desired_price() {
        // 0.5 nets less than one whole unit at any rate
        assert_eq!(consignment_value("0.5", rate(0)), Some(0));
    }
}
