//! Daily tax rate control
//!
//! The marketplace publishes a daily tax percentage, always an integer in
//! 0..=6. Out-of-range assignments are silent no-ops rather than errors:
//! the previous value simply stays in place.

use std::fmt;

/// Highest tax percentage the marketplace ever charges.
pub const MAX_TAX_RATE: u8 = 6;

/// Integer tax percentage, constrained to `0..=MAX_TAX_RATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaxRate(u8);

impl TaxRate {
    /// Creates a rate, returning `None` when out of range.
    pub fn new(percent: u8) -> Option<Self> {
        if percent <= MAX_TAX_RATE {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Current percentage value.
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Rate expressed as a fraction, e.g. 5% -> 0.05.
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Assigns an exact value. Values outside 0..=6 leave the rate
    /// unchanged. Returns whether the assignment was applied.
    pub fn set_exact(&mut self, value: i64) -> bool {
        if (0..=i64::from(MAX_TAX_RATE)).contains(&value) {
            self.0 = value as u8;
            true
        } else {
            false
        }
    }

    /// Steps the rate up by one percent, saturating at the maximum.
    pub fn increment(&mut self) {
        if self.0 < MAX_TAX_RATE {
            self.0 += 1;
        }
    }

    /// Steps the rate down by one percent, saturating at zero.
    pub fn decrement(&mut self) {
        if self.0 > 0 {
            self.0 -= 1;
        }
    }

    pub fn at_max(&self) -> bool {
        self.0 == MAX_TAX_RATE
    }

    pub fn at_min(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(TaxRate::default().percent(), 0);
    }

    #[test]
    fn test_new_range() {
        assert_eq!(TaxRate::new(0).map(|r| r.percent()), Some(0));
        assert_eq!(TaxRate::new(6).map(|r| r.percent()), Some(6));
        assert!(TaxRate::new(7).is_none());
    }

    #[test]
    fn test_set_exact_rejects_out_of_range() {
        let mut rate = TaxRate::new(3).unwrap();
        assert!(!rate.set_exact(7));
        assert_eq!(rate.percent(), 3);
        assert!(!rate.set_exact(-1));
        assert_eq!(rate.percent(), 3);
        assert!(rate.set_exact(5));
        assert_eq!(rate.percent(), 5);
    }

    #[test]
    fn test_increment_saturates() {
        let mut rate = TaxRate::new(6).unwrap();
        rate.increment();
        assert_eq!(rate.percent(), 6);

        let mut rate = TaxRate::new(5).unwrap();
        rate.increment();
        assert_eq!(rate.percent(), 6);
    }

    #[test]
    fn test_decrement_saturates() {
        let mut rate = TaxRate::default();
        rate.decrement();
        assert_eq!(rate.percent(), 0);

        let mut rate = TaxRate::new(1).unwrap();
        rate.decrement();
        assert_eq!(rate.percent(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TaxRate::new(5).unwrap().to_string(), "5%");
    }
}
