use crate::pricing::{TaxRate, MAX_TAX_RATE};

/// Parse a daily tax rate given as an integer percentage (0-6)
pub fn parse_tax_rate(s: &str) -> Result<TaxRate, String> {
    let value: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0..=i64::from(MAX_TAX_RATE)).contains(&value) {
        return Err(format!(
            "Tax rate must be between 0 and {}, got {}",
            MAX_TAX_RATE, value
        ));
    }

    Ok(TaxRate::new(value as u8).unwrap_or_default())
}
