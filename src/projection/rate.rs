//! Inflation-adjusted rate of return

use crate::error::{Result, SavingsError};

/// Real (inflation-adjusted) annual rate of return, as a decimal.
///
/// Both arguments are percentages: `6.0` means 6% per year.
///
/// # Errors
/// Returns `DegenerateRate` when inflation is exactly -100%, which would
/// divide by zero.
pub fn periodic_rate_of_return(nominal_annual_rate: f64, inflation_annual_rate: f64) -> Result<f64> {
    let inflation_factor = 1.0 + inflation_annual_rate / 100.0;
    if inflation_factor == 0.0 {
        return Err(SavingsError::degenerate(
            "rate of return: inflation of -100% divides by zero",
        ));
    }

    Ok((1.0 + nominal_annual_rate / 100.0) / inflation_factor - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_real_rate() {
        let rate = periodic_rate_of_return(6.0, 0.15).unwrap();
        assert_relative_eq!(rate, 1.06 / 1.0015 - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_inflation_is_nominal() {
        let rate = periodic_rate_of_return(5.0, 0.0).unwrap();
        assert_relative_eq!(rate, 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_inflation_above_nominal_is_negative() {
        let rate = periodic_rate_of_return(2.0, 3.0).unwrap();
        assert!(rate < 0.0);
    }

    #[test]
    fn test_negative_inflation_allowed() {
        let rate = periodic_rate_of_return(0.0, -2.0).unwrap();
        assert_relative_eq!(rate, 1.0 / 0.98 - 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_inflation_minus_100_is_degenerate() {
        let err = periodic_rate_of_return(6.0, -100.0).unwrap_err();
        assert!(matches!(err, SavingsError::DegenerateRate { .. }));
    }
}
