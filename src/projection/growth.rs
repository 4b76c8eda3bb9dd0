//! Compound growth of a single contribution

use crate::error::{Result, SavingsError};

/// Future value of `net_contribution` compounded `periods_per_year` times a
/// year at `annual_real_rate / periods_per_year` per period for `years`.
///
/// # Arguments
/// * `net_contribution` - Amount actually invested
/// * `annual_real_rate` - Annual rate as a decimal (e.g., 0.05 for 5%)
/// * `periods_per_year` - Compounding frequency (12 for monthly)
/// * `years` - Horizon, partial years allowed
///
/// # Returns
/// * `Result<f64>` - `DegenerateRate` when there are no compounding periods or
///   the growth cannot be evaluated to a finite number
pub fn future_value(
    net_contribution: f64,
    annual_real_rate: f64,
    periods_per_year: u32,
    years: f64,
) -> Result<f64> {
    if periods_per_year == 0 {
        return Err(SavingsError::degenerate(
            "future value: compounding periods per year must be positive",
        ));
    }

    let periods = periods_per_year as f64;
    let growth = (1.0 + annual_real_rate / periods).powf(periods * years);
    let value = net_contribution * growth;

    if !value.is_finite() {
        return Err(SavingsError::degenerate(format!(
            "future value: growth factor {} over {} periods is not finite",
            1.0 + annual_real_rate / periods,
            periods * years
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_compounding() {
        let rate = 1.06 / 1.0015 - 1.0;
        let fv = future_value(1000.0, rate, 12, 20.0).unwrap();
        assert_relative_eq!(fv, 3207.2487532713844, epsilon = 1e-8);
    }

    #[test]
    fn test_annual_compounding() {
        // 1000 at 5% for 10 years, compounded once a year
        let fv = future_value(1000.0, 0.05, 1, 10.0).unwrap();
        assert_relative_eq!(fv, 1628.894626777442, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_years_returns_contribution() {
        let fv = future_value(600.0, 0.0584, 12, 0.0).unwrap();
        assert_eq!(fv, 600.0);
    }

    #[test]
    fn test_fractional_years() {
        // Half a year of monthly compounding is six periods
        let fv = future_value(1000.0, 0.12, 12, 0.5).unwrap();
        assert_relative_eq!(fv, 1000.0 * 1.01_f64.powi(6), epsilon = 1e-9);
    }

    #[test]
    fn test_zero_periods_is_degenerate() {
        let err = future_value(1000.0, 0.05, 0, 10.0).unwrap_err();
        assert!(matches!(err, SavingsError::DegenerateRate { .. }));
    }

    #[test]
    fn test_negative_base_with_fractional_exponent_is_degenerate() {
        // -300% real rate compounded yearly gives a negative growth base
        let err = future_value(1000.0, -3.0, 1, 0.5).unwrap_err();
        assert!(matches!(err, SavingsError::DegenerateRate { .. }));
    }
}
