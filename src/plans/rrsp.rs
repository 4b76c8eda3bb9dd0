//! Registered Retirement Savings Plan: tax deferred until withdrawal

use super::{AccountKind, PlanResult, SavingsPlan};
use crate::error::Result;
use crate::inputs::{ensure_finite, SavingsInputs};
use crate::projection::{future_value, periodic_rate_of_return};
use crate::rounding::round;
use log::debug;

/// RRSP projection for one deposit
#[derive(Debug, Clone, PartialEq)]
pub struct RrspPlan {
    precision: u32,
    net_contribution: f64,
    future_value: f64,
    tax_upon_withdrawal: f64,
    net_withdrawal: f64,
}

impl RrspPlan {
    /// Grow the whole deposit, then tax the future value at the withdrawal rate.
    ///
    /// The marginal tax rate is not read.
    pub fn new(inputs: &SavingsInputs) -> Result<Self> {
        inputs.validate_projection_fields()?;
        let withdrawal_tax_rate = ensure_finite("withdrawal_tax_rate", inputs.withdrawal_tax_rate)?;

        let real_rate = periodic_rate_of_return(inputs.nominal_annual_rate, inputs.inflation_annual_rate)?;

        let net_contribution = inputs.gross_deposit;
        let future_value = future_value(
            net_contribution,
            real_rate,
            inputs.compounding_periods_per_year,
            inputs.years_invested,
        )?;
        let tax_upon_withdrawal = future_value * withdrawal_tax_rate / 100.0;
        let net_withdrawal = future_value - tax_upon_withdrawal;

        debug!(
            "RRSP: deposit={} fv={} tax={} net_withdrawal={}",
            net_contribution, future_value, tax_upon_withdrawal, net_withdrawal
        );

        Ok(Self {
            precision: inputs.display_precision,
            net_contribution,
            future_value,
            tax_upon_withdrawal,
            net_withdrawal,
        })
    }

    /// Tax paid on the future value when it is withdrawn
    pub fn tax_upon_withdrawal(&self) -> f64 {
        round(self.tax_upon_withdrawal, self.precision)
    }
}

impl SavingsPlan for RrspPlan {
    fn account(&self) -> AccountKind {
        AccountKind::Rrsp
    }

    fn display_precision(&self) -> u32 {
        self.precision
    }

    fn net_contribution(&self) -> f64 {
        round(self.net_contribution, self.precision)
    }

    fn future_value(&self) -> f64 {
        round(self.future_value, self.precision)
    }

    fn net_withdrawal(&self) -> f64 {
        round(self.net_withdrawal, self.precision)
    }

    fn result(&self) -> PlanResult {
        PlanResult {
            account: AccountKind::Rrsp,
            net_contribution: self.net_contribution(),
            future_value: self.future_value(),
            net_withdrawal: self.net_withdrawal(),
            tax_contribution: None,
            tax_upon_withdrawal: Some(self.tax_upon_withdrawal()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SavingsError;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, proptest};

    fn reference_inputs() -> SavingsInputs {
        SavingsInputs::new(1000.0, 40.0, 40.0, 20.0, 6.0, 0.15)
    }

    #[test]
    fn test_reference_scenario() {
        let rrsp = RrspPlan::new(&reference_inputs()).unwrap();

        assert_eq!(rrsp.net_contribution(), 1000.0);
        assert_eq!(rrsp.future_value(), 3207.25);
        assert_eq!(rrsp.tax_upon_withdrawal(), 1282.9);
        assert_eq!(rrsp.net_withdrawal(), 1924.35);
    }

    #[test]
    fn test_whole_dollar_precision() {
        let rrsp = RrspPlan::new(&reference_inputs().with_display_precision(0)).unwrap();
        assert_eq!(rrsp.future_value(), 3207.0);
        assert_eq!(rrsp.tax_upon_withdrawal(), 1283.0);
        assert_eq!(rrsp.net_withdrawal(), 1924.0);
    }

    #[test]
    fn test_rounding_is_applied_once() {
        // Net withdrawal derives from the unrounded future value
        let rrsp = RrspPlan::new(&reference_inputs().with_display_precision(4)).unwrap();
        assert_relative_eq!(rrsp.future_value(), 3207.2488, epsilon = 1e-9);
        assert_relative_eq!(rrsp.net_withdrawal(), 1924.3493, epsilon = 1e-9);
    }

    #[test]
    fn test_large_deposit_at_fine_precision_stays_finite() {
        let mut inputs = reference_inputs().with_display_precision(300);
        inputs.gross_deposit = 1e10;

        let rrsp = RrspPlan::new(&inputs).unwrap();
        assert!(rrsp.future_value().is_finite());
        assert_relative_eq!(rrsp.future_value(), 3.2072487532713844e10, max_relative = 1e-12);
        assert_relative_eq!(rrsp.tax_upon_withdrawal(), 1.282899501308554e10, max_relative = 1e-12);
        assert_relative_eq!(rrsp.net_withdrawal(), 1.9243492519628305e10, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_years_no_growth() {
        let mut inputs = reference_inputs();
        inputs.years_invested = 0.0;

        let rrsp = RrspPlan::new(&inputs).unwrap();
        assert_eq!(rrsp.future_value(), rrsp.net_contribution());
        assert_eq!(rrsp.future_value(), 1000.0);
    }

    #[test]
    fn test_marginal_rate_is_not_read() {
        let mut inputs = reference_inputs();
        inputs.marginal_tax_rate = f64::NAN;
        assert!(RrspPlan::new(&inputs).is_ok());
    }

    #[test]
    fn test_invalid_deposit() {
        let mut inputs = reference_inputs();
        inputs.gross_deposit = f64::NAN;

        let err = RrspPlan::new(&inputs).unwrap_err();
        assert!(matches!(err, SavingsError::InvalidInput { ref field, .. } if field == "gross_deposit"));
    }

    #[test]
    fn test_inflation_minus_100_is_degenerate() {
        let mut inputs = reference_inputs();
        inputs.inflation_annual_rate = -100.0;

        let err = RrspPlan::new(&inputs).unwrap_err();
        assert!(matches!(err, SavingsError::DegenerateRate { .. }));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_tax_plus_net_withdrawal_is_future_value(
            deposit_cents in 0u32..10_000_000,
            withdrawal_bp in 0u32..6_000,
            years in 0u32..40,
            precision in 0u32..4
        ) {
            let mut inputs = reference_inputs().with_display_precision(precision);
            inputs.gross_deposit = deposit_cents as f64 / 100.0;
            inputs.withdrawal_tax_rate = withdrawal_bp as f64 / 100.0;
            inputs.years_invested = years as f64;

            let rrsp = RrspPlan::new(&inputs).unwrap();
            let tolerance = 10f64.powi(-(precision as i32)) + 1e-6;
            let diff = (rrsp.net_withdrawal() + rrsp.tax_upon_withdrawal() - rrsp.future_value()).abs();
            prop_assert!(diff <= tolerance, "diff {} > {}", diff, tolerance);
        }

        #[test]
        fn prop_future_value_rises_with_nominal_rate(
            low_bp in 0u32..1_500,
            step_bp in 0u32..1_000
        ) {
            let inputs = reference_inputs();
            let low = RrspPlan::new(&inputs.clone().with_nominal_annual_rate(low_bp as f64 / 100.0)).unwrap();
            let high = RrspPlan::new(&inputs.with_nominal_annual_rate((low_bp + step_bp) as f64 / 100.0)).unwrap();
            prop_assert!(high.future_value() >= low.future_value());
        }
    }
}
