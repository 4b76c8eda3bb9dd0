//! Tax-Free Savings Account: taxed on the way in, untaxed on the way out

use super::{AccountKind, PlanResult, SavingsPlan};
use crate::error::Result;
use crate::inputs::{ensure_finite, SavingsInputs};
use crate::projection::{future_value, periodic_rate_of_return};
use crate::rounding::round;
use log::debug;

/// TFSA projection for one deposit
#[derive(Debug, Clone, PartialEq)]
pub struct TfsaPlan {
    precision: u32,
    tax_contribution: f64,
    net_contribution: f64,
    future_value: f64,
    net_withdrawal: f64,
}

impl TfsaPlan {
    /// Tax the deposit at the marginal rate, then grow what remains.
    ///
    /// The withdrawal tax rate is not read.
    pub fn new(inputs: &SavingsInputs) -> Result<Self> {
        inputs.validate_projection_fields()?;
        let marginal_tax_rate = ensure_finite("marginal_tax_rate", inputs.marginal_tax_rate)?;

        let real_rate = periodic_rate_of_return(inputs.nominal_annual_rate, inputs.inflation_annual_rate)?;

        let tax_contribution = inputs.gross_deposit * marginal_tax_rate / 100.0;
        let net_contribution = inputs.gross_deposit - tax_contribution;
        let future_value = future_value(
            net_contribution,
            real_rate,
            inputs.compounding_periods_per_year,
            inputs.years_invested,
        )?;

        debug!(
            "TFSA: deposit={} tax={} net={} fv={}",
            inputs.gross_deposit, tax_contribution, net_contribution, future_value
        );

        Ok(Self {
            precision: inputs.display_precision,
            tax_contribution,
            net_contribution,
            future_value,
            net_withdrawal: future_value,
        })
    }

    /// Tax paid on the deposit
    pub fn tax_contribution(&self) -> f64 {
        round(self.tax_contribution, self.precision)
    }
}

impl SavingsPlan for TfsaPlan {
    fn account(&self) -> AccountKind {
        AccountKind::Tfsa
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
            account: AccountKind::Tfsa,
            net_contribution: self.net_contribution(),
            future_value: self.future_value(),
            net_withdrawal: self.net_withdrawal(),
            tax_contribution: Some(self.tax_contribution()),
            tax_upon_withdrawal: None,
        }
    }
}
