//! Savings inputs and numeric coercion of raw form values

use crate::config::{Settings, DEFAULT_DISPLAY_PRECISION, DEFAULT_PERIODS_PER_YEAR};
use crate::error::{Result, SavingsError};
use serde::{Deserialize, Serialize};

fn default_periods_per_year() -> u32 {
    DEFAULT_PERIODS_PER_YEAR
}

fn default_display_precision() -> u32 {
    DEFAULT_DISPLAY_PRECISION
}

/// Everything needed to project one deposit into either account type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInputs {
    /// Amount deposited before any tax
    pub gross_deposit: f64,

    /// Income tax rate (%) paid on a TFSA contribution
    pub marginal_tax_rate: f64,

    /// Average tax rate (%) paid on an RRSP withdrawal
    pub withdrawal_tax_rate: f64,

    /// Investment horizon in years (fractional allowed)
    pub years_invested: f64,

    /// Annual growth rate of the invested money (%)
    pub nominal_annual_rate: f64,

    /// Expected annual inflation (%)
    pub inflation_annual_rate: f64,

    /// Compounding periods per year
    #[serde(default = "default_periods_per_year")]
    pub compounding_periods_per_year: u32,

    /// Decimal places on derived outputs
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
}

impl SavingsInputs {
    /// Create inputs with monthly compounding and two decimal places
    pub fn new(
        gross_deposit: f64,
        marginal_tax_rate: f64,
        withdrawal_tax_rate: f64,
        years_invested: f64,
        nominal_annual_rate: f64,
        inflation_annual_rate: f64,
    ) -> Self {
        Self {
            gross_deposit,
            marginal_tax_rate,
            withdrawal_tax_rate,
            years_invested,
            nominal_annual_rate,
            inflation_annual_rate,
            compounding_periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }

    pub fn with_periods_per_year(mut self, periods: u32) -> Self {
        self.compounding_periods_per_year = periods;
        self
    }

    pub fn with_display_precision(mut self, precision: u32) -> Self {
        self.display_precision = precision;
        self
    }

    /// Same inputs at a different nominal growth rate
    pub fn with_nominal_annual_rate(mut self, rate: f64) -> Self {
        self.nominal_annual_rate = rate;
        self
    }

    /// Check the fields every account type reads
    pub(crate) fn validate_projection_fields(&self) -> Result<()> {
        ensure_finite("gross_deposit", self.gross_deposit)?;
        ensure_finite("years_invested", self.years_invested)?;
        ensure_finite("nominal_annual_rate", self.nominal_annual_rate)?;
        ensure_finite("inflation_annual_rate", self.inflation_annual_rate)?;
        Ok(())
    }
}

/// Reject NaN and infinities for a named field
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SavingsError::invalid(field, format!("{} is not a finite number", value)))
    }
}

/// Coerce the text of a form field to a finite number
pub fn coerce_number(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SavingsError::invalid(field, "value is empty"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| SavingsError::invalid(field, format!("not a number: {:?}", trimmed)))?;

    ensure_finite(field, value)
}

/// A numeric field as submitted: either a JSON number or form text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn coerce(&self, field: &str) -> Result<f64> {
        match self {
            RawNumber::Number(value) => ensure_finite(field, *value),
            RawNumber::Text(text) => coerce_number(field, text),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(text: &str) -> Self {
        RawNumber::Text(text.to_string())
    }
}

/// Uncoerced inputs, as sent by a form or an HTTP client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawSavingsInputs {
    #[serde(default)]
    pub gross_deposit: Option<RawNumber>,
    #[serde(default)]
    pub marginal_tax_rate: Option<RawNumber>,
    #[serde(default)]
    pub withdrawal_tax_rate: Option<RawNumber>,
    #[serde(default)]
    pub years_invested: Option<RawNumber>,
    #[serde(default)]
    pub nominal_annual_rate: Option<RawNumber>,
    #[serde(default)]
    pub inflation_annual_rate: Option<RawNumber>,
    #[serde(default)]
    pub compounding_periods_per_year: Option<u32>,
    #[serde(default)]
    pub display_precision: Option<u32>,
}

impl RawSavingsInputs {
    /// Coerce every field, filling frequency and precision from `settings`
    pub fn coerce(&self, settings: &Settings) -> Result<SavingsInputs> {
        Ok(SavingsInputs {
            gross_deposit: required("gross_deposit", &self.gross_deposit)?,
            marginal_tax_rate: required("marginal_tax_rate", &self.marginal_tax_rate)?,
            withdrawal_tax_rate: required("withdrawal_tax_rate", &self.withdrawal_tax_rate)?,
            years_invested: required("years_invested", &self.years_invested)?,
            nominal_annual_rate: required("nominal_annual_rate", &self.nominal_annual_rate)?,
            inflation_annual_rate: required("inflation_annual_rate", &self.inflation_annual_rate)?,
            compounding_periods_per_year: self
                .compounding_periods_per_year
                .unwrap_or(settings.periods_per_year),
            display_precision: self.display_precision.unwrap_or(settings.display_precision),
        })
    }
}

fn required(field: &str, raw: &Option<RawNumber>) -> Result<f64> {
    match raw {
        Some(value) => value.coerce(field),
        None => Err(SavingsError::invalid(field, "value is missing")),
    }
}
