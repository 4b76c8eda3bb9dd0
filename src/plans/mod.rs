//! Account types layered on the shared projection formulas
//!
//! Each account owns its full set of derived values, computed once when the
//! plan is built:
//! - **TFSA**: tax paid on the deposit, the remainder grows, withdrawal is untaxed
//! - **RRSP**: the full deposit grows, tax is paid on withdrawal
//!
//! There is no generic savings account to build. Code that picks an account
//! by name goes through [`AccountKind`], which refuses the template name.

mod tfsa;
mod rrsp;

pub use tfsa::TfsaPlan;
pub use rrsp::RrspPlan;

use crate::error::{Result, SavingsError};
use crate::inputs::SavingsInputs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names that refer to the shared template rather than a concrete account
const TEMPLATE_NAMES: [&str; 4] = ["savings", "savings_account", "savingsaccount", "base"];

/// Concrete account types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Tax-Free Savings Account
    #[serde(rename = "TFSA")]
    Tfsa,
    /// Registered Retirement Savings Plan
    #[serde(rename = "RRSP")]
    Rrsp,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Tfsa => "TFSA",
            AccountKind::Rrsp => "RRSP",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountKind {
    type Err = SavingsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "tfsa" => Ok(AccountKind::Tfsa),
            "rrsp" => Ok(AccountKind::Rrsp),
            other if TEMPLATE_NAMES.contains(&other) => Err(SavingsError::AbstractAccount {
                name: s.trim().to_string(),
            }),
            _ => Err(SavingsError::invalid(
                "account",
                format!("unknown account type {:?}, expected TFSA or RRSP", s.trim()),
            )),
        }
    }
}

/// Read-only view shared by every account type.
///
/// All amounts are rounded to the plan's display precision.
pub trait SavingsPlan {
    fn account(&self) -> AccountKind;

    fn display_precision(&self) -> u32;

    /// Amount actually invested
    fn net_contribution(&self) -> f64;

    /// Value at the end of the horizon, before any withdrawal tax
    fn future_value(&self) -> f64;

    /// Amount received after withdrawal tax
    fn net_withdrawal(&self) -> f64;

    /// Snapshot of every public amount
    fn result(&self) -> PlanResult;
}

/// Rounded snapshot of a plan, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub account: AccountKind,
    pub net_contribution: f64,
    pub future_value: f64,
    pub net_withdrawal: f64,

    /// Tax paid on the deposit (TFSA only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_contribution: Option<f64>,

    /// Tax paid when withdrawing (RRSP only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_upon_withdrawal: Option<f64>,
}

/// Build the plan for an account type chosen at runtime
pub fn build_plan(kind: AccountKind, inputs: &SavingsInputs) -> Result<Box<dyn SavingsPlan + Send + Sync>> {
    Ok(match kind {
        AccountKind::Tfsa => Box::new(TfsaPlan::new(inputs)?),
        AccountKind::Rrsp => Box::new(RrspPlan::new(inputs)?),
    })
}

/// Build the plan for an account named by the caller (e.g. "tfsa")
pub fn build_named_plan(name: &str, inputs: &SavingsInputs) -> Result<Box<dyn SavingsPlan + Send + Sync>> {
    build_plan(name.parse()?, inputs)
}
