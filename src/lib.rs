//! Savings Calculator - TFSA vs RRSP projections for a single deposit
//!
//! This library provides:
//! - Inflation-adjusted compound growth of a deposit
//! - Tax-at-contribution (TFSA) and tax-at-withdrawal (RRSP) treatments
//! - Side-by-side comparison, batch scenarios and nominal-rate sweeps
//! - Table, JSON and CSV rendering of the results

pub mod error;
pub mod config;
pub mod rounding;
pub mod inputs;
pub mod projection;
pub mod plans;
pub mod comparison;
pub mod report;

// Re-export commonly used types
pub use error::{Result, SavingsError};
pub use config::Settings;
pub use inputs::{RawSavingsInputs, SavingsInputs, Scenario};
pub use plans::{AccountKind, PlanResult, RrspPlan, SavingsPlan, TfsaPlan};
pub use comparison::{Comparison, ComparisonRunner};
pub use report::ComparisonReport;
