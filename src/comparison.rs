//! Side-by-side TFSA/RRSP comparison and batch runners
//!
//! Plans are independent pure computations, so batches and rate sweeps are
//! evaluated in parallel without any shared state.

use crate::config::Settings;
use crate::error::Result;
use crate::inputs::{SavingsInputs, Scenario, ScenarioRow};
use crate::plans::{AccountKind, PlanResult, RrspPlan, SavingsPlan, TfsaPlan};
use crate::rounding::round;
use log::info;
use rayon::prelude::*;

/// Both account types projected from the same inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub tfsa: TfsaPlan,
    pub rrsp: RrspPlan,
}

impl Comparison {
    /// Build both plans; fails if either account rejects the inputs
    pub fn new(inputs: &SavingsInputs) -> Result<Self> {
        Ok(Self {
            tfsa: TfsaPlan::new(inputs)?,
            rrsp: RrspPlan::new(inputs)?,
        })
    }

    /// Account with the larger net withdrawal, or None when they tie at
    /// display precision
    pub fn preferred(&self) -> Option<AccountKind> {
        let tfsa = self.tfsa.net_withdrawal();
        let rrsp = self.rrsp.net_withdrawal();
        if tfsa > rrsp {
            Some(AccountKind::Tfsa)
        } else if rrsp > tfsa {
            Some(AccountKind::Rrsp)
        } else {
            None
        }
    }

    /// Difference between the two net withdrawals
    pub fn withdrawal_advantage(&self) -> f64 {
        let diff = (self.tfsa.net_withdrawal() - self.rrsp.net_withdrawal()).abs();
        round(diff, self.tfsa.display_precision())
    }

    pub fn results(&self) -> [PlanResult; 2] {
        [self.tfsa.result(), self.rrsp.result()]
    }
}

/// Result of one scenario from a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub id: String,
    /// None when the row's values could not be coerced
    pub inputs: Option<SavingsInputs>,
    pub result: Result<Comparison>,
}

/// Result of one point of a nominal-rate sweep
#[derive(Debug)]
pub struct SweepPoint {
    pub nominal_annual_rate: f64,
    pub result: Result<Comparison>,
}

/// Runs comparisons for many scenarios
///
/// # Example
/// ```ignore
/// let runner = ComparisonRunner::new(Settings::from_env());
/// let scenarios = load_scenarios("scenarios.csv", runner.settings())?;
/// for outcome in runner.run_batch(&scenarios) {
///     println!("{}: {:?}", outcome.id, outcome.result.map(|c| c.preferred()));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComparisonRunner {
    settings: Settings,
}

impl ComparisonRunner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Compare a single set of inputs
    pub fn run(&self, inputs: &SavingsInputs) -> Result<Comparison> {
        Comparison::new(inputs)
    }

    /// Compare every scenario, keeping input order; one bad scenario does not
    /// stop the others
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        info!("Comparing {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                id: scenario.id.clone(),
                inputs: Some(scenario.inputs.clone()),
                result: self.run(&scenario.inputs),
            })
            .collect()
    }

    /// Like `run_batch`, but rows that failed coercion become failed outcomes
    pub fn run_rows(&self, rows: Vec<ScenarioRow>) -> Vec<ScenarioOutcome> {
        info!("Comparing {} scenario rows", rows.len());

        rows.into_par_iter()
            .map(|row| match row.inputs {
                Ok(inputs) => ScenarioOutcome {
                    result: self.run(&inputs),
                    id: row.id,
                    inputs: Some(inputs),
                },
                Err(err) => ScenarioOutcome {
                    id: row.id,
                    inputs: None,
                    result: Err(err),
                },
            })
            .collect()
    }

    /// Compare the same inputs at several nominal growth rates
    pub fn run_rate_sweep(&self, inputs: &SavingsInputs, nominal_rates: &[f64]) -> Vec<SweepPoint> {
        nominal_rates
            .par_iter()
            .map(|&rate| SweepPoint {
                nominal_annual_rate: rate,
                result: self.run(&inputs.clone().with_nominal_annual_rate(rate)),
            })
            .collect()
    }
}
