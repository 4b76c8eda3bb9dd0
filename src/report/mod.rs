//! Rendering of comparisons as text tables, JSON reports and CSV

pub mod csv_out;

use crate::comparison::{Comparison, SweepPoint};
use crate::inputs::SavingsInputs;
use crate::plans::{AccountKind, PlanResult, SavingsPlan};
use crate::rounding::round;
use serde::Serialize;
use std::fmt::Write;

/// Serializable summary of one comparison
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub inputs: SavingsInputs,
    pub tfsa: PlanResult,
    pub rrsp: PlanResult,
    /// None when both accounts pay out the same at display precision
    pub preferred: Option<AccountKind>,
    pub withdrawal_advantage: f64,
}

impl ComparisonReport {
    pub fn new(inputs: &SavingsInputs, comparison: &Comparison) -> Self {
        Self {
            inputs: inputs.clone(),
            tfsa: comparison.tfsa.result(),
            rrsp: comparison.rrsp.result(),
            preferred: comparison.preferred(),
            withdrawal_advantage: comparison.withdrawal_advantage(),
        }
    }
}

fn money(value: f64, precision: u32) -> String {
    format!("${:.*}", precision as usize, round(value, precision))
}

/// Two-column TFSA/RRSP table, one row per stage of the deposit
pub fn render_table(inputs: &SavingsInputs, comparison: &Comparison) -> String {
    let p = inputs.display_precision;
    let tfsa = &comparison.tfsa;
    let rrsp = &comparison.rrsp;

    let rows = [
        (
            "Amount".to_string(),
            money(inputs.gross_deposit, p),
            money(inputs.gross_deposit, p),
        ),
        (
            format!("Tax ({}%)", inputs.marginal_tax_rate),
            money(tfsa.tax_contribution(), p),
            "$0".to_string(),
        ),
        (
            "Net contribution".to_string(),
            money(tfsa.net_contribution(), p),
            money(rrsp.net_contribution(), p),
        ),
        (
            format!("Future value {}yr @ {}%", inputs.years_invested, inputs.nominal_annual_rate),
            money(tfsa.future_value(), p),
            money(rrsp.future_value(), p),
        ),
        (
            format!("Tax upon withdrawal ({}%)", inputs.withdrawal_tax_rate),
            "$0".to_string(),
            money(rrsp.tax_upon_withdrawal(), p),
        ),
        (
            "Net withdrawal".to_string(),
            money(tfsa.net_withdrawal(), p),
            money(rrsp.net_withdrawal(), p),
        ),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "{:<32} {:>14} {:>14}", "", "TFSA", "RRSP");
    let _ = writeln!(out, "{}", "-".repeat(62));
    for (label, tfsa_cell, rrsp_cell) in rows {
        let _ = writeln!(out, "{:<32} {:>14} {:>14}", label, tfsa_cell, rrsp_cell);
    }

    match comparison.preferred() {
        Some(kind) => {
            let _ = writeln!(
                out,
                "\n{} pays {} more on withdrawal",
                kind,
                money(comparison.withdrawal_advantage(), p)
            );
        }
        None => {
            let _ = writeln!(out, "\nBoth accounts pay out the same on withdrawal");
        }
    }

    out
}

/// One line per nominal rate with both net withdrawals
pub fn render_sweep_table(points: &[SweepPoint], precision: u32) -> String {
    let p = precision;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10} {:>16} {:>16} {:>10}",
        "Nominal %", "TFSA net", "RRSP net", "Preferred"
    );
    let _ = writeln!(out, "{}", "-".repeat(55));

    for point in points {
        match &point.result {
            Ok(comparison) => {
                let preferred = comparison
                    .preferred()
                    .map(|k| k.as_str())
                    .unwrap_or("tie");
                let _ = writeln!(
                    out,
                    "{:>10} {:>16} {:>16} {:>10}",
                    point.nominal_annual_rate,
                    money(comparison.tfsa.net_withdrawal(), p),
                    money(comparison.rrsp.net_withdrawal(), p),
                    preferred
                );
            }
            Err(e) => {
                let _ = writeln!(out, "{:>10} error: {}", point.nominal_annual_rate, e);
            }
        }
    }

    out
}
