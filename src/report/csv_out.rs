//! CSV output for batch comparisons

use crate::comparison::ScenarioOutcome;
use crate::error::Result;
use crate::plans::SavingsPlan;
use serde::Serialize;
use std::io::Write;

/// One output row; plan columns are empty for rejected scenarios
#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    scenario_id: &'a str,
    gross_deposit: Option<f64>,
    tfsa_tax_contribution: Option<f64>,
    tfsa_net_contribution: Option<f64>,
    tfsa_future_value: Option<f64>,
    tfsa_net_withdrawal: Option<f64>,
    rrsp_net_contribution: Option<f64>,
    rrsp_future_value: Option<f64>,
    rrsp_tax_upon_withdrawal: Option<f64>,
    rrsp_net_withdrawal: Option<f64>,
    preferred: Option<&'static str>,
    error: Option<String>,
}

impl<'a> OutcomeRow<'a> {
    fn from_outcome(outcome: &'a ScenarioOutcome) -> Self {
        let mut row = OutcomeRow {
            scenario_id: &outcome.id,
            gross_deposit: outcome.inputs.as_ref().map(|inputs| inputs.gross_deposit),
            tfsa_tax_contribution: None,
            tfsa_net_contribution: None,
            tfsa_future_value: None,
            tfsa_net_withdrawal: None,
            rrsp_net_contribution: None,
            rrsp_future_value: None,
            rrsp_tax_upon_withdrawal: None,
            rrsp_net_withdrawal: None,
            preferred: None,
            error: None,
        };

        match &outcome.result {
            Ok(comparison) => {
                let (tfsa, rrsp) = (&comparison.tfsa, &comparison.rrsp);
                row.tfsa_tax_contribution = Some(tfsa.tax_contribution());
                row.tfsa_net_contribution = Some(tfsa.net_contribution());
                row.tfsa_future_value = Some(tfsa.future_value());
                row.tfsa_net_withdrawal = Some(tfsa.net_withdrawal());
                row.rrsp_net_contribution = Some(rrsp.net_contribution());
                row.rrsp_future_value = Some(rrsp.future_value());
                row.rrsp_tax_upon_withdrawal = Some(rrsp.tax_upon_withdrawal());
                row.rrsp_net_withdrawal = Some(rrsp.net_withdrawal());
                row.preferred = Some(comparison.preferred().map(|k| k.as_str()).unwrap_or("tie"));
            }
            Err(e) => row.error = Some(e.to_string()),
        }

        row
    }
}

/// Write one CSV row per scenario outcome
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        wtr.serialize(OutcomeRow::from_outcome(outcome))?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::ComparisonRunner;
    use crate::config::Settings;
    use crate::inputs::{load_scenario_rows_from_reader, SavingsInputs, Scenario};

    #[test]
    fn test_write_outcomes() {
        let degenerate = SavingsInputs::new(500.0, 40.0, 40.0, 20.0, 6.0, -100.0);

        let scenarios = vec![
            Scenario {
                id: "base".into(),
                inputs: SavingsInputs::new(1000.0, 40.0, 40.0, 20.0, 6.0, 0.15),
            },
            Scenario { id: "broken".into(), inputs: degenerate },
        ];
        let outcomes = ComparisonRunner::default().run_batch(&scenarios);

        let mut buffer = Vec::new();
        write_outcomes(&mut buffer, &outcomes).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("scenario_id,gross_deposit,tfsa_tax_contribution"));
        assert!(lines[0].ends_with("preferred,error"));
        assert_eq!(
            lines[1],
            "base,1000.0,400.0,600.0,1924.35,1924.35,1000.0,3207.25,1282.9,1924.35,tie,"
        );
        assert!(lines[2].starts_with("broken,500.0,,,,,,,,,,"));
        assert!(lines[2].contains("Degenerate rate"));
    }

    #[test]
    fn test_uncoercible_row_is_written_with_error() {
        let csv = "\
scenario_id,gross_deposit,marginal_tax_rate,withdrawal_tax_rate,years_invested,nominal_annual_rate,inflation_annual_rate
base,1000,40,40,20,6,0.15
typo,1000,forty,40,20,6,0.15
";
        let rows = load_scenario_rows_from_reader(csv.as_bytes(), &Settings::default()).unwrap();
        let outcomes = ComparisonRunner::default().run_rows(rows);

        let mut buffer = Vec::new();
        write_outcomes(&mut buffer, &outcomes).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("base,1000.0,400.0"));
        assert!(lines[2].starts_with("typo,,,,,,,,,,,"));
        assert!(lines[2].contains("scenario typo"), "{}", lines[2]);
    }
}
