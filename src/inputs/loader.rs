//! Load comparison scenarios from CSV
//!
//! Expected columns: scenario_id, gross_deposit, marginal_tax_rate,
//! withdrawal_tax_rate, years_invested, nominal_annual_rate,
//! inflation_annual_rate, and optionally compounding_periods_per_year and
//! display_precision.

use super::data::{coerce_number, SavingsInputs};
use crate::config::Settings;
use crate::error::{Result, SavingsError};
use csv::Reader;
use log::info;
use std::path::Path;

/// One named set of inputs to compare
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: String,
    pub inputs: SavingsInputs,
}

/// Raw CSV row; every value is kept as text until coerced
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    scenario_id: String,
    gross_deposit: String,
    marginal_tax_rate: String,
    withdrawal_tax_rate: String,
    years_invested: String,
    nominal_annual_rate: String,
    inflation_annual_rate: String,
    #[serde(default)]
    compounding_periods_per_year: Option<String>,
    #[serde(default)]
    display_precision: Option<String>,
}

/// A CSV row whose inputs either coerced cleanly or carry the reason they did not
#[derive(Debug)]
pub struct ScenarioRow {
    pub id: String,
    pub inputs: Result<SavingsInputs>,
}

impl ScenarioRow {
    pub fn into_scenario(self) -> Result<Scenario> {
        let id = self.id;
        self.inputs.map(|inputs| Scenario { id, inputs })
    }
}

impl CsvRow {
    fn into_row(self, settings: &Settings) -> ScenarioRow {
        let id = self.scenario_id.trim().to_string();
        let inputs = self.coerce(settings).map_err(|err| match err {
            SavingsError::InvalidInput { field, reason } => SavingsError::InvalidInput {
                field,
                reason: format!("scenario {}: {}", id, reason),
            },
            other => other,
        });

        ScenarioRow { id, inputs }
    }

    fn coerce(&self, settings: &Settings) -> Result<SavingsInputs> {
        Ok(SavingsInputs {
            gross_deposit: coerce_number("gross_deposit", &self.gross_deposit)?,
            marginal_tax_rate: coerce_number("marginal_tax_rate", &self.marginal_tax_rate)?,
            withdrawal_tax_rate: coerce_number("withdrawal_tax_rate", &self.withdrawal_tax_rate)?,
            years_invested: coerce_number("years_invested", &self.years_invested)?,
            nominal_annual_rate: coerce_number("nominal_annual_rate", &self.nominal_annual_rate)?,
            inflation_annual_rate: coerce_number("inflation_annual_rate", &self.inflation_annual_rate)?,
            compounding_periods_per_year: optional_count(
                "compounding_periods_per_year",
                self.compounding_periods_per_year.as_deref(),
            )?
            .unwrap_or(settings.periods_per_year),
            display_precision: optional_count("display_precision", self.display_precision.as_deref())?
                .unwrap_or(settings.display_precision),
        })
    }
}

/// Blank or absent cells fall back to settings
fn optional_count(field: &str, text: Option<&str>) -> Result<Option<u32>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| SavingsError::invalid(field, format!("not a non-negative integer: {:?}", value))),
    }
}

/// Load all scenarios from a CSV file; the first bad value fails the load
pub fn load_scenarios<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<Vec<Scenario>> {
    into_scenarios(load_scenario_rows(path, settings)?)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R, settings: &Settings) -> Result<Vec<Scenario>> {
    into_scenarios(load_scenario_rows_from_reader(reader, settings)?)
}

/// Load every row of a CSV file, keeping rows whose values fail coercion
///
/// Only unreadable files and malformed CSV records are errors here.
pub fn load_scenario_rows<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<Vec<ScenarioRow>> {
    let reader = Reader::from_path(path.as_ref())?;
    let rows = collect_rows(reader, settings)?;

    let rejected = rows.iter().filter(|row| row.inputs.is_err()).count();
    info!(
        "Loaded {} scenarios from {} ({} with invalid values)",
        rows.len(),
        path.as_ref().display(),
        rejected
    );
    Ok(rows)
}

pub fn load_scenario_rows_from_reader<R: std::io::Read>(reader: R, settings: &Settings) -> Result<Vec<ScenarioRow>> {
    collect_rows(Reader::from_reader(reader), settings)
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>, settings: &Settings) -> Result<Vec<ScenarioRow>> {
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row.into_row(settings));
    }

    Ok(rows)
}

fn into_scenarios(rows: Vec<ScenarioRow>) -> Result<Vec<Scenario>> {
    rows.into_iter().map(ScenarioRow::into_scenario).collect()
}
