//! Savings inputs, coercion of raw values, and scenario loading

mod data;
pub mod loader;

pub use data::{coerce_number, RawNumber, RawSavingsInputs, SavingsInputs};
pub(crate) use data::ensure_finite;
pub use loader::{
    load_scenario_rows, load_scenario_rows_from_reader, load_scenarios, load_scenarios_from_reader, Scenario,
    ScenarioRow,
};
