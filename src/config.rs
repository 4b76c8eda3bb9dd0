//! Run-wide defaults for compounding frequency and display precision
//!
//! Accepts overrides via environment variables:
//!   SAVINGS_PERIODS_PER_YEAR, SAVINGS_DISPLAY_PRECISION

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

/// Default compounding periods per year (monthly)
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 12;

/// Default number of decimal places on derived outputs
pub const DEFAULT_DISPLAY_PRECISION: u32 = 2;

pub const PERIODS_PER_YEAR_VAR: &str = "SAVINGS_PERIODS_PER_YEAR";
pub const DISPLAY_PRECISION_VAR: &str = "SAVINGS_DISPLAY_PRECISION";

/// Defaults applied when an input does not specify its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub periods_per_year: u32,
    pub display_precision: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl Settings {
    /// Read settings from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let periods_per_year = match parse_var(&lookup, PERIODS_PER_YEAR_VAR) {
            Some(0) => {
                warn!("{} must be positive, using {}", PERIODS_PER_YEAR_VAR, defaults.periods_per_year);
                defaults.periods_per_year
            }
            Some(periods) => periods,
            None => defaults.periods_per_year,
        };

        Self {
            periods_per_year,
            display_precision: parse_var(&lookup, DISPLAY_PRECISION_VAR)
                .unwrap_or(defaults.display_precision),
        }
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: expected a non-negative integer", key, raw);
            None
        }
    }
}
