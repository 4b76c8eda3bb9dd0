//! Shared projection formulas used by every account type

mod rate;
mod growth;

pub use rate::periodic_rate_of_return;
pub use growth::future_value;
