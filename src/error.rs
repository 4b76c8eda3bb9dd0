//! Error types for savings projections

use thiserror::Error;

/// Errors raised while building or reporting savings plans
#[derive(Debug, Error)]
pub enum SavingsError {
    /// A required numeric field is missing, non-numeric, NaN or infinite
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    /// Mathematically degenerate configuration (zero divisor, non-finite growth)
    #[error("Degenerate rate in {context}")]
    DegenerateRate { context: String },

    /// The generic savings account is a template, not an account that can be opened
    #[error("Account \"{name}\" is abstract; choose a TFSA or an RRSP")]
    AbstractAccount { name: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SavingsError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        SavingsError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(context: impl Into<String>) -> Self {
        SavingsError::DegenerateRate {
            context: context.into(),
        }
    }

    /// True for errors caused by the caller's inputs rather than by I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SavingsError::InvalidInput { .. }
                | SavingsError::DegenerateRate { .. }
                | SavingsError::AbstractAccount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SavingsError>;
