// Central Error Type for the Roster

use rust_decimal::Decimal;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Employees have already been loaded")]
    AlreadyLoaded,

    #[error("No employees registered")]
    EmptyRoster,

    #[error("Employee named '{name}' does not exist")]
    NotFound { name: String },

    #[error("Employees have not been grouped yet")]
    NotGrouped,

    #[error("Invalid minimum wage: {0} (must be greater than zero)")]
    InvalidMinimumWage(Decimal),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Seed error: {0}")]
    Seed(String),
}

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;
