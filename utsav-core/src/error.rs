//! Error types for the utsav ecosystem.

use thiserror::Error;

/// Errors that can occur in dataset operations.
///
/// The display strings of `FestivalNotFound` and `MonthOutOfRange` are the
/// API error messages clients see; changing them changes the wire contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtsavError {
    #[error("Festival not found")]
    FestivalNotFound,

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,

    #[error("Record '{name}' has invalid date '{date}'")]
    InvalidDate { name: String, date: String },
}

/// Result type alias for dataset operations.
pub type UtsavResult<T> = Result<T, UtsavError>;
