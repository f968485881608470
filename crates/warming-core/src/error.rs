//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The record source could not be read.
    #[error("data load failed: {0}")]
    DataLoad(String),

    /// A row could not be coerced into a `TemperatureRecord`.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// The 1-based line number of the offending row.
        line: u64,
        /// Description of the coercion failure.
        message: String,
    },

    /// An infrastructure error outside the data path (e.g. a poisoned lock).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
