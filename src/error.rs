//! Error types for tempmom

use thiserror::Error;

/// Errors that can occur during moment computation
#[derive(Debug, Error)]
pub enum MomentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Undefined moment: {0}")]
    UndefinedMoment(String),

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),
}
