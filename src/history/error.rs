//! History store error types.

use thiserror::Error;

/// Errors that can occur while persisting or loading calculation history.
///
/// Store failures are non-fatal to the caller: a failed append never loses
/// the evaluation result that produced the record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("history store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a calculation record failed
    #[error("failed to encode calculation record: {0}")]
    Encode(String),

    /// The backing file contains data that does not decode as a record
    #[error("corrupt history record: {0}")]
    Corrupt(String),
}
