//! Error types for protein sequencing
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Everything that can go wrong while reading, translating or comparing samples
#[derive(Debug, Error)]
pub enum ProtSeqError {
    /// Sequence or codon table file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed GenBank or codon table file
    #[error("parse error: {0}")]
    Parse(String),

    /// Codon with no entry in the codon table
    #[error("unknown codon: {0}")]
    UnknownCodon(String),

    /// Bad arguments or table contents
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for ProtSeqError {
    fn from(err: serde_json::Error) -> Self {
        ProtSeqError::Parse(err.to_string())
    }
}

#[cfg(not(tarpaulin_include))]
impl From<ProtSeqError> for PyErr {
    fn from(err: ProtSeqError) -> PyErr {
        match err {
            ProtSeqError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, ProtSeqError>;
