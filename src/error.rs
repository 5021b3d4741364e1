//! Error types for the I/O-facing surfaces.
//!
//! Normalizing and (de)serializing never fail; anomalies there are
//! [`Warning`](crate::diagnostics::Warning)s. Only reading input, writing
//! output, and decoding JSON documents can fail.

use thiserror::Error;

/// Errors from reading, writing or decoding documents.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
