//! Error types for ScratchForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum SfError {
    #[error("Invalid weight table for {table}: {reason}")]
    InvalidTable { table: String, reason: String },

    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type SfResult<T> = Result<T, SfError>;
