//! Errors raised while reading externally supplied weights

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeightError>;

#[derive(Debug, Error)]
pub enum WeightError {
    #[error("Weight file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A token that isn't a finite decimal value
    #[error("Invalid weight at index {index}: {token:?}")]
    Parse { index: usize, token: String },

    #[error("Expected {expected} weights, found {found}")]
    Length { expected: usize, found: usize },

    #[error("Expected {expected} bytes of weight data, found {found}")]
    ByteLength { expected: usize, found: usize },
}

impl WeightError {
    pub fn parse(index: usize, token: impl Into<String>) -> Self {
        Self::Parse { index, token: token.into() }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
