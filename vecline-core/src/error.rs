//! Error types for vecline

use thiserror::Error;

/// Main error type for vecline operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal invariant violated: {0}")]
    Internal(String),
}

/// Result type alias for vecline operations
pub type Result<T> = std::result::Result<T, Error>;
