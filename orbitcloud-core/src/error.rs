//! Error types for orbitcloud

use thiserror::Error;

/// Main error type for orbitcloud operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Invalid data: {0}")]
    InvalidData(String),
    
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    
    #[error("Serialization error: {0}")]
    Serialization(String),
    
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    
    #[error("Scene sink error: {0}")]
    Sink(String),
}

/// Result type alias for orbitcloud operations
pub type Result<T> = std::result::Result<T, Error>;
