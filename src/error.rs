//! Error types for logical volume sensors.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a logical volume sensor can report.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying data source could not be reached.
    #[error("volume data source unavailable: {0}")]
    SourceUnavailable(String),

    /// I/O failure while reading from the source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source answered, but the payload could not be interpreted.
    #[error("invalid volume data: {0}")]
    InvalidData(String),
}
