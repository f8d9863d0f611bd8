use thiserror::Error;

/// Error type for covplot-rolling operations.
#[derive(Error, Debug, PartialEq)]
pub enum RollingError {
    /// A window must cover at least one row.
    #[error("Rolling window size must be at least 1, got {0}")]
    EmptyWindow(usize),
}

/// Result type alias for covplot-rolling operations.
pub type Result<T> = std::result::Result<T, RollingError>;
