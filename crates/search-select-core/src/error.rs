//! Error types for the search-select core crate.

use std::fmt;

/// The top-level error type for core operations.
#[derive(Debug)]
pub enum CoreError {
    /// A signal operation failed.
    Signal(SignalError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Signal(e) => write!(f, "signal error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::Signal(e) => Some(e),
        }
    }
}

impl From<SignalError> for CoreError {
    fn from(e: SignalError) -> Self {
        CoreError::Signal(e)
    }
}

/// Errors from signal connection management.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalError::InvalidConnection => {
                write!(f, "connection ID is invalid or already disconnected")
            }
        }
    }
}

impl std::error::Error for SignalError {}

/// Convenience alias for results with a [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
