//! Error types returned by clock geometry and configuration.

use thiserror::Error;

/// Errors produced by the clock core.
///
/// Every error is a precondition failure detected before any geometry is
/// computed; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// An input value is outside its documented range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A configuration document could not be parsed.
    #[cfg(feature = "toml")]
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClockError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
