//! Error types for public identifier parsing, encoding, and configuration.

use thiserror::Error;

/// Errors that can occur when parsing public IDs or building a codec.
///
/// Decoding itself never returns these: an undecodable token is `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID has an unknown prefix.
    #[error("invalid ID prefix: expected one of {expected:?}, got '{actual}'")]
    InvalidPrefix {
        expected: &'static [&'static str],
        actual: String,
    },

    /// The ID is missing the dash separator.
    #[error("ID missing '-' separator")]
    MissingSeparator,

    /// The token portion of the ID contains characters outside the alphabet.
    #[error("invalid token '{token}': {reason}")]
    InvalidToken { token: String, reason: &'static str },

    /// A record ID below zero was handed to the encoder.
    #[error("record ID must be non-negative, got {0}")]
    NegativeId(i64),

    /// The record kind name is not recognised.
    #[error("unknown record kind '{0}' (expected 'order' or 'client')")]
    UnknownKind(String),

    /// The codec configuration is unusable.
    #[error("invalid codec configuration: {message}")]
    InvalidConfig { message: String },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix problem.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::InvalidPrefix { .. } | IdError::MissingSeparator)
    }

    /// Returns true if the caller passed an argument outside the encodable range.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IdError::NegativeId(_))
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        IdError::InvalidConfig {
            message: message.into(),
        }
    }
}
