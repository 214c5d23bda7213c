//! Error types for FlightSnapp.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the whole FlightSnapp workspace.
///
/// Scoring failures are data-contract violations and never retryable.
/// Only [`SnappError::Curator`] carries a retry hint, because it is the one
/// variant produced by a network call.
#[derive(Error, Debug, Clone, Serialize, PartialEq)]
pub enum SnappError {
    /// Quiz answers do not line up with the question catalog, or a trait
    /// ended up with no contributing questions.
    #[error("Missing trait data: {0}")]
    MissingTraitData(String),

    /// A trait vector component is not a finite number in the sane range.
    #[error("Invalid trait vector: {0}")]
    InvalidVector(String),

    /// Caller supplied a value the domain rejects (unknown modifier, bad trip settings...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external curator (LLM) call failed.
    ///
    /// `retry_after` is the delay the server asked for, when it sent one.
    #[error("Curator error: {message}")]
    Curator {
        message: String,
        retryable: bool,
        retry_after: Option<Duration>,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SnappError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn missing_trait_data(message: impl Into<String>) -> Self {
        Self::MissingTraitData(message.into())
    }

    pub fn invalid_vector(message: impl Into<String>) -> Self {
        Self::InvalidVector(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Curator error
    pub fn curator(message: impl Into<String>, retryable: bool) -> Self {
        Self::Curator {
            message: message.into(),
            retryable,
            retry_after: None,
        }
    }

    /// Creates a Curator error carrying the server's requested delay
    pub fn curator_with_retry_after(
        message: impl Into<String>,
        retryable: bool,
        retry_after: Duration,
    ) -> Self {
        Self::Curator {
            message: message.into(),
            retryable,
            retry_after: Some(retry_after),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_missing_trait_data(&self) -> bool {
        matches!(self, Self::MissingTraitData(_))
    }

    pub fn is_invalid_vector(&self) -> bool {
        matches!(self, Self::InvalidVector(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether retrying the same operation could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Curator { retryable: true, .. })
    }

    /// Server-requested delay before the next attempt, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Curator { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SnappError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SnappError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SnappError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SnappError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SnappError>`.
pub type Result<T> = std::result::Result<T, SnappError>;
