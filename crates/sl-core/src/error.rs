//! # AppError
//!
//! Centralized error handling for SuiLaughs.
//! Every failure here is recoverable: the feed stays usable afterwards.

use thiserror::Error;

/// The primary error type for all sl-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The action needs a connected wallet (e.g., like, submit, copy address)
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A required draft field is missing or blank
    #[error("validation error: {0}")]
    ValidationError(String),

    /// The (simulated) on-chain submission failed
    #[error("submission failed: {0}")]
    SubmissionFailure(String),

    /// A submission is already in flight
    #[error("submission already in progress")]
    SubmissionInProgress,

    /// The wallet rejected the connection request
    #[error("connection refused: {0}")]
    ConnectionRefused(String),

    /// No wallet provider could be reached
    #[error("wallet provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Resource not found (e.g., unknown post kind in a route)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Broken internal state (e.g., a poisoned lock)
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for SuiLaughs logic.
pub type Result<T> = std::result::Result<T, AppError>;
