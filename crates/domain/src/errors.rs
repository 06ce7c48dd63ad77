//! Fatal error types
//!
//! Collaborator failures are never raised; they travel as
//! [`DigestIssue`](crate::DigestIssue) values. `RewatchError` is reserved for
//! conditions that make a run impossible, such as a broken configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rewatch
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RewatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rewatch operations
pub type Result<T> = std::result::Result<T, RewatchError>;
