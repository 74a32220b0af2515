//! Cross-cutting error types for Wayfarer.
//!
//! Upstream provider failures live in `wayfarer-upstream`; the HTTP mapping of
//! every error type converges in `wayfarer-server`.

use thiserror::Error;

use crate::enums::EntityKind;

/// Errors that can be raised by any Wayfarer crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// Data failed validation (required fields, formats, ranges).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
