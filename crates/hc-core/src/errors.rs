//! Cross-cutting error types for HealthCore.
//!
//! Domain-specific errors (e.g., `ReceptorError`, `SchemaError`) are defined in
//! their respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any HealthCore crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (catalog shape, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] with owned fields.
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::not_found("body_system", "skeletal");
        assert_eq!(err.to_string(), "Entity not found: body_system skeletal");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = CoreError::Validation("receptor id is empty".into());
        assert_eq!(err.to_string(), "Validation error: receptor id is empty");
    }
}
