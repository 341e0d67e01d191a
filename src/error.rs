//! Error types for crossword construction
//!
//! Uses `thiserror` for ergonomic error definitions. Only [`EngineError`]
//! ever leaves the engine; collaborator failures are absorbed where they occur.

use crate::core::TemplateError;
use thiserror::Error;

/// Fatal construction failures
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid template: {0}")]
    Template(#[from] TemplateError),

    #[error("Grid incomplete: open cell {index} has no letter")]
    IncompleteGrid { index: usize },
}

/// Failures reported by external collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("Request timed out after {millis}ms")]
    Timeout { millis: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Collaborator disabled")]
    Disabled,

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Empty response")]
    Empty,

    #[error("Cache error: {0}")]
    Cache(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;

    #[test]
    fn engine_error_wraps_template_error() {
        let err: EngineError = TemplateError::SlotOutOfBounds {
            number: 3,
            orientation: Orientation::Down,
        }
        .into();
        assert_eq!(err.to_string(), "Invalid template: slot 3-Down runs off the grid");
    }

    #[test]
    fn collaborator_error_messages() {
        assert_eq!(
            CollaboratorError::Timeout { millis: 5000 }.to_string(),
            "Request timed out after 5000ms"
        );
        assert_eq!(CollaboratorError::Disabled.to_string(), "Collaborator disabled");
    }
}
