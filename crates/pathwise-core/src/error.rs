//! Engine error types.
//!
//! The adaptive engine never fails an evaluation outright: unresolvable ids
//! degrade to a neutral no-op. These errors classify *why* nothing changed so
//! callers can tell a data problem apart from an ordinary "moving on" result
//! without matching on display text.

use thiserror::Error;

/// Errors produced by the sequencing core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The completed-item id is not in the learner's path.
    #[error("assignment not found in path: {0}")]
    AssignmentNotFound(String),

    /// The asset referenced by an item does not resolve in the catalog.
    #[error("asset not found in catalog: {0}")]
    AssetNotFound(String),

    /// A quiz score outside 0..=100.
    #[error("score out of range (0-100): {0}")]
    ScoreOutOfRange(u32),

    /// Two catalog assets share the same id.
    #[error("duplicate asset id in catalog: {0}")]
    DuplicateAsset(String),

    /// The remedial threshold sits above the fast-track threshold.
    #[error("invalid thresholds: remedial_below ({remedial_below}) exceeds fast_track_above ({fast_track_above})")]
    InvalidThresholds {
        remedial_below: u8,
        fast_track_above: u8,
    },
}

impl EngineError {
    /// Returns `true` if this error points at inconsistent input data
    /// (a dangling id) rather than a caller or configuration mistake.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            EngineError::AssignmentNotFound(_) | EngineError::AssetNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_data_errors() {
        assert!(EngineError::AssignmentNotFound("x".into()).is_data_error());
        assert!(EngineError::AssetNotFound("a1".into()).is_data_error());
        assert!(!EngineError::ScoreOutOfRange(101).is_data_error());
        assert!(!EngineError::DuplicateAsset("a1".into()).is_data_error());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::ScoreOutOfRange(120).to_string(),
            "score out of range (0-100): 120"
        );
        let err = EngineError::InvalidThresholds {
            remedial_below: 95,
            fast_track_above: 90,
        };
        assert!(err.to_string().contains("remedial_below (95)"));
    }
}
