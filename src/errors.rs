//! Error types for Braille score construction
//!
//! Three error classes, all fatal to the current conversion: malformed
//! musical input, structural misuse of a container by the lowering pass, and
//! values outside a closed encoding table. Nothing is retried or defaulted;
//! a silently wrong Braille duration or tempo is a correctness hazard for a
//! tactile reading aid.

use thiserror::Error;

/// Top-level error type for the document model and codec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Beats-per-minute text matched neither `min-max` nor a single integer.
    #[error("malformed beats-per-minute text {text:?} at input line {source_line}")]
    MalformedTempoText { source_line: usize, text: String },

    /// A numeric field could not be encoded (out of range for its table).
    #[error("value {value} cannot be encoded as {context} at input line {source_line}")]
    ValueOutOfRange {
        source_line: usize,
        context: &'static str,
        value: i64,
    },

    /// Text contained a character with no Braille letter cell.
    #[error("character {character:?} in {text:?} has no letter cell at input line {source_line}")]
    UnencodableCharacter {
        source_line: usize,
        text: String,
        character: char,
    },

    /// The lowering pass called a container operation whose precondition
    /// did not hold. A defect in the caller, not bad input; `caller` is
    /// the file and line of the violating call.
    #[error("structural misuse: {operation} on {container} at {caller}: {detail}")]
    StructuralMisuse {
        operation: &'static str,
        container: &'static str,
        caller: String,
        detail: String,
    },
}

impl ScoreError {
    /// Shorthand for container-precondition violations. The reported call
    /// site is the nearest caller outside `#[track_caller]` frames, i.e.
    /// the violating call in the lowering pass.
    #[track_caller]
    pub fn misuse(
        operation: &'static str,
        container: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        let location = std::panic::Location::caller();
        ScoreError::StructuralMisuse {
            operation,
            container,
            caller: format!("{}:{}", location.file(), location.line()),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misuse_reports_the_calling_site() {
        let err = ScoreError::misuse("insert_before_last", "LineContents", "segment is empty");
        let msg = err.to_string();
        assert!(msg.contains("errors.rs"), "got {msg}");
        assert!(msg.contains("segment is empty"));
    }

    #[test]
    fn test_error_messages_carry_diagnostics() {
        let err = ScoreError::MalformedTempoText {
            source_line: 42,
            text: "fast-ish".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fast-ish"));
        assert!(msg.contains("42"));
    }
}
