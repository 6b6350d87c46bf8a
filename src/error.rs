//! Error types
//!
//! The prediction model itself has a single failure mode: a sequence that is
//! absent or shorter than [`MIN_SEQUENCE_LENGTH`](crate::models::sequence::MIN_SEQUENCE_LENGTH)
//! residues. Every numeric formula clamps instead of failing, so the other
//! variants only come from the edges of the crate (parameter validation,
//! option parsing, exporters).

use thiserror::Error;

/// Unified error type for the elution simulator
#[derive(Debug, Error)]
pub enum ElutionError {
    /// Sequence missing or too short after normalization
    #[error("invalid sequence: {length} residues after normalization (minimum 10)")]
    InvalidSequence {
        /// Normalized length that was rejected
        length: usize,
    },

    /// Numeric process parameter out of its physical domain
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Enumeration tag with no documented fallback
    #[error("unknown {kind} `{value}`")]
    UnknownOption {
        kind: &'static str,
        value: String,
    },

    /// Output collaborator failure (plot backend, malformed data)
    #[error("export error: {0}")]
    Export(String),

    /// I/O error while writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, ElutionError>;

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sequence_message() {
        let err = ElutionError::InvalidSequence { length: 4 };
        assert!(err.to_string().contains("4 residues"));
    }

    #[test]
    fn test_unknown_option_message() {
        let err = ElutionError::UnknownOption {
            kind: "target molecule",
            value: "llama_vhh".to_string(),
        };
        assert_eq!(err.to_string(), "unknown target molecule `llama_vhh`");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ElutionError = io.into();
        assert!(matches!(err, ElutionError::Io(_)));
    }
}
