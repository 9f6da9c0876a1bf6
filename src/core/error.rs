//! Engine error taxonomy

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the jumble engine
///
/// Query operations (`exists`, prefix search, range search, sub-word generation)
/// never return these: malformed input there simply yields an empty result.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dictionary source is missing or unreadable. Fatal for the engine.
    #[error("cannot read dictionary {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rejected argument combination, e.g. `min_len > length` for a game state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No dictionary entry satisfies the requested length.
    #[error("no word of length {length} in dictionary")]
    NoWordFound { length: usize },
}

impl EngineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_error_names_path() {
        let err = EngineError::Resource {
            path: PathBuf::from("missing/words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let text = err.to_string();
        assert!(text.contains("missing/words.txt"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn no_word_found_reports_length() {
        let err = EngineError::NoWordFound { length: 9 };
        assert_eq!(err.to_string(), "no word of length 9 in dictionary");
    }

    #[test]
    fn invalid_helper_wraps_message() {
        let err = EngineError::invalid("length must be >= 3");
        assert!(matches!(err, EngineError::InvalidArgument(ref m) if m == "length must be >= 3"));
    }
}
