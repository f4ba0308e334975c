//! Error types for line and file analysis.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can surface from an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A linguistic backend (tokenizer, tagger) failed. Fatal for the
    /// current line; batch analysis skips the line and keeps going.
    #[error("linguistic resource failure: {0}")]
    LinguisticResource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_display() {
        let err = AnalysisError::FileAccess {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
    }

    #[test]
    fn test_linguistic_resource_display() {
        let err = AnalysisError::LinguisticResource("tagger model unavailable".into());
        assert!(err.to_string().contains("tagger model unavailable"));
    }
}
