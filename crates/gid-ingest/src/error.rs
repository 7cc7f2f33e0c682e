//! Error types for GID dataset ingestion.

use std::path::PathBuf;

use gid_model::{ModelError, ProjectPhase};
use thiserror::Error;

/// Errors that can occur while loading or querying the prescription dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Dataset file not found.
    #[error("prescription database not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Malformed dataset file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV read or write failure on a caller-supplied stream.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // === Query Errors ===
    /// Element name not present in the dataset.
    #[error("unknown element '{element}'{}", did_you_mean(.suggestions))]
    UnknownElement {
        element: String,
        suggestions: Vec<String>,
    },

    /// Phase comparison asked to compare a phase with itself.
    #[error("cannot compare phase {phase} with itself")]
    SamePhase { phase: ProjectPhase },

    #[error(transparent)]
    Model(#[from] ModelError),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/GID_DATABASE.csv"),
        };
        assert_eq!(
            err.to_string(),
            "prescription database not found: /data/GID_DATABASE.csv"
        );
    }

    #[test]
    fn test_unknown_element_lists_suggestions() {
        let err = IngestError::UnknownElement {
            element: "Murr".to_string(),
            suggestions: vec!["Mur".to_string(), "Mur rideau".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown element 'Murr'. Did you mean: Mur, Mur rideau?"
        );

        let err = IngestError::UnknownElement {
            element: "Ascenseur".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown element 'Ascenseur'");
    }

    #[test]
    fn test_same_phase_display() {
        let err = IngestError::SamePhase {
            phase: ProjectPhase::Apd,
        };
        assert_eq!(err.to_string(), "cannot compare phase APD with itself");
    }

    #[test]
    fn test_error_from_model() {
        let err: IngestError = "XYZ".parse::<gid_model::ProjectPhase>().unwrap_err().into();
        assert!(matches!(err, IngestError::Model(ModelError::InvalidPhase { .. })));
    }
}
