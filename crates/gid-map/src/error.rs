//! Error types for mapping operations.

use std::fmt;
use std::path::PathBuf;

/// Errors from loading mapping configuration.
///
/// Matching itself never fails; these only arise when reading a synonym
/// table supplied by the caller.
#[derive(Debug)]
pub enum MapError {
    /// Synonym file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Synonym file is not a JSON array of `{ term, properties }` entries.
    SynonymTable(serde_json::Error),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read synonym table {}: {source}", path.display())
            }
            Self::SynonymTable(e) => write!(f, "invalid synonym table: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::SynonymTable(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        Self::SynonymTable(e)
    }
}
