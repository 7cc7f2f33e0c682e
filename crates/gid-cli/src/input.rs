//! Reading command inputs and resolving output locations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gid_map::{SynonymTable, mapping_file_name, parse_labels};
use tracing::info;

/// Parameter names from an inline list or a file, parsed with
/// [`parse_labels`].
pub fn read_labels(params: Option<&str>, input: Option<&Path>) -> Result<Vec<String>> {
    let labels = match (params, input) {
        (Some(raw), _) => parse_labels(raw),
        (None, Some(path)) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read parameters: {}", path.display()))?;
            parse_labels(&raw)
        }
        (None, None) => Vec::new(),
    };
    Ok(labels)
}

/// The synonym table to match with: a JSON file when given, otherwise the
/// built-in French-to-IFC dictionary.
pub fn load_synonyms(path: Option<&Path>) -> Result<SynonymTable> {
    match path {
        Some(path) => {
            let table = SynonymTable::from_json_path(path)
                .with_context(|| format!("load synonyms: {}", path.display()))?;
            info!(path = %path.display(), entries = table.len(), "loaded synonym table");
            Ok(table)
        }
        None => Ok(SynonymTable::french_ifc().clone()),
    }
}

/// Where to write a mapping export. An existing directory receives the
/// default file name for `category`.
pub fn mapping_output_path(target: &Path, category: &str) -> PathBuf {
    if target.is_dir() {
        target.join(mapping_file_name(category))
    } else {
        target.to_path_buf()
    }
}
