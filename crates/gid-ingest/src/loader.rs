//! Reading the GID prescription dataset from CSV.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use gid_model::PrescriptionRecord;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Environment variable for overriding the dataset location.
pub const DATABASE_ENV_VAR: &str = "GID_DATABASE_PATH";

/// Dataset location used when neither a flag nor [`DATABASE_ENV_VAR`] is set.
pub const DEFAULT_DATABASE_PATH: &str = "data/GID_DATABASE.csv";

/// Get the default dataset path.
///
/// Checks the `GID_DATABASE_PATH` environment variable first,
/// then falls back to `data/GID_DATABASE.csv` relative to the working
/// directory.
pub fn default_database_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

/// Load every prescription record from a dataset file.
pub fn load_records(path: &Path) -> Result<Vec<PrescriptionRecord>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(BufReader::new(file)).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), records = records.len(), "loaded prescription database");
    Ok(records)
}

/// Read prescription records from any CSV source.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PrescriptionRecord>> {
    Ok(parse_records(reader)?)
}

/// The first row is a header and is skipped. Columns are positional: short
/// rows leave trailing fields empty and extra columns are ignored. Rows with
/// an empty element are dropped.
fn parse_records<R: Read>(reader: R) -> std::result::Result<Vec<PrescriptionRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row?;
        let record = PrescriptionRecord::from_columns(row.iter());
        if record.element.is_empty() {
            dropped += 1;
            continue;
        }
        records.push(record);
    }
    if dropped > 0 {
        debug!(dropped, "skipped rows without an element");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Element,Categorie,Sous_categorie,Phase,Type de document,Propriété,IFC_Reference,Revit_Param,Nom,IFC Type,Catégorie Revit,Classification,Descriptif";

    #[test]
    fn test_reads_positional_columns() {
        let csv = format!(
            "{HEADER}\n Mur ,Architecture,Cloison,PDE,Maquette,Résistance au feu,Pset_WallCommon.FireRating,GID_Resistance_Feu,FireRating,IfcLabel,Murs,Ss_25_10,Classement au feu\n"
        );
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.element, "Mur");
        assert_eq!(record.phase, "PDE");
        assert_eq!(record.property, "Résistance au feu");
        assert_eq!(record.revit_param, "GID_Resistance_Feu");
        assert_eq!(record.description, "Classement au feu");
    }

    #[test]
    fn test_short_rows_and_quotes() {
        let csv = format!("{HEADER}\nDalle,Structure,,Toutes\n\"Chemin de câbles, courant fort\",Electricité\n");
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].phase, "Toutes");
        assert_eq!(records[0].document_type, "");
        assert_eq!(records[1].element, "Chemin de câbles, courant fort");
    }

    #[test]
    fn test_drops_rows_without_element_and_blank_lines() {
        let csv = format!("{HEADER}\n,Architecture,,PDE\n\nMur,Architecture,,PDE\n");
        let records = read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].element, "Mur");
    }

    #[test]
    fn test_header_only() {
        assert!(read_records(HEADER.as_bytes()).unwrap().is_empty());
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_records(Path::new("/nonexistent/GID_DATABASE.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
