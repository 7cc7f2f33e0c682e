//! Integration tests for command input handling.

use std::fs;

use gid_cli::input::{load_synonyms, mapping_output_path, read_labels};
use gid_map::SynonymTable;
use tempfile::TempDir;

#[test]
fn test_inline_params_take_precedence() {
    let labels = read_labels(Some("Resistance_Feu; Is_Externe"), None).unwrap();
    assert_eq!(labels, vec!["Resistance_Feu", "Is_Externe"]);
}

#[test]
fn test_params_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("params.txt");
    fs::write(&path, "Resistance_Feu\nIs_Externe\n\nToto,  Matériau\n").unwrap();

    let labels = read_labels(None, Some(&path)).unwrap();
    assert_eq!(labels, vec!["Resistance_Feu", "Is_Externe", "Toto", "Matériau"]);
}

#[test]
fn test_missing_params_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = read_labels(None, Some(&dir.path().join("absent.txt"))).unwrap_err();
    assert!(err.to_string().starts_with("read parameters:"));
}

#[test]
fn test_default_synonyms_are_built_in() {
    let table = load_synonyms(None).unwrap();
    assert_eq!(&table, SynonymTable::french_ifc());
}

#[test]
fn test_custom_synonyms_from_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("synonyms.json");
    fs::write(
        &path,
        r#"[{"term": "Résistance", "properties": ["FireRating"]}]"#,
    )
    .unwrap();

    let table = load_synonyms(Some(&path)).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.entries()[0].term, "resistance");
}

#[test]
fn test_invalid_synonyms_report_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("synonyms.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_synonyms(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("synonyms.json"));
    assert!(format!("{err:#}").contains("invalid synonym table"));
}

#[test]
fn test_output_directory_gets_default_name() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        mapping_output_path(dir.path(), "Mur rideau"),
        dir.path().join("mapping_Mur_rideau_GID.txt")
    );

    let file = dir.path().join("custom.txt");
    assert_eq!(mapping_output_path(&file, "Mur rideau"), file);
}
