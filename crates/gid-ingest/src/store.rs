//! In-memory prescription dataset with element and phase queries.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use gid_map::{MAX_SUGGESTIONS, normalize_for_search, suggest_similar};
use gid_model::{PhaseComparison, Prescription, PrescriptionRecord, ProjectPhase};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::loader::{load_records, read_records};

/// The loaded dataset.
///
/// Loaded once and passed by reference to whatever needs it; there is no
/// global cache.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionStore {
    records: Vec<PrescriptionRecord>,
    elements: Vec<String>,
}

impl PrescriptionStore {
    pub fn new(records: Vec<PrescriptionRecord>) -> Self {
        let mut elements: Vec<String> = records
            .iter()
            .map(|r| r.element.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        // Accents and case do not affect the order: "Équipement" sorts with "E".
        elements.sort_by_cached_key(|name| (normalize_for_search(name), name.clone()));
        Self { records, elements }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(load_records(path)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(read_records(reader)?))
    }

    pub fn records(&self) -> &[PrescriptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique element names, sorted ignoring case and accents.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Resolves a user-supplied element name to its dataset spelling.
    ///
    /// Exact matches win, then case-insensitive ones. An unknown name yields
    /// [`IngestError::UnknownElement`] with up to three close names.
    pub fn resolve_element(&self, name: &str) -> Result<&str> {
        let name = name.trim();
        if let Some(exact) = self.elements.iter().find(|e| *e == name) {
            return Ok(exact.as_str());
        }
        let lower = name.to_lowercase();
        if let Some(found) = self.elements.iter().find(|e| e.to_lowercase() == lower) {
            return Ok(found.as_str());
        }
        Err(IngestError::UnknownElement {
            element: name.to_string(),
            suggestions: suggest_similar(name, &self.elements, MAX_SUGGESTIONS),
        })
    }

    /// Records for `element` that apply to `phase`, in dataset order.
    pub fn filter(&self, phase: ProjectPhase, element: &str) -> Result<Vec<&PrescriptionRecord>> {
        let element = self.resolve_element(element)?;
        let records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.element == element && phase.applies_to(&r.phase))
            .collect();
        debug!(element, phase = %phase, count = records.len(), "filtered prescriptions");
        Ok(records)
    }

    /// Filtered records with stable identifiers.
    pub fn prescriptions(&self, phase: ProjectPhase, element: &str) -> Result<Vec<Prescription>> {
        Ok(self
            .filter(phase, element)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| Prescription::new(record.clone(), index))
            .collect())
    }

    /// Splits the requirements of `element` into those kept, added and
    /// dropped when moving from phase `from` to phase `to`.
    pub fn compare_phases(
        &self,
        element: &str,
        from: ProjectPhase,
        to: ProjectPhase,
    ) -> Result<PhaseComparison> {
        if from == to {
            return Err(IngestError::SamePhase { phase: from });
        }
        let element = self.resolve_element(element)?;
        let from_records = self.filter(from, element)?;
        let to_records = self.filter(to, element)?;
        let comparison = PhaseComparison::new(element, from, &from_records, to, &to_records);
        debug!(
            element,
            from = %from,
            to = %to,
            common = comparison.common.len(),
            added = comparison.added.len(),
            removed = comparison.removed.len(),
            "compared phases"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(element: &str, phase: &str, property: &str) -> PrescriptionRecord {
        PrescriptionRecord {
            element: element.to_string(),
            phase: phase.to_string(),
            property: property.to_string(),
            ..PrescriptionRecord::default()
        }
    }

    fn store() -> PrescriptionStore {
        PrescriptionStore::new(vec![
            record("Mur", "PDE", "FireRating"),
            record("Mur", "Toutes", "IsExternal"),
            record("Mur", "APS", "LoadBearing"),
            record("Dalle", "PDE", "LoadBearing"),
            record("Mur rideau", "PDE", "AcousticRating"),
        ])
    }

    #[test]
    fn test_elements_are_unique_and_sorted() {
        assert_eq!(store().elements(), ["Dalle", "Mur", "Mur rideau"]);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let store = store();
        assert_eq!(store.resolve_element("mur").unwrap(), "Mur");
        assert_eq!(store.resolve_element(" MUR RIDEAU ").unwrap(), "Mur rideau");
    }

    #[test]
    fn test_unknown_element_suggests() {
        let err = store().resolve_element("Dale").unwrap_err();
        match err {
            IngestError::UnknownElement {
                element,
                suggestions,
            } => {
                assert_eq!(element, "Dale");
                assert_eq!(suggestions[0], "Dalle");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_filter_includes_all_phase_records() {
        let store = store();
        let records = store.filter(ProjectPhase::Pde, "Mur").unwrap();
        let props: Vec<_> = records.iter().map(|r| r.property.as_str()).collect();
        assert_eq!(props, vec!["FireRating", "IsExternal"]);
    }

    #[test]
    fn test_elements_ignore_accents_and_case() {
        let store = PrescriptionStore::new(vec![
            record("Zone", "PDE", "Area"),
            record("Équipement", "PDE", "Power"),
            record("escalier", "PDE", "NumberOfRiser"),
            record("Dalle", "PDE", "LoadBearing"),
        ]);
        assert_eq!(store.elements(), ["Dalle", "Équipement", "escalier", "Zone"]);
    }

    #[test]
    fn test_compare_phases() {
        let comparison = store()
            .compare_phases("mur", ProjectPhase::Aps, ProjectPhase::Pde)
            .unwrap();
        assert_eq!(comparison.element, "Mur");
        let props = |records: &[PrescriptionRecord]| {
            records.iter().map(|r| r.property.clone()).collect::<Vec<_>>()
        };
        assert_eq!(props(&comparison.common), vec!["IsExternal"]);
        assert_eq!(props(&comparison.added), vec!["FireRating"]);
        assert_eq!(props(&comparison.removed), vec!["LoadBearing"]);
    }

    #[test]
    fn test_compare_same_phase_is_rejected() {
        let err = store()
            .compare_phases("Mur", ProjectPhase::Exe, ProjectPhase::Exe)
            .unwrap_err();
        assert!(matches!(
            err,
            IngestError::SamePhase {
                phase: ProjectPhase::Exe
            }
        ));
    }

    #[test]
    fn test_prescription_ids() {
        let prescriptions = store().prescriptions(ProjectPhase::Pde, "mur rideau").unwrap();
        assert_eq!(prescriptions.len(), 1);
        assert_eq!(prescriptions[0].id, "mur_rideau_0");
    }
}
