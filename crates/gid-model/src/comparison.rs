//! Differences between the prescriptions of two project phases.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::phase::ProjectPhase;
use crate::record::PrescriptionRecord;

/// Requirements of one element at two phases, split three ways.
///
/// Records are matched on [`PrescriptionRecord::comparison_key`]. Each list
/// keeps dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseComparison {
    pub element: String,
    pub from: ProjectPhase,
    pub to: ProjectPhase,
    /// Required at both phases, as recorded for `from`.
    pub common: Vec<PrescriptionRecord>,
    /// Required at `to` only.
    pub added: Vec<PrescriptionRecord>,
    /// Required at `from` only.
    pub removed: Vec<PrescriptionRecord>,
}

impl PhaseComparison {
    pub fn new(
        element: impl Into<String>,
        from: ProjectPhase,
        from_records: &[&PrescriptionRecord],
        to: ProjectPhase,
        to_records: &[&PrescriptionRecord],
    ) -> Self {
        let from_keys: HashSet<_> = from_records.iter().map(|r| r.comparison_key()).collect();
        let to_keys: HashSet<_> = to_records.iter().map(|r| r.comparison_key()).collect();

        let mut common = Vec::new();
        let mut removed = Vec::new();
        for record in from_records {
            if to_keys.contains(&record.comparison_key()) {
                common.push((*record).clone());
            } else {
                removed.push((*record).clone());
            }
        }
        let added = to_records
            .iter()
            .filter(|r| !from_keys.contains(&r.comparison_key()))
            .map(|r| (*r).clone())
            .collect();

        Self {
            element: element.into(),
            from,
            to,
            common,
            added,
            removed,
        }
    }

    /// True when both phases require the same set of properties.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, property: &str, reference: &str) -> PrescriptionRecord {
        PrescriptionRecord {
            element: "Mur".to_string(),
            category: category.to_string(),
            property: property.to_string(),
            ifc_reference: reference.to_string(),
            ..PrescriptionRecord::default()
        }
    }

    fn properties(records: &[PrescriptionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.property.as_str()).collect()
    }

    #[test]
    fn splits_common_added_removed() {
        let fire = record("Architecture", "FireRating", "Pset_WallCommon.FireRating");
        let external = record("Architecture", "IsExternal", "Pset_WallCommon.IsExternal");
        let bearing = record("Structure", "LoadBearing", "Pset_WallCommon.LoadBearing");

        let comparison = PhaseComparison::new(
            "Mur",
            ProjectPhase::Aps,
            &[&external, &bearing],
            ProjectPhase::Pde,
            &[&fire, &external],
        );

        assert_eq!(properties(&comparison.common), vec!["IsExternal"]);
        assert_eq!(properties(&comparison.added), vec!["FireRating"]);
        assert_eq!(properties(&comparison.removed), vec!["LoadBearing"]);
        assert!(!comparison.is_unchanged());
    }

    #[test]
    fn category_is_part_of_the_key() {
        let architecture = record("Architecture", "Material", "");
        let structure = record("Structure", "Material", "");

        let comparison = PhaseComparison::new(
            "Mur",
            ProjectPhase::Apd,
            &[&architecture],
            ProjectPhase::Exe,
            &[&structure],
        );

        assert!(comparison.common.is_empty());
        assert_eq!(comparison.added, vec![structure]);
        assert_eq!(comparison.removed, vec![architecture]);
    }

    #[test]
    fn identical_phases_are_unchanged() {
        let fire = record("Architecture", "FireRating", "Pset_WallCommon.FireRating");
        let comparison = PhaseComparison::new(
            "Mur",
            ProjectPhase::Pde,
            &[&fire],
            ProjectPhase::Exe,
            &[&fire],
        );
        assert!(comparison.is_unchanged());
        assert_eq!(comparison.common.len(), 1);
    }
}
