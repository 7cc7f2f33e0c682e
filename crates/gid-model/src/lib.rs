pub mod catalog;
pub mod comparison;
pub mod error;
pub mod mapping;
pub mod phase;
pub mod record;

pub use catalog::{ElementGroup, ElementProfile, catalog, find_profile, profiles_in_group};
pub use comparison::PhaseComparison;
pub use error::{ModelError, Result};
pub use mapping::{MappingReport, MatchResult, MatchSource, PrescriptionMatch};
pub use phase::{ALL_PHASES, ProjectPhase};
pub use record::{
    DEFAULT_CATEGORY, Prescription, PrescriptionRecord, RECORD_COLUMNS, group_by_category,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_matches() {
        let report = MappingReport::new(vec![
            MatchResult::matched("Resistance_Feu", "FireRating", 0.95, MatchSource::Dictionary, None),
            MatchResult::unmatched("Toto", None),
        ]);
        assert_eq!(report.len(), 2);
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.unmatched().count(), 1);
        assert_eq!(report.summary(), "1/2 matched");
    }
}
