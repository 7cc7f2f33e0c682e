//! Matching user parameters against filtered prescription records.

use gid_map::{MatchContext, SynonymTable, select_best_match};
use gid_model::{PrescriptionMatch, PrescriptionRecord};
use tracing::debug;

/// Canonical labels offered by a set of records: every Revit parameter
/// name, then every property name. Empty values are skipped and duplicates
/// keep their first position.
pub fn prescription_candidates(records: &[&PrescriptionRecord]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let labels = records
        .iter()
        .map(|r| r.revit_param.as_str())
        .chain(records.iter().map(|r| r.property.as_str()));
    for label in labels {
        if !label.is_empty() && !candidates.iter().any(|c| c == label) {
            candidates.push(label.to_string());
        }
    }
    candidates
}

/// Resolves each user parameter to the record it most likely names.
///
/// Labels go through the same selector as property mapping; an accepted
/// label is traced back to the first record whose Revit parameter or
/// property equals it. Output order follows `labels`.
pub fn map_to_prescriptions(
    labels: &[String],
    records: &[&PrescriptionRecord],
    synonyms: Option<&SynonymTable>,
) -> Vec<PrescriptionMatch> {
    let candidates = prescription_candidates(records);
    let context = MatchContext {
        synonyms,
        pset: None,
    };

    let matches: Vec<PrescriptionMatch> = labels
        .iter()
        .map(|label| {
            let result = select_best_match(label, &candidates, &context);
            let record = result.matched_label.as_deref().and_then(|matched| {
                records
                    .iter()
                    .find(|r| r.revit_param == matched || r.property == matched)
            });
            match record {
                Some(record) => PrescriptionMatch {
                    input: label.clone(),
                    matched: true,
                    confidence: result.confidence,
                    ifc_reference: record.ifc_reference.clone(),
                    official_revit_param: record.revit_param.clone(),
                    document_type: record.document_type.clone(),
                    property: record.property.clone(),
                },
                None => PrescriptionMatch::unmatched(label.as_str()),
            }
        })
        .collect();

    debug!(
        labels = labels.len(),
        records = records.len(),
        matched = matches.iter().filter(|m| m.matched).count(),
        "mapped parameters to prescriptions"
    );
    matches
}
