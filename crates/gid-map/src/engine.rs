//! Mapping engine implementation.

use std::collections::BTreeMap;

use gid_model::{MappingReport, MatchResult, MatchSource};
use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::score::score_candidate;
use crate::synonyms::{DICTIONARY_CONFIDENCE, SynonymTable};

/// Minimum score a fuzzy candidate must strictly exceed to be accepted.
pub const ACCEPT_THRESHOLD: f64 = 0.5;

/// Confidence level categories for mapping quality assessment.
///
/// - `High`: curated dictionary hits and exact matches
/// - `Medium`: containment and close edit-distance matches, worth a glance
/// - `Low`: weak matches requiring manual confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Returns a human-readable description of the confidence level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }
}

/// Boundaries used to categorize the confidence of accepted matches.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceThresholds {
    /// Minimum confidence for high-quality matches (default: 0.95).
    pub high: f64,
    /// Minimum confidence for medium-quality matches (default: 0.80).
    pub medium: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: DICTIONARY_CONFIDENCE,
            medium: 0.80,
        }
    }
}

impl ConfidenceThresholds {
    /// Categorizes a match result.
    ///
    /// Returns `None` for unmatched results.
    #[must_use]
    pub fn categorize(&self, result: &MatchResult) -> Option<ConfidenceLevel> {
        if !result.matched {
            None
        } else if result.confidence >= self.high {
            Some(ConfidenceLevel::High)
        } else if result.confidence >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else {
            Some(ConfidenceLevel::Low)
        }
    }

    /// Counts the matched rows of a report at each level.
    #[must_use]
    pub fn count_by_level(&self, report: &MappingReport) -> BTreeMap<ConfidenceLevel, usize> {
        let mut counts = BTreeMap::new();
        for row in report {
            if let Some(level) = self.categorize(row) {
                *counts.entry(level).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Per-call matching context.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchContext<'a> {
    /// Curated vocabulary consulted before fuzzy scoring.
    pub synonyms: Option<&'a SynonymTable>,
    /// Target property set recorded on every result.
    pub pset: Option<&'a str>,
}

impl<'a> MatchContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_synonyms(mut self, synonyms: &'a SynonymTable) -> Self {
        self.synonyms = Some(synonyms);
        self
    }

    #[must_use]
    pub fn with_pset(mut self, pset: &'a str) -> Self {
        self.pset = Some(pset);
        self
    }

    fn pset(&self) -> Option<String> {
        self.pset.map(str::to_string)
    }
}

/// Picks the best canonical candidate for one label.
///
/// 1. A synonym table hit returns immediately with
///    [`DICTIONARY_CONFIDENCE`].
/// 2. Otherwise every candidate is scored in order; the running best only
///    changes on a strictly greater score, so the first candidate wins ties.
/// 3. The best candidate is accepted when its score is strictly above
///    [`ACCEPT_THRESHOLD`]; otherwise the result is unmatched with zero
///    confidence.
pub fn select_best_match(
    label: &str,
    candidates: &[String],
    context: &MatchContext<'_>,
) -> MatchResult {
    if let Some(hit) = context
        .synonyms
        .and_then(|table| table.lookup(label, candidates))
    {
        trace!(label, matched = hit, "synonym table hit");
        return MatchResult::matched(
            label,
            hit,
            DICTIONARY_CONFIDENCE,
            MatchSource::Dictionary,
            context.pset(),
        );
    }

    let normalized = normalize(label);
    let mut best: Option<(&String, f64, MatchSource)> = None;
    for candidate in candidates {
        let scored = score_candidate(&normalized, &normalize(candidate));
        if best.is_none_or(|(_, best_score, _)| scored.score > best_score) {
            best = Some((candidate, scored.score, scored.source));
        }
    }

    match best {
        Some((candidate, score, source)) if score > ACCEPT_THRESHOLD => {
            MatchResult::matched(label, candidate.as_str(), score, source, context.pset())
        }
        Some((candidate, score, _)) => {
            debug!(label, best = %candidate, score, "best candidate below threshold");
            MatchResult::unmatched(label, context.pset())
        }
        None => MatchResult::unmatched(label, context.pset()),
    }
}

/// Runs [`select_best_match`] over every label, preserving input order.
///
/// The report always has one row per label.
pub fn generate_mapping(
    labels: &[String],
    candidates: &[String],
    context: &MatchContext<'_>,
) -> MappingReport {
    labels
        .iter()
        .map(|label| select_best_match(label, candidates, context))
        .collect::<Vec<_>>()
        .into()
}

/// Engine bound to one candidate set, e.g. the properties of an element
/// category.
///
/// # Example
///
/// ```ignore
/// use gid_map::{MappingEngine, SynonymTable, parse_labels};
///
/// let engine = MappingEngine::new(profile.candidates())
///     .with_synonyms(SynonymTable::french_ifc().clone())
///     .with_pset(profile.pset);
/// let report = engine.map(&parse_labels("Resistance_Feu, Is_Externe"));
/// ```
#[derive(Debug, Clone)]
pub struct MappingEngine {
    candidates: Vec<String>,
    synonyms: Option<SynonymTable>,
    pset: Option<String>,
}

impl MappingEngine {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            synonyms: None,
            pset: None,
        }
    }

    #[must_use]
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = Some(synonyms);
        self
    }

    #[must_use]
    pub fn with_pset(mut self, pset: impl Into<String>) -> Self {
        self.pset = Some(pset.into());
        self
    }

    fn context(&self) -> MatchContext<'_> {
        MatchContext {
            synonyms: self.synonyms.as_ref(),
            pset: self.pset.as_deref(),
        }
    }

    /// Matches every label and logs the outcome.
    pub fn map(&self, labels: &[String]) -> MappingReport {
        let report = generate_mapping(labels, &self.candidates, &self.context());
        debug!(
            labels = labels.len(),
            candidates = self.candidates.len(),
            matched = report.matched_count(),
            "mapping generated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn dictionary_hit_short_circuits() {
        let table = SynonymTable::new().with_entry("feu", ["FireRating"]);
        let candidates = strings(&["FireRating", "AcousticRating"]);
        let context = MatchContext::new().with_synonyms(&table);

        let result = select_best_match("resistance_feu", &candidates, &context);
        assert!(result.matched);
        assert_eq!(result.matched_label.as_deref(), Some("FireRating"));
        assert_eq!(result.confidence, 0.95);
        assert_eq!(result.source, MatchSource::Dictionary);
    }

    #[test]
    fn exact_normalized_match_scores_one() {
        let candidates = strings(&["LoadBearing"]);
        let result = select_best_match("load_bearing", &candidates, &MatchContext::new());
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.source, MatchSource::Exact);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let candidates = strings(&["abxd", "abcx"]);
        let result = select_best_match("abcd", &candidates, &MatchContext::new());
        assert_eq!(result.matched_label.as_deref(), Some("abxd"));
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn score_at_threshold_is_rejected() {
        let candidates = strings(&["abxy"]);
        let result = select_best_match("abcd", &candidates, &MatchContext::new());
        assert!(!result.matched);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.matched_label, None);
    }

    #[test]
    fn score_just_above_threshold_is_accepted() {
        let label = "a".repeat(100);
        let candidate = format!("{}{}", "a".repeat(51), "b".repeat(49));
        let result = select_best_match(&label, &[candidate.clone()], &MatchContext::new());
        assert!(result.matched);
        assert_eq!(result.matched_label, Some(candidate));
        assert!((result.confidence - 0.51).abs() < 1e-9);
    }

    #[test]
    fn score_just_below_threshold_is_rejected() {
        let label = format!("{}{}", "a".repeat(49), "b".repeat(51));
        let candidate = format!("{}{}", "a".repeat(49), "c".repeat(51));
        let result = select_best_match(&label, &[candidate], &MatchContext::new());
        assert!(!result.matched);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.matched_label, None);
        assert_eq!(result.source, MatchSource::Unmatched);
    }

    #[test]
    fn empty_candidates_never_match() {
        let table = SynonymTable::french_ifc();
        let context = MatchContext::new().with_synonyms(table);
        let result = select_best_match("Resistance_Feu", &[], &context);
        assert!(!result.matched);
    }

    #[test]
    fn pset_is_carried_onto_results() {
        let candidates = strings(&["FireRating"]);
        let context = MatchContext::new().with_pset("Pset_WallCommon");
        let matched = select_best_match("Fire_Rating", &candidates, &context);
        let unmatched = select_best_match("zzz", &candidates, &context);
        assert_eq!(matched.pset.as_deref(), Some("Pset_WallCommon"));
        assert_eq!(unmatched.pset.as_deref(), Some("Pset_WallCommon"));
    }

    #[test]
    fn confidence_levels() {
        let thresholds = ConfidenceThresholds::default();
        let report = MappingReport::new(vec![
            MatchResult::matched("a", "A", 0.95, MatchSource::Dictionary, None),
            MatchResult::matched("b", "B", 0.9, MatchSource::Containment, None),
            MatchResult::matched("c", "C", 0.6, MatchSource::EditDistance, None),
            MatchResult::unmatched("d", None),
        ]);
        let counts = thresholds.count_by_level(&report);
        assert_eq!(counts.get(&ConfidenceLevel::High), Some(&1));
        assert_eq!(counts.get(&ConfidenceLevel::Medium), Some(&1));
        assert_eq!(counts.get(&ConfidenceLevel::Low), Some(&1));
        assert_eq!(thresholds.categorize(&report.rows()[3]), None);
    }
}
