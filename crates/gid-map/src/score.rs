//! Edit-distance scoring between labels.
//!
//! Similarity is `1 - d / max(len)` over the normalized forms, where `d` is
//! the unit-cost Levenshtein distance and lengths count characters.

use gid_model::MatchSource;
use rapidfuzz::distance::levenshtein;

use crate::normalize::normalize;

/// Score assigned when one normalized form contains the other.
pub const CONTAINMENT_SCORE: f64 = 0.9;

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Similarity in `[0, 1]` between two raw labels.
///
/// Both inputs are normalized first. Identical normalized forms, including
/// two empty ones, score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize(a), &normalize(b))
}

/// Similarity between two already-normalized labels.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    1.0 - distance as f64 / max_len as f64
}

/// Score for one label/candidate pair, with the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    pub score: f64,
    pub source: MatchSource,
}

/// Score a normalized label against a normalized candidate.
///
/// Identical forms score `1.0`. Non-empty forms where one contains the
/// other score [`CONTAINMENT_SCORE`] without computing an edit distance.
/// Everything else falls back to [`normalized_similarity`].
pub fn score_candidate(label: &str, candidate: &str) -> CandidateScore {
    if label == candidate {
        return CandidateScore {
            score: 1.0,
            source: MatchSource::Exact,
        };
    }
    if !label.is_empty()
        && !candidate.is_empty()
        && (label.contains(candidate) || candidate.contains(label))
    {
        return CandidateScore {
            score: CONTAINMENT_SCORE,
            source: MatchSource::Containment,
        };
    }
    CandidateScore {
        score: normalized_similarity(label, candidate),
        source: MatchSource::EditDistance,
    }
}
