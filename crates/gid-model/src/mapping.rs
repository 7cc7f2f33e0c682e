//! Match results produced when mapping user parameter names onto
//! canonical properties.

use serde::{Deserialize, Serialize};

/// Which stage of the matcher produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Curated synonym table hit.
    Dictionary,
    /// Identical normalized forms.
    Exact,
    /// One normalized form contains the other.
    Containment,
    /// Levenshtein similarity above the acceptance threshold.
    EditDistance,
    /// Nothing cleared the threshold.
    Unmatched,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSource::Dictionary => "dictionary",
            MatchSource::Exact => "exact",
            MatchSource::Containment => "containment",
            MatchSource::EditDistance => "edit distance",
            MatchSource::Unmatched => "unmatched",
        }
    }
}

/// Outcome of matching one input label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Label as supplied by the user.
    pub input_label: String,
    /// Canonical label chosen, `None` when unmatched.
    pub matched_label: Option<String>,
    /// Confidence in `[0, 1]`; `0.0` when unmatched.
    pub confidence: f64,
    pub matched: bool,
    pub source: MatchSource,
    /// Target property set carried over from the match context.
    pub pset: Option<String>,
}

impl MatchResult {
    pub fn matched(
        input_label: impl Into<String>,
        matched_label: impl Into<String>,
        confidence: f64,
        source: MatchSource,
        pset: Option<String>,
    ) -> Self {
        Self {
            input_label: input_label.into(),
            matched_label: Some(matched_label.into()),
            confidence,
            matched: true,
            source,
            pset,
        }
    }

    pub fn unmatched(input_label: impl Into<String>, pset: Option<String>) -> Self {
        Self {
            input_label: input_label.into(),
            matched_label: None,
            confidence: 0.0,
            matched: false,
            source: MatchSource::Unmatched,
            pset,
        }
    }
}

/// Ordered match results, index-aligned with the input labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingReport {
    rows: Vec<MatchResult>,
}

impl MappingReport {
    pub fn new(rows: Vec<MatchResult>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MatchResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.rows.iter()
    }

    pub fn matched_count(&self) -> usize {
        self.rows.iter().filter(|r| r.matched).count()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &MatchResult> {
        self.rows.iter().filter(|r| !r.matched)
    }

    /// Human-readable `matched/total` summary.
    pub fn summary(&self) -> String {
        format!("{}/{} matched", self.matched_count(), self.len())
    }
}

impl From<Vec<MatchResult>> for MappingReport {
    fn from(rows: Vec<MatchResult>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a MappingReport {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A user parameter resolved against the prescription dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionMatch {
    pub input: String,
    pub matched: bool,
    pub confidence: f64,
    pub ifc_reference: String,
    pub official_revit_param: String,
    pub document_type: String,
    pub property: String,
}

impl PrescriptionMatch {
    pub fn unmatched(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            matched: false,
            confidence: 0.0,
            ifc_reference: String::new(),
            official_revit_param: String::new(),
            document_type: String::new(),
            property: String::new(),
        }
    }
}
