//! Approximate matching of free-form parameter names onto canonical IFC
//! properties.
//!
//! A label is first looked up in a curated [`SynonymTable`]; failing that,
//! every candidate is scored by normalized edit distance and the best one is
//! kept when it clears [`ACCEPT_THRESHOLD`].

#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod normalize;
pub mod score;
pub mod search;
pub mod synonyms;
pub mod utils;

pub use engine::{
    ACCEPT_THRESHOLD, ConfidenceLevel, ConfidenceThresholds, MappingEngine, MatchContext,
    generate_mapping, select_best_match,
};
pub use error::MapError;
pub use normalize::{normalize, normalize_for_search};
pub use score::{CONTAINMENT_SCORE, levenshtein_distance, similarity};
pub use search::{MAX_SUGGESTIONS, element_aliases, search_elements, suggest_similar};
pub use synonyms::{DICTIONARY_CONFIDENCE, SynonymEntry, SynonymTable, lookup_synonyms};
pub use utils::{mapping_file_name, parse_labels, to_mapping_tsv};
