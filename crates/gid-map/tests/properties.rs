//! Property tests for normalization, similarity and batch mapping.

use gid_map::{
    ACCEPT_THRESHOLD, MatchContext, SynonymTable, generate_mapping, normalize, parse_labels,
    similarity,
};
use proptest::prelude::*;

/// Labels drawn from the alphabet users actually type: Latin letters,
/// French accents, digits and the separators normalization removes.
fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9éèêëàâçîôûÉÈÊÀÇ _-]{0,24}"
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in label()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_form_has_no_separators(s in label()) {
        let n = normalize(&s);
        prop_assert!(!n.contains(['_', '-']));
        prop_assert!(!n.chars().any(char::is_whitespace));
    }

    #[test]
    fn similarity_is_symmetric(a in label(), b in label()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in label(), b in label()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn similarity_with_self_is_one(a in label()) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn parsed_labels_are_trimmed_and_non_empty(raw in "[a-z ,;\n]{0,40}") {
        for token in parse_labels(&raw) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains([',', ';', '\n']));
        }
    }

    #[test]
    fn mapping_keeps_one_row_per_label(
        labels in prop::collection::vec(label(), 0..12),
        candidates in prop::collection::vec(label(), 0..6),
    ) {
        let context = MatchContext::new().with_synonyms(SynonymTable::french_ifc());
        let report = generate_mapping(&labels, &candidates, &context);
        prop_assert_eq!(report.len(), labels.len());
        for (row, label) in report.iter().zip(&labels) {
            prop_assert_eq!(&row.input_label, label);
            if row.matched {
                let matched = row.matched_label.as_ref().expect("matched rows carry a label");
                prop_assert!(candidates.contains(matched));
                prop_assert!(row.confidence > ACCEPT_THRESHOLD);
            } else {
                prop_assert_eq!(row.confidence, 0.0);
                prop_assert!(row.matched_label.is_none());
            }
        }
    }
}

#[test]
fn equivalent_spellings_normalize_alike() {
    let forms = [
        "Hauteur_Sous_Plafond",
        "hauteur sous plafond",
        "HAUTEUR-SOUS-PLAFOND",
        " Hauteur Sous_Plafond ",
    ];
    for form in forms {
        assert_eq!(normalize(form), "hauteursousplafond", "{form}");
    }
    assert_eq!(normalize("Résistance_Feu"), normalize("resistance feu"));
}
