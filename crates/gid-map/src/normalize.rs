//! Comparison-stable forms of labels.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a label for matching.
///
/// - Trims surrounding whitespace
/// - Lowercases
/// - Decomposes (NFD) and drops combining marks, so `é` becomes `e`
/// - Removes every underscore, hyphen and whitespace character
///
/// `Hauteur_Sous_Plafond` and `hauteur sous plafond` both become
/// `hauteursousplafond`. The result is idempotent.
pub fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !is_separator(*c))
        .collect()
}

/// Normalize text for element search.
///
/// Same case and diacritic folding as [`normalize`] but separators are kept,
/// so multi-word queries still read as words.
pub fn normalize_for_search(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_case_collapse() {
        let expected = "hauteursousplafond";
        assert_eq!(normalize("Hauteur_Sous_Plafond"), expected);
        assert_eq!(normalize("hauteur sous plafond"), expected);
        assert_eq!(normalize("HAUTEUR-SOUS-PLAFOND"), expected);
        assert_eq!(normalize("  Hauteur \t sous__plafond "), expected);
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize("Matériau"), "materiau");
        assert_eq!(normalize("Étanchéité"), "etancheite");
        assert_eq!(normalize("Fenêtre"), "fenetre");
    }

    #[test]
    fn empty_and_separator_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("_- _"), "");
    }

    #[test]
    fn search_form_keeps_spaces() {
        assert_eq!(normalize_for_search("  Chemin de Câbles "), "chemin de cables");
    }
}
