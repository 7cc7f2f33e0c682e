//! Utility functions for mapping input and output.

use gid_model::MappingReport;

/// Splits a raw block of user input into labels.
///
/// Tokens are separated by runs of commas, semicolons or newlines, trimmed,
/// and dropped when empty.
pub fn parse_labels(raw: &str) -> Vec<String> {
    raw.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders matched rows as `pset<TAB>property<TAB>input` lines.
///
/// Unmatched rows are omitted. Rows without a property set get an empty
/// first column.
pub fn to_mapping_tsv(report: &MappingReport) -> String {
    report
        .iter()
        .filter(|row| row.matched)
        .filter_map(|row| {
            let property = row.matched_label.as_deref()?;
            Some(format!(
                "{}\t{}\t{}",
                row.pset.as_deref().unwrap_or_default(),
                property,
                row.input_label
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// File name for a mapping export of `category`.
pub fn mapping_file_name(category: &str) -> String {
    let slug = category.split_whitespace().collect::<Vec<_>>().join("_");
    if slug.is_empty() {
        "mapping_export_GID.txt".to_string()
    } else {
        format!("mapping_{slug}_GID.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_separators() {
        assert_eq!(
            parse_labels("Resistance_Feu, Is_Externe;Toto\nMatériau"),
            vec!["Resistance_Feu", "Is_Externe", "Toto", "Matériau"]
        );
    }

    #[test]
    fn drops_empty_tokens() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels(" ,;\n ; ").is_empty());
        assert_eq!(parse_labels(",,a,, ,b;"), vec!["a", "b"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(parse_labels("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn file_name_replaces_whitespace() {
        assert_eq!(mapping_file_name("Mur rideau"), "mapping_Mur_rideau_GID.txt");
        assert_eq!(
            mapping_file_name("Semelle  de fondation"),
            "mapping_Semelle_de_fondation_GID.txt"
        );
        assert_eq!(mapping_file_name("  "), "mapping_export_GID.txt");
    }
}
