//! Rows of the GID prescription dataset.

use serde::{Deserialize, Serialize};

/// Column headers of the GID dataset, in file order.
pub const RECORD_COLUMNS: [&str; 13] = [
    "Element",
    "Categorie",
    "Sous_categorie",
    "Phase",
    "Type de document",
    "Propriété",
    "IFC_Reference",
    "Revit_Param",
    "Nom",
    "IFC Type",
    "Catégorie Revit",
    "Classification",
    "Descriptif",
];

/// Category shown for records with an empty `Categorie` column.
pub const DEFAULT_CATEGORY: &str = "Autre";

/// One required-property prescription.
///
/// Every field is always present; missing columns are stored as empty strings
/// when the row is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionRecord {
    pub element: String,
    pub category: String,
    pub sub_category: String,
    pub phase: String,
    pub document_type: String,
    pub property: String,
    pub ifc_reference: String,
    pub revit_param: String,
    pub name: String,
    pub ifc_type: String,
    pub revit_category: String,
    pub classification: String,
    pub description: String,
}

impl PrescriptionRecord {
    /// Builds a record from positional column values.
    ///
    /// Values are trimmed; absent trailing columns become empty strings.
    pub fn from_columns<'a, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values = columns.into_iter().map(|v| v.trim().to_string());
        let mut next = || values.next().unwrap_or_default();
        Self {
            element: next(),
            category: next(),
            sub_category: next(),
            phase: next(),
            document_type: next(),
            property: next(),
            ifc_reference: next(),
            revit_param: next(),
            name: next(),
            ifc_type: next(),
            revit_category: next(),
            classification: next(),
            description: next(),
        }
    }

    /// The `Categorie` column, or [`DEFAULT_CATEGORY`] when blank.
    pub fn category_or_default(&self) -> &str {
        if self.category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }

    /// Identifies the same requirement across phases.
    pub fn comparison_key(&self) -> (&str, &str, &str) {
        (&self.category, &self.property, &self.ifc_reference)
    }

    /// Values in [`RECORD_COLUMNS`] order.
    pub fn to_columns(&self) -> [&str; 13] {
        [
            &self.element,
            &self.category,
            &self.sub_category,
            &self.phase,
            &self.document_type,
            &self.property,
            &self.ifc_reference,
            &self.revit_param,
            &self.name,
            &self.ifc_type,
            &self.revit_category,
            &self.classification,
            &self.description,
        ]
    }
}

/// A filtered record exposed to callers with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// `<element, lower-cased, whitespace as '_'>_<index>`.
    pub id: String,
    #[serde(flatten)]
    pub record: PrescriptionRecord,
}

impl Prescription {
    pub fn new(record: PrescriptionRecord, index: usize) -> Self {
        let slug = record
            .element
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Self {
            id: format!("{slug}_{index}"),
            record,
        }
    }
}

impl AsRef<PrescriptionRecord> for PrescriptionRecord {
    fn as_ref(&self) -> &PrescriptionRecord {
        self
    }
}

impl AsRef<PrescriptionRecord> for Prescription {
    fn as_ref(&self) -> &PrescriptionRecord {
        &self.record
    }
}

/// Groups items by record category, in order of first appearance.
///
/// Items keep their relative order inside each group.
pub fn group_by_category<T: AsRef<PrescriptionRecord>>(items: &[T]) -> Vec<(&str, Vec<&T>)> {
    let mut groups: Vec<(&str, Vec<&T>)> = Vec::new();
    for item in items {
        let category = item.as_ref().category_or_default();
        if let Some(index) = groups.iter().position(|(name, _)| *name == category) {
            groups[index].1.push(item);
        } else {
            groups.push((category, vec![item]));
        }
    }
    groups
}
