//! Curated domain vocabulary consulted before fuzzy scoring.
//!
//! A table is an ordered list of `(term, properties)` entries. Terms are
//! stored normalized. Entry order is the tie-break when several terms match
//! the same label: the first entry with an available property wins.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::normalize::normalize;

/// Confidence reported for a synonym table hit.
pub const DICTIONARY_CONFIDENCE: f64 = 0.95;

/// One domain term and the canonical properties it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub term: String,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. The term is normalized; terms that normalize to
    /// nothing are ignored.
    pub fn insert<I, S>(&mut self, term: &str, properties: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let term = normalize(term);
        if term.is_empty() {
            return;
        }
        self.entries.push(SynonymEntry {
            term,
            properties: properties.into_iter().map(Into::into).collect(),
        });
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with_entry<I, S>(mut self, term: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(term, properties);
        self
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a JSON array of `{ "term": ..., "properties": [...] }` objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, MapError> {
        let entries: Vec<SynonymEntry> = serde_json::from_reader(reader)?;
        Ok(entries.into_iter().collect())
    }

    pub fn from_json_path(path: &Path) -> Result<Self, MapError> {
        let file = File::open(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Built-in French-to-IFC vocabulary.
    pub fn french_ifc() -> &'static SynonymTable {
        &FRENCH_IFC
    }

    /// Looks up `label` and returns the first property that is in `available`.
    ///
    /// An entry matches when the normalized label contains its term or the
    /// term contains the normalized label. Entries are tried in table order;
    /// within an entry, properties are tried in listed order.
    pub fn lookup<'a>(&self, label: &str, available: &'a [String]) -> Option<&'a str> {
        let normalized = normalize(label);
        if normalized.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .filter(|entry| {
                normalized.contains(entry.term.as_str()) || entry.term.contains(normalized.as_str())
            })
            .find_map(|entry| {
                entry
                    .properties
                    .iter()
                    .find_map(|prop| available.iter().find(|a| *a == prop))
            })
            .map(String::as_str)
    }
}

impl FromIterator<SynonymEntry> for SynonymTable {
    fn from_iter<T: IntoIterator<Item = SynonymEntry>>(iter: T) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(&entry.term, entry.properties);
        }
        table
    }
}

/// Free-function form of [`SynonymTable::lookup`].
pub fn lookup_synonyms<'a>(
    label: &str,
    table: &SynonymTable,
    available: &'a [String],
) -> Option<&'a str> {
    table.lookup(label, available)
}

const FRENCH_IFC_TERMS: &[(&str, &[&str])] = &[
    // Fire
    ("feu", &["FireRating"]),
    ("incendie", &["FireRating"]),
    ("resistance_feu", &["FireRating"]),
    ("resistancefeu", &["FireRating"]),
    ("rf", &["FireRating"]),
    // Acoustic
    ("acoustique", &["AcousticRating"]),
    ("son", &["AcousticRating"]),
    ("bruit", &["AcousticRating"]),
    // External
    ("exterieur", &["IsExternal"]),
    ("externe", &["IsExternal"]),
    ("ext", &["IsExternal"]),
    // Load bearing
    ("porteur", &["LoadBearing"]),
    ("charge", &["LoadBearing"]),
    ("structurel", &["LoadBearing"]),
    // Thermal
    ("thermique", &["ThermalTransmittance"]),
    ("u_value", &["ThermalTransmittance"]),
    ("isolation", &["ThermalTransmittance"]),
    // Security
    ("securite", &["SecurityRating"]),
    ("security", &["SecurityRating"]),
    // Self closing
    ("fermeture", &["SelfClosing"]),
    ("auto", &["SelfClosing"]),
    // Dimensions
    ("hauteur", &["Height", "NominalHeight"]),
    ("largeur", &["NominalWidth"]),
    ("profondeur", &["NominalDepth"]),
    ("diametre", &["Diameter", "NominalDiameter"]),
    // Flow
    ("debit", &["FlowRate", "AirFlowRate"]),
    ("flow", &["FlowRate", "AirFlowRate"]),
    // Pressure
    ("pression", &["PressureClass", "PressureRating", "OperatingPressure"]),
    // Material
    ("materiau", &["Material"]),
    ("material", &["Material"]),
    ("mat", &["Material"]),
    // Power
    ("puissance", &["Power", "LampPower"]),
    ("watt", &["Power", "LampPower"]),
    // Temperature
    (
        "temperature",
        &[
            "TemperatureRange",
            "OperationTemperatureRange",
            "ColorTemperature",
            "ActivationTemperature",
        ],
    ),
    ("temp", &["TemperatureRange", "OperationTemperatureRange"]),
    // Volume
    ("volume", &["Volume"]),
    ("capacite", &["Volume"]),
    // Voltage
    ("tension", &["Voltage", "NominalVoltage"]),
    ("volt", &["Voltage", "NominalVoltage"]),
    // Current
    ("courant", &["NominalCurrent", "MaxCurrent", "Amperage"]),
    ("ampere", &["Amperage"]),
    // Slope
    ("pente", &["Slope", "PitchAngle"]),
    ("angle", &["PitchAngle"]),
    // Steps
    ("marche", &["NumberOfTread"]),
    ("contremarche", &["NumberOfRiser"]),
    // Color
    ("couleur", &["Color"]),
    ("color", &["Color"]),
    // Weight
    ("poids", &["Weight", "OperatingWeight"]),
    ("masse", &["ThermalMass", "Weight"]),
    // Heat
    ("chaleur", &["HeatOutput", "HeatTransferSurfaceArea"]),
    // Motor
    ("moteur", &["MotorType"]),
    // IP
    ("ip", &["IP_Code"]),
    ("protection", &["IP_Code"]),
    // Combustible
    ("combustible", &["Combustible"]),
    // Sensitivity
    ("sensibilite", &["Sensitivity"]),
    // Leakage
    ("fuite", &["LeakageClass"]),
    ("etancheite", &["LeakageClass"]),
];

static FRENCH_IFC: LazyLock<SynonymTable> = LazyLock::new(|| {
    let mut table = SynonymTable::new();
    for (term, properties) in FRENCH_IFC_TERMS {
        table.insert(term, properties.iter().copied());
    }
    table
});
