use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Phase column value for prescriptions that apply to every project phase.
pub const ALL_PHASES: &str = "Toutes";

/// Project phase of a Luxembourg BIM project, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectPhase {
    /// Avant-Projet Sommaire.
    Aps,
    /// Avant-Projet Définitif.
    Apd,
    /// Projet Définitif d'Exécution.
    Pde,
    /// Exécution.
    Exe,
    /// Exploitation.
    Exp,
}

impl ProjectPhase {
    pub const ALL: [ProjectPhase; 5] = [
        ProjectPhase::Aps,
        ProjectPhase::Apd,
        ProjectPhase::Pde,
        ProjectPhase::Exe,
        ProjectPhase::Exp,
    ];

    /// Short code used in the dataset phase column.
    pub fn code(&self) -> &'static str {
        match self {
            ProjectPhase::Aps => "APS",
            ProjectPhase::Apd => "APD",
            ProjectPhase::Pde => "PDE",
            ProjectPhase::Exe => "EXE",
            ProjectPhase::Exp => "EXP",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectPhase::Aps => "Avant-Projet Sommaire",
            ProjectPhase::Apd => "Avant-Projet Définitif",
            ProjectPhase::Pde => "Projet Définitif d'Exécution",
            ProjectPhase::Exe => "Exécution",
            ProjectPhase::Exp => "Exploitation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProjectPhase::Aps => "Phase initiale de conception avec les éléments de base",
            ProjectPhase::Apd => "Phase de conception détaillée avec les éléments structurels",
            ProjectPhase::Pde => "Phase de développement avec tous les détails techniques",
            ProjectPhase::Exe => "Phase de construction avec les informations de chantier",
            ProjectPhase::Exp => "Phase d'exploitation avec les données de maintenance",
        }
    }

    /// Returns true if a record carrying `record_phase` applies to this phase.
    ///
    /// Records marked [`ALL_PHASES`] apply to every phase.
    pub fn applies_to(&self, record_phase: &str) -> bool {
        let record_phase = record_phase.trim();
        record_phase.eq_ignore_ascii_case(self.code())
            || record_phase.eq_ignore_ascii_case(ALL_PHASES)
    }

    fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(ProjectPhase::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProjectPhase {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|phase| phase.code() == upper)
            .ok_or_else(|| ModelError::InvalidPhase {
                value: s.to_string(),
                valid: Self::valid_codes(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("pde".parse::<ProjectPhase>().unwrap(), ProjectPhase::Pde);
        assert_eq!(" EXP ".parse::<ProjectPhase>().unwrap(), ProjectPhase::Exp);
    }

    #[test]
    fn rejects_unknown_code_with_valid_list() {
        let err = "XYZ".parse::<ProjectPhase>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'XYZ'"));
        assert!(message.contains("APS, APD, PDE, EXE, EXP"));
    }

    #[test]
    fn toutes_applies_to_every_phase() {
        for phase in ProjectPhase::ALL {
            assert!(phase.applies_to(ALL_PHASES));
            assert!(phase.applies_to(phase.code()));
        }
        assert!(!ProjectPhase::Aps.applies_to("EXE"));
        assert!(!ProjectPhase::Aps.applies_to(""));
    }
}
