//! Built-in element profiles: IFC class, target property set and the
//! canonical properties a mapping may target for each element category.

use serde::Serialize;
use std::fmt;

use crate::error::{ModelError, Result};

/// Discipline group used to organize element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ElementGroup {
    Architecture,
    Structure,
    Hvac,
    Plumbing,
    ElectricalFire,
}

impl ElementGroup {
    pub const ALL: [ElementGroup; 5] = [
        ElementGroup::Architecture,
        ElementGroup::Structure,
        ElementGroup::Hvac,
        ElementGroup::Plumbing,
        ElementGroup::ElectricalFire,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ElementGroup::Architecture => "Architecture",
            ElementGroup::Structure => "Structure",
            ElementGroup::Hvac => "CVC / HVAC",
            ElementGroup::Plumbing => "Plomberie / Sanitaire",
            ElementGroup::ElectricalFire => "Électricité & Incendie",
        }
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping target for one element category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementProfile {
    /// French element name as used in the dataset.
    pub name: &'static str,
    pub group: ElementGroup,
    /// IFC entity, e.g. `IfcWall`.
    pub ifc_class: &'static str,
    /// Target property set, e.g. `Pset_WallCommon`.
    pub pset: &'static str,
    /// Canonical properties, in display order.
    pub properties: &'static [&'static str],
}

impl ElementProfile {
    /// Owned candidate set for the matcher.
    pub fn candidates(&self) -> Vec<String> {
        self.properties.iter().map(|p| (*p).to_string()).collect()
    }
}

macro_rules! profile {
    ($name:literal, $group:ident, $ifc:literal, $pset:literal, [$($prop:literal),* $(,)?]) => {
        ElementProfile {
            name: $name,
            group: ElementGroup::$group,
            ifc_class: $ifc,
            pset: $pset,
            properties: &[$($prop),*],
        }
    };
}

static CATALOG: &[ElementProfile] = &[
    profile!("Mur", Architecture, "IfcWall", "Pset_WallCommon", ["FireRating", "AcousticRating", "IsExternal", "LoadBearing", "ThermalTransmittance"]),
    profile!("Mur rideau", Architecture, "IfcCurtainWall", "Pset_CurtainWallCommon", ["FireRating", "AcousticRating", "IsExternal"]),
    profile!("Porte", Architecture, "IfcDoor", "Pset_DoorCommon", ["FireRating", "SecurityRating", "IsExternal", "SelfClosing", "AcousticRating"]),
    profile!("Fenêtre", Architecture, "IfcWindow", "Pset_WindowCommon", ["FireRating", "SecurityRating", "IsExternal", "ThermalTransmittance"]),
    profile!("Dalle", Architecture, "IfcSlab", "Pset_SlabCommon", ["LoadBearing", "FireRating", "PitchAngle", "IsExternal"]),
    profile!("Faux-plafond", Architecture, "IfcCovering", "Pset_CoveringCommon", ["FireRating", "AcousticRating", "Combustible"]),
    profile!("Toiture", Architecture, "IfcRoof", "Pset_RoofCommon", ["FireRating", "IsExternal", "ThermalTransmittance"]),
    profile!("Escalier", Architecture, "IfcStair", "Pset_StairCommon", ["FireRating", "NumberOfRiser", "NumberOfTread"]),
    profile!("Garde-corps", Architecture, "IfcRailing", "Pset_RailingCommon", ["Height", "Diameter"]),
    profile!("Rampe", Architecture, "IfcRamp", "Pset_RampCommon", ["LoadBearing", "Slope"]),
    profile!("Mobilier", Architecture, "IfcFurnishingElement", "Pset_FurnitureTypeCommon", ["NominalHeight", "NominalWidth", "NominalDepth"]),
    profile!("Poutre", Structure, "IfcBeam", "Pset_BeamCommon", ["LoadBearing", "FireRating", "Span"]),
    profile!("Colonne", Structure, "IfcColumn", "Pset_ColumnCommon", ["LoadBearing", "FireRating"]),
    profile!("Semelle de fondation", Structure, "IfcFooting", "Pset_FootingCommon", ["LoadBearing", "SoilType"]),
    profile!("Pieu", Structure, "IfcPile", "Pset_PileCommon", ["LoadBearing", "PileLength"]),
    profile!("Gaine de ventilation", Hvac, "IfcDuctSegment", "Pset_DuctSegmentTypeCommon", ["PressureClass", "Shape", "AirFlowRate"]),
    profile!("Raccord de gaine", Hvac, "IfcDuctFitting", "Pset_DuctFittingTypeCommon", ["PressureClass", "Shape"]),
    profile!("Ventilateur", Hvac, "IfcFan", "Pset_FanTypeCommon", ["MotorType", "OperationTemperatureRange"]),
    profile!("Clapet", Hvac, "IfcDamper", "Pset_DamperTypeCommon", ["FireRating", "LeakageClass"]),
    profile!("Silencieux", Hvac, "IfcDuctSilencer", "Pset_DuctSilencerTypeCommon", ["AirFlowRate", "TemperatureRange"]),
    profile!("Filtre", Hvac, "IfcFilter", "Pset_FilterTypeCommon", ["Weight", "FlowRate"]),
    profile!("Chaudière", Hvac, "IfcBoiler", "Pset_BoilerTypeCommon", ["HeatTransferSurfaceArea", "OperatingPressure"]),
    profile!("Pompe", Hvac, "IfcPump", "Pset_PumpTypeCommon", ["FlowRate", "Head", "Power", "MotorType"]),
    profile!("Radiateur", Hvac, "IfcSpaceHeater", "Pset_SpaceHeaterTypeCommon", ["HeatOutput", "ThermalMass"]),
    profile!("Tuyau", Plumbing, "IfcPipeSegment", "Pset_PipeSegmentTypeCommon", ["PressureRating", "Material", "NominalDiameter", "Color"]),
    profile!("Raccord tuyau", Plumbing, "IfcPipeFitting", "Pset_PipeFittingTypeCommon", ["PressureRating", "Material"]),
    profile!("Equipement sanitaire", Plumbing, "IfcSanitaryTerminal", "Pset_SanitaryTerminalTypeCommon", ["Material", "Mounting", "Color"]),
    profile!("Réservoir", Plumbing, "IfcTank", "Pset_TankTypeCommon", ["Volume", "OperatingWeight"]),
    profile!("Vanne", Plumbing, "IfcValve", "Pset_ValveTypeCommon", ["ValvePattern", "ValveOperation", "Size"]),
    profile!("Chemin de câbles", ElectricalFire, "IfcCableCarrierSegment", "Pset_CableCarrierSegmentTypeCommon", ["Material", "NominalWidth", "NominalHeight"]),
    profile!("Tableau électrique", ElectricalFire, "IfcElectricDistributionPoint", "Pset_ElectricDistributionPointCommon", ["NominalCurrent", "NominalVoltage", "IP_Code"]),
    profile!("Prise électrique", ElectricalFire, "IfcOutlet", "Pset_OutletTypeCommon", ["NumberOfSockets", "Amperage", "Voltage"]),
    profile!("Interrupteur", ElectricalFire, "IfcSwitchingDevice", "Pset_SwitchingDeviceTypeCommon", ["NumberOfGangs", "MaxCurrent"]),
    profile!("Luminaire", ElectricalFire, "IfcLightFixture", "Pset_LightFixtureTypeCommon", ["LightSourceType", "LampPower", "ColorTemperature"]),
    profile!("Détecteur incendie", ElectricalFire, "IfcFireSuppressionTerminal", "Pset_FireSuppressionTerminalTypeCommon", ["ActivationTemperature", "Sensitivity"]),
    profile!("Sprinkler", ElectricalFire, "IfcFireSuppressionTerminal", "Pset_FireSuppressionTerminalTypeCommon", ["ActivationTemperature", "SprinklerType"]),
    profile!("Actionneur", ElectricalFire, "IfcActuator", "Pset_ActuatorTypeCommon", ["ManualOverride", "FailPosition"]),
];

/// All built-in profiles, grouped by discipline in catalog order.
pub fn catalog() -> &'static [ElementProfile] {
    CATALOG
}

/// Profiles belonging to one discipline group.
pub fn profiles_in_group(group: ElementGroup) -> impl Iterator<Item = &'static ElementProfile> {
    CATALOG.iter().filter(move |p| p.group == group)
}

/// Finds a profile by exact name, falling back to a case-insensitive match.
pub fn find_profile(name: &str) -> Result<&'static ElementProfile> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|p| p.name == name)
        .or_else(|| {
            let lower = name.to_lowercase();
            CATALOG.iter().find(|p| p.name.to_lowercase() == lower)
        })
        .ok_or_else(|| ModelError::ProfileNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_profile_ignoring_case() {
        let profile = find_profile("fenêtre").unwrap();
        assert_eq!(profile.name, "Fenêtre");
        assert_eq!(profile.pset, "Pset_WindowCommon");
    }

    #[test]
    fn unknown_profile_is_an_error() {
        assert!(matches!(
            find_profile("Ascenseur"),
            Err(ModelError::ProfileNotFound(name)) if name == "Ascenseur"
        ));
    }

    #[test]
    fn every_group_has_profiles() {
        for group in ElementGroup::ALL {
            assert!(profiles_in_group(group).count() > 0, "{group} is empty");
        }
        let total: usize = ElementGroup::ALL
            .iter()
            .map(|g| profiles_in_group(*g).count())
            .sum();
        assert_eq!(total, catalog().len());
    }
}
