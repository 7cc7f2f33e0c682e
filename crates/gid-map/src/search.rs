//! Element-name search with multilingual aliases and "did you mean"
//! suggestions.

use crate::normalize::normalize_for_search;
use crate::score::levenshtein_distance;

/// Default number of suggestions offered for an unknown element.
pub const MAX_SUGGESTIONS: usize = 3;

/// French element name -> FR/EN/DE aliases.
const ELEMENT_ALIASES: &[(&str, &[&str])] = &[
    // Structural elements
    ("Mur", &["wall", "wand", "mauer", "cloison", "partition"]),
    ("Mur rideau", &["curtain wall", "vorhangfassade", "facade rideau", "curtainwall"]),
    ("Sol", &["floor", "boden", "plancher", "slab", "dalle"]),
    ("Plafond", &["ceiling", "decke", "faux plafond", "false ceiling"]),
    ("Faux-plafond", &["false ceiling", "suspended ceiling", "abgehängte decke"]),
    ("Toit", &["roof", "dach", "toiture", "couverture"]),
    ("Toiture", &["roof", "dach", "couverture"]),
    ("Escalier", &["stair", "stairs", "treppe", "stufen"]),
    ("Rampe", &["ramp", "rampe", "auffahrt"]),
    ("Garde-corps", &["railing", "guardrail", "geländer", "balustrade", "handrail"]),
    ("Fondation", &["foundation", "fundament", "semelle", "footing"]),
    ("Semelle de fondation", &["footing", "foundation", "fundament"]),
    ("Poutre", &["beam", "träger", "balken", "linteau"]),
    ("Poteau", &["column", "säule", "pilier", "stütze"]),
    ("Colonne", &["column", "säule", "pilier", "stütze"]),
    ("Dalle", &["slab", "platte", "plancher", "floor slab"]),
    ("Pieu", &["pile", "pfahl"]),
    // Openings
    ("Porte", &["door", "tür", "türe", "entrance"]),
    ("Fenêtre", &["window", "fenster", "glazing", "vitrage"]),
    // MEP - Electrical
    ("Luminaire", &["light", "lighting", "lampe", "leuchte", "fixture", "éclairage"]),
    ("Appareil électrique", &["electrical device", "elektrisches gerät", "elektro"]),
    ("Équipement électrique", &["electrical equipment", "elektroausstattung"]),
    ("Chemin de câbles", &["cable tray", "kabelrinne", "kabelkanal"]),
    ("Tableau électrique", &["distribution board", "switchboard", "verteiler"]),
    ("Prise électrique", &["outlet", "socket", "steckdose"]),
    ("Interrupteur", &["switch", "schalter"]),
    // MEP - HVAC
    ("Gaine", &["duct", "kanal", "luftkanal", "conduit"]),
    ("Gaine de ventilation", &["duct", "luftkanal", "ventilation duct"]),
    ("Bouche d'aération", &["air terminal", "luftauslass", "diffuseur", "grille"]),
    ("Équipement de génie climatique", &["hvac equipment", "klimaanlage", "cvc"]),
    ("Accessoire de gaine", &["duct accessory", "kanalzubehör"]),
    ("Raccord de gaine", &["duct fitting", "kanalformstück"]),
    ("Ventilateur", &["fan", "ventilator", "lüfter"]),
    ("Clapet", &["damper", "klappe", "fire damper"]),
    ("Chaudière", &["boiler", "kessel", "heizkessel"]),
    ("Pompe", &["pump", "pumpe"]),
    ("Radiateur", &["radiator", "heizkörper", "space heater"]),
    // MEP - Plumbing
    ("Canalisation", &["pipe", "rohr", "leitung", "tuyau", "conduite"]),
    ("Tuyau", &["pipe", "rohr", "leitung", "canalisation"]),
    ("Accessoire de canalisation", &["pipe accessory", "rohrzubehör"]),
    ("Raccord de canalisation", &["pipe fitting", "rohrformstück"]),
    ("Raccord tuyau", &["pipe fitting", "rohrformstück"]),
    ("Appareil sanitaire", &["plumbing fixture", "sanitär", "sanitaire"]),
    ("Equipement sanitaire", &["sanitary terminal", "plumbing fixture", "sanitär"]),
    ("Équipement de plomberie", &["plumbing equipment", "sanitärausstattung"]),
    ("Réservoir", &["tank", "behälter", "cuve"]),
    ("Vanne", &["valve", "ventil", "robinet"]),
    // Fire protection
    ("Protection incendie", &["fire protection", "brandschutz", "sprinkler"]),
    ("Détecteur incendie", &["fire detector", "smoke detector", "brandmelder"]),
    ("Sprinkler", &["sprinkler", "sprinkleranlage", "extinction"]),
    // Furniture & Equipment
    ("Mobilier", &["furniture", "möbel", "meuble", "einrichtung"]),
    ("Équipement spécialisé", &["specialty equipment", "spezialausrüstung"]),
    ("Casework", &["casework", "schrank", "rangement", "storage"]),
    // Site & Context
    ("Terrain", &["site", "gelände", "topographie", "terrain"]),
    ("Parking", &["parking", "parkplatz", "stationnement"]),
    ("Végétation", &["planting", "bepflanzung", "plantation", "vegetation"]),
    // Generic/Other
    ("Modèle générique", &["generic model", "generisches modell", "modèle", "model"]),
    ("Élément de détail", &["detail item", "detailelement"]),
    ("Annotation", &["annotation", "beschriftung", "note"]),
    ("Pièce", &["room", "raum", "local", "space", "espace"]),
    ("Zone", &["zone", "bereich", "area"]),
    ("Niveau", &["level", "ebene", "étage", "floor"]),
    ("Quadrillage", &["grid", "raster", "grille", "trame"]),
    // Finishing
    ("Parachèvement des murs", &["wall finish", "wandverkleidung", "finition murale"]),
    ("Parachèvement des sols", &["floor finish", "bodenbelag", "revêtement sol"]),
    ("Parachèvement des plafonds", &["ceiling finish", "deckenverkleidung"]),
    // Structure
    ("Ossature", &["structural framing", "tragwerk", "charpente", "frame"]),
    ("Armature", &["rebar", "bewehrung", "reinforcement", "ferraillage"]),
    ("Actionneur", &["actuator", "stellantrieb"]),
];

/// Aliases registered for an element name.
pub fn element_aliases(element: &str) -> &'static [&'static str] {
    ELEMENT_ALIASES
        .iter()
        .find(|(name, _)| *name == element)
        .map(|(_, aliases)| *aliases)
        .unwrap_or_default()
}

/// Filters `elements` by a free-text search term.
///
/// A blank term keeps everything. Otherwise an element is kept when its
/// name, or one of its aliases, contains the term once both are case and
/// diacritic folded. Input order is preserved.
pub fn search_elements<S: AsRef<str>>(elements: &[S], term: &str) -> Vec<String> {
    if term.trim().is_empty() {
        return elements.iter().map(|e| e.as_ref().to_string()).collect();
    }
    let needle = normalize_for_search(term);
    elements
        .iter()
        .map(AsRef::as_ref)
        .filter(|element| {
            normalize_for_search(element).contains(&needle)
                || element_aliases(element)
                    .iter()
                    .any(|alias| normalize_for_search(alias).contains(&needle))
        })
        .map(str::to_string)
        .collect()
}

/// Suggests known elements close to an unrecognized name.
///
/// Compares lower-cased names by edit distance, keeps those within
/// `max(3, len / 2)` edits of the input, and returns at most `limit` of them,
/// closest first. Equal distances keep input order.
pub fn suggest_similar<S: AsRef<str>>(input: &str, elements: &[S], limit: usize) -> Vec<String> {
    let input_lower = input.to_lowercase();
    let max_distance = (input_lower.chars().count() / 2).max(3);
    let mut scored: Vec<(usize, &str)> = elements
        .iter()
        .map(AsRef::as_ref)
        .map(|element| {
            (
                levenshtein_distance(&input_lower, &element.to_lowercase()),
                element,
            )
        })
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, element)| element.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELEMENTS: [&str; 5] = ["Mur", "Mur rideau", "Fenêtre", "Porte", "Chemin de câbles"];

    #[test]
    fn blank_term_returns_everything() {
        assert_eq!(search_elements(&ELEMENTS, "  ").len(), ELEMENTS.len());
    }

    #[test]
    fn matches_names_without_accents() {
        assert_eq!(search_elements(&ELEMENTS, "fenetre"), vec!["Fenêtre"]);
        assert_eq!(search_elements(&ELEMENTS, "CABLES"), vec!["Chemin de câbles"]);
    }

    #[test]
    fn matches_aliases() {
        assert_eq!(search_elements(&ELEMENTS, "door"), vec!["Porte"]);
        assert_eq!(search_elements(&ELEMENTS, "wall"), vec!["Mur", "Mur rideau"]);
        assert_eq!(search_elements(&ELEMENTS, "Fenster"), vec!["Fenêtre"]);
    }

    #[test]
    fn unknown_term_matches_nothing() {
        assert!(search_elements(&ELEMENTS, "ascenseur").is_empty());
    }

    #[test]
    fn suggests_closest_elements_first() {
        let suggestions = suggest_similar("Murr", &ELEMENTS, MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "Mur");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn distant_names_are_not_suggested() {
        assert!(suggest_similar("Ascenseur", &ELEMENTS, 3).is_empty());
    }
}
