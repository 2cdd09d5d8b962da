//! Disease reference catalog.

use std::collections::HashMap;

use crate::models::{DiseaseInfo, Severity, Tip, TipCategory};

use super::TipCatalog;

/// Fixed mapping from disease slug to its reference entry.
pub struct DiseaseCatalog {
    entries: HashMap<String, DiseaseInfo>,
}

impl DiseaseCatalog {
    /// Build the catalog, pulling shared tips from the tip catalog.
    pub fn new(tips: &TipCatalog) -> Self {
        Self {
            entries: default_diseases(tips),
        }
    }

    /// Look up a disease by slug.
    ///
    /// A missing id, an empty id and an unknown id all read as "not found".
    /// Matching is exact and case-sensitive.
    pub fn get(&self, id: Option<&str>) -> Option<&DiseaseInfo> {
        match id {
            Some(id) if !id.is_empty() => self.entries.get(id),
            _ => None,
        }
    }

    /// Whether a slug is cataloged.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Cataloged slugs, sorted for display.
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }

    /// Number of cataloged diseases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cataloged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clone shared tips out of the tip catalog by id.
fn shared_tips(tips: &TipCatalog, ids: &[&str]) -> Vec<Tip> {
    ids.iter()
        .filter_map(|id| tips.tip_by_id(id).cloned())
        .collect()
}

/// The disease table. Treatment sets borrow from the disease-treatment
/// group; root rot additionally carries tips of its own.
fn default_diseases(tips: &TipCatalog) -> HashMap<String, DiseaseInfo> {
    let mut map = HashMap::new();

    map.insert(
        "leaf-spot".to_string(),
        DiseaseInfo {
            disease_type: "Leaf Spot Disease".into(),
            symptoms: vec![
                "Brown or black circular spots on leaves".into(),
                "Yellow halos around the spots".into(),
                "Premature leaf drop".into(),
            ],
            causes: vec![
                "Fungal spores splashed up by overhead watering".into(),
                "Leaves staying wet for hours at a time".into(),
                "Crowded foliage with little airflow".into(),
            ],
            treatments: shared_tips(
                tips,
                &[
                    "remove-affected-leaves",
                    "apply-fungicide",
                    "improve-air-circulation",
                ],
            ),
            prevention: shared_tips(tips, &["disease-prevention", "proper-spacing"]),
        },
    );

    map.insert(
        "powdery-mildew".to_string(),
        DiseaseInfo {
            disease_type: "Powdery Mildew".into(),
            symptoms: vec![
                "White powdery coating on leaf surfaces".into(),
                "Distorted or stunted new growth".into(),
                "Leaves yellowing and drying from the edges".into(),
            ],
            causes: vec![
                "High humidity combined with still air".into(),
                "Too much shade".into(),
                "Dry roots under humid air".into(),
            ],
            treatments: shared_tips(
                tips,
                &[
                    "remove-affected-leaves",
                    "apply-fungicide",
                    "improve-air-circulation",
                ],
            ),
            prevention: shared_tips(tips, &["disease-prevention", "proper-spacing"]),
        },
    );

    map.insert(
        "root-rot".to_string(),
        DiseaseInfo {
            disease_type: "Root Rot".into(),
            symptoms: vec![
                "Wilting even though the soil is moist".into(),
                "Mushy, brown roots".into(),
                "Sour smell from the pot".into(),
                "Yellowing lower leaves".into(),
            ],
            causes: vec![
                "Chronic overwatering".into(),
                "Pot or soil with poor drainage".into(),
                "Compacted, airless potting mix".into(),
            ],
            treatments: root_rot_treatments(tips),
            prevention: shared_tips(tips, &["disease-prevention", "watering-basics"]),
        },
    );

    map.insert(
        "rust".to_string(),
        DiseaseInfo {
            disease_type: "Rust Disease".into(),
            symptoms: vec![
                "Orange-brown pustules on leaf undersides".into(),
                "Pale flecks on the upper surface".into(),
                "Heavy leaf drop as it spreads".into(),
            ],
            causes: vec![
                "Foliage left wet overnight".into(),
                "Spores carried from infected plant debris".into(),
            ],
            treatments: shared_tips(tips, &["remove-affected-leaves", "apply-fungicide"]),
            prevention: shared_tips(tips, &["disease-prevention", "tool-hygiene"]),
        },
    );

    map.insert(
        "leaf-blight".to_string(),
        DiseaseInfo {
            disease_type: "Leaf Blight".into(),
            symptoms: vec![
                "Large irregular brown patches".into(),
                "Rapid browning spreading from leaf tips".into(),
                "Whole leaves withering within days".into(),
            ],
            causes: vec![
                "Warm, wet conditions".into(),
                "Splash-borne fungi and bacteria".into(),
                "Overhead watering late in the day".into(),
            ],
            treatments: shared_tips(
                tips,
                &["remove-affected-leaves", "apply-fungicide", "isolate-plant"],
            ),
            prevention: shared_tips(
                tips,
                &["disease-prevention", "proper-spacing", "tool-hygiene"],
            ),
        },
    );

    map
}

/// Root rot needs repotting steps that no other disease uses, so its
/// treatment set mixes shared and local tips.
fn root_rot_treatments(tips: &TipCatalog) -> Vec<Tip> {
    let mut treatments = vec![
        Tip {
            id: "trim-rotted-roots".into(),
            title: "Trim Rotted Roots".into(),
            description: "Cut every mushy, brown root back to firm white tissue.".into(),
            icon: "✂️".into(),
            category: TipCategory::Treatment,
            severity: Some(Severity::High),
            details: None,
            steps: vec![
                "Unpot the plant and rinse the root ball clean".into(),
                "Cut rotted roots with sterilized shears".into(),
                "Dust the cuts with powdered cinnamon or a rooting fungicide".into(),
            ],
            related_tips: vec!["tool-hygiene".into()],
        },
        Tip {
            id: "repot-fresh-soil".into(),
            title: "Repot into Fresh Soil".into(),
            description: "Give the trimmed roots a clean pot and fast-draining mix.".into(),
            icon: "🪴".into(),
            category: TipCategory::Treatment,
            severity: Some(Severity::High),
            details: Some(
                "The old soil carries the pathogen; reusing any of it restarts the rot. Use \
                 a pot with drainage holes and a mix amended with perlite or bark."
                    .into(),
            ),
            steps: vec![],
            related_tips: vec![],
        },
    ];
    treatments.extend(shared_tips(tips, &["isolate-plant"]));
    treatments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (TipCatalog, DiseaseCatalog) {
        let tips = TipCatalog::new();
        let diseases = DiseaseCatalog::new(&tips);
        (tips, diseases)
    }

    #[test]
    fn test_lookup_known_slug() {
        let (_, diseases) = setup();
        let info = diseases.get(Some("leaf-spot")).unwrap();
        assert_eq!(info.disease_type, "Leaf Spot Disease");
        assert!(!info.treatments.is_empty());
        assert!(!info.prevention.is_empty());
    }

    #[test]
    fn test_lookup_missing_and_unknown() {
        let (_, diseases) = setup();
        assert!(diseases.get(None).is_none());
        assert!(diseases.get(Some("")).is_none());
        assert!(diseases.get(Some("unknown-disease-xyz")).is_none());
        // Exact match only: no case folding
        assert!(diseases.get(Some("Leaf-Spot")).is_none());
    }

    #[test]
    fn test_every_disease_has_remedies() {
        let (_, diseases) = setup();
        for slug in diseases.slugs() {
            let info = diseases.get(Some(slug)).unwrap();
            assert!(!info.symptoms.is_empty(), "{} has no symptoms", slug);
            assert!(!info.causes.is_empty(), "{} has no causes", slug);
            assert!(!info.treatments.is_empty(), "{} has no treatments", slug);
            assert!(!info.prevention.is_empty(), "{} has no prevention", slug);
        }
    }

    #[test]
    fn test_root_rot_carries_local_tips() {
        let (tips, diseases) = setup();
        let info = diseases.get(Some("root-rot")).unwrap();
        let ids: Vec<&str> = info.treatments.iter().map(|t| t.id.as_str()).collect();
        assert!(ids.contains(&"trim-rotted-roots"));
        assert!(ids.contains(&"repot-fresh-soil"));
        // Local tips live only in the disease entry, not in the tip catalog
        assert!(tips.tip_by_id("trim-rotted-roots").is_none());
    }

    #[test]
    fn test_shared_tips_match_catalog_entries() {
        let (tips, diseases) = setup();
        let info = diseases.get(Some("leaf-spot")).unwrap();
        let from_catalog = tips.tip_by_id("remove-affected-leaves").unwrap();
        assert_eq!(&info.treatments[0], from_catalog);
    }
}
