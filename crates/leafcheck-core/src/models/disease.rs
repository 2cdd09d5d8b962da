//! Disease reference models.

use serde::{Deserialize, Serialize};

use super::tip::{Severity, Tip};

/// Reference entry for one recognized leaf disease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseaseInfo {
    /// Display name (e.g. "Leaf Spot Disease")
    pub disease_type: String,
    /// Observable symptoms, in display order
    pub symptoms: Vec<String>,
    /// Common causes, in display order
    pub causes: Vec<String>,
    /// Treatment tips for this disease
    pub treatments: Vec<Tip>,
    /// Prevention tips for this disease
    pub prevention: Vec<Tip>,
}

impl DiseaseInfo {
    /// Highest severity across the treatment set, if any tip carries one.
    pub fn peak_severity(&self) -> Option<Severity> {
        self.treatments.iter().filter_map(|tip| tip.severity).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tip::TipCategory;

    fn treatment_tip(id: &str, severity: Option<Severity>) -> Tip {
        let mut tip = Tip::new(
            id.into(),
            "Treatment".into(),
            "Treat the plant.".into(),
            "🧴".into(),
            TipCategory::Treatment,
        );
        tip.severity = severity;
        tip
    }

    #[test]
    fn test_peak_severity() {
        let info = DiseaseInfo {
            disease_type: "Test Disease".into(),
            symptoms: vec!["spots".into()],
            causes: vec!["fungus".into()],
            treatments: vec![
                treatment_tip("a", Some(Severity::Medium)),
                treatment_tip("b", Some(Severity::High)),
                treatment_tip("c", None),
            ],
            prevention: vec![],
        };
        assert_eq!(info.peak_severity(), Some(Severity::High));
    }

    #[test]
    fn test_peak_severity_none_when_unset() {
        let info = DiseaseInfo {
            disease_type: "Test Disease".into(),
            symptoms: vec![],
            causes: vec![],
            treatments: vec![treatment_tip("a", None)],
            prevention: vec![],
        };
        assert_eq!(info.peak_severity(), None);
    }
}
