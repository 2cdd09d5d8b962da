//! Recommendation selection for scan results.
//!
//! Pure lookups over the static catalogs with no I/O and no hidden state.
//! Identical inputs always produce structurally identical output.

use crate::catalog::{DiseaseCatalog, TipCatalog};
use crate::models::{DiseaseInfo, HealthStatus, ScanOutcome, Tip};

/// Tip ids shown for a healthy scan, in display order.
const HEALTHY_TIP_IDS: [&str; 3] = ["regular-inspection", "pest-prevention", "watering-basics"];

/// Tip appended after the treatment entries for a diseased scan.
const DISEASED_FOLLOW_UP_ID: &str = "disease-prevention";

/// How many treatment-catalog entries lead a diseased recommendation.
const TREATMENT_LEAD_COUNT: usize = 2;

/// Tips plus the matching disease entry, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Ordered tips to display
    pub tips: Vec<Tip>,
    /// Disease entry for the outcome's disease id, when cataloged
    pub disease: Option<DiseaseInfo>,
}

/// Maps scan outcomes to the tips to display.
pub struct Selector<'a> {
    tips: &'a TipCatalog,
    diseases: &'a DiseaseCatalog,
}

impl<'a> Selector<'a> {
    /// Create a selector over the two catalogs.
    pub fn new(tips: &'a TipCatalog, diseases: &'a DiseaseCatalog) -> Self {
        Self { tips, diseases }
    }

    /// Ordered tips for a scan verdict.
    ///
    /// Confidence is accepted unvalidated and does not change the selection;
    /// the tip sequence is a function of status alone.
    pub fn tips_for_scan_result(&self, status: HealthStatus, _confidence: f64) -> Vec<Tip> {
        match status {
            HealthStatus::Healthy => HEALTHY_TIP_IDS
                .iter()
                .filter_map(|id| self.tips.tip_by_id(id).cloned())
                .collect(),
            HealthStatus::Diseased => {
                let mut selected: Vec<Tip> = self
                    .tips
                    .treatment_tips()
                    .iter()
                    .take(TREATMENT_LEAD_COUNT)
                    .cloned()
                    .collect();
                selected.extend(self.tips.tip_by_id(DISEASED_FOLLOW_UP_ID).cloned());
                selected
            }
        }
    }

    /// Full recommendation for one scan outcome: the tip sequence plus the
    /// disease catalog entry for the reported disease, if it is cataloged.
    pub fn recommend(&self, outcome: &ScanOutcome) -> Recommendation {
        Recommendation {
            tips: self.tips_for_scan_result(outcome.status, outcome.confidence),
            disease: self.diseases.get(outcome.disease.as_deref()).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (TipCatalog, DiseaseCatalog) {
        let tips = TipCatalog::new();
        let diseases = DiseaseCatalog::new(&tips);
        (tips, diseases)
    }

    fn ids(tips: &[Tip]) -> Vec<&str> {
        tips.iter().map(|tip| tip.id.as_str()).collect()
    }

    #[test]
    fn test_healthy_selection() {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        let selected = selector.tips_for_scan_result(HealthStatus::Healthy, 0.95);
        assert_eq!(
            ids(&selected),
            vec!["regular-inspection", "pest-prevention", "watering-basics"]
        );
    }

    #[test]
    fn test_diseased_selection() {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        let selected = selector.tips_for_scan_result(HealthStatus::Diseased, 0.87);
        assert_eq!(
            ids(&selected),
            vec![
                "remove-affected-leaves",
                "apply-fungicide",
                "disease-prevention"
            ]
        );
    }

    #[test]
    fn test_confidence_does_not_change_selection() {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        for confidence in [-1.0, 0.0, 0.5, 1.0, 42.0] {
            let healthy = selector.tips_for_scan_result(HealthStatus::Healthy, confidence);
            assert_eq!(healthy.len(), 3);
            let diseased = selector.tips_for_scan_result(HealthStatus::Diseased, confidence);
            assert_eq!(diseased.len(), 3);
        }
    }

    #[test]
    fn test_recommend_attaches_disease() {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        let outcome = ScanOutcome {
            status: HealthStatus::Diseased,
            confidence: 0.87,
            disease: Some("leaf-spot".into()),
        };
        let recommendation = selector.recommend(&outcome);

        assert_eq!(recommendation.tips.len(), 3);
        let info = recommendation.disease.unwrap();
        assert_eq!(info.disease_type, "Leaf Spot Disease");
    }

    #[test]
    fn test_recommend_unknown_disease_still_selects_tips() {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        let outcome = ScanOutcome {
            status: HealthStatus::Diseased,
            confidence: 0.6,
            disease: Some("unknown-disease-xyz".into()),
        };
        let recommendation = selector.recommend(&outcome);

        assert_eq!(recommendation.tips.len(), 3);
        assert!(recommendation.disease.is_none());
    }
}
