//! Golden tests for the recommendation selector.
//!
//! These tests pin the exact tip sequences for both verdicts.

use leafcheck_core::catalog::{DiseaseCatalog, TipCatalog};
use leafcheck_core::models::{HealthStatus, ScanOutcome};
use leafcheck_core::selector::Selector;
use proptest::prelude::*;

/// Pinned selection case.
struct GoldenCase {
    id: &'static str,
    status: HealthStatus,
    confidence: f64,
    expected_tip_ids: [&'static str; 3],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "healthy-high-confidence",
            status: HealthStatus::Healthy,
            confidence: 0.95,
            expected_tip_ids: ["regular-inspection", "pest-prevention", "watering-basics"],
        },
        GoldenCase {
            id: "healthy-low-confidence",
            status: HealthStatus::Healthy,
            confidence: 0.51,
            expected_tip_ids: ["regular-inspection", "pest-prevention", "watering-basics"],
        },
        GoldenCase {
            id: "healthy-confidence-out-of-range",
            status: HealthStatus::Healthy,
            confidence: 7.5,
            expected_tip_ids: ["regular-inspection", "pest-prevention", "watering-basics"],
        },
        GoldenCase {
            id: "diseased-high-confidence",
            status: HealthStatus::Diseased,
            confidence: 0.87,
            expected_tip_ids: ["remove-affected-leaves", "apply-fungicide", "disease-prevention"],
        },
        GoldenCase {
            id: "diseased-low-confidence",
            status: HealthStatus::Diseased,
            confidence: 0.02,
            expected_tip_ids: ["remove-affected-leaves", "apply-fungicide", "disease-prevention"],
        },
        GoldenCase {
            id: "diseased-negative-confidence",
            status: HealthStatus::Diseased,
            confidence: -0.5,
            expected_tip_ids: ["remove-affected-leaves", "apply-fungicide", "disease-prevention"],
        },
    ]
}

fn setup() -> (TipCatalog, DiseaseCatalog) {
    let tips = TipCatalog::new();
    let diseases = DiseaseCatalog::new(&tips);
    (tips, diseases)
}

#[test]
fn test_golden_cases() {
    let (tips, diseases) = setup();
    let selector = Selector::new(&tips, &diseases);

    for case in get_golden_cases() {
        let selected = selector.tips_for_scan_result(case.status, case.confidence);
        let ids: Vec<&str> = selected.iter().map(|tip| tip.id.as_str()).collect();
        assert_eq!(
            ids, case.expected_tip_ids,
            "Case {}: tip sequence mismatch",
            case.id
        );
    }
}

#[test]
fn test_diseased_leads_with_treatment_catalog_order() {
    let (tips, diseases) = setup();
    let selector = Selector::new(&tips, &diseases);

    let selected = selector.tips_for_scan_result(HealthStatus::Diseased, 0.87);
    let treatment = tips.treatment_tips();
    assert_eq!(selected[0], treatment[0]);
    assert_eq!(selected[1], treatment[1]);
}

#[test]
fn test_selector_is_idempotent() {
    let (tips, diseases) = setup();
    let selector = Selector::new(&tips, &diseases);

    for status in [HealthStatus::Healthy, HealthStatus::Diseased] {
        let first = selector.tips_for_scan_result(status, 0.7);
        let second = selector.tips_for_scan_result(status, 0.7);
        assert_eq!(first, second);
    }
}

#[test]
fn test_recommend_is_idempotent_with_disease() {
    let (tips, diseases) = setup();
    let selector = Selector::new(&tips, &diseases);

    let outcome = ScanOutcome {
        status: HealthStatus::Diseased,
        confidence: 0.87,
        disease: Some("rust".into()),
    };
    let first = selector.recommend(&outcome);
    let second = selector.recommend(&outcome);
    assert_eq!(first, second);
    assert_eq!(first.disease.unwrap().disease_type, "Rust Disease");
}

#[test]
fn test_recommend_without_disease_id() {
    let (tips, diseases) = setup();
    let selector = Selector::new(&tips, &diseases);

    let outcome = ScanOutcome {
        status: HealthStatus::Healthy,
        confidence: 0.95,
        disease: None,
    };
    let recommendation = selector.recommend(&outcome);
    assert_eq!(recommendation.tips.len(), 3);
    assert!(recommendation.disease.is_none());
}

proptest! {
    #[test]
    fn healthy_selection_ignores_confidence(confidence in -10.0f64..10.0) {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        let selected = selector.tips_for_scan_result(HealthStatus::Healthy, confidence);
        let ids: Vec<&str> = selected.iter().map(|tip| tip.id.as_str()).collect();
        prop_assert_eq!(
            ids,
            vec!["regular-inspection", "pest-prevention", "watering-basics"]
        );
    }

    #[test]
    fn diseased_selection_ignores_confidence(confidence in -10.0f64..10.0) {
        let (tips, diseases) = setup();
        let selector = Selector::new(&tips, &diseases);

        let selected = selector.tips_for_scan_result(HealthStatus::Diseased, confidence);
        let ids: Vec<&str> = selected.iter().map(|tip| tip.id.as_str()).collect();
        prop_assert_eq!(
            ids,
            vec!["remove-affected-leaves", "apply-fungicide", "disease-prevention"]
        );
    }
}
