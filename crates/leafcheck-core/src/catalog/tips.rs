//! Static care-tip tables.
//!
//! Four fixed groups, populated once at startup:
//! - general-care: everyday habits for any houseplant
//! - disease-treatment: ordered response to a diseased verdict
//! - prevention: keeping pests and pathogens out
//! - seasonal-care: adjustments through the year

use crate::models::{Severity, Tip, TipCategory};

/// Everyday care tips.
pub(super) fn general_care() -> Vec<Tip> {
    vec![
        Tip {
            id: "regular-inspection".into(),
            title: "Inspect Your Plant Weekly".into(),
            description: "Catch problems early by checking leaves, stems and soil once a week."
                .into(),
            icon: "🔍".into(),
            category: TipCategory::General,
            severity: None,
            details: Some(
                "Most leaf diseases and pest infestations are easy to stop when caught in the \
                 first week. Pick a fixed day and walk through the same checks every time."
                    .into(),
            ),
            steps: vec![
                "Look at the undersides of a few leaves for spots, webbing or insects".into(),
                "Check new growth for discoloration or distortion".into(),
                "Press a finger into the topsoil to gauge moisture".into(),
                "Remove dust from leaf surfaces with a damp cloth".into(),
            ],
            related_tips: vec!["pest-prevention".into()],
        },
        Tip {
            id: "watering-basics".into(),
            title: "Water When the Topsoil Is Dry".into(),
            description: "Check the top few centimeters of soil before reaching for the can."
                .into(),
            icon: "💧".into(),
            category: TipCategory::General,
            severity: None,
            details: Some(
                "Overwatering kills more houseplants than drought. Roots need air as much as \
                 water; soil that never dries out suffocates them and invites rot."
                    .into(),
            ),
            steps: vec![
                "Push a finger 2-3 cm into the soil".into(),
                "Water thoroughly only if it feels dry at that depth".into(),
                "Let excess water drain; never leave the pot standing in it".into(),
            ],
            // humidity-control is not cataloged yet; the id is shown as plain text
            related_tips: vec!["soil-health".into(), "humidity-control".into()],
        },
        Tip {
            id: "light-requirements".into(),
            title: "Match Light to the Species".into(),
            description: "Place each plant where the light fits what it evolved for.".into(),
            icon: "☀️".into(),
            category: TipCategory::General,
            severity: None,
            details: Some(
                "Pale, stretched growth means too little light; bleached or crisped patches \
                 mean too much. Move the plant gradually, a meter at a time, and give it two \
                 weeks to respond."
                    .into(),
            ),
            steps: vec![],
            related_tips: vec![],
        },
        Tip {
            id: "soil-health".into(),
            title: "Keep the Soil Alive".into(),
            description: "Refresh the potting mix yearly and feed lightly during growth.".into(),
            icon: "🌱".into(),
            category: TipCategory::General,
            severity: None,
            details: None,
            steps: vec![],
            related_tips: vec!["spring-repotting".into()],
        },
    ]
}

/// Treatment tips for a diseased verdict. Order matters: the first two
/// entries lead every diseased recommendation.
pub(super) fn disease_treatment() -> Vec<Tip> {
    vec![
        Tip {
            id: "remove-affected-leaves".into(),
            title: "Remove Affected Leaves".into(),
            description: "Cut away visibly diseased foliage before it spreads.".into(),
            icon: "✂️".into(),
            category: TipCategory::Treatment,
            severity: Some(Severity::High),
            details: Some(
                "Infected tissue will not recover and keeps shedding spores onto healthy \
                 leaves. Removing it is the single most effective first step."
                    .into(),
            ),
            steps: vec![
                "Sterilize pruning shears with rubbing alcohol".into(),
                "Cut affected leaves at the base of the stem".into(),
                "Bag and bin the cuttings; never compost diseased material".into(),
                "Sterilize the shears again when done".into(),
            ],
            related_tips: vec!["isolate-plant".into(), "tool-hygiene".into()],
        },
        Tip {
            id: "apply-fungicide".into(),
            title: "Apply a Targeted Fungicide".into(),
            description: "Treat the remaining foliage with a product matched to the disease."
                .into(),
            icon: "🧴".into(),
            category: TipCategory::Treatment,
            severity: Some(Severity::High),
            details: Some(
                "Copper-based and sulfur-based fungicides cover most common leaf diseases. \
                 Follow the label dilution exactly; stronger is not better."
                    .into(),
            ),
            steps: vec![
                "Spray in the evening or in shade to avoid leaf burn".into(),
                "Coat both sides of every remaining leaf".into(),
                "Repeat at the interval on the label until new growth is clean".into(),
            ],
            related_tips: vec![],
        },
        Tip {
            id: "improve-air-circulation".into(),
            title: "Improve Air Circulation".into(),
            description: "Still, humid air around the foliage lets fungi re-establish.".into(),
            icon: "🌬️".into(),
            category: TipCategory::Treatment,
            severity: Some(Severity::Medium),
            details: Some(
                "Move the plant away from walls and other plants, or run a small fan nearby \
                 on its lowest setting. Leaves should dry within an hour of misting or \
                 watering splash."
                    .into(),
            ),
            steps: vec![],
            related_tips: vec!["proper-spacing".into()],
        },
        Tip {
            id: "isolate-plant".into(),
            title: "Isolate the Plant".into(),
            description: "Keep a diseased plant away from the rest of your collection.".into(),
            icon: "🚧".into(),
            category: TipCategory::Treatment,
            severity: Some(Severity::Medium),
            details: None,
            steps: vec![],
            related_tips: vec![],
        },
    ]
}

/// Prevention tips.
pub(super) fn prevention() -> Vec<Tip> {
    vec![
        Tip {
            id: "pest-prevention".into(),
            title: "Stay Ahead of Pests".into(),
            description: "A few habits keep spider mites, aphids and gnats from settling in."
                .into(),
            icon: "🐛".into(),
            category: TipCategory::Prevention,
            severity: None,
            details: Some(
                "Pests arrive on new plants, open windows and fresh produce. Quarantine new \
                 arrivals for two weeks and you will stop most infestations before they start."
                    .into(),
            ),
            steps: vec![
                "Quarantine new plants for two weeks before shelving them".into(),
                "Wipe leaves monthly; dust shelters mites".into(),
                "Let topsoil dry between waterings to deter fungus gnats".into(),
            ],
            related_tips: vec!["regular-inspection".into()],
        },
        Tip {
            id: "disease-prevention".into(),
            title: "Make Disease Unwelcome".into(),
            description: "Dry leaves, moving air and clean pots prevent most infections.".into(),
            icon: "🛡️".into(),
            category: TipCategory::Prevention,
            severity: None,
            details: Some(
                "Fungal and bacterial diseases need standing moisture to take hold. Water the \
                 soil rather than the foliage and most pathogens never get their chance."
                    .into(),
            ),
            steps: vec![
                "Water at the base; keep foliage dry".into(),
                "Remove fallen leaves from the pot surface promptly".into(),
                "Wash pots with hot soapy water before reuse".into(),
            ],
            related_tips: vec!["tool-hygiene".into()],
        },
        Tip {
            id: "proper-spacing".into(),
            title: "Give Plants Room".into(),
            description: "Crowded foliage traps humidity and passes infections along.".into(),
            icon: "📏".into(),
            category: TipCategory::Prevention,
            severity: None,
            details: Some(
                "Leaves of neighboring plants should not touch. If a shelf is full, thin it \
                 rather than squeezing one more pot in."
                    .into(),
            ),
            steps: vec![],
            related_tips: vec![],
        },
        Tip {
            id: "tool-hygiene".into(),
            title: "Clean Your Tools".into(),
            description: "Sterilize shears and reuse pots only after a hot wash.".into(),
            icon: "🧼".into(),
            category: TipCategory::Prevention,
            severity: None,
            details: None,
            steps: vec![],
            related_tips: vec![],
        },
    ]
}

/// Seasonal adjustments.
pub(super) fn seasonal_care() -> Vec<Tip> {
    vec![
        Tip {
            id: "spring-repotting".into(),
            title: "Repot in Early Spring".into(),
            description: "Move root-bound plants into the next pot size as growth resumes."
                .into(),
            icon: "🪴".into(),
            category: TipCategory::General,
            severity: None,
            details: Some(
                "Roots circling the drainage holes or pushing the plant out of its pot mean \
                 it is time. Go up one size only; a pot too large holds water the roots \
                 cannot reach."
                    .into(),
            ),
            steps: vec![],
            related_tips: vec!["soil-health".into()],
        },
        Tip {
            id: "summer-hydration".into(),
            title: "Watch Watering in Summer Heat".into(),
            description: "Hot weeks can double how fast pots dry out.".into(),
            icon: "🌞".into(),
            category: TipCategory::General,
            severity: None,
            details: None,
            steps: vec![
                "Check soil moisture twice a week during heat waves".into(),
                "Move sensitive plants out of harsh afternoon sun".into(),
            ],
            related_tips: vec!["watering-basics".into()],
        },
        Tip {
            id: "autumn-cleanup".into(),
            title: "Clean Up Before Winter".into(),
            description: "Clear dropped leaves and fade out fertilizer as growth slows.".into(),
            icon: "🍂".into(),
            category: TipCategory::General,
            severity: None,
            details: None,
            steps: vec![],
            related_tips: vec![],
        },
        Tip {
            id: "winter-dormancy".into(),
            title: "Respect Winter Dormancy".into(),
            description: "Water less and stop feeding while the plant rests.".into(),
            icon: "❄️".into(),
            category: TipCategory::General,
            severity: None,
            details: Some(
                "Short days slow growth to a crawl. Soil stays wet longer, so the summer \
                 watering rhythm will drown roots in winter. Resume feeding when new growth \
                 appears in spring."
                    .into(),
            ),
            steps: vec![],
            related_tips: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treatment_order_is_stable() {
        let tips = disease_treatment();
        assert_eq!(tips[0].id, "remove-affected-leaves");
        assert_eq!(tips[1].id, "apply-fungicide");
    }

    #[test]
    fn test_groups_are_non_empty() {
        assert!(!general_care().is_empty());
        assert!(!disease_treatment().is_empty());
        assert!(!prevention().is_empty());
        assert!(!seasonal_care().is_empty());
    }

    #[test]
    fn test_treatment_tips_carry_severity() {
        for tip in disease_treatment() {
            assert!(tip.severity.is_some(), "{} has no severity", tip.id);
            assert_eq!(tip.category, TipCategory::Treatment);
        }
    }
}
