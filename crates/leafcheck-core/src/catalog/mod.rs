//! Static tip and disease catalogs.
//!
//! All catalog data is built once at startup and never mutated, so reads
//! from any number of rendering instances need no coordination.

mod diseases;
mod tips;

pub use diseases::DiseaseCatalog;

use strsim::jaro_winkler;

use crate::models::{CategoryListing, Tip};

/// Browse group slugs, in display order.
pub const CATEGORY_IDS: [&str; 4] = [
    "general-care",
    "disease-treatment",
    "prevention",
    "seasonal-care",
];

/// Minimum fuzzy-match score for a search hit.
const MIN_SEARCH_SCORE: f64 = 0.78;

/// The fixed care-tip catalog: four groups, exposed flat and grouped.
pub struct TipCatalog {
    general: Vec<Tip>,
    treatment: Vec<Tip>,
    prevention: Vec<Tip>,
    seasonal: Vec<Tip>,
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TipCatalog {
    /// Build the catalog from the static tables.
    pub fn new() -> Self {
        Self {
            general: tips::general_care(),
            treatment: tips::disease_treatment(),
            prevention: tips::prevention(),
            seasonal: tips::seasonal_care(),
        }
    }

    /// Everyday care tips.
    pub fn general_tips(&self) -> &[Tip] {
        &self.general
    }

    /// Treatment tips, in recommendation order.
    pub fn treatment_tips(&self) -> &[Tip] {
        &self.treatment
    }

    /// Prevention tips.
    pub fn prevention_tips(&self) -> &[Tip] {
        &self.prevention
    }

    /// Seasonal tips.
    pub fn seasonal_tips(&self) -> &[Tip] {
        &self.seasonal
    }

    /// Tips for a browse group by slug. Unknown slugs yield `None`.
    pub fn tips_for_category(&self, id: &str) -> Option<&[Tip]> {
        match id {
            "general-care" => Some(&self.general),
            "disease-treatment" => Some(&self.treatment),
            "prevention" => Some(&self.prevention),
            "seasonal-care" => Some(&self.seasonal),
            _ => None,
        }
    }

    /// Find a tip anywhere in the catalog by id.
    pub fn tip_by_id(&self, id: &str) -> Option<&Tip> {
        self.all_tips().find(|tip| tip.id == id)
    }

    /// Every tip, in group order.
    pub fn all_tips(&self) -> impl Iterator<Item = &Tip> {
        self.general
            .iter()
            .chain(&self.treatment)
            .chain(&self.prevention)
            .chain(&self.seasonal)
    }

    /// The four browse groups with display metadata.
    pub fn categories(&self) -> Vec<CategoryListing> {
        vec![
            CategoryListing {
                id: "general-care".into(),
                name: "General Care".into(),
                icon: "🌿".into(),
                description: "Everyday habits that keep any plant healthy".into(),
                tips: self.general.clone(),
            },
            CategoryListing {
                id: "disease-treatment".into(),
                name: "Disease Treatment".into(),
                icon: "💊".into(),
                description: "What to do when a scan comes back diseased".into(),
                tips: self.treatment.clone(),
            },
            CategoryListing {
                id: "prevention".into(),
                name: "Prevention".into(),
                icon: "🛡️".into(),
                description: "Keep pests and pathogens from getting a foothold".into(),
                tips: self.prevention.clone(),
            },
            CategoryListing {
                id: "seasonal-care".into(),
                name: "Seasonal Care".into(),
                icon: "🍂".into(),
                description: "Adjust the routine as the seasons change".into(),
                tips: self.seasonal.clone(),
            },
        ]
    }

    /// Ranked fuzzy search over titles and descriptions.
    ///
    /// Substring hits rank first; the rest are scored with Jaro-Winkler and
    /// anything under [`MIN_SEARCH_SCORE`] is dropped. Ties keep catalog
    /// order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Tip> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &Tip)> = self
            .all_tips()
            .map(|tip| (search_score(&query, tip), tip))
            .filter(|(score, _)| *score >= MIN_SEARCH_SCORE)
            .collect();

        // Stable sort keeps catalog order for equal scores
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        scored.into_iter().take(limit).map(|(_, tip)| tip).collect()
    }
}

/// Score one tip against a lowercased query.
fn search_score(query: &str, tip: &Tip) -> f64 {
    let title = tip.title.to_lowercase();
    if title.contains(query) || tip.id.contains(query) {
        return 1.0;
    }
    if tip.description.to_lowercase().contains(query) {
        return 0.9;
    }

    let whole_title = jaro_winkler(query, &title);
    let best_word = title
        .split_whitespace()
        .map(|word| jaro_winkler(query, word))
        .fold(0.0, f64::max);
    whole_title.max(best_word)
}
