//! Care tip models.

use serde::{Deserialize, Serialize};

/// Closed set of tip categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    General,
    Disease,
    Prevention,
    Treatment,
}

impl TipCategory {
    /// Stable lowercase form used at the FFI boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::General => "general",
            TipCategory::Disease => "disease",
            TipCategory::Prevention => "prevention",
            TipCategory::Treatment => "treatment",
        }
    }

    /// Parse the lowercase form. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(TipCategory::General),
            "disease" => Some(TipCategory::Disease),
            "prevention" => Some(TipCategory::Prevention),
            "treatment" => Some(TipCategory::Treatment),
            _ => None,
        }
    }
}

/// How urgent a tip is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Stable lowercase form used at the FFI boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Parse the lowercase form. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

/// A single care instruction shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tip {
    /// Unique identifier within the catalog
    pub id: String,
    /// Short display title
    pub title: String,
    /// One-sentence summary shown on the collapsed card
    pub description: String,
    /// Emoji glyph shown next to the title
    pub icon: String,
    /// Category for grouping and filtering
    pub category: TipCategory,
    /// Urgency, where it matters (mostly treatment tips)
    pub severity: Option<Severity>,
    /// Expanded explanation shown when the card is opened
    pub details: Option<String>,
    /// Ordered action steps
    pub steps: Vec<String>,
    /// Ids of tips worth showing alongside this one. Display-only strings;
    /// never resolved against the catalog.
    pub related_tips: Vec<String>,
}

impl Tip {
    /// Create a tip with required fields only.
    pub fn new(
        id: String,
        title: String,
        description: String,
        icon: String,
        category: TipCategory,
    ) -> Self {
        Self {
            id,
            title,
            description,
            icon,
            category,
            severity: None,
            details: None,
            steps: Vec::new(),
            related_tips: Vec::new(),
        }
    }

    /// True when the card has nothing to expand into.
    pub fn is_summary_only(&self) -> bool {
        self.details.is_none() && self.steps.is_empty()
    }
}

/// A browsable group of tips with display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryListing {
    /// Group slug (e.g. "general-care")
    pub id: String,
    /// Display name
    pub name: String,
    /// Emoji glyph for the group header
    pub icon: String,
    /// One-line blurb under the header
    pub description: String,
    /// Tips in display order
    pub tips: Vec<Tip>,
}
