//! Mock leaf classifier.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification errors.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("empty image data")]
    EmptyImage,
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Disease slugs the mock can report. Matches the core disease catalog.
pub const KNOWN_DISEASES: [&str; 5] = [
    "leaf-spot",
    "powdery-mildew",
    "root-rot",
    "rust",
    "leaf-blight",
];

/// Default probability of a healthy verdict.
const DEFAULT_HEALTHY_BIAS: f64 = 0.6;

/// Confidence range for healthy verdicts.
const HEALTHY_CONFIDENCE: std::ops::Range<f64> = 0.75..0.99;

/// Confidence range for diseased verdicts.
const DISEASED_CONFIDENCE: std::ops::Range<f64> = 0.65..0.95;

/// Health verdict, in the shape the core's history store expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeafCondition {
    Healthy,
    Diseased,
}

impl LeafCondition {
    /// Stable lowercase form handed across the seam.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeafCondition::Healthy => "healthy",
            LeafCondition::Diseased => "diseased",
        }
    }
}

/// One classification result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    /// Health verdict
    pub condition: LeafCondition,
    /// Confidence in [0, 1)
    pub confidence: f64,
    /// Detected disease slug when the verdict is diseased
    pub disease: Option<String>,
}

/// Random classifier used until a real model ships.
///
/// Image bytes are only checked for presence; content never influences the
/// verdict.
pub struct MockClassifier {
    healthy_bias: f64,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    /// Create a classifier with the default healthy bias.
    pub fn new() -> Self {
        Self {
            healthy_bias: DEFAULT_HEALTHY_BIAS,
        }
    }

    /// Create a classifier with a specific healthy probability, clamped to
    /// [0, 1].
    pub fn with_healthy_bias(healthy_bias: f64) -> Self {
        Self {
            healthy_bias: healthy_bias.clamp(0.0, 1.0),
        }
    }

    /// Classify photo bytes with a thread-local RNG.
    pub fn classify(&self, image: &[u8]) -> ClassifyResult<Assessment> {
        self.classify_with_rng(image, &mut rand::thread_rng())
    }

    /// Classify photo bytes with an explicit RNG (for deterministic tests).
    pub fn classify_with_rng<R: Rng>(&self, image: &[u8], rng: &mut R) -> ClassifyResult<Assessment> {
        if image.is_empty() {
            return Err(ClassifyError::EmptyImage);
        }

        if rng.gen_bool(self.healthy_bias) {
            Ok(Assessment {
                condition: LeafCondition::Healthy,
                confidence: rng.gen_range(HEALTHY_CONFIDENCE),
                disease: None,
            })
        } else {
            let disease = KNOWN_DISEASES[rng.gen_range(0..KNOWN_DISEASES.len())];
            Ok(Assessment {
                condition: LeafCondition::Diseased,
                confidence: rng.gen_range(DISEASED_CONFIDENCE),
                disease: Some(disease.to_string()),
            })
        }
    }
}
