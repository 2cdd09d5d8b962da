//! Scan outcome and history models.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Health verdict for a scanned leaf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Diseased,
}

impl HealthStatus {
    /// Stable lowercase form used at the FFI boundary and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Diseased => "diseased",
        }
    }

    /// Parse the wire form. Anything outside the two-value set yields `None`;
    /// callers reject it at the boundary.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "healthy" => Some(HealthStatus::Healthy),
            "diseased" => Some(HealthStatus::Diseased),
            _ => None,
        }
    }
}

/// Result of one analysis run, as handed to the selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanOutcome {
    /// Health verdict
    pub status: HealthStatus,
    /// Classifier confidence, expected in [0, 1]. Not validated or clamped.
    pub confidence: f64,
    /// Slug of the detected disease, when the classifier reports one
    pub disease: Option<String>,
}

/// One entry in the local scan history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRecord {
    /// Unique scan ID
    pub scan_id: String,
    /// Health verdict
    pub status: HealthStatus,
    /// Classifier confidence as reported
    pub confidence: f64,
    /// Detected disease slug, if any
    pub disease: Option<String>,
    /// SHA-256 fingerprint of the photo bytes, if the shell stored one
    pub image_digest: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl ScanRecord {
    /// Create a new history entry for an outcome.
    pub fn new(outcome: &ScanOutcome) -> Self {
        Self {
            scan_id: uuid::Uuid::new_v4().to_string(),
            status: outcome.status,
            confidence: outcome.confidence,
            disease: outcome.disease.clone(),
            image_digest: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attach the photo fingerprint.
    pub fn with_image_digest(mut self, digest: String) -> Self {
        self.image_digest = Some(digest);
        self
    }
}

/// SHA-256 fingerprint of raw photo bytes, hex encoded.
///
/// The bytes are opaque; no decoding happens here. The shell uses the digest
/// to associate a stored photo with its history row.
pub fn image_fingerprint(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(HealthStatus::parse("healthy"), Some(HealthStatus::Healthy));
        assert_eq!(HealthStatus::parse("diseased"), Some(HealthStatus::Diseased));
        assert_eq!(HealthStatus::parse("Healthy"), None);
        assert_eq!(HealthStatus::parse("wilting"), None);
        assert_eq!(HealthStatus::parse(""), None);
    }

    #[test]
    fn test_scan_record_new() {
        let outcome = ScanOutcome {
            status: HealthStatus::Diseased,
            confidence: 0.87,
            disease: Some("leaf-spot".into()),
        };
        let record = ScanRecord::new(&outcome);

        assert_eq!(record.scan_id.len(), 36);
        assert_eq!(record.status, HealthStatus::Diseased);
        assert_eq!(record.confidence, 0.87);
        assert_eq!(record.disease.as_deref(), Some("leaf-spot"));
        assert!(record.image_digest.is_none());
    }

    #[test]
    fn test_image_fingerprint_stable() {
        let digest = image_fingerprint(b"fake jpeg bytes");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, image_fingerprint(b"fake jpeg bytes"));
        assert_ne!(digest, image_fingerprint(b"other bytes"));
    }
}
