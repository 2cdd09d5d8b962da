//! LeafCheck Core Library
//!
//! Local-first plant health companion core: static care catalogs, a pure
//! recommendation selector, and a SQLite-backed scan history.
//!
//! # Architecture
//!
//! ```text
//! Photo → Compression → Classifier (mock) → scan outcome
//!                                               │
//!                         ┌─────────────────────┼─────────────────────┐
//!                         ▼                     ▼                     ▼
//!                     Selector           Disease Catalog         Scan History
//!                  (ordered tips)      (symptoms, causes,          (SQLite)
//!                         │              treatment sets)
//!                         │                     │
//!                         └──────────┬──────────┘
//!                                    ▼
//!                           App screens render
//! ```
//!
//! # Core Principle
//!
//! **Catalog data is immutable after startup.** Reads need no coordination;
//! the only mutable state in the core is the scan-history store.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Tip, DiseaseInfo, ScanOutcome, ...)
//! - [`catalog`]: Static tip and disease catalogs
//! - [`selector`]: Maps scan outcomes to ordered tip sequences
//! - [`db`]: SQLite scan-history store

pub mod catalog;
pub mod db;
pub mod models;
pub mod selector;

// Re-export commonly used types
pub use catalog::{DiseaseCatalog, TipCatalog};
pub use db::Database;
pub use models::{
    CategoryListing, DiseaseInfo, HealthStatus, ScanOutcome, ScanRecord, Severity, Tip,
    TipCategory,
};
pub use selector::{Recommendation, Selector};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LeafCheckError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for LeafCheckError {
    fn from(e: db::DbError) -> Self {
        LeafCheckError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for LeafCheckError {
    fn from(e: serde_json::Error) -> Self {
        LeafCheckError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for LeafCheckError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        LeafCheckError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create the scan-history store at the given path.
#[uniffi::export]
pub fn open_store(path: String) -> Result<Arc<LeafCheckCore>, LeafCheckError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(LeafCheckCore::with_database(db)))
}

/// Create an in-memory store (for testing).
#[uniffi::export]
pub fn open_store_in_memory() -> Result<Arc<LeafCheckCore>, LeafCheckError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(LeafCheckCore::with_database(db)))
}

/// SHA-256 fingerprint of raw photo bytes, hex encoded.
#[uniffi::export]
pub fn image_fingerprint(data: Vec<u8>) -> String {
    models::image_fingerprint(&data)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe core handle for FFI: immutable catalogs plus the history
/// store behind a lock.
#[derive(uniffi::Object)]
pub struct LeafCheckCore {
    db: Arc<Mutex<Database>>,
    tips: TipCatalog,
    diseases: DiseaseCatalog,
}

impl LeafCheckCore {
    fn with_database(db: Database) -> Self {
        let tips = TipCatalog::new();
        let diseases = DiseaseCatalog::new(&tips);
        Self {
            db: Arc::new(Mutex::new(db)),
            tips,
            diseases,
        }
    }

    fn parse_status(status: &str) -> Result<HealthStatus, LeafCheckError> {
        HealthStatus::parse(status).ok_or_else(|| {
            LeafCheckError::InvalidInput(format!(
                "status must be 'healthy' or 'diseased', got '{}'",
                status
            ))
        })
    }
}

#[uniffi::export]
impl LeafCheckCore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// The four browse groups with display metadata.
    pub fn list_categories(&self) -> Vec<FfiCategoryListing> {
        self.tips.categories().into_iter().map(|c| c.into()).collect()
    }

    /// Tips for one browse group. Unknown slugs yield an empty list.
    pub fn tips_for_category(&self, category_id: String) -> Vec<FfiTip> {
        self.tips
            .tips_for_category(&category_id)
            .unwrap_or_default()
            .iter()
            .map(|tip| tip.clone().into())
            .collect()
    }

    /// Look up a single tip by id.
    pub fn get_tip(&self, tip_id: String) -> Option<FfiTip> {
        self.tips.tip_by_id(&tip_id).map(|tip| tip.clone().into())
    }

    /// Ranked fuzzy search over tip titles and descriptions.
    pub fn search_tips(&self, query: String, limit: u32) -> Vec<FfiTip> {
        self.tips
            .search(&query, limit as usize)
            .into_iter()
            .map(|tip| tip.clone().into())
            .collect()
    }

    // =========================================================================
    // Disease Operations
    // =========================================================================

    /// Disease entry for a slug. Missing, empty and unknown ids all read as
    /// "not found".
    pub fn get_disease_info(&self, disease_id: Option<String>) -> Option<FfiDiseaseInfo> {
        self.diseases
            .get(disease_id.as_deref())
            .map(|info| info.clone().into())
    }

    /// Cataloged disease slugs, sorted.
    pub fn list_diseases(&self) -> Vec<String> {
        self.diseases.slugs().into_iter().map(String::from).collect()
    }

    // =========================================================================
    // Selector Operations
    // =========================================================================

    /// Ordered tips for a scan verdict. Status strings outside the two-value
    /// set are rejected here; the selector itself cannot fail.
    pub fn tips_for_scan_result(
        &self,
        status: String,
        confidence: f64,
    ) -> Result<Vec<FfiTip>, LeafCheckError> {
        let status = Self::parse_status(&status)?;
        let selector = Selector::new(&self.tips, &self.diseases);
        Ok(selector
            .tips_for_scan_result(status, confidence)
            .into_iter()
            .map(|tip| tip.into())
            .collect())
    }

    /// Tips plus the disease entry for one scan outcome.
    pub fn recommend(
        &self,
        status: String,
        confidence: f64,
        disease: Option<String>,
    ) -> Result<FfiRecommendation, LeafCheckError> {
        let outcome = ScanOutcome {
            status: Self::parse_status(&status)?,
            confidence,
            disease,
        };
        let selector = Selector::new(&self.tips, &self.diseases);
        Ok(selector.recommend(&outcome).into())
    }

    // =========================================================================
    // History Operations
    // =========================================================================

    /// Append a scan to the local history.
    pub fn record_scan(
        &self,
        status: String,
        confidence: f64,
        disease: Option<String>,
        image_digest: Option<String>,
    ) -> Result<FfiScanRecord, LeafCheckError> {
        let outcome = ScanOutcome {
            status: Self::parse_status(&status)?,
            confidence,
            disease,
        };
        let mut record = ScanRecord::new(&outcome);
        if let Some(digest) = image_digest {
            record = record.with_image_digest(digest);
        }

        let db = self.db.lock()?;
        db.insert_scan(&record)?;
        Ok(record.into())
    }

    /// Past scans, newest first.
    pub fn scan_history(&self, limit: Option<u32>) -> Result<Vec<FfiScanRecord>, LeafCheckError> {
        let db = self.db.lock()?;
        let records = db.list_scans(limit.map(|n| n as usize))?;
        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    /// The most recent scan, if any.
    pub fn latest_scan(&self) -> Result<Option<FfiScanRecord>, LeafCheckError> {
        let db = self.db.lock()?;
        Ok(db.latest_scan()?.map(|r| r.into()))
    }

    /// Delete the whole history. Returns rows removed.
    pub fn clear_scan_history(&self) -> Result<u64, LeafCheckError> {
        let db = self.db.lock()?;
        Ok(db.clear_scans()?)
    }

    /// Export the full history as JSON (for share/backup screens).
    pub fn export_history_json(&self) -> Result<String, LeafCheckError> {
        let db = self.db.lock()?;
        let records = db.list_scans(None)?;
        Ok(serde_json::to_string(&records)?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe care tip.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub severity: Option<String>,
    pub details: Option<String>,
    pub steps: Vec<String>,
    pub related_tips: Vec<String>,
}

impl From<Tip> for FfiTip {
    fn from(tip: Tip) -> Self {
        Self {
            id: tip.id,
            title: tip.title,
            description: tip.description,
            icon: tip.icon,
            category: tip.category.as_str().to_string(),
            severity: tip.severity.map(|s| s.as_str().to_string()),
            details: tip.details,
            steps: tip.steps,
            related_tips: tip.related_tips,
        }
    }
}

/// FFI-safe browse group.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCategoryListing {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub tips: Vec<FfiTip>,
}

impl From<CategoryListing> for FfiCategoryListing {
    fn from(listing: CategoryListing) -> Self {
        Self {
            id: listing.id,
            name: listing.name,
            icon: listing.icon,
            description: listing.description,
            tips: listing.tips.into_iter().map(|tip| tip.into()).collect(),
        }
    }
}

/// FFI-safe disease entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDiseaseInfo {
    pub disease_type: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub treatments: Vec<FfiTip>,
    pub prevention: Vec<FfiTip>,
}

impl From<DiseaseInfo> for FfiDiseaseInfo {
    fn from(info: DiseaseInfo) -> Self {
        Self {
            disease_type: info.disease_type,
            symptoms: info.symptoms,
            causes: info.causes,
            treatments: info.treatments.into_iter().map(|tip| tip.into()).collect(),
            prevention: info.prevention.into_iter().map(|tip| tip.into()).collect(),
        }
    }
}

/// FFI-safe recommendation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecommendation {
    pub tips: Vec<FfiTip>,
    pub disease: Option<FfiDiseaseInfo>,
}

impl From<Recommendation> for FfiRecommendation {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            tips: recommendation.tips.into_iter().map(|tip| tip.into()).collect(),
            disease: recommendation.disease.map(|info| info.into()),
        }
    }
}

/// FFI-safe scan history entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiScanRecord {
    pub scan_id: String,
    pub status: String,
    pub confidence: f64,
    pub disease: Option<String>,
    pub image_digest: Option<String>,
    pub created_at: String,
}

impl From<ScanRecord> for FfiScanRecord {
    fn from(record: ScanRecord) -> Self {
        Self {
            scan_id: record.scan_id,
            status: record.status.as_str().to_string(),
            confidence: record.confidence,
            disease: record.disease,
            image_digest: record.image_digest,
            created_at: record.created_at,
        }
    }
}
