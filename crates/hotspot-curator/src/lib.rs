//! Hotspot Curator Library
//!
//! Offline density-based clustering over raw accident records, used to
//! produce and refresh the hazard catalog source. Nothing here runs on
//! the live request path.

use hazard_catalog::SeverityTag;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cluster;
pub mod export;
pub mod loader;

pub use cluster::detect_clusters;

/// Default neighborhood radius in coordinate degrees (~5.5 km at the
/// equator).
pub const DEFAULT_EPS: f64 = 0.05;

/// Default minimum neighborhood size for a dense region.
pub const DEFAULT_MIN_SAMPLES: usize = 10;

/// Fatal-outcome share above which a cluster is tagged CRITICAL.
pub const CRITICAL_FATAL_RATIO: f64 = 0.3;

/// Cluster size above which a non-critical cluster is tagged HIGH.
pub const HIGH_COUNT_THRESHOLD: usize = 100;

#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CuratorError>;

/// One raw accident report from the input dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccidentRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Outcome severity text from the source (e.g. "Fatal"), if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// Density-clustering parameters.
#[derive(Debug, Clone, Copy)]
pub struct ClusterParams {
    /// Neighborhood radius in coordinate degrees.
    pub eps: f64,
    /// Minimum neighborhood size (query point included) for a core
    /// point.
    pub min_samples: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

/// A dense accident cluster discovered by the detector.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub cluster_id: usize,
    pub center_lat: f64,
    pub center_lon: f64,
    pub count: usize,
    pub fatal_count: usize,
    pub severity: SeverityTag,
}

/// Full curation run output.
#[derive(Debug, Clone, Serialize)]
pub struct CurationResult {
    pub clusters: Vec<Cluster>,
    pub metadata: CurationMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurationMetadata {
    pub input_points: usize,
    pub clustered_points: usize,
    pub clusters_found: usize,
    pub eps: f64,
    pub min_samples: usize,
    pub generated_at: String,
}
