//! Hazard Catalog Library
//!
//! Static catalog of known road-accident hotspots, loaded once at process
//! start from a CSV source and immutable thereafter. A missing or
//! unparsable source never blocks startup: the catalog falls back to a
//! built-in set of well-known Asian hazard locations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

pub mod builtin;
pub mod loader;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown severity tag: {0}")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Qualitative severity tag attached to a hazard location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityTag {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for SeverityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SeverityTag::Critical => "CRITICAL",
            SeverityTag::High => "HIGH",
            SeverityTag::Medium => "MEDIUM",
            SeverityTag::Low => "LOW",
        };
        f.write_str(tag)
    }
}

impl FromStr for SeverityTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Ok(SeverityTag::Critical),
            "HIGH" => Ok(SeverityTag::High),
            "MEDIUM" => Ok(SeverityTag::Medium),
            "LOW" => Ok(SeverityTag::Low),
            other => Err(CatalogError::UnknownSeverity(other.to_string())),
        }
    }
}

/// One entry in the static hotspot catalog.
///
/// Name and coordinates are required; every other attribute mirrors an
/// optional column of the CSV source. An absent column is an absent
/// value, never a load failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accident_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_hours: Option<String>,
    /// Precomputed 0-100 risk score from the source data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatality_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_speed_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_density: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_zone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_booth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_reliability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_cameras: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_response_time_min: Option<f64>,
}

impl HazardRecord {
    /// Minimal record with only the required fields set.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude,
            longitude,
            accident_count: None,
            severity: None,
            country: None,
            city: None,
            road_type: None,
            peak_hours: None,
            risk_score: None,
            fatality_rate: None,
            injury_rate: None,
            avg_speed_limit: None,
            weather_sensitive: None,
            lighting_condition: None,
            traffic_density: None,
            construction_zone: None,
            toll_booth: None,
            data_reliability: None,
            monitoring_cameras: None,
            emergency_response_time_min: None,
        }
    }
}

/// Which initialization path produced the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CatalogOrigin {
    /// Parsed from the CSV source at `path`.
    CsvFile { path: PathBuf, rows: usize },
    /// Source missing or unparsable; built-in fallback data in use.
    BuiltinFallback,
    /// Constructed directly from records already in memory.
    InMemory,
}

/// Read-only hotspot catalog, loaded once per process.
#[derive(Debug, Clone)]
pub struct HotspotCatalog {
    records: Vec<HazardRecord>,
    origin: CatalogOrigin,
}

impl HotspotCatalog {
    /// Load the catalog from a CSV source, falling back to the built-in
    /// dataset if the source is missing or unparsable. Never fails.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match loader::load_csv(path) {
            Ok(records) => {
                info!("Loaded {} hotspots from {:?}", records.len(), path);
                let rows = records.len();
                Self {
                    records,
                    origin: CatalogOrigin::CsvFile {
                        path: path.to_path_buf(),
                        rows,
                    },
                }
            }
            Err(err) => {
                warn!("Failed to load hotspot CSV {:?}: {err}; using built-in fallback", path);
                Self::builtin_fallback()
            }
        }
    }

    /// Catalog built from the fixed fallback table of ~25 well-known
    /// Asian hazard locations.
    pub fn builtin_fallback() -> Self {
        Self {
            records: builtin::fallback_hotspots(),
            origin: CatalogOrigin::BuiltinFallback,
        }
    }

    /// Catalog over records supplied by the caller.
    pub fn from_records(records: Vec<HazardRecord>) -> Self {
        Self {
            records,
            origin: CatalogOrigin::InMemory,
        }
    }

    pub fn records(&self) -> &[HazardRecord] {
        &self.records
    }

    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
