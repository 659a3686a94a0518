//! Accident record loading from CSV
//!
//! The input needs latitude/longitude columns; the outcome severity
//! column is optional. Rows without usable coordinates are dropped.

use crate::{AccidentRecord, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Raw CSV row, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAccidentRow {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(rename = "Accident Severity", alias = "severity")]
    severity: Option<String>,
}

/// Load accident records from a CSV file
pub fn load_accident_csv(path: &Path) -> Result<Vec<AccidentRecord>> {
    info!("Loading accident records from {:?}", path);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize::<RawAccidentRow>() {
        let row = row?;
        let (Some(lat), Some(lon)) = (row.latitude, row.longitude) else {
            skipped += 1;
            continue;
        };
        if !lat.is_finite() || !lon.is_finite() {
            skipped += 1;
            continue;
        }

        let severity = row
            .severity
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        records.push(AccidentRecord {
            latitude: lat,
            longitude: lon,
            severity,
        });
    }

    info!(
        "Loaded {} accident records ({} skipped for missing coords)",
        records.len(),
        skipped
    );

    Ok(records)
}
