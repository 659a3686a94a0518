//! Catalog loading from CSV hazard sources
//!
//! Columns are mapped by name; an absent column yields an unset
//! attribute on the record, not a load failure. Failures of the file
//! itself (IO, malformed CSV) surface as `CatalogError` and are handled
//! by `HotspotCatalog::load` via the built-in fallback.

use crate::{HazardRecord, Result, SeverityTag};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Validate latitude is in valid range
fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && lat.is_finite()
}

/// Validate longitude is in valid range
fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon) && lon.is_finite()
}

/// Lenient truthiness for flag columns ("true"/"yes"/"1", "false"/"no"/"0").
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Raw CSV row, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawHotspotRow {
    id: Option<String>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    accident_count: Option<u32>,
    severity: Option<String>,
    country: Option<String>,
    city: Option<String>,
    road_type: Option<String>,
    peak_hours: Option<String>,
    risk_score: Option<f64>,
    fatality_rate: Option<f64>,
    injury_rate: Option<f64>,
    avg_speed_limit: Option<f64>,
    weather_sensitive: Option<String>,
    lighting_condition: Option<String>,
    traffic_density: Option<String>,
    construction_zone: Option<String>,
    toll_booth: Option<String>,
    data_reliability: Option<String>,
    monitoring_cameras: Option<String>,
    emergency_response_time_min: Option<f64>,
}

/// Load hazard records from a CSV file
pub fn load_csv(path: &Path) -> Result<Vec<HazardRecord>> {
    info!("Loading hazard catalog from {:?}", path);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize::<RawHotspotRow>() {
        let row = row?;

        let lat = match row.latitude {
            Some(l) if is_valid_latitude(l) => l,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let lon = match row.longitude {
            Some(l) if is_valid_longitude(l) => l,
            _ => {
                skipped += 1;
                continue;
            }
        };

        records.push(HazardRecord {
            id: row.id,
            name: row.name.unwrap_or_else(|| "Unknown".to_string()),
            latitude: lat,
            longitude: lon,
            accident_count: row.accident_count,
            severity: row
                .severity
                .as_deref()
                .and_then(|s| s.parse::<SeverityTag>().ok()),
            country: row.country,
            city: row.city,
            road_type: row.road_type,
            peak_hours: row.peak_hours,
            risk_score: row.risk_score,
            fatality_rate: row.fatality_rate,
            injury_rate: row.injury_rate,
            avg_speed_limit: row.avg_speed_limit,
            weather_sensitive: row.weather_sensitive.as_deref().and_then(parse_flag),
            lighting_condition: row.lighting_condition,
            traffic_density: row.traffic_density,
            construction_zone: row.construction_zone.as_deref().and_then(parse_flag),
            toll_booth: row.toll_booth.as_deref().and_then(parse_flag),
            data_reliability: row.data_reliability,
            monitoring_cameras: row.monitoring_cameras,
            emergency_response_time_min: row.emergency_response_time_min,
        });
    }

    info!(
        "Loaded {} hazard records ({} skipped for missing coords)",
        records.len(),
        skipped
    );

    Ok(records)
}
