//! Cluster exports
//!
//! Clusters become either a refreshed hazard-catalog CSV source, a
//! GeoJSON FeatureCollection, or a static HTML review map. The map is a
//! thin export for eyeballing a curation run; live map rendering belongs
//! to an external collaborator.

use crate::{Cluster, Result};
use hazard_catalog::SeverityTag;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Marker colors per severity, matching the live risk-zone palette.
fn severity_color(severity: SeverityTag) -> &'static str {
    match severity {
        SeverityTag::Critical => "#8B0000",
        SeverityTag::High => "#FF0000",
        SeverityTag::Medium => "#FFD700",
        SeverityTag::Low => "#90EE90",
    }
}

/// Export clusters as a GeoJSON FeatureCollection
pub fn to_geojson(clusters: &[Cluster]) -> serde_json::Value {
    let features: Vec<serde_json::Value> = clusters
        .iter()
        .map(|c| {
            serde_json::json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [c.center_lon, c.center_lat]
                },
                "properties": {
                    "cluster_id": c.cluster_id,
                    "count": c.count,
                    "fatal_count": c.fatal_count,
                    "severity": c.severity.to_string(),
                }
            })
        })
        .collect();

    serde_json::json!({
        "type": "FeatureCollection",
        "features": features
    })
}

/// Write clusters as rows of the hazard-catalog CSV source, so a
/// curation run can refresh the catalog the live analyzer loads.
pub fn write_catalog_csv(clusters: &[Cluster], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "id",
        "name",
        "latitude",
        "longitude",
        "accident_count",
        "severity",
    ])?;

    for c in clusters {
        writer.write_record([
            format!("cluster-{}", c.cluster_id),
            format!("Accident Cluster {}", c.cluster_id),
            format!("{:.6}", c.center_lat),
            format!("{:.6}", c.center_lon),
            c.count.to_string(),
            c.severity.to_string(),
        ])?;
    }

    writer.flush()?;
    info!("Wrote {} catalog rows to {:?}", clusters.len(), path);
    Ok(())
}

/// Write a static review map of the clusters.
pub fn write_map_html(clusters: &[Cluster], path: &Path) -> Result<()> {
    let (center_lat, center_lon) = clusters
        .first()
        .map(|c| (c.center_lat, c.center_lon))
        .unwrap_or((23.0, 79.0));

    let mut markers = String::new();
    for c in clusters {
        let radius = (c.count as f64 / 5.0).clamp(5.0, 50.0);
        markers.push_str(&format!(
            "L.circleMarker([{lat:.6}, {lon:.6}], {{radius: {radius:.1}, color: '{color}', fillColor: '{color}', fillOpacity: 0.7}})\n\
             \x20 .bindPopup('Cluster {id}: {count} accidents | Severity: {severity}')\n\
             \x20 .addTo(map);\n",
            lat = c.center_lat,
            lon = c.center_lon,
            radius = radius,
            color = severity_color(c.severity),
            id = c.cluster_id,
            count = c.count,
            severity = c.severity,
        ));
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Accident Hotspot Clusters</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
  #map {{ height: 100vh; }}
  .legend {{
    position: fixed; bottom: 30px; right: 30px; z-index: 1000;
    background: white; border: 2px solid grey; border-radius: 5px;
    padding: 10px; font: 12px sans-serif;
  }}
</style>
</head>
<body>
<div id="map"></div>
<div class="legend">
  <b>Cluster Severity</b><br>
  <span style="color:#8B0000">&#9679;</span> CRITICAL<br>
  <span style="color:#FF0000">&#9679;</span> HIGH<br>
  <span style="color:#FFD700">&#9679;</span> MEDIUM<br>
  <span style="color:#90EE90">&#9679;</span> LOW
</div>
<script>
var map = L.map('map').setView([{center_lat:.6}, {center_lon:.6}], 6);
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png').addTo(map);
{markers}</script>
</body>
</html>
"#,
        center_lat = center_lat,
        center_lon = center_lon,
        markers = markers,
    );

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    Ok(())
}
