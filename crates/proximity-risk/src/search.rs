//! Proximity search over the hotspot catalog

use crate::geo::haversine_km;
use crate::tier::RiskTier;
use hazard_catalog::{HazardRecord, HotspotCatalog};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Search radius applied when the caller does not specify one.
pub const DEFAULT_RADIUS_KM: f64 = 500.0;

/// A catalog hazard within range of a query point, with its computed
/// distance and resolved risk tier. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyHazard {
    pub hazard: HazardRecord,
    /// Km from the query point, rounded to 2 decimals.
    pub distance_km: f64,
    pub tier: RiskTier,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Find all catalog hazards within `radius_km` of the query point,
/// nearest first. Ties keep catalog order. An empty result is a valid
/// outcome, not an error.
pub fn find_nearby(
    catalog: &HotspotCatalog,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> Vec<NearbyHazard> {
    let mut nearby: Vec<NearbyHazard> = catalog
        .records()
        .iter()
        .filter_map(|record| {
            let distance = haversine_km(lat, lon, record.latitude, record.longitude);
            if distance <= radius_km {
                Some(NearbyHazard {
                    hazard: record.clone(),
                    distance_km: round2(distance),
                    tier: RiskTier::classify(distance),
                })
            } else {
                None
            }
        })
        .collect();

    // stable sort keeps catalog order for equal distances
    nearby.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        "{} of {} catalog hazards within {:.1}km of ({:.4}, {:.4})",
        nearby.len(),
        catalog.len(),
        radius_km,
        lat,
        lon
    );

    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_catalog::HazardRecord;

    fn catalog_of(records: Vec<HazardRecord>) -> HotspotCatalog {
        HotspotCatalog::from_records(records)
    }

    #[test]
    fn test_results_sorted_nearest_first_within_radius() {
        let catalog = catalog_of(vec![
            HazardRecord::new("Far", 3.0, 0.0),
            HazardRecord::new("Near", 0.5, 0.0),
            HazardRecord::new("Mid", 1.5, 0.0),
            HazardRecord::new("Outside", 20.0, 0.0),
        ]);

        let nearby = find_nearby(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        let names: Vec<&str> = nearby.iter().map(|h| h.hazard.name.as_str()).collect();
        assert_eq!(names, ["Near", "Mid", "Far"]);
        for pair in nearby.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        for h in &nearby {
            assert!(h.distance_km <= DEFAULT_RADIUS_KM);
        }
    }

    #[test]
    fn test_equal_distances_keep_catalog_order() {
        // Mirror points east and west of the query are equidistant.
        let catalog = catalog_of(vec![
            HazardRecord::new("East", 0.0, 1.0),
            HazardRecord::new("West", 0.0, -1.0),
        ]);

        let nearby = find_nearby(&catalog, 0.0, 0.0, 500.0);
        assert_eq!(nearby.len(), 2);
        assert_eq!(nearby[0].hazard.name, "East");
        assert_eq!(nearby[1].hazard.name, "West");
    }

    #[test]
    fn test_zero_radius_matches_only_exact_point() {
        let catalog = catalog_of(vec![
            HazardRecord::new("Here", 19.0760, 72.8777),
            HazardRecord::new("Close", 19.0761, 72.8777),
        ]);

        let nearby = find_nearby(&catalog, 19.0760, 72.8777, 0.0);
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].hazard.name, "Here");
        assert_eq!(nearby[0].distance_km, 0.0);
        assert_eq!(nearby[0].tier, RiskTier::RedZone);
    }

    #[test]
    fn test_tier_attached_per_distance_band() {
        // Points along the equator: 1 degree of longitude ≈ 111.19 km.
        let catalog = catalog_of(vec![
            HazardRecord::new("InRed", 0.0, 0.05),
            HazardRecord::new("InCritical", 0.0, 0.3),
            HazardRecord::new("InMedium", 0.0, 0.7),
            HazardRecord::new("InLow", 0.0, 2.0),
            HazardRecord::new("BeyondBands", 0.0, 3.5),
        ]);

        let nearby = find_nearby(&catalog, 0.0, 0.0, 500.0);
        let tiers: Vec<RiskTier> = nearby.iter().map(|h| h.tier).collect();
        assert_eq!(
            tiers,
            [
                RiskTier::RedZone,
                RiskTier::CriticalZone,
                RiskTier::MediumHigh,
                RiskTier::LowZone,
                RiskTier::NoRisk,
            ]
        );
    }

    #[test]
    fn test_empty_when_nothing_in_range() {
        let catalog = catalog_of(vec![HazardRecord::new("Tokyo", 35.6762, 139.6503)]);
        // Mid-Pacific query point
        let nearby = find_nearby(&catalog, 0.0, -160.0, 500.0);
        assert!(nearby.is_empty());
    }

    #[test]
    fn test_distance_rounded_to_two_decimals() {
        let catalog = catalog_of(vec![HazardRecord::new("Spot", 0.0, 0.1234)]);
        let nearby = find_nearby(&catalog, 0.0, 0.0, 500.0);
        let d = nearby[0].distance_km;
        assert_eq!((d * 100.0).round() / 100.0, d);
    }
}
