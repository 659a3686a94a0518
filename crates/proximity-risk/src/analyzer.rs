//! Aggregate area risk analysis
//!
//! Consumes the proximity-search result and derives the overall verdict
//! for the queried area: risk level, travel permission, per-tier
//! breakdown, closest danger, and a composed recommendation.

use crate::search::{find_nearby, NearbyHazard};
use crate::tier::RiskTier;
use hazard_catalog::HotspotCatalog;
use serde::Serialize;
use tracing::debug;

/// Ranked hotspot list is truncated to this many entries; the total
/// count stays untruncated.
pub const MAX_RANKED_HOTSPOTS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalysisStatus {
    #[serde(rename = "NO_HOTSPOTS")]
    NoHotspots,
    #[serde(rename = "ANALYSIS_COMPLETE")]
    AnalysisComplete,
}

/// Hazard counts per tier bucket within the searched radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    pub extreme_critical_red_zones: usize,
    pub critical_zones: usize,
    pub medium_risk_zones: usize,
    pub low_risk_zones: usize,
}

impl RiskBreakdown {
    fn tally(nearby: &[NearbyHazard]) -> Self {
        let mut breakdown = Self::default();
        for h in nearby {
            match h.tier {
                RiskTier::RedZone => breakdown.extreme_critical_red_zones += 1,
                RiskTier::CriticalZone => breakdown.critical_zones += 1,
                RiskTier::MediumHigh | RiskTier::MediumModerate => {
                    breakdown.medium_risk_zones += 1
                }
                RiskTier::LowZone => breakdown.low_risk_zones += 1,
                RiskTier::NoRisk => {}
            }
        }
        breakdown
    }
}

/// Aggregate travel-permission verdict for the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelVerdict {
    NotAllowed,
    Restricted,
    AllowedWithCaution,
    Allowed,
    Clear,
}

impl TravelVerdict {
    /// Strict precedence: the worst occupied bucket decides.
    fn from_breakdown(breakdown: &RiskBreakdown) -> Self {
        if breakdown.extreme_critical_red_zones > 0 {
            TravelVerdict::NotAllowed
        } else if breakdown.critical_zones > 0 {
            TravelVerdict::Restricted
        } else if breakdown.medium_risk_zones > 0 {
            TravelVerdict::AllowedWithCaution
        } else if breakdown.low_risk_zones > 0 {
            TravelVerdict::Allowed
        } else {
            TravelVerdict::Clear
        }
    }

    pub fn permission(self) -> &'static str {
        match self {
            TravelVerdict::NotAllowed => "⛔ NOT ALLOWED - Extreme danger zones nearby",
            TravelVerdict::Restricted => "⚠️ RESTRICTED - High caution required",
            TravelVerdict::AllowedWithCaution => "⚠️ ALLOWED WITH CAUTION - Drive carefully",
            TravelVerdict::Allowed => "✅ ALLOWED - Travel with normal precautions",
            TravelVerdict::Clear => "✅ ALLOWED - Safe to travel anywhere",
        }
    }

    pub fn risk_level(self) -> &'static str {
        match self {
            TravelVerdict::NotAllowed => "EXTREME - DO NOT TRAVEL",
            TravelVerdict::Restricted => "CRITICAL - TRAVEL WITH EXTREME CARE",
            TravelVerdict::AllowedWithCaution => "MEDIUM - ELEVATED ALERTNESS REQUIRED",
            TravelVerdict::Allowed => "LOW - MINIMAL RISK",
            TravelVerdict::Clear => "NONE - NO RISK",
        }
    }
}

/// Per-request aggregate analysis, discarded after the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaAnalysis {
    pub status: AnalysisStatus,
    pub verdict: TravelVerdict,
    pub overall_risk_level: String,
    pub travel_permission: String,
    pub message: String,
    pub nearby_hotspots: Vec<NearbyHazard>,
    pub total_nearby: usize,
    pub risk_breakdown: RiskBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_danger: Option<NearbyHazard>,
    pub recommendation: String,
}

impl AreaAnalysis {
    /// Terminal verdict when nothing is within the searched radius.
    fn no_hotspots() -> Self {
        Self {
            status: AnalysisStatus::NoHotspots,
            verdict: TravelVerdict::Allowed,
            overall_risk_level: "NO RISK - SAFE TO TRAVEL".to_string(),
            travel_permission: "✅ ALLOWED - You can travel anywhere in this region safely"
                .to_string(),
            message: "✅ CLEAR: No accident hotspots detected in this region".to_string(),
            nearby_hotspots: Vec::new(),
            total_nearby: 0,
            risk_breakdown: RiskBreakdown::default(),
            closest_danger: None,
            recommendation: "Safe to travel. Maintain standard driving precautions.".to_string(),
        }
    }
}

/// Analyze the area around a query point: proximity search, tier
/// breakdown, and the aggregate travel-permission verdict.
pub fn analyze(catalog: &HotspotCatalog, lat: f64, lon: f64, radius_km: f64) -> AreaAnalysis {
    let nearby = find_nearby(catalog, lat, lon, radius_km);

    if nearby.is_empty() {
        debug!("No hotspots within {:.1}km of ({:.4}, {:.4})", radius_km, lat, lon);
        return AreaAnalysis::no_hotspots();
    }

    let breakdown = RiskBreakdown::tally(&nearby);
    let verdict = TravelVerdict::from_breakdown(&breakdown);

    let closest = nearby[0].clone();
    let recommendation = format!(
        "{} - {}",
        verdict.permission(),
        closest.tier.info().travel_recommendation
    );
    let message = format!("Found {} hotspots within {}km", nearby.len(), radius_km);
    let total_nearby = nearby.len();

    let mut ranked = nearby;
    ranked.truncate(MAX_RANKED_HOTSPOTS);

    AreaAnalysis {
        status: AnalysisStatus::AnalysisComplete,
        verdict,
        overall_risk_level: verdict.risk_level().to_string(),
        travel_permission: verdict.permission().to_string(),
        message,
        nearby_hotspots: ranked,
        total_nearby,
        risk_breakdown: breakdown,
        closest_danger: Some(closest),
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DEFAULT_RADIUS_KM;
    use hazard_catalog::HazardRecord;

    // Points along the equator: 1 degree of longitude ≈ 111.19 km.
    fn record_at_km(name: &str, km: f64) -> HazardRecord {
        HazardRecord::new(name, 0.0, km / 111.19)
    }

    #[test]
    fn test_mumbai_scenario_against_fallback_catalog() {
        let catalog = HotspotCatalog::builtin_fallback();
        let analysis = analyze(&catalog, 19.0760, 72.8777, DEFAULT_RADIUS_KM);

        assert_eq!(analysis.status, AnalysisStatus::AnalysisComplete);
        assert_eq!(analysis.verdict, TravelVerdict::NotAllowed);
        assert_eq!(analysis.overall_risk_level, "EXTREME - DO NOT TRAVEL");
        assert_eq!(
            analysis.travel_permission,
            "⛔ NOT ALLOWED - Extreme danger zones nearby"
        );

        let closest = analysis.closest_danger.as_ref().unwrap();
        assert_eq!(closest.hazard.name, "Mumbai-Pune Expressway");
        assert_eq!(closest.distance_km, 0.0);
        assert_eq!(closest.tier, RiskTier::RedZone);
        assert!(analysis.risk_breakdown.extreme_critical_red_zones >= 1);
    }

    #[test]
    fn test_mid_pacific_is_no_hotspots() {
        let catalog = HotspotCatalog::builtin_fallback();
        let analysis = analyze(&catalog, 0.0, -160.0, DEFAULT_RADIUS_KM);

        assert_eq!(analysis.status, AnalysisStatus::NoHotspots);
        assert_eq!(analysis.overall_risk_level, "NO RISK - SAFE TO TRAVEL");
        assert_eq!(analysis.total_nearby, 0);
        assert!(analysis.nearby_hotspots.is_empty());
        assert!(analysis.closest_danger.is_none());
        assert_eq!(analysis.risk_breakdown, RiskBreakdown::default());
    }

    #[test]
    fn test_empty_catalog_is_no_hotspots() {
        let catalog = HotspotCatalog::from_records(Vec::new());
        let analysis = analyze(&catalog, 19.0760, 72.8777, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.status, AnalysisStatus::NoHotspots);
        assert_eq!(
            analysis.recommendation,
            "Safe to travel. Maintain standard driving precautions."
        );
    }

    #[test]
    fn test_verdict_precedence() {
        // critical beats medium and low
        let catalog = HotspotCatalog::from_records(vec![
            record_at_km("critical", 30.0),
            record_at_km("medium", 120.0),
            record_at_km("low", 250.0),
        ]);
        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.verdict, TravelVerdict::Restricted);
        assert_eq!(
            analysis.overall_risk_level,
            "CRITICAL - TRAVEL WITH EXTREME CARE"
        );

        // medium beats low
        let catalog = HotspotCatalog::from_records(vec![
            record_at_km("medium", 120.0),
            record_at_km("low", 250.0),
        ]);
        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.verdict, TravelVerdict::AllowedWithCaution);

        // low alone
        let catalog = HotspotCatalog::from_records(vec![record_at_km("low", 250.0)]);
        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.verdict, TravelVerdict::Allowed);
        assert_eq!(analysis.overall_risk_level, "LOW - MINIMAL RISK");

        // only beyond-band hazards in radius: nothing occupies a bucket
        let catalog = HotspotCatalog::from_records(vec![record_at_km("distant", 400.0)]);
        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.verdict, TravelVerdict::Clear);
        assert_eq!(analysis.overall_risk_level, "NONE - NO RISK");
        assert_eq!(analysis.total_nearby, 1);
    }

    #[test]
    fn test_both_medium_severities_share_a_bucket() {
        let catalog = HotspotCatalog::from_records(vec![
            record_at_km("medium-high", 80.0),
            record_at_km("medium-moderate", 130.0),
        ]);
        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.risk_breakdown.medium_risk_zones, 2);
        assert_eq!(analysis.verdict, TravelVerdict::AllowedWithCaution);
    }

    #[test]
    fn test_ranked_list_truncated_but_total_is_not() {
        let records = (0..20)
            .map(|i| record_at_km(&format!("spot-{i}"), 5.0 + i as f64))
            .collect();
        let catalog = HotspotCatalog::from_records(records);

        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(analysis.nearby_hotspots.len(), MAX_RANKED_HOTSPOTS);
        assert_eq!(analysis.total_nearby, 20);
        assert_eq!(analysis.message, "Found 20 hotspots within 500km");
    }

    #[test]
    fn test_recommendation_composes_permission_and_closest_advice() {
        let catalog = HotspotCatalog::from_records(vec![record_at_km("spot", 5.0)]);
        let analysis = analyze(&catalog, 0.0, 0.0, DEFAULT_RADIUS_KM);
        assert_eq!(
            analysis.recommendation,
            "⛔ NOT ALLOWED - Extreme danger zones nearby - ⛔ DANGER: DO NOT TRAVEL - Extreme accident risk in this area"
        );
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let catalog = HotspotCatalog::builtin_fallback();
        let first = analyze(&catalog, 19.0760, 72.8777, DEFAULT_RADIUS_KM);
        let second = analyze(&catalog, 19.0760, 72.8777, DEFAULT_RADIUS_KM);
        assert_eq!(first, second);
    }
}
