//! Distance-band risk classification
//!
//! Six fixed bands keyed by an upper distance bound, evaluated in
//! ascending order; the first satisfying band wins. Labels,
//! recommendations, and colors are wire-contract strings and must stay
//! byte-identical across releases.

use serde::{Serialize, Serializer};

/// Severity word carried by a risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Extreme,
    Critical,
    High,
    Medium,
    Low,
    None,
}

/// Fixed metadata carried by each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierInfo {
    pub risk_level: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub severity: Severity,
    pub travel_recommendation: &'static str,
    pub confidence: u8,
}

/// One of the six ordered distance bands.
///
/// The two middle bands share the "MEDIUM RISK ZONE" label but differ in
/// severity and confidence; existing clients depend on that duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    /// 0-10 km
    RedZone,
    /// 10-50 km
    CriticalZone,
    /// 50-100 km
    MediumHigh,
    /// 100-150 km
    MediumModerate,
    /// 150-300 km
    LowZone,
    /// beyond 300 km
    NoRisk,
}

impl RiskTier {
    /// Classify a non-negative distance into exactly one tier.
    pub fn classify(distance_km: f64) -> Self {
        if distance_km <= 10.0 {
            RiskTier::RedZone
        } else if distance_km <= 50.0 {
            RiskTier::CriticalZone
        } else if distance_km <= 100.0 {
            RiskTier::MediumHigh
        } else if distance_km <= 150.0 {
            RiskTier::MediumModerate
        } else if distance_km <= 300.0 {
            RiskTier::LowZone
        } else {
            RiskTier::NoRisk
        }
    }

    pub fn info(self) -> TierInfo {
        match self {
            RiskTier::RedZone => TierInfo {
                risk_level: "HIGH CRITICAL RED ZONE",
                color: "#8B0000",
                emoji: "🔴🔴🔴",
                severity: Severity::Extreme,
                travel_recommendation:
                    "⛔ DANGER: DO NOT TRAVEL - Extreme accident risk in this area",
                confidence: 95,
            },
            RiskTier::CriticalZone => TierInfo {
                risk_level: "CRITICAL ZONE",
                color: "#FF0000",
                emoji: "🔴🔴",
                severity: Severity::Critical,
                travel_recommendation:
                    "⚠️ HIGH ALERT: Avoid this area if possible. If necessary, drive extremely carefully",
                confidence: 90,
            },
            RiskTier::MediumHigh => TierInfo {
                risk_level: "MEDIUM RISK ZONE",
                color: "#FFD700",
                emoji: "🟡",
                severity: Severity::High,
                travel_recommendation:
                    "⚠️ CAUTION: Elevated accident risk. Increase alertness and reduce speed",
                confidence: 75,
            },
            RiskTier::MediumModerate => TierInfo {
                risk_level: "MEDIUM RISK ZONE",
                color: "#FFD700",
                emoji: "🟡",
                severity: Severity::Medium,
                travel_recommendation: "⚠️ ALERT: Moderate accident risk. Stay vigilant",
                confidence: 60,
            },
            RiskTier::LowZone => TierInfo {
                risk_level: "LOW RISK ZONE",
                color: "#90EE90",
                emoji: "🟢",
                severity: Severity::Low,
                travel_recommendation:
                    "✅ SAFE: Low accident risk. Travel normally with standard precautions",
                confidence: 40,
            },
            RiskTier::NoRisk => TierInfo {
                risk_level: "NO RISK - SAFE TO TRAVEL",
                color: "#00AA00",
                emoji: "✅",
                severity: Severity::None,
                travel_recommendation:
                    "✅ CLEAR: No significant accident hotspots nearby. You can travel anywhere safely",
                confidence: 10,
            },
        }
    }

    pub fn risk_level(self) -> &'static str {
        self.info().risk_level
    }
}

impl Serialize for RiskTier {
    /// Tiers serialize as their full metadata block so downstream
    /// consumers (API layer, map renderer) get the wire strings directly.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.info().serialize(serializer)
    }
}
