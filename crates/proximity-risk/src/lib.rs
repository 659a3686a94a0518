//! Proximity Risk Library
//!
//! Distance-based hazard proximity search and travel-permission
//! decisioning over the static hotspot catalog. Every operation here is
//! a pure computation over the immutable catalog: no locking, no IO,
//! no retained per-request state. Coordinate validation is the calling
//! layer's job; the geometry has undefined behavior outside valid
//! ranges.

pub mod analyzer;
pub mod geo;
pub mod search;
pub mod tier;

pub use analyzer::{
    analyze, AnalysisStatus, AreaAnalysis, RiskBreakdown, TravelVerdict, MAX_RANKED_HOTSPOTS,
};
pub use geo::haversine_km;
pub use search::{find_nearby, NearbyHazard, DEFAULT_RADIUS_KM};
pub use tier::{RiskTier, Severity, TierInfo};
