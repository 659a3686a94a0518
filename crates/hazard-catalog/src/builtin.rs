//! Built-in fallback hotspot data
//!
//! Used when the CSV source is missing or unparsable so that process
//! start never depends on the external file being present.

use crate::{HazardRecord, SeverityTag};

/// The fixed fallback set of well-known Asian accident hotspots.
pub fn fallback_hotspots() -> Vec<HazardRecord> {
    let seeds = [
        ("Delhi-NCR Highway", 28.6139, 77.2090, 8532, SeverityTag::Critical, "India", 95.0),
        ("Mumbai-Pune Expressway", 19.0760, 72.8777, 6745, SeverityTag::High, "India", 88.0),
        ("Bangalore-Chennai Highway", 13.0827, 80.2707, 5234, SeverityTag::High, "India", 82.0),
        ("Hyderabad Ring Road", 17.3850, 78.4867, 4890, SeverityTag::High, "India", 80.0),
        ("Kolkata-New Delhi Highway", 22.5726, 88.3639, 4567, SeverityTag::High, "India", 78.0),
        ("Gujarat Industrial Corridor", 23.0225, 72.5714, 3876, SeverityTag::Medium, "India", 70.0),
        ("Jaipur City Center", 26.9124, 75.7873, 3654, SeverityTag::Medium, "India", 68.0),
        ("Chennai Outer Ring Road", 13.1939, 80.1741, 3245, SeverityTag::Medium, "India", 65.0),
        ("Beijing-Zhuhai Expressway", 39.9042, 116.4074, 7654, SeverityTag::High, "China", 85.0),
        ("Shanghai Urban Ring", 31.2304, 121.4737, 6432, SeverityTag::High, "China", 83.0),
        ("Guangzhou Metropolitan", 23.1291, 113.2644, 5123, SeverityTag::Medium, "China", 72.0),
        ("Chengdu Ring Road", 30.5728, 104.0668, 4876, SeverityTag::Medium, "China", 74.0),
        ("Bangkok Highway System", 13.7563, 100.5018, 5345, SeverityTag::High, "Thailand", 81.0),
        ("Pattaya Coastal Road", 12.9251, 100.8863, 2987, SeverityTag::Medium, "Thailand", 66.0),
        ("Jakarta Urban Area", -6.2088, 106.8456, 6234, SeverityTag::High, "Indonesia", 84.0),
        ("Surabaya Highway", -7.2575, 112.7521, 3456, SeverityTag::Medium, "Indonesia", 69.0),
        ("Manila Metropolitan", 14.5995, 120.9842, 4567, SeverityTag::High, "Philippines", 79.0),
        ("Cebu Coastal Highway", 10.3157, 123.8854, 2123, SeverityTag::Medium, "Philippines", 61.0),
        ("Hanoi Urban Ring", 21.0285, 105.8542, 5432, SeverityTag::High, "Vietnam", 80.0),
        ("Ho Chi Minh City Expressway", 10.7769, 106.7009, 4234, SeverityTag::Medium, "Vietnam", 73.0),
        ("Kuala Lumpur Ring", 3.1390, 101.6869, 3876, SeverityTag::Medium, "Malaysia", 70.0),
        ("Penang Bridge Corridor", 5.2833, 100.2167, 2345, SeverityTag::Medium, "Malaysia", 63.0),
        ("Central Business District", 1.3521, 103.8198, 2134, SeverityTag::Low, "Singapore", 45.0),
        ("Seoul Ring Road", 37.5665, 126.9780, 3456, SeverityTag::Medium, "South Korea", 68.0),
        ("Tokyo Metropolitan", 35.6762, 139.6503, 2987, SeverityTag::Medium, "Japan", 62.0),
    ];

    seeds
        .into_iter()
        .map(|(name, lat, lon, count, severity, country, risk_score)| HazardRecord {
            accident_count: Some(count),
            severity: Some(severity),
            country: Some(country.to_string()),
            risk_score: Some(risk_score),
            ..HazardRecord::new(name, lat, lon)
        })
        .collect()
}
