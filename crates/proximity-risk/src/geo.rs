//! Great-circle distance

/// Earth radius in km
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in km.
///
/// Inputs are decimal degrees. Coordinates outside the valid
/// latitude/longitude ranges are undefined behavior; callers validate
/// upstream.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distance() {
        // NYC to London: ~5,570 km
        let dist = haversine_km(40.7128, -74.0060, 51.5074, -0.1278);
        assert!((dist - 5570.0).abs() < 50.0);

        // Delhi to Mumbai: ~1,150 km
        let dist = haversine_km(28.6139, 77.2090, 19.0760, 72.8777);
        assert!((dist - 1150.0).abs() < 30.0);
    }

    #[test]
    fn test_same_point_is_zero() {
        let dist = haversine_km(19.0760, 72.8777, 19.0760, 72.8777);
        assert!(dist.abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_km(13.7563, 100.5018, -6.2088, 106.8456);
        let d2 = haversine_km(-6.2088, 106.8456, 13.7563, 100.5018);
        assert!((d1 - d2).abs() < 1e-9);
    }
}
