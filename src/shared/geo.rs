//! Great-circle distance helpers shared by the neighborhood resolver,
//! proximity filters, and alert fan-out.
//!
//! Proximity queries run as a coarse bounding-box predicate in SQL and an
//! exact Haversine filter on the fetched rows.

/// Earth's radius in meters (for Haversine formula)
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Meters per statute mile; caller-facing radii are expressed in miles.
pub const METERS_PER_MILE: f64 = 1_609.34;

/// Calculate Haversine distance between two points in meters.
/// Arguments are (lat, lng) pairs in degrees.
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_METERS * c
}

pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Bounding box around a point, as (lat_min, lat_max, lng_min, lng_max).
///
/// 1 degree of latitude is approximately 111 km; the longitude span widens
/// with latitude. The box deliberately over-covers so the Haversine filter
/// never misses a candidate.
pub fn bounding_box(lat: f64, lng: f64, radius_meters: f64) -> (f64, f64, f64, f64) {
    let lat_delta = (radius_meters / 111_000.0) * 2.0;
    let lng_delta = lat_delta / lat.to_radians().cos().abs().max(0.01);

    (
        lat - lat_delta,
        lat + lat_delta,
        lng - lng_delta,
        lng + lng_delta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_known_distance() {
        // Addis Ababa city center to Bole, roughly 5 km
        let distance = haversine_distance(9.0320, 38.7469, 8.9950, 38.7890);
        assert!(distance > 4_000.0 && distance < 8_000.0);
    }

    #[test]
    fn haversine_same_point() {
        let distance = haversine_distance(9.03, 38.74, 9.03, 38.74);
        assert!(distance < 1.0);
    }

    #[test]
    fn haversine_symmetry() {
        let d1 = haversine_distance(40.7128, -74.0060, 34.0522, -118.2437);
        let d2 = haversine_distance(34.0522, -118.2437, 40.7128, -74.0060);
        assert!((d1 - d2).abs() < 1e-6);
        // NYC to LA is about 3,940 km
        assert!(d1 > 3_900_000.0 && d1 < 4_000_000.0);
    }

    #[test]
    fn miles_conversion() {
        assert!((miles_to_meters(5.0) - 8_046.7).abs() < 0.1);
    }

    #[test]
    fn bounding_box_contains_radius() {
        let (lat_min, lat_max, lng_min, lng_max) = bounding_box(9.03, 38.74, 5000.0);
        assert!(lat_min < 9.03 && lat_max > 9.03);
        assert!(lng_min < 38.74 && lng_max > 38.74);
        // A point 5km due north must fall inside the box
        let north_lat = 9.03 + 5000.0 / 111_000.0;
        assert!(north_lat < lat_max);
    }
}
