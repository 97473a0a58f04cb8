//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Mumbai Central to New Delhi is approximately 1,165 km as the crow flies
        let mumbai = Point::new(72.8194, 18.9690);
        let delhi = Point::new(77.2194, 28.6430);

        let dist = haversine_distance(mumbai, delhi);
        assert!((dist - 1_165_000.0).abs() < 10_000.0); // Within 10km
    }

    #[test]
    fn test_same_point_is_zero() {
        let point = Point::new(77.5713, 12.9767);
        assert_eq!(haversine_distance(point, point), 0.0);
    }
}
