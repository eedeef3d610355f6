//! Polyline of a day's route for map rendering.
//!
//! Holds decoded coordinates of located stops in visiting order. Encoding to
//! a compact polyline string is left to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::model::{Coordinate, Stop};

/// Ordered route coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Create a polyline from coordinates already in visiting order.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Coordinates of the located stops, in the order given. Unlocated stops are skipped.
    pub fn from_stops(stops: &[Stop]) -> Self {
        Self::new(stops.iter().filter_map(|stop| stop.coordinate).collect())
    }

    /// The coordinates as a slice.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Sum of great-circle segment lengths.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|segment| distance_km(segment[0], segment[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_from_stops_skips_unlocated() {
        let stops = vec![
            Stop::new("a", Category::Sightseeing).with_location(38.5, -120.2),
            Stop::new("b", Category::Meal),
            Stop::new("c", Category::Activity).with_location(40.7, -120.95),
        ];
        let polyline = Polyline::from_stops(&stops);
        assert_eq!(
            polyline.points(),
            &[Coordinate::new(38.5, -120.2), Coordinate::new(40.7, -120.95)][..]
        );
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::new(vec![]);
        assert!(polyline.points().is_empty());
        assert_eq!(polyline.length_km(), 0.0);
    }

    #[test]
    fn test_length() {
        let polyline = Polyline::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 2.0),
        ]);
        assert!((polyline.length_km() - 2.0 * 111.19).abs() < 0.1);
    }
}
