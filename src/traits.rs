//! Collaborator seams for the itinerary planner.
//!
//! The optimizer only needs distances; enrichment only needs place details.
//! Concrete providers live in `haversine` and `places`.

use crate::model::Coordinate;
use crate::places::PlaceDetails;

/// Provides a distance matrix (kilometers) for a set of coordinates.
///
/// The matrix is indexed by the provided coordinate order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> Vec<Vec<f64>>;
}

/// Resolves a generated place name to real-world details.
pub trait PlaceLookup {
    /// `destination` narrows the search (e.g. "Seoul"); may be empty.
    fn lookup(&self, place_name: &str, destination: &str) -> Option<PlaceDetails>;
}
