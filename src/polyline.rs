//! Route path geometry.
//!
//! Providers send GeoJSON-style `[lng, lat]` pairs; internally points are kept
//! as `(lat, lng)` to match [`Coordinate`](crate::coordinate::Coordinate).

use serde::{Deserialize, Serialize};

/// A route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON `LineString` coordinates (`[lng, lat]`).
    pub fn from_geojson(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates.iter().map(|[lng, lat]| (*lat, *lng)).collect(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}
