//! Provider seam for road routing.
//!
//! Kept minimal so the estimation service can run against OSRM in production
//! and against in-memory fakes in tests.

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;

/// A single route as reported by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub geometry: Option<Polyline>,
}

/// Computes a road route between two coordinates.
///
/// Implementations perform one attempt per call; retries are the caller's
/// concern.
pub trait RouteProvider {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<ProviderRoute, RouteError>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<ProviderRoute, RouteError> {
        (**self).route(origin, destination)
    }
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<ProviderRoute, RouteError> {
        (**self).route(origin, destination)
    }
}
