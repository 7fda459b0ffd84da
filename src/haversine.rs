//! Straight-line fallback used when road routing is unavailable.
//!
//! Uses great-circle distance and an assumed average speed.
//! Less accurate than OSRM (ignores roads) but always available.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Average driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Distance and duration derived purely from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackEstimate {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

/// Shared fallback for both distance and duration estimators.
pub fn fallback_estimate(origin: Coordinate, destination: Coordinate, speed_kmh: f64) -> FallbackEstimate {
    let distance_km = haversine_km(origin, destination);
    FallbackEstimate {
        distance_km,
        duration_minutes: distance_km / speed_kmh * 60.0,
    }
}
