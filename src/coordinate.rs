//! Geographic coordinates and the cache keys derived from them.

use serde::{Deserialize, Serialize};

/// Decimal places kept when deriving a cache key (~11 m at the equator).
pub const KEY_PRECISION: i32 = 4;

/// A point on Earth in decimal degrees.
///
/// Ranges are not validated here; out-of-range values are forwarded to the
/// routing provider, which rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the coordinate with both axes rounded to [`KEY_PRECISION`] decimals.
    pub fn rounded(&self) -> Self {
        Self::new(round_to(self.latitude), round_to(self.longitude))
    }

    /// `lng,lat` as expected in OSRM URL paths.
    pub fn to_lng_lat_string(&self) -> String {
        format!("{:.6},{:.6}", self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Converts a `(lat, lng)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.latitude, coord.longitude)
    }
}

fn round_to(value: f64) -> f64 {
    let factor = 10f64.powi(KEY_PRECISION);
    (value * factor).round() / factor
}

/// Cache key for an ordered origin/destination pair.
///
/// Stored as fixed-point integers at [`KEY_PRECISION`] so that queries within
/// rounding tolerance hash identically. `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    origin: (i64, i64),
    destination: (i64, i64),
}

impl RouteKey {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin: fixed_point(origin),
            destination: fixed_point(destination),
        }
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scale = 10f64.powi(KEY_PRECISION);
        write!(
            f,
            "{:.4},{:.4}-{:.4},{:.4}",
            self.origin.0 as f64 / scale,
            self.origin.1 as f64 / scale,
            self.destination.0 as f64 / scale,
            self.destination.1 as f64 / scale,
        )
    }
}

fn fixed_point(coord: Coordinate) -> (i64, i64) {
    let factor = 10f64.powi(KEY_PRECISION);
    (
        (coord.latitude * factor).round() as i64,
        (coord.longitude * factor).round() as i64,
    )
}
