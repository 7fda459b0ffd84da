//! Real charging-station and landmark locations in Vietnam.
//!
//! Coordinates sourced from OpenStreetMap; all are routable on the public
//! OSRM car profile.

use ev_route_estimator::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Driver start points
// ============================================================================

pub const HOAN_KIEM_LAKE: Location = Location::new("Hoan Kiem Lake", 21.0287797, 105.8524085);
pub const BEN_THANH_MARKET: Location = Location::new("Ben Thanh Market", 10.7725168, 106.6980208);

// ============================================================================
// Hanoi charging stations
// ============================================================================

pub const HANOI_STATIONS: &[Location] = &[
    Location::new("VinFast Vincom Ba Trieu", 21.0113893, 105.8494012),
    Location::new("VinFast Royal City", 21.0026483, 105.8155936),
    Location::new("VinFast Times City", 20.9952310, 105.8680130),
    Location::new("VinFast Vincom Long Bien", 21.0503540, 105.9137380),
    Location::new("VinFast Ocean Park", 20.9943440, 105.9452720),
    Location::new("VinFast Vincom Nguyen Chi Thanh", 21.0238380, 105.8105230),
];

// ============================================================================
// Ho Chi Minh City charging stations
// ============================================================================

pub const SAIGON_STATIONS: &[Location] = &[
    Location::new("VinFast Landmark 81", 10.7949870, 106.7218620),
    Location::new("VinFast Vincom Dong Khoi", 10.7780240, 106.7019510),
    Location::new("VinFast Vincom Thao Dien", 10.8026580, 106.7404650),
    Location::new("VinFast Vincom 3/2", 10.7765060, 106.6812570),
];

/// Destinations keyed by station name, in fixture order.
pub fn destinations(stations: &[Location]) -> Vec<(&'static str, Coordinate)> {
    stations.iter().map(|s| (s.name, s.coord())).collect()
}
