//! ev-route-estimator
//!
//! Distance and travel-time estimates between charging stations and drivers,
//! backed by OSRM road routes with a cached, straight-line fallback.

pub mod cache;
pub mod coordinate;
pub mod error;
pub mod format;
pub mod haversine;
pub mod osrm;
pub mod polyline;
pub mod retry;
pub mod service;
pub mod traits;

pub use coordinate::Coordinate;
pub use error::RouteError;
pub use format::{format_distance, format_duration};
pub use osrm::{OsrmClient, OsrmConfig};
pub use service::{EstimateSource, RouteEstimationService, RouteResult, ServiceOptions, TravelEstimate};
pub use traits::{ProviderRoute, RouteProvider};
