//! OSRM HTTP adapter for point-to-point routes.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::traits::{ProviderRoute, RouteProvider};

/// Public OSRM demo server.
pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Defaults overlaid with `OSRM_BASE_URL`, `OSRM_PROFILE` and
    /// `OSRM_TIMEOUT_SECS`. Unparseable timeouts are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup("OSRM_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(profile) = lookup("OSRM_PROFILE") {
            config.profile = profile;
        }
        if let Some(timeout) = lookup("OSRM_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout_secs = timeout;
        }
        config
    }

    /// Route request URL with full GeoJSON geometry.
    pub fn route_url(&self, origin: Coordinate, destination: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{};{}?overview=full&geometries=geojson",
            self.base_url,
            self.profile,
            origin.to_lng_lat_string(),
            destination.to_lng_lat_string()
        )
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, RouteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteProvider for OsrmClient {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<ProviderRoute, RouteError> {
        let url = self.config.route_url(origin, destination);
        tracing::debug!(%url, "requesting OSRM route");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        parse_route_response(status.as_u16(), &body)
    }
}

/// Interprets an OSRM `/route` reply.
///
/// OSRM reports semantic failures (`NoRoute`, `InvalidQuery`, ...) as 4xx with
/// a JSON `code`, so those bodies are decoded before the status is judged.
pub fn parse_route_response(status: u16, body: &str) -> Result<ProviderRoute, RouteError> {
    if status == 429 || status >= 500 {
        return Err(RouteError::HttpStatus {
            status,
            body: body.to_string(),
        });
    }

    let parsed: OsrmRouteResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !(200..300).contains(&status) => {
            return Err(RouteError::HttpStatus {
                status,
                body: body.to_string(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    if parsed.code != "Ok" {
        return Err(RouteError::Provider {
            code: parsed.code,
            message: parsed.message.unwrap_or_default(),
        });
    }

    let route = parsed.routes.into_iter().next().ok_or(RouteError::NoRoute)?;
    Ok(ProviderRoute {
        distance_meters: route.distance,
        duration_seconds: route.duration,
        geometry: route
            .geometry
            .map(|geometry| Polyline::from_geojson(&geometry.coordinates)),
    })
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: Option<OsrmGeometry>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
