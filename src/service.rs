//! Route estimation service: cached road routes with a straight-line fallback.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::cache::RouteCache;
use crate::coordinate::{Coordinate, RouteKey};
use crate::error::RouteError;
use crate::haversine::{self, DEFAULT_SPEED_KMH, FallbackEstimate};
use crate::polyline::Polyline;
use crate::retry::RetryPolicy;
use crate::traits::{ProviderRoute, RouteProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceOptions {
    /// Destinations requested concurrently per wave in `get_routes_for_many`.
    pub batch_size: usize,
    /// Pause between waves, in milliseconds.
    pub batch_delay_ms: u64,
    /// Assumed speed for the straight-line fallback.
    pub fallback_speed_kmh: f64,
    pub retry: RetryPolicy,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            batch_size: 3,
            batch_delay_ms: 500,
            fallback_speed_kmh: DEFAULT_SPEED_KMH,
            retry: RetryPolicy::default(),
        }
    }
}

impl ServiceOptions {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

/// Outcome of one route lookup. Failures are data, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub geometry: Option<Polyline>,
    pub success: bool,
    pub error_reason: Option<String>,
}

impl RouteResult {
    pub fn found(distance_meters: f64, duration_seconds: f64, geometry: Option<Polyline>) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            geometry,
            success: true,
            error_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            distance_meters: 0.0,
            duration_seconds: 0.0,
            geometry: None,
            success: false,
            error_reason: Some(reason.into()),
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds / 60.0
    }
}

impl From<ProviderRoute> for RouteResult {
    fn from(route: ProviderRoute) -> Self {
        Self::found(route.distance_meters, route.duration_seconds, route.geometry)
    }
}

/// Where a [`TravelEstimate`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateSource {
    /// Road network route from the provider.
    Road,
    /// Haversine distance at the fallback speed.
    StraightLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub source: EstimateSource,
}

/// Owns a provider, its route cache and tuning options.
///
/// The cache lives as long as the service; drop the service or call
/// [`clear_cache`](Self::clear_cache) to discard it.
#[derive(Debug)]
pub struct RouteEstimationService<P> {
    provider: P,
    cache: RouteCache,
    options: ServiceOptions,
    /// One worker per wave slot so a whole wave is in flight at once.
    pool: ThreadPool,
}

impl<P: RouteProvider> RouteEstimationService<P> {
    pub fn new(provider: P) -> Result<Self, RouteError> {
        Self::with_options(provider, ServiceOptions::default())
    }

    pub fn with_options(provider: P, options: ServiceOptions) -> Result<Self, RouteError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(options.batch_size.max(1))
            .thread_name(|index| format!("route-wave-{}", index))
            .build()?;

        Ok(Self {
            provider,
            cache: RouteCache::new(),
            options,
            pool,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub fn cached_routes(&self) -> usize {
        self.cache.len()
    }

    /// Looks up a road route, serving repeated queries from the cache.
    ///
    /// Only successful results are cached. Failures come back with
    /// `success == false` and a reason; no fallback is applied here.
    pub fn get_route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult {
        let key = RouteKey::new(origin, destination);
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(%key, "route cache hit");
            return hit;
        }

        tracing::debug!(%key, "route cache miss");
        match self.options.retry.run(|| self.provider.route(origin, destination)) {
            Ok(route) => {
                let result = RouteResult::from(route);
                self.cache.insert(key, result.clone());
                result
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "route lookup failed");
                RouteResult::failed(err.to_string())
            }
        }
    }

    /// Road estimate when available, otherwise the straight-line fallback.
    pub fn estimate(&self, origin: Coordinate, destination: Coordinate) -> TravelEstimate {
        let route = self.get_route(origin, destination);
        if route.success {
            return TravelEstimate {
                distance_km: route.distance_km(),
                duration_minutes: route.duration_minutes(),
                source: EstimateSource::Road,
            };
        }

        let FallbackEstimate {
            distance_km,
            duration_minutes,
        } = self.fallback_estimate(origin, destination);
        TravelEstimate {
            distance_km,
            duration_minutes,
            source: EstimateSource::StraightLine,
        }
    }

    pub fn estimate_distance_km(&self, origin: Coordinate, destination: Coordinate) -> f64 {
        self.estimate(origin, destination).distance_km
    }

    pub fn estimate_duration_minutes(&self, origin: Coordinate, destination: Coordinate) -> f64 {
        self.estimate(origin, destination).duration_minutes
    }

    pub fn fallback_estimate(&self, origin: Coordinate, destination: Coordinate) -> FallbackEstimate {
        haversine::fallback_estimate(origin, destination, self.options.fallback_speed_kmh)
    }

    pub fn clear_cache(&self) {
        let dropped = self.cache.len();
        self.cache.clear();
        tracing::info!(dropped, "route cache cleared");
    }
}

impl<P: RouteProvider + Sync> RouteEstimationService<P> {
    /// Routes from `origin` to every destination, in waves of `batch_size`.
    ///
    /// Each wave runs concurrently on the service's own pool and completes
    /// before the next one starts, with `batch_delay` in between. Failed lookups keep their slot as
    /// `success == false`. Duplicate ids keep the last destination's result.
    pub fn get_routes_for_many<Id>(
        &self,
        origin: Coordinate,
        destinations: &[(Id, Coordinate)],
    ) -> HashMap<Id, RouteResult>
    where
        Id: Clone + Eq + Hash + Send + Sync,
    {
        let batch_size = self.options.batch_size.max(1);
        let mut results = HashMap::with_capacity(destinations.len());

        for (wave, group) in destinations.chunks(batch_size).enumerate() {
            if wave > 0 {
                std::thread::sleep(self.options.batch_delay());
            }
            tracing::debug!(wave, size = group.len(), "issuing route wave");

            let routes: Vec<(Id, RouteResult)> = self.pool.install(|| {
                group
                    .par_iter()
                    .with_max_len(1)
                    .map(|(id, destination)| (id.clone(), self.get_route(origin, *destination)))
                    .collect()
            });
            results.extend(routes);
        }

        let failed = results.values().filter(|r| !r.success).count();
        tracing::info!(total = results.len(), failed, "batch routing finished");
        results
    }
}
