//! In-memory `RouteProvider` with a request-count spy.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use ev_route_estimator::haversine::haversine_km;
use ev_route_estimator::polyline::Polyline;
use ev_route_estimator::{Coordinate, ProviderRoute, RouteError, RouteProvider};

/// Road distance is modelled as straight-line distance times this factor.
pub const ROAD_FACTOR: f64 = 1.3;

/// Recorded provider call.
#[derive(Debug, Clone, Copy)]
pub struct Call {
    pub destination: Coordinate,
    pub started: Instant,
    pub finished: Instant,
}

/// Answers with a synthetic road route unless the destination is marked
/// unreachable or the provider is switched offline.
#[derive(Debug, Default)]
pub struct MockProvider {
    requests: AtomicUsize,
    offline: bool,
    latency: Duration,
    unreachable: HashSet<(i64, i64)>,
    transient_failures: AtomicUsize,
    calls: Mutex<Vec<Call>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails like an unreachable server.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Destination answers with OSRM's `NoRoute`.
    pub fn unreachable(mut self, destination: Coordinate) -> Self {
        self.unreachable.insert(micro_degrees(destination));
        self
    }

    /// The next `count` calls fail with HTTP 503.
    pub fn failing_first(self, count: usize) -> Self {
        self.transient_failures.store(count, Ordering::SeqCst);
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn road_km(origin: Coordinate, destination: Coordinate) -> f64 {
        haversine_km(origin, destination) * ROAD_FACTOR
    }
}

impl RouteProvider for MockProvider {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<ProviderRoute, RouteError> {
        let started = Instant::now();
        self.requests.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Call {
                destination,
                started,
                finished: Instant::now(),
            });
        }

        if self.offline {
            return Err(RouteError::HttpStatus {
                status: 503,
                body: "offline".to_string(),
            });
        }
        let remaining = self.transient_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.transient_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(RouteError::HttpStatus {
                status: 503,
                body: "busy".to_string(),
            });
        }
        if self.unreachable.contains(&micro_degrees(destination)) {
            return Err(RouteError::Provider {
                code: "NoRoute".to_string(),
                message: "Impossible route between points".to_string(),
            });
        }

        let km = Self::road_km(origin, destination);
        Ok(ProviderRoute {
            distance_meters: km * 1000.0,
            // 30 km/h in town.
            duration_seconds: km / 30.0 * 3600.0,
            geometry: Some(Polyline::new(vec![origin.into(), destination.into()])),
        })
    }
}

fn micro_degrees(coord: Coordinate) -> (i64, i64) {
    (
        (coord.latitude * 1e6).round() as i64,
        (coord.longitude * 1e6).round() as i64,
    )
}
