//! In-memory memoization of successful route lookups.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::coordinate::RouteKey;
use crate::service::RouteResult;

/// Unbounded route cache owned by one service instance.
///
/// Entries never expire; callers clear it when they know routes went stale.
#[derive(Debug, Default)]
pub struct RouteCache {
    routes: RwLock<HashMap<RouteKey, RouteResult>>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RouteKey) -> Option<RouteResult> {
        self.read().get(key).cloned()
    }

    pub fn insert(&self, key: RouteKey, result: RouteResult) {
        self.write().insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    // A panic while holding the lock cannot leave a half-written map, so
    // poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<RouteKey, RouteResult>> {
        self.routes.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<RouteKey, RouteResult>> {
        self.routes.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
