//! Test fixtures for ev-route-estimator.
//!
//! Provides:
//! - Real Hanoi / Ho Chi Minh City charging-station locations (from OpenStreetMap)
//! - A scriptable in-memory route provider that counts requests

#![allow(dead_code)]

pub mod mock_provider;
pub mod vietnam_locations;

pub use mock_provider::*;
pub use vietnam_locations::*;
