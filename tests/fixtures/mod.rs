//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data:
//! - Real Seoul landmarks and restaurants (approximate coordinates)
//! - A places lookup backed by those fixtures

#![allow(dead_code, unused_imports)]

pub mod seoul_locations;

pub use seoul_locations::*;
