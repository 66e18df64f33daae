//! Core types: coordinates, rings, classifier configuration.
//!
//! These are the leaf building blocks shared by the zone store and the
//! geofence engine.

pub mod coord;
pub mod ring;
pub mod config;

pub use coord::{GeoPoint, Latitude, Longitude};
pub use ring::{Ring, MIN_RING_POINTS};
pub use config::ClassifierConfig;
