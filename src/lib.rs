//! # airspace-geofence
//!
//! Restricted-airspace lookup: given a geocoded point, find the first zone
//! of a zone dataset whose boundary contains it.
//!
//! ## Design Principles
//!
//! 1. **Store order decides**: Overlapping zones are resolved by insertion
//!    order. The first containing zone wins, regardless of size.
//!
//! 2. **Typed axes**: Longitude and latitude are distinct types. Only the raw
//!    dataset boundary accepts positional `[x, y]` pairs, with `x` = longitude.
//!
//! 3. **Partial ingestion**: Malformed records are skipped and reported,
//!    never fatal. An empty store is valid.
//!
//! 4. **Configuration over convention**: Attribute field names and the
//!    restricted-severity markers come from `ClassifierConfig`.
//!
//! ## Architecture
//!
//! - **Immutable stores**: A `ZoneStore` is built once and never mutated.
//!   Reloads build a new store and swap it into a `SharedZoneStore`.
//!
//! - **Even-odd containment**: Each zone's outer ring is tested with the
//!   ray-casting rule. Additional rings (holes, disjoint parts) are retained
//!   but not evaluated.
//!
//! ## Modules
//!
//! - `core`: Coordinates, rings, classifier configuration
//! - `zones`: Attributes, zones, store building, shared store handle
//! - `geofence`: Ray casting, lookup engine, display reports
//! - `dataset`: ESRI JSON feature-set reader
//! - `error`: Ingestion and dataset errors

pub mod core;
pub mod error;
pub mod zones;
pub mod geofence;
pub mod dataset;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ClassifierConfig, GeoPoint, Latitude, Longitude, Ring};

pub use crate::error::{DatasetError, GeometryError, MalformedGeometryError};

pub use crate::zones::{
    classify_severity, AttributeKey, Attributes,
    IngestReport, IngestWarning, RawGeometry, RawZoneRecord,
    Severity, SharedZoneStore, Zone, ZoneId, ZoneStore,
};

pub use crate::geofence::{
    locate, ring_contains, AirspaceReport, ContainmentResult, GeofenceEngine,
};
