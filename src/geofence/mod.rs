//! Geofence engine: point-in-zone lookup.
//!
//! ## Key Types
//!
//! - `ring_contains`: Even-odd ray-casting test for a single ring
//! - `GeofenceEngine`: First-match lookup over a borrowed `ZoneStore`
//! - `ContainmentResult`: `NoMatch` or `Match(&Zone)`
//! - `AirspaceReport`: Owned display summary of a result
//!
//! Only a zone's outer ring is tested. Additional source rings (holes or
//! disjoint parts) are kept on the zone but do not affect containment.

pub mod ray_cast;
pub mod engine;
pub mod report;

pub use ray_cast::ring_contains;
pub use engine::{locate, ContainmentResult, GeofenceEngine};
pub use report::AirspaceReport;
