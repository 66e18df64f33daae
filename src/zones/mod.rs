//! Zone store: ingestion, classification, and shared access.
//!
//! ## Key Types
//!
//! - `Attributes`: Free-text zone fields with explicit fallback lookup
//! - `Zone`: Outer ring, attributes, derived `Severity`
//! - `ZoneStore`: Ordered, immutable zone collection built from raw records
//! - `IngestReport`: A built store plus skipped records and warnings
//! - `SharedZoneStore`: Snapshot/replace handle for reloading zone data

pub mod attributes;
pub mod zone;
pub mod store;
pub mod shared;

pub use attributes::{AttributeKey, Attributes};
pub use zone::{classify_severity, Severity, Zone, ZoneId};
pub use store::{IngestReport, IngestWarning, RawGeometry, RawZoneRecord, ZoneStore};
pub use shared::SharedZoneStore;
