//! Zone dataset readers.
//!
//! The store consumes in-memory `RawZoneRecord`s; readers here turn on-disk
//! or over-the-wire encodings into those records. Reading files and fetching
//! URLs is left to the caller.

pub mod esri;

pub use esri::{load_zone_store, parse_feature_set};
