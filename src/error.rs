//! Error types.
//!
//! Ingestion errors are non-fatal: the store builder collects them in an
//! `IngestReport` instead of returning early. Only dataset parsing can fail
//! outright.

use thiserror::Error;

/// Why a record's geometry could not become a zone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("geometry is missing or has no rings")]
    MissingGeometry,

    #[error("outer ring has {found} points, at least 3 are required")]
    TooFewPoints { found: usize },

    #[error("outer ring point {position} has a non-finite coordinate")]
    NonFiniteCoordinate { position: usize },
}

/// A record skipped during store construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed geometry in record {record}: {reason}")]
pub struct MalformedGeometryError {
    /// Index of the record in the input sequence.
    pub record: usize,

    #[source]
    pub reason: GeometryError,
}

/// Zone dataset could not be read at all.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid zone dataset: {0}")]
    Json(#[from] serde_json::Error),
}
