//! Zone store: ordered, immutable zone collection.
//!
//! `ZoneStore::build` normalizes raw records into zones. Records with
//! unusable geometry are skipped and reported in the `IngestReport`; they
//! never abort the build. Store order is input order minus skipped records,
//! and lookups rely on it: the first containing zone wins.

use serde::{Deserialize, Serialize};

use super::attributes::Attributes;
use super::zone::{Severity, Zone, ZoneId};
use crate::core::{ClassifierConfig, Ring};
use crate::error::{GeometryError, MalformedGeometryError};

/// Ring geometry of a raw record: one or more rings of `[x, y]` pairs,
/// `x` = longitude, `y` = latitude.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGeometry {
    pub rings: Vec<Vec<[f64; 2]>>,
}

impl RawGeometry {
    /// Geometry with a single ring.
    #[must_use]
    pub fn single(ring: Vec<[f64; 2]>) -> Self {
        Self { rings: vec![ring] }
    }
}

/// A zone record as delivered by a dataset loader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawZoneRecord {
    pub geometry: Option<RawGeometry>,
    pub attributes: Attributes,
}

impl RawZoneRecord {
    /// Create a record with geometry.
    #[must_use]
    pub fn new(geometry: RawGeometry, attributes: Attributes) -> Self {
        Self {
            geometry: Some(geometry),
            attributes,
        }
    }

    /// Create a record whose geometry is absent.
    #[must_use]
    pub fn without_geometry(attributes: Attributes) -> Self {
        Self {
            geometry: None,
            attributes,
        }
    }
}

/// Non-error conditions noticed during a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestWarning {
    /// No record produced a zone. The store is valid; every lookup misses.
    EmptyStore,
}

/// Result of building a store: the store plus everything that was skipped.
#[derive(Clone, Debug)]
pub struct IngestReport {
    pub store: ZoneStore,
    pub skipped: Vec<MalformedGeometryError>,
    pub warnings: Vec<IngestWarning>,
}

impl IngestReport {
    /// Number of skipped records.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Check if every record was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Take the store, discarding the report.
    #[must_use]
    pub fn into_store(self) -> ZoneStore {
        self.store
    }
}

/// Ordered, immutable collection of zones.
///
/// ## Example
///
/// ```
/// use airspace_geofence::core::ClassifierConfig;
/// use airspace_geofence::zones::{Attributes, RawGeometry, RawZoneRecord, ZoneStore};
///
/// let config = ClassifierConfig::new("color", "name").with_restricted_marker("red");
/// let records = vec![
///     RawZoneRecord::new(
///         RawGeometry::single(vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]),
///         Attributes::new().with("name", "Zone A"),
///     ),
///     RawZoneRecord::new(RawGeometry::single(vec![[0.0, 0.0], [1.0, 1.0]]), Attributes::new()),
/// ];
///
/// let report = ZoneStore::build(&records, &config);
/// assert_eq!(report.store.len(), 1);
/// assert_eq!(report.skipped_count(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct ZoneStore {
    zones: Vec<Zone>,
}

impl ZoneStore {
    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from raw records.
    ///
    /// Each record's first ring becomes the zone's outer ring; remaining
    /// rings are kept but not evaluated. Attributes are copied verbatim and
    /// severity is classified once here.
    pub fn build<'r, I>(records: I, config: &ClassifierConfig) -> IngestReport
    where
        I: IntoIterator<Item = &'r RawZoneRecord>,
    {
        let mut zones = Vec::new();
        let mut skipped = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            match normalize_geometry(record.geometry.as_ref()) {
                Ok((outer, extra)) => {
                    let id = ZoneId::new(zones.len());
                    let zone = Zone::new(id, outer, record.attributes.clone(), config)
                        .with_extra_rings(extra);
                    zones.push(zone);
                }
                Err(reason) => {
                    let err = MalformedGeometryError { record: index, reason };
                    log::warn!("Skipping zone record: {}", err);
                    skipped.push(err);
                }
            }
        }

        let store = Self { zones };
        let mut warnings = Vec::new();
        if store.is_empty() {
            log::warn!("Zone store is empty; every lookup will report no match");
            warnings.push(IngestWarning::EmptyStore);
        }

        log::info!(
            "Built zone store: {} zones ({} restricted), {} records skipped",
            store.len(),
            store.count_by_severity(Severity::Restricted),
            skipped.len()
        );

        IngestReport {
            store,
            skipped,
            warnings,
        }
    }

    /// Get a zone by ID.
    #[must_use]
    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index())
    }

    /// Get the number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the store has no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over zones in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    /// Zones as a slice, in store order.
    #[must_use]
    pub fn as_slice(&self) -> &[Zone] {
        &self.zones
    }

    /// Find zones matching a predicate, in store order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Zone>
    where
        F: Fn(&Zone) -> bool,
    {
        self.zones.iter().filter(move |z| predicate(z))
    }

    /// Count zones with the given severity.
    #[must_use]
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.zones.iter().filter(|z| z.severity() == severity).count()
    }
}

impl<'a> IntoIterator for &'a ZoneStore {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

/// Split raw geometry into a validated outer ring and the trailing rings.
fn normalize_geometry(geometry: Option<&RawGeometry>) -> Result<(Ring, Vec<Ring>), GeometryError> {
    let mut rings = geometry
        .map(|g| g.rings.iter())
        .ok_or(GeometryError::MissingGeometry)?;

    let first = rings.next().ok_or(GeometryError::MissingGeometry)?;
    let outer = Ring::from_xy_pairs(first);

    if outer.is_degenerate() {
        return Err(GeometryError::TooFewPoints { found: outer.len() });
    }
    if let Some(position) = outer.first_non_finite() {
        return Err(GeometryError::NonFiniteCoordinate { position });
    }

    let extra = rings.map(|r| Ring::from_xy_pairs(r)).collect();
    Ok((outer, extra))
}
