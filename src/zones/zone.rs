//! Zones - normalized restricted-airspace records.
//!
//! A `Zone` holds the outer boundary ring used for containment, the source
//! attributes, and a severity derived once from those attributes. Zones are
//! immutable after construction; the severity always agrees with
//! `classify_severity(attributes, config)` for the config that built it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::Attributes;
use crate::core::{ClassifierConfig, Ring};

/// Position of a zone in its store (0-based insertion order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(pub usize);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Get the store index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// Restriction level of a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Flight prohibited (red zones, airports).
    Restricted,
    /// Flight allowed with caution (yellow zones).
    Caution,
}

impl Severity {
    #[must_use]
    pub const fn is_restricted(self) -> bool {
        matches!(self, Severity::Restricted)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Restricted => f.write_str("restricted"),
            Severity::Caution => f.write_str("caution"),
        }
    }
}

/// Derive a zone's severity from its attribute text.
///
/// The color and name fields are concatenated (missing fields read as empty)
/// and the result is `Restricted` if any configured marker occurs in that
/// text. Position in a store plays no part.
#[must_use]
pub fn classify_severity(attributes: &Attributes, config: &ClassifierConfig) -> Severity {
    let color = attributes.get_or(&config.color_field, "");
    let name = attributes.get_or(&config.name_field, "");

    let mut text = String::with_capacity(color.len() + name.len());
    text.push_str(color);
    text.push_str(name);

    if config.is_restricted_text(&text) {
        Severity::Restricted
    } else {
        Severity::Caution
    }
}

/// A restricted-airspace zone.
///
/// Zones serialize for output only. Deserializing would bypass
/// classification, so they are built through `Zone::new` or `ZoneStore::build`.
///
/// ## Example
///
/// ```
/// use airspace_geofence::core::{ClassifierConfig, Ring};
/// use airspace_geofence::zones::{Attributes, Severity, Zone, ZoneId};
///
/// let config = ClassifierConfig::new("color", "name").with_restricted_marker("red");
/// let ring = Ring::from_xy_pairs(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
/// let zone = Zone::new(ZoneId::new(0), ring, Attributes::new().with("color", "red"), &config);
///
/// assert_eq!(zone.severity(), Severity::Restricted);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Zone {
    id: ZoneId,
    outer_ring: Ring,
    extra_rings: SmallVec<[Ring; 1]>,
    attributes: Attributes,
    severity: Severity,
}

impl Zone {
    /// Create a zone, classifying its severity with `config`.
    #[must_use]
    pub fn new(id: ZoneId, outer_ring: Ring, attributes: Attributes, config: &ClassifierConfig) -> Self {
        let severity = classify_severity(&attributes, config);
        Self {
            id,
            outer_ring,
            extra_rings: SmallVec::new(),
            attributes,
            severity,
        }
    }

    /// Attach the source geometry's trailing rings (builder pattern).
    ///
    /// They are retained for callers but never evaluated for containment.
    #[must_use]
    pub fn with_extra_rings(mut self, rings: impl IntoIterator<Item = Ring>) -> Self {
        self.extra_rings.extend(rings);
        self
    }

    #[must_use]
    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// Boundary used for containment tests.
    #[must_use]
    pub fn outer_ring(&self) -> &Ring {
        &self.outer_ring
    }

    /// Source rings after the first (holes or disjoint parts, uninterpreted).
    #[must_use]
    pub fn extra_rings(&self) -> &[Ring] {
        &self.extra_rings
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Zone name from the configured name field.
    #[must_use]
    pub fn name<'a>(&'a self, config: &ClassifierConfig) -> Option<&'a str> {
        self.attributes.get(&config.name_field)
    }
}
