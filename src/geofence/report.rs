//! Presentation-ready summary of a lookup.
//!
//! `AirspaceReport` flattens a `ContainmentResult` into owned display fields
//! so a UI can render it without knowing the dataset's attribute schema.

use serde::{Deserialize, Serialize};

use super::engine::ContainmentResult;
use crate::core::ClassifierConfig;
use crate::zones::{Severity, Zone, ZoneId};

/// Shown when a matched zone has no name.
pub const UNKNOWN_ZONE_NAME: &str = "Unknown";

/// Shown when a matched zone has no color/category label.
pub const DEFAULT_ZONE_TYPE: &str = "Restricted";

/// Look up a display field, treating an empty value like a missing one.
fn display_field<'a>(zone: &'a Zone, field: &str, fallback: &'a str) -> &'a str {
    zone.get_attr(field).filter(|value| !value.is_empty()).unwrap_or(fallback)
}

/// Display summary of a lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AirspaceReport {
    /// No zone contains the point.
    Clear,
    /// The point lies in a zone.
    Violation {
        zone_id: ZoneId,
        severity: Severity,
        zone_name: String,
        zone_type: String,
        description: String,
    },
}

impl AirspaceReport {
    /// Summarize `result` using the field names from `config`.
    #[must_use]
    pub fn from_result(result: &ContainmentResult<'_>, config: &ClassifierConfig) -> Self {
        let Some(zone) = result.zone() else {
            return AirspaceReport::Clear;
        };

        AirspaceReport::Violation {
            zone_id: zone.id(),
            severity: zone.severity(),
            zone_name: display_field(zone, &config.name_field, UNKNOWN_ZONE_NAME).to_string(),
            zone_type: display_field(zone, &config.color_field, DEFAULT_ZONE_TYPE).to_string(),
            description: display_field(zone, &config.description_field, "").to_string(),
        }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        matches!(self, AirspaceReport::Clear)
    }
}

impl std::fmt::Display for AirspaceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AirspaceReport::Clear => f.write_str("airspace clear"),
            AirspaceReport::Violation {
                severity,
                zone_name,
                zone_type,
                ..
            } => write!(f, "{} airspace: {} ({})", severity, zone_name, zone_type),
        }
    }
}
