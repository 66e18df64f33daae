//! Zone classification configuration.
//!
//! Zone datasets carry free-text attributes whose field names and labels are
//! locale-specific. `ClassifierConfig` names which attribute fields hold the
//! zone color/category, name, and description, and which substrings mark a
//! zone as restricted. The defaults match the Taiwanese drone airspace
//! dataset, whose labels are Chinese: `紅` ("red") and `機場` ("airport").
//!
//! The classifier never interprets the markers - they are opaque substrings.

use serde::{Deserialize, Serialize};

/// Default attribute field holding the zone color/category label.
pub const DEFAULT_COLOR_FIELD: &str = "空域顏色";

/// Default attribute field holding the zone name.
pub const DEFAULT_NAME_FIELD: &str = "空域名稱";

/// Default attribute field holding the zone description.
pub const DEFAULT_DESCRIPTION_FIELD: &str = "空域說明";

/// Default restricted markers: "red" and "airport".
pub const DEFAULT_RESTRICTED_MARKERS: [&str; 2] = ["紅", "機場"];

/// Attribute schema and severity markers for a zone dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Field holding the color/category label.
    pub color_field: String,

    /// Field holding the zone name.
    pub name_field: String,

    /// Field holding the free-text description (display only).
    pub description_field: String,

    /// Substrings that classify a zone as restricted when found in the
    /// concatenated color + name text. Empty markers never match.
    pub restricted_markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            color_field: DEFAULT_COLOR_FIELD.to_string(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            description_field: DEFAULT_DESCRIPTION_FIELD.to_string(),
            restricted_markers: DEFAULT_RESTRICTED_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// Create a config with the given field names and no markers.
    ///
    /// The description field keeps its default name.
    pub fn new(color_field: impl Into<String>, name_field: impl Into<String>) -> Self {
        Self {
            color_field: color_field.into(),
            name_field: name_field.into(),
            description_field: DEFAULT_DESCRIPTION_FIELD.to_string(),
            restricted_markers: Vec::new(),
        }
    }

    /// Read a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the color/category field.
    #[must_use]
    pub fn with_color_field(mut self, field: impl Into<String>) -> Self {
        self.color_field = field.into();
        self
    }

    /// Set the name field.
    #[must_use]
    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    /// Set the description field.
    #[must_use]
    pub fn with_description_field(mut self, field: impl Into<String>) -> Self {
        self.description_field = field.into();
        self
    }

    /// Add a restricted marker.
    #[must_use]
    pub fn with_restricted_marker(mut self, marker: impl Into<String>) -> Self {
        self.restricted_markers.push(marker.into());
        self
    }

    /// Replace all restricted markers.
    #[must_use]
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Check if `text` contains any non-empty restricted marker.
    #[must_use]
    pub fn is_restricted_text(&self, text: &str) -> bool {
        self.restricted_markers
            .iter()
            .any(|marker| !marker.is_empty() && text.contains(marker.as_str()))
    }
}
