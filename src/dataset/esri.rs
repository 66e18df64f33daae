//! ESRI JSON feature-set reader.
//!
//! Reads the `features[].attributes` / `features[].geometry.rings` layout
//! produced by ArcGIS feature services into raw zone records:
//!
//! ```json
//! {
//!   "features": [
//!     {
//!       "attributes": { "空域名稱": "松山機場", "空域顏色": "紅色" },
//!       "geometry": { "rings": [[[121.53, 25.06], [121.58, 25.06], [121.58, 25.08]]] }
//!     }
//!   ]
//! }
//! ```
//!
//! Attribute values are stringified; `null` values are dropped. A feature
//! with a null or absent geometry becomes a record without geometry, which
//! the store builder reports as malformed. Coordinates may carry extra
//! dimensions (z, m); only x and y are kept.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::ClassifierConfig;
use crate::error::DatasetError;
use crate::zones::{Attributes, IngestReport, RawGeometry, RawZoneRecord, ZoneStore};

#[derive(Debug, Deserialize)]
struct FeatureSet {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    attributes: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<PolygonGeometry>,
}

#[derive(Debug, Deserialize)]
struct PolygonGeometry {
    #[serde(default)]
    rings: Vec<Vec<Coordinate>>,
}

/// `[x, y, ...]` with at least two numbers.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "Vec<f64>")]
struct Coordinate([f64; 2]);

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [x, y, ..] => Ok(Coordinate([*x, *y])),
            _ => Err(format!(
                "coordinate needs at least 2 values, found {}",
                values.len()
            )),
        }
    }
}

fn record_from_feature(feature: Feature) -> RawZoneRecord {
    let attributes = feature
        .attributes
        .map(attributes_from_json)
        .unwrap_or_default();

    let geometry = feature.geometry.map(|g| RawGeometry {
        rings: g
            .rings
            .into_iter()
            .map(|ring| ring.into_iter().map(|c| c.0).collect())
            .collect(),
    });

    RawZoneRecord {
        geometry,
        attributes,
    }
}

fn attributes_from_json(map: Map<String, Value>) -> Attributes {
    map.into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect()
}

/// Parse an ESRI JSON feature set into raw zone records, in feature order.
pub fn parse_feature_set(json: &str) -> Result<Vec<RawZoneRecord>, DatasetError> {
    let set: FeatureSet = serde_json::from_str(json)?;
    log::debug!("Parsed ESRI feature set with {} features", set.features.len());

    Ok(set.features.into_iter().map(record_from_feature).collect())
}

/// Parse an ESRI JSON feature set and build a zone store from it.
pub fn load_zone_store(json: &str, config: &ClassifierConfig) -> Result<IngestReport, DatasetError> {
    let records = parse_feature_set(json)?;
    Ok(ZoneStore::build(&records, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::zones::Severity;

    const SAMPLE: &str = r#"{
        "displayFieldName": "空域名稱",
        "geometryType": "esriGeometryPolygon",
        "features": [
            {
                "attributes": { "空域名稱": "松山機場", "空域顏色": "黃色", "OBJECTID": 7, "備註": null },
                "geometry": { "rings": [[[121.53, 25.06], [121.58, 25.06], [121.58, 25.08], [121.53, 25.06]]] }
            },
            {
                "attributes": { "空域名稱": "河濱公園", "空域顏色": "黃色" },
                "geometry": null
            },
            {
                "attributes": { "空域名稱": "總統府", "空域顏色": "紅色" },
                "geometry": { "rings": [[[121.50, 25.03, 0.0], [121.52, 25.03, 0.0], [121.52, 25.05, 0.0]], [[121.51, 25.04], [121.515, 25.04], [121.515, 25.045]]] }
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_set() {
        let records = parse_feature_set(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.attributes.get("空域名稱"), Some("松山機場"));
        assert_eq!(first.attributes.get("OBJECTID"), Some("7"));
        assert!(!first.attributes.contains_key("備註"));
        assert_eq!(first.geometry.as_ref().map(|g| g.rings[0].len()), Some(4));

        assert!(records[1].geometry.is_none());

        let third = records[2].geometry.as_ref().unwrap();
        assert_eq!(third.rings.len(), 2);
        assert_eq!(third.rings[0][0], [121.50, 25.03]);
    }

    #[test]
    fn test_load_zone_store() {
        let report = load_zone_store(SAMPLE, &ClassifierConfig::default()).unwrap();

        assert_eq!(report.store.len(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.skipped[0].record, 1);
        assert_eq!(report.skipped[0].reason, GeometryError::MissingGeometry);

        let severities: Vec<_> = report.store.iter().map(|z| z.severity()).collect();
        assert_eq!(severities, vec![Severity::Restricted, Severity::Restricted]);
        assert_eq!(report.store.as_slice()[1].extra_rings().len(), 1);
    }

    #[test]
    fn test_feature_without_attributes() {
        let json = r#"{"features": [{"geometry": {"rings": [[[0,0],[0,1],[1,1]]]}}]}"#;
        let records = parse_feature_set(json).unwrap();
        assert!(records[0].attributes.is_empty());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(parse_feature_set("not json"), Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_missing_features_rejected() {
        assert!(parse_feature_set(r#"{"type": "FeatureCollection"}"#).is_err());
    }

    #[test]
    fn test_short_coordinate_rejected() {
        let json = r#"{"features": [{"geometry": {"rings": [[[0],[0,1],[1,1]]]}}]}"#;
        let err = parse_feature_set(json).unwrap_err();
        assert!(err.to_string().contains("at least 2 values"));
    }
}
