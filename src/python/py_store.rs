//! Zone store bindings for Python.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{ClassifierConfig, GeoPoint, Latitude, Longitude};
use crate::dataset::load_zone_store;
use crate::geofence::{AirspaceReport, GeofenceEngine};
use crate::zones::ZoneStore;

/// Python wrapper for a built zone store and the config that built it.
#[pyclass(name = "ZoneStore", frozen)]
pub struct PyZoneStore {
    store: ZoneStore,
    config: ClassifierConfig,
    skipped: Vec<String>,
}

#[pymethods]
impl PyZoneStore {
    /// Build a store from an ESRI JSON feature set.
    ///
    /// `config_json` optionally overrides the classifier config.
    #[staticmethod]
    #[pyo3(signature = (text, config_json=None))]
    fn from_esri_json(text: &str, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => ClassifierConfig::from_json(json)
                .map_err(|e| PyValueError::new_err(format!("invalid classifier config: {}", e)))?,
            None => ClassifierConfig::default(),
        };

        let report = load_zone_store(text, &config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self {
            skipped: report.skipped.iter().map(|e| e.to_string()).collect(),
            store: report.store,
            config,
        })
    }

    /// Number of records skipped for malformed geometry.
    #[getter]
    fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Messages for skipped records.
    #[getter]
    fn skipped(&self) -> Vec<String> {
        self.skipped.clone()
    }

    /// Locate a point; returns a dict describing the zone, or None.
    fn locate<'py>(&self, py: Python<'py>, lon: f64, lat: f64) -> PyResult<Option<Bound<'py, PyDict>>> {
        let point = GeoPoint::new(Longitude::new(lon), Latitude::new(lat));
        let result = GeofenceEngine::new(&self.store).locate(&point);

        let AirspaceReport::Violation {
            zone_id,
            severity,
            zone_name,
            zone_type,
            description,
        } = AirspaceReport::from_result(&result, &self.config)
        else {
            return Ok(None);
        };

        let dict = PyDict::new_bound(py);
        dict.set_item("zone_id", zone_id.raw())?;
        dict.set_item("severity", severity.to_string())?;
        dict.set_item("name", zone_name)?;
        dict.set_item("type", zone_type)?;
        dict.set_item("description", description)?;
        if let Some(attrs) = result.attributes() {
            let raw = PyDict::new_bound(py);
            for (key, value) in attrs.iter() {
                raw.set_item(key, value)?;
            }
            dict.set_item("attributes", raw)?;
        }
        Ok(Some(dict))
    }

    /// Locate many points; returns the matched zone index per point, -1 for none.
    fn locate_many<'py>(
        &self,
        py: Python<'py>,
        lons: PyReadonlyArray1<'py, f64>,
        lats: PyReadonlyArray1<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray1<i64>>> {
        let lons = lons.as_slice().map_err(|e| PyValueError::new_err(e.to_string()))?;
        let lats = lats.as_slice().map_err(|e| PyValueError::new_err(e.to_string()))?;
        if lons.len() != lats.len() {
            return Err(PyValueError::new_err(format!(
                "lons and lats differ in length: {} vs {}",
                lons.len(),
                lats.len()
            )));
        }

        let engine = GeofenceEngine::new(&self.store);
        let ids: Vec<i64> = lons
            .iter()
            .zip(lats)
            .map(|(&lon, &lat)| {
                let point = GeoPoint::new(Longitude::new(lon), Latitude::new(lat));
                engine
                    .locate(&point)
                    .zone_id()
                    .and_then(|id| i64::try_from(id.raw()).ok())
                    .unwrap_or(-1)
            })
            .collect();

        Ok(PyArray1::from_vec_bound(py, ids))
    }

    fn __len__(&self) -> usize {
        self.store.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ZoneStore(zones={}, skipped={})",
            self.store.len(),
            self.skipped.len()
        )
    }
}
