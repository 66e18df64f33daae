//! Python bindings for airspace-geofence.
//!
//! # Quick Start
//!
//! ```python
//! import airspace_geofence as ag
//!
//! with open("zones.json", encoding="utf-8") as f:
//!     store = ag.ZoneStore.from_esri_json(f.read())
//!
//! hit = store.locate(121.5654, 25.0330)
//! if hit is not None:
//!     print(hit["severity"], hit["name"])
//!
//! # Batch lookup: zone index per point, -1 for none
//! ids = store.locate_many(lons, lats)
//! ```

use pyo3::prelude::*;

mod py_store;

pub use py_store::*;

/// airspace_geofence: restricted airspace lookup.
#[pymodule]
fn airspace_geofence(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyZoneStore>()?;
    Ok(())
}
