//! Geofence engine: first-match zone lookup.
//!
//! The engine borrows a `ZoneStore` and tests each zone's outer ring in store
//! order. `locate` stops at the first containing zone; overlapping zones are
//! resolved purely by store order, never by size or specificity.

use serde::Serialize;

use super::ray_cast::ring_contains;
use crate::core::GeoPoint;
use crate::zones::{Attributes, Severity, Zone, ZoneId, ZoneStore};

/// Outcome of a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum ContainmentResult<'s> {
    /// The point lies in no zone.
    NoMatch,
    /// The first zone, in store order, containing the point.
    Match(&'s Zone),
}

impl<'s> ContainmentResult<'s> {
    /// Check if a zone matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, ContainmentResult::Match(_))
    }

    /// The matched zone.
    #[must_use]
    pub fn zone(&self) -> Option<&'s Zone> {
        match self {
            ContainmentResult::Match(zone) => Some(zone),
            ContainmentResult::NoMatch => None,
        }
    }

    /// ID of the matched zone.
    #[must_use]
    pub fn zone_id(&self) -> Option<ZoneId> {
        self.zone().map(Zone::id)
    }

    /// Severity of the matched zone.
    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.zone().map(Zone::severity)
    }

    /// Attributes of the matched zone.
    #[must_use]
    pub fn attributes(&self) -> Option<&'s Attributes> {
        self.zone().map(Zone::attributes)
    }
}

impl<'s> From<Option<&'s Zone>> for ContainmentResult<'s> {
    fn from(zone: Option<&'s Zone>) -> Self {
        zone.map_or(ContainmentResult::NoMatch, ContainmentResult::Match)
    }
}

/// Point-in-zone lookup over a borrowed store.
///
/// ## Example
///
/// ```
/// use airspace_geofence::core::{ClassifierConfig, GeoPoint, Latitude, Longitude};
/// use airspace_geofence::geofence::GeofenceEngine;
/// use airspace_geofence::zones::{Attributes, RawGeometry, RawZoneRecord, ZoneStore};
///
/// let records = vec![RawZoneRecord::new(
///     RawGeometry::single(vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]),
///     Attributes::new(),
/// )];
/// let store = ZoneStore::build(&records, &ClassifierConfig::default()).into_store();
/// let engine = GeofenceEngine::new(&store);
///
/// let inside = GeoPoint::new(Longitude::new(5.0), Latitude::new(5.0));
/// let outside = GeoPoint::new(Longitude::new(15.0), Latitude::new(15.0));
///
/// assert!(engine.locate(&inside).is_match());
/// assert!(!engine.locate(&outside).is_match());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GeofenceEngine<'s> {
    store: &'s ZoneStore,
}

impl<'s> GeofenceEngine<'s> {
    /// Create an engine over `store`.
    #[must_use]
    pub fn new(store: &'s ZoneStore) -> Self {
        Self { store }
    }

    /// The store being searched.
    #[must_use]
    pub fn store(&self) -> &'s ZoneStore {
        self.store
    }

    /// Find the first zone, in store order, whose outer ring contains `point`.
    #[must_use]
    pub fn locate(&self, point: &GeoPoint) -> ContainmentResult<'s> {
        self.matches(point).next().into()
    }

    /// Every zone containing `point`, lazily, in store order.
    pub fn matches<'p>(&self, point: &'p GeoPoint) -> impl Iterator<Item = &'s Zone> + 'p
    where
        's: 'p,
    {
        self.store
            .iter()
            .filter(move |zone| ring_contains(zone.outer_ring(), point))
    }

    /// Locate each point in turn.
    pub fn locate_many<'p, I>(&self, points: I) -> Vec<ContainmentResult<'s>>
    where
        I: IntoIterator<Item = &'p GeoPoint>,
    {
        points.into_iter().map(|p| self.locate(p)).collect()
    }
}

/// Find the first zone in `store` containing `point`.
#[must_use]
pub fn locate<'s>(point: &GeoPoint, store: &'s ZoneStore) -> ContainmentResult<'s> {
    GeofenceEngine::new(store).locate(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassifierConfig, Latitude, Longitude};
    use crate::zones::{RawGeometry, RawZoneRecord};

    fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(Longitude::new(lon), Latitude::new(lat))
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64, name: &str) -> RawZoneRecord {
        RawZoneRecord::new(
            RawGeometry::single(vec![[x0, y0], [x0, y1], [x1, y1], [x1, y0]]),
            Attributes::new().with("name", name),
        )
    }

    fn build(records: &[RawZoneRecord]) -> ZoneStore {
        let config = ClassifierConfig::new("color", "name").with_restricted_marker("red");
        ZoneStore::build(records, &config).into_store()
    }

    #[test]
    fn test_locate_square() {
        let store = build(&[rect(0.0, 0.0, 10.0, 10.0, "square")]);
        let engine = GeofenceEngine::new(&store);

        assert_eq!(engine.locate(&pt(5.0, 5.0)).zone_id(), Some(ZoneId::new(0)));
        assert_eq!(engine.locate(&pt(15.0, 15.0)), ContainmentResult::NoMatch);
        assert_eq!(engine.locate(&pt(10.0, 5.0)), ContainmentResult::NoMatch);
    }

    #[test]
    fn test_first_in_store_order_wins() {
        let store = build(&[
            rect(0.0, 0.0, 100.0, 100.0, "large"),
            rect(4.0, 4.0, 6.0, 6.0, "small"),
        ]);

        let result = locate(&pt(5.0, 5.0), &store);
        assert_eq!(result.attributes().and_then(|a| a.get("name")), Some("large"));
    }

    #[test]
    fn test_matches_lists_all_in_order() {
        let store = build(&[
            rect(0.0, 0.0, 100.0, 100.0, "large"),
            rect(50.0, 50.0, 60.0, 60.0, "elsewhere"),
            rect(4.0, 4.0, 6.0, 6.0, "small"),
        ]);
        let engine = GeofenceEngine::new(&store);

        let point = pt(5.0, 5.0);
        let ids: Vec<_> = engine.matches(&point).map(|z| z.id().raw()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_empty_store_never_matches() {
        let store = ZoneStore::empty();
        assert_eq!(locate(&pt(0.0, 0.0), &store), ContainmentResult::NoMatch);
    }

    #[test]
    fn test_locate_many() {
        let store = build(&[rect(0.0, 0.0, 10.0, 10.0, "a"), rect(20.0, 0.0, 30.0, 10.0, "b")]);
        let engine = GeofenceEngine::new(&store);

        let points = [pt(5.0, 5.0), pt(25.0, 5.0), pt(15.0, 5.0)];
        let ids: Vec<_> = engine
            .locate_many(&points)
            .iter()
            .map(|r| r.zone_id().map(ZoneId::raw))
            .collect();
        assert_eq!(ids, vec![Some(0), Some(1), None]);
    }

    #[test]
    fn test_result_accessors() {
        let store = build(&[rect(0.0, 0.0, 10.0, 10.0, "red zone")]);
        let result = locate(&pt(1.0, 1.0), &store);

        assert!(result.is_match());
        assert_eq!(result.severity(), Some(Severity::Restricted));
        assert!(ContainmentResult::NoMatch.zone().is_none());
        assert!(ContainmentResult::NoMatch.severity().is_none());
    }

    #[test]
    fn test_match_borrows_from_store() {
        let store = build(&[rect(0.0, 0.0, 10.0, 10.0, "a")]);
        let zone = locate(&pt(1.0, 1.0), &store).zone().unwrap();
        assert!(std::ptr::eq(zone, &store.as_slice()[0]));
    }
}
