//! Swappable store handle for reloads.
//!
//! Readers take an `Arc<ZoneStore>` snapshot and run lookups on it without
//! holding the lock. A reload builds the replacement store completely before
//! swapping the pointer, so a reader observes either the old store or the new
//! one, never a partially built store.

use std::sync::{Arc, PoisonError, RwLock};

use super::store::ZoneStore;

/// Shared, atomically replaceable zone store.
///
/// ## Usage
///
/// ```
/// use airspace_geofence::zones::{SharedZoneStore, ZoneStore};
///
/// let shared = SharedZoneStore::new(ZoneStore::empty());
/// let before = shared.snapshot();
///
/// let old = shared.replace(ZoneStore::empty());
/// assert!(std::sync::Arc::ptr_eq(&before, &old));
/// ```
#[derive(Debug, Default)]
pub struct SharedZoneStore {
    current: RwLock<Arc<ZoneStore>>,
}

impl SharedZoneStore {
    /// Create a handle holding `store`.
    #[must_use]
    pub fn new(store: ZoneStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// Get the current store.
    ///
    /// The lock is held only for the `Arc` clone.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ZoneStore> {
        // The guarded value is always a complete Arc, so a poisoned lock
        // still holds a usable store.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install a new store, returning the one it replaces.
    pub fn replace(&self, store: ZoneStore) -> Arc<ZoneStore> {
        self.replace_arc(Arc::new(store))
    }

    /// Install an already shared store, returning the one it replaces.
    pub fn replace_arc(&self, store: Arc<ZoneStore>) -> Arc<ZoneStore> {
        let zones = store.len();
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let old = std::mem::replace(&mut *guard, store);
        drop(guard);

        log::debug!("Swapped zone store: {} -> {} zones", old.len(), zones);
        old
    }
}

impl From<ZoneStore> for SharedZoneStore {
    fn from(store: ZoneStore) -> Self {
        Self::new(store)
    }
}
