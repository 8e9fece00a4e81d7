//! RecordStore: the in-memory record collection
//!
//! ## Design
//!
//! The store owns an insertion-ordered `Vec<DataItem>` behind a `RwLock`.
//! It is an explicit object with an injected [`Clock`] rather than
//! module-level ambient state, so every consumer (facade, tests) receives
//! a handle and timestamps stay deterministic under test.
//!
//! ## Thread Safety
//!
//! RecordStore is `Send + Sync`. Each operation takes the lock for the
//! whole mutation, so an operation is atomic with respect to itself; there
//! are no cross-operation transactions and no rollback.
//!
//! ## Lifetime
//!
//! Process-memory only: contents reset on restart. `with_seed` loads the
//! development dataset the dashboard ships with.

use crate::seed::seed_items;
use datapanel_core::{Clock, DataItem, ItemId, ItemPatch, NewItem, PanelError, PanelResult};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// In-memory record collection with store-assigned ids and timestamps
///
/// # Example
///
/// ```ignore
/// use datapanel_core::{NewItem, SystemClock};
/// use datapanel_engine::RecordStore;
/// use std::sync::Arc;
///
/// let store = RecordStore::new(Arc::new(SystemClock));
/// let item = store.create(&NewItem {
///     name: "Sales Revenue".into(),
///     value: 125000.0,
///     category: "Finance".into(),
/// });
/// assert_eq!(store.get(&item.id), Some(item));
/// ```
pub struct RecordStore {
    items: RwLock<Vec<DataItem>>,
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Create a store preloaded with the development dataset
    pub fn with_seed(clock: Arc<dyn Clock>) -> Self {
        let items = seed_items(clock.as_ref());
        Self {
            items: RwLock::new(items),
            clock,
        }
    }

    /// The clock this store stamps timestamps from
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Snapshot of the live sequence, insertion order preserved
    ///
    /// Returns a defensive copy: callers never observe later mutation
    /// through the returned vector.
    pub fn list(&self) -> Vec<DataItem> {
        self.items.read().clone()
    }

    /// Clone of the record with the given id, `None` if absent
    pub fn get(&self, id: &ItemId) -> Option<DataItem> {
        self.items.read().iter().find(|item| item.id == *id).cloned()
    }

    /// Append a new record
    ///
    /// Allocates a fresh id and stamps both timestamps from the clock, so
    /// `create_time == update_time` on the returned item.
    pub fn create(&self, fields: &NewItem) -> DataItem {
        let now = self.clock.now();
        let item = DataItem {
            id: ItemId::new(),
            name: fields.name.clone(),
            value: fields.value,
            category: fields.category.clone(),
            create_time: now,
            update_time: now,
        };
        self.items.write().push(item.clone());
        debug!(id = %item.id, "record created");
        item
    }

    /// Merge the supplied fields over an existing record
    ///
    /// Refreshes `update_time`; `create_time` is untouched.
    ///
    /// # Errors
    ///
    /// `ItemNotFound` if no record has the given id.
    pub fn update(&self, id: &ItemId, patch: &ItemPatch) -> PanelResult<DataItem> {
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| PanelError::item_not_found(id))?;

        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(value) = patch.value {
            item.value = value;
        }
        if let Some(category) = &patch.category {
            item.category = category.clone();
        }
        item.update_time = self.clock.now();

        debug!(id = %id, "record updated");
        Ok(item.clone())
    }

    /// Remove a record by id
    ///
    /// # Errors
    ///
    /// `ItemNotFound` if no record has the given id.
    pub fn delete(&self, id: &ItemId) -> PanelResult<()> {
        let mut items = self.items.write();
        let index = items
            .iter()
            .position(|item| item.id == *id)
            .ok_or_else(|| PanelError::item_not_found(id))?;
        items.remove(index);
        debug!(id = %id, "record deleted");
        Ok(())
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// True when the store holds no records
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
