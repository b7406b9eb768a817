//! Shared snapshot of the loaded effect table.

use std::sync::{Arc, PoisonError, RwLock};

use healing_core::{EffectProfile, EffectTable, ProfileOracle};

/// Handle to the current [`EffectTable`] snapshot.
///
/// Readers clone the inner [`Arc`]; reload swaps the pointer wholesale. A
/// lookup in flight keeps its fully consistent snapshot and never observes a
/// mix of old and new entries.
pub struct TableHandle {
    inner: RwLock<Arc<EffectTable>>,
}

impl TableHandle {
    pub fn new(table: EffectTable) -> Self {
        Self {
            inner: RwLock::new(Arc::new(table)),
        }
    }

    /// Current table snapshot.
    pub fn snapshot(&self) -> Arc<EffectTable> {
        // A poisoned lock still guards a consistent Arc; recover it.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the snapshot wholesale.
    pub fn replace(&self, table: EffectTable) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(table);
    }
}

impl Default for TableHandle {
    fn default() -> Self {
        Self::new(EffectTable::default())
    }
}

impl ProfileOracle for TableHandle {
    fn profile(&self, item_id: &str) -> Option<EffectProfile> {
        self.snapshot().lookup(item_id)
    }
}
