// Singleton: one inventory per process, built the first time anyone asks
// for it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;
use tracing::debug;

use crate::record::InventoryEntry;

lazy_static! {
    static ref INVENTORY: Inventory = {
        debug!("shared inventory created");
        Inventory::new()
    };
}

/// Process-wide equipment list. The only way to reach it is
/// [`Inventory::instance`]; every handle points at the same collection.
#[derive(Debug)]
pub struct Inventory {
    equipment: Mutex<Vec<InventoryEntry>>,
}

impl Inventory {
    fn new() -> Self {
        Self {
            equipment: Mutex::new(Vec::new()),
        }
    }

    /// Initialization runs at most once, even with concurrent first callers.
    pub fn instance() -> &'static Inventory {
        &INVENTORY
    }

    // Appends never leave the vector half-written, so a poisoned lock is
    // still safe to use.
    fn entries(&self) -> MutexGuard<'_, Vec<InventoryEntry>> {
        self.equipment.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_equipment(&self, name: &str, kind: &str, status: &str) {
        let mut entries = self.entries();
        entries.push(InventoryEntry::new(name, kind, status));
        debug!(name, kind, status, total = entries.len(), "equipment added to shared inventory");
    }

    /// Snapshot of the shared list in insertion order.
    pub fn list_equipment(&self) -> Vec<InventoryEntry> {
        self.entries().clone()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
