// Adapter: an old inventory store exposed through the interface new code
// expects. Calls are renamed, data passes through untouched.

use tracing::debug;

use crate::record::InventoryEntry;

/// Interface the rest of the application is written against.
pub trait EquipmentInventory {
    fn add_equipment(&mut self, name: &str, kind: &str, status: &str);
    fn list_equipment(&self) -> &[InventoryEntry];
}

/// Surface of the pre-existing store.
pub trait LegacyStore {
    fn add_item(&mut self, name: &str, kind: &str, status: &str);
    fn get_items(&self) -> &[InventoryEntry];
}

#[derive(Debug, Default)]
pub struct LegacyInventory {
    items: Vec<InventoryEntry>,
}

impl LegacyInventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl LegacyStore for LegacyInventory {
    fn add_item(&mut self, name: &str, kind: &str, status: &str) {
        self.items.push(InventoryEntry::new(name, kind, status));
    }

    fn get_items(&self) -> &[InventoryEntry] {
        &self.items
    }
}

/// Borrows the legacy store for as long as the adapter lives, so nothing
/// else can touch it in between.
pub struct InventoryAdapter<'a, S: LegacyStore = LegacyInventory> {
    legacy: &'a mut S,
}

impl<'a, S: LegacyStore> InventoryAdapter<'a, S> {
    pub fn new(legacy: &'a mut S) -> Self {
        Self { legacy }
    }
}

impl<S: LegacyStore> EquipmentInventory for InventoryAdapter<'_, S> {
    fn add_equipment(&mut self, name: &str, kind: &str, status: &str) {
        debug!(name, kind, status, "forwarding add_equipment to legacy store");
        self.legacy.add_item(name, kind, status);
    }

    fn list_equipment(&self) -> &[InventoryEntry] {
        self.legacy.get_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_forwards_single_entry() {
        let mut legacy = LegacyInventory::new();
        let mut adapter = InventoryAdapter::new(&mut legacy);
        adapter.add_equipment("Servidor Dell", "Servidor", "disponible");

        assert_eq!(
            adapter.list_equipment(),
            &[InventoryEntry::new("Servidor Dell", "Servidor", "disponible")]
        );
    }

    #[test]
    fn test_adapter_preserves_order_and_fields() {
        let mut legacy = LegacyInventory::new();
        let entries = [
            ("Notebook HP", "Portátil", "disponible"),
            ("Router", "Red", "en reparación"),
            ("Notebook HP", "Portátil", "disponible"),
            ("", "", ""),
        ];

        let mut adapter = InventoryAdapter::new(&mut legacy);
        for (name, kind, status) in entries {
            adapter.add_equipment(name, kind, status);
        }

        let listed: Vec<_> = adapter
            .list_equipment()
            .iter()
            .map(|e| (e.name.as_str(), e.kind.as_str(), e.status.as_str()))
            .collect();
        assert_eq!(listed, entries);
    }

    #[test]
    fn test_legacy_store_sees_adapter_writes() {
        let mut legacy = LegacyInventory::new();
        legacy.add_item("Impresora", "Periférico", "baja");
        {
            let mut adapter = InventoryAdapter::new(&mut legacy);
            assert_eq!(adapter.list_equipment().len(), 1);
            adapter.add_equipment("Monitor", "Periférico", "disponible");
        }
        assert_eq!(legacy.get_items().len(), 2);
        assert_eq!(legacy.get_items()[1].name, "Monitor");
    }

    // Any store with the legacy shape can sit behind the adapter.
    #[derive(Default)]
    struct CountingStore {
        inner: LegacyInventory,
        writes: usize,
    }

    impl LegacyStore for CountingStore {
        fn add_item(&mut self, name: &str, kind: &str, status: &str) {
            self.writes += 1;
            self.inner.add_item(name, kind, status);
        }

        fn get_items(&self) -> &[InventoryEntry] {
            self.inner.get_items()
        }
    }

    #[test]
    fn test_generic_adapter() {
        let mut store = CountingStore::default();
        let mut adapter = InventoryAdapter::new(&mut store);
        adapter.add_equipment("Switch", "Red", "disponible");
        adapter.add_equipment("Switch", "Red", "disponible");
        assert_eq!(adapter.list_equipment().len(), 2);
        assert_eq!(store.writes, 2);
    }
}
