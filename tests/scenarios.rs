use std::sync::{Arc, Mutex};

use equipment_patterns::{
    create_equipment, EquipmentError, EquipmentInventory, InventoryAdapter, InventoryEntry,
    LegacyInventory, NotifyError, ObservableEquipment, Observer, Support,
};

#[test]
fn test_factory_scenario() {
    let notebook = create_equipment("Notebook", "Dell XPS", "16GB", "i7").unwrap();
    assert_eq!(
        notebook.details(),
        "Tipo: Notebook, Nombre: Dell XPS, RAM: 16GB, Procesador: i7"
    );
}

#[test]
fn test_factory_rejects_unknown_kind() {
    let err = create_equipment("Laptop", "Dell XPS", "16GB", "i7").unwrap_err();
    assert!(matches!(err, EquipmentError::UnsupportedKind { ref kind } if kind == "Laptop"));
}

#[test]
fn test_adapter_scenario() {
    let mut legacy = LegacyInventory::new();
    let mut adapter = InventoryAdapter::new(&mut legacy);
    adapter.add_equipment("Servidor Dell", "Servidor", "disponible");

    assert_eq!(
        adapter.list_equipment(),
        &[InventoryEntry::new("Servidor Dell", "Servidor", "disponible")]
    );
}

#[test]
fn test_observer_scenario() {
    let support = Arc::new(Support::silent());
    let mut equipment = ObservableEquipment::new("Notebook HP", "Portátil", "disponible");
    equipment.add_observer(support.clone());

    equipment.change_status("en reparación").unwrap();

    assert_eq!(
        support.received(),
        vec!["Notebook HP ha cambiado su estado a en reparación".to_string()]
    );
}

struct Ticketing {
    id: usize,
    log: Arc<Mutex<Vec<(usize, String)>>>,
}

impl Observer for Ticketing {
    fn notify(&self, change: &str) -> Result<(), NotifyError> {
        self.log.lock().unwrap().push((self.id, change.to_string()));
        Ok(())
    }
}

#[test]
fn test_n_observers_get_n_notifications() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut equipment = ObservableEquipment::new("Switch", "Red", "activo");
    for id in 0..5 {
        equipment.add_observer(Arc::new(Ticketing {
            id,
            log: Arc::clone(&log),
        }));
    }

    equipment.change_status("fuera de servicio").unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 5);
    for (position, (id, change)) in log.iter().enumerate() {
        assert_eq!(*id, position);
        assert_eq!(change, "Switch ha cambiado su estado a fuera de servicio");
    }
}
