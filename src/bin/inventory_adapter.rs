// Adapter: the legacy inventory used through the new interface.

use equipment_patterns::showcase::render_entries;
use equipment_patterns::{logging, EquipmentInventory, InventoryAdapter, LegacyInventory};

fn main() -> equipment_patterns::Result<()> {
    logging::init("info");

    let mut legacy = LegacyInventory::new();
    let mut adapter = InventoryAdapter::new(&mut legacy);
    adapter.add_equipment("Servidor Dell", "Servidor", "disponible");
    println!("{}", render_entries(adapter.list_equipment())?);
    Ok(())
}
