// Observer: support is told when a notebook goes in for repair.

use std::sync::Arc;

use equipment_patterns::{logging, ObservableEquipment, Support};

fn main() -> equipment_patterns::Result<()> {
    logging::init("info");

    let support = Arc::new(Support::new());
    let mut equipment = ObservableEquipment::new("Notebook HP", "Portátil", "disponible");
    equipment.add_observer(support);
    equipment.change_status("en reparación")?;
    Ok(())
}
