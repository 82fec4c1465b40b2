// Singleton: the shared inventory reached through its only accessor.

use equipment_patterns::showcase::render_entries;
use equipment_patterns::{logging, Inventory};

fn main() -> equipment_patterns::Result<()> {
    logging::init("info");

    let inventory = Inventory::instance();
    inventory.add_equipment("Notebook HP", "Portátil", "disponible");
    println!("{}", render_entries(&inventory.list_equipment())?);
    Ok(())
}
