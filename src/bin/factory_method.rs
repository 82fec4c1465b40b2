// Factory Method: builds a notebook from its kind tag and prints it.

use equipment_patterns::{logging, EquipmentFactory};

fn main() -> equipment_patterns::Result<()> {
    logging::init("info");

    let factory = EquipmentFactory;
    let notebook = factory.create_equipment("Notebook", "Dell XPS", "16GB", "i7")?;
    println!("{}", notebook.details());
    Ok(())
}
