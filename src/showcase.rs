// Example runs for each pattern. The `*_example` functions return what
// they produced so the binaries print it and the tests inspect it.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use colored::Colorize;
use tracing::info;

use crate::adapter::{EquipmentInventory, InventoryAdapter, LegacyInventory};
use crate::config::{EntrySample, FactorySample, ObserverSample, ShowcaseConfig};
use crate::error::Result;
use crate::factory::create_equipment;
use crate::observer::{ObservableEquipment, Support};
use crate::record::InventoryEntry;
use crate::singleton::Inventory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Factory,
    Adapter,
    Observer,
    Singleton,
    All,
}

impl Demo {
    fn title(self) -> &'static str {
        match self {
            Demo::Factory => "Factory Method",
            Demo::Adapter => "Adapter",
            Demo::Observer => "Observer",
            Demo::Singleton => "Singleton",
            Demo::All => "All Patterns",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Pretty JSON, the console form of an inventory list.
pub fn render_entries(entries: &[InventoryEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn factory_example(sample: &FactorySample) -> Result<String> {
    let equipment = create_equipment(
        &sample.kind,
        sample.name.as_str(),
        sample.memory.as_str(),
        sample.processor.as_str(),
    )?;
    Ok(equipment.details())
}

pub fn adapter_example(sample: &EntrySample) -> Result<String> {
    let mut legacy = LegacyInventory::new();
    let mut adapter = InventoryAdapter::new(&mut legacy);
    adapter.add_equipment(&sample.name, &sample.kind, &sample.status);
    render_entries(adapter.list_equipment())
}

/// Returns the changes each support listener received, in registration
/// order. Listeners echo to stdout as they are notified.
pub fn observer_example(sample: &ObserverSample) -> Result<Vec<Vec<String>>> {
    let mut equipment = ObservableEquipment::new(
        sample.name.as_str(),
        sample.kind.as_str(),
        sample.status.as_str(),
    );

    let listeners: Vec<Arc<Support>> = (0..sample.observers)
        .map(|_| Arc::new(Support::new()))
        .collect();
    for listener in &listeners {
        equipment.add_observer(listener.clone());
    }

    equipment.change_status(sample.new_status.as_str())?;
    Ok(listeners.iter().map(|l| l.received()).collect())
}

pub fn singleton_example(sample: &EntrySample) -> Result<String> {
    let inventory = Inventory::instance();
    inventory.add_equipment(&sample.name, &sample.kind, &sample.status);
    render_entries(&Inventory::instance().list_equipment())
}

fn heading(demo: Demo) -> String {
    format!("=== {} Pattern ===", demo.title()).bold().to_string()
}

pub fn run(demo: Demo, config: &ShowcaseConfig) -> Result<()> {
    info!(%demo, "running showcase");
    match demo {
        Demo::Factory => {
            println!("{}", heading(demo));
            println!("{}", factory_example(&config.factory)?);
        }
        Demo::Adapter => {
            println!("{}", heading(demo));
            println!("{}", adapter_example(&config.adapter)?);
        }
        Demo::Observer => {
            println!("{}", heading(demo));
            observer_example(&config.observer)?;
        }
        Demo::Singleton => {
            println!("{}", heading(demo));
            println!("{}", singleton_example(&config.singleton)?);
        }
        Demo::All => {
            for demo in [Demo::Factory, Demo::Adapter, Demo::Observer, Demo::Singleton] {
                run(demo, config)?;
                println!();
            }
        }
    }
    Ok(())
}
