// Equipment Patterns: Factory Method, Adapter, Observer and Singleton
// applied to a small equipment inventory.

//! # Equipment Patterns
//!
//! Four independent pattern demonstrations:
//!
//! ## Creational
//! - Factory Method ([`factory`]): enum variants built from a kind tag
//! - Singleton ([`singleton`]): process-wide inventory behind `lazy_static!`
//!
//! ## Structural
//! - Adapter ([`adapter`]): a legacy store behind the new inventory interface
//!
//! ## Behavioral
//! - Observer ([`observer`]): status changes fanned out to listeners
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin factory_method
//! cargo run --bin inventory_adapter
//! cargo run --bin observable_equipment
//! cargo run --bin singleton_inventory
//! cargo run --bin showcase -- all
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod observer;
pub mod record;
pub mod showcase;
pub mod singleton;

pub use adapter::{EquipmentInventory, InventoryAdapter, LegacyInventory, LegacyStore};
pub use config::ShowcaseConfig;
pub use error::{ConfigError, EquipmentError, NotifyError, Result};
pub use factory::{create_equipment, Equipment, EquipmentFactory, EquipmentKind};
pub use observer::{ObservableEquipment, Observer, Support};
pub use record::InventoryEntry;
pub use singleton::Inventory;
