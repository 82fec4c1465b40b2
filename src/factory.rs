// Factory Method: one entry point builds the variant named by a kind tag.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{EquipmentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentKind {
    Notebook,
    Desktop,
    Server,
}

impl EquipmentKind {
    /// Label shown in the rendered details.
    pub fn label(self) -> &'static str {
        match self {
            EquipmentKind::Notebook => "Notebook",
            EquipmentKind::Desktop => "Desktop",
            EquipmentKind::Server => "Servidor",
        }
    }
}

impl FromStr for EquipmentKind {
    type Err = EquipmentError;

    // Exact, case-sensitive match.
    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "Notebook" => Ok(EquipmentKind::Notebook),
            "Desktop" => Ok(EquipmentKind::Desktop),
            "Servidor" | "Server" => Ok(EquipmentKind::Server),
            _ => Err(EquipmentError::unsupported_kind(tag)),
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attributes shared by every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hardware {
    name: String,
    memory: String,
    processor: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Equipment {
    Notebook(Hardware),
    Desktop(Hardware),
    Server(Hardware),
}

impl Equipment {
    fn new(kind: EquipmentKind, hardware: Hardware) -> Self {
        match kind {
            EquipmentKind::Notebook => Equipment::Notebook(hardware),
            EquipmentKind::Desktop => Equipment::Desktop(hardware),
            EquipmentKind::Server => Equipment::Server(hardware),
        }
    }

    pub fn kind(&self) -> EquipmentKind {
        match self {
            Equipment::Notebook(_) => EquipmentKind::Notebook,
            Equipment::Desktop(_) => EquipmentKind::Desktop,
            Equipment::Server(_) => EquipmentKind::Server,
        }
    }

    fn hardware(&self) -> &Hardware {
        match self {
            Equipment::Notebook(hardware)
            | Equipment::Desktop(hardware)
            | Equipment::Server(hardware) => hardware,
        }
    }

    pub fn name(&self) -> &str {
        &self.hardware().name
    }

    pub fn memory(&self) -> &str {
        &self.hardware().memory
    }

    pub fn processor(&self) -> &str {
        &self.hardware().processor
    }

    pub fn details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hardware = self.hardware();
        write!(
            f,
            "Tipo: {}, Nombre: {}, RAM: {}, Procesador: {}",
            self.kind().label(),
            hardware.name,
            hardware.memory,
            hardware.processor
        )
    }
}

/// Builds equipment from a kind tag. Nothing is constructed when the tag
/// is not recognized.
pub fn create_equipment(
    kind: &str,
    name: impl Into<String>,
    memory: impl Into<String>,
    processor: impl Into<String>,
) -> Result<Equipment> {
    let kind = kind.parse::<EquipmentKind>().map_err(|err| {
        warn!(kind, "rejected equipment kind");
        err
    })?;

    let equipment = Equipment::new(
        kind,
        Hardware {
            name: name.into(),
            memory: memory.into(),
            processor: processor.into(),
        },
    );
    debug!(kind = %kind, name = equipment.name(), "equipment created");
    Ok(equipment)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EquipmentFactory;

impl EquipmentFactory {
    pub fn create_equipment(
        &self,
        kind: &str,
        name: impl Into<String>,
        memory: impl Into<String>,
        processor: impl Into<String>,
    ) -> Result<Equipment> {
        create_equipment(kind, name, memory, processor)
    }
}
