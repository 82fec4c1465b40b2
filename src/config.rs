//! TOML configuration for the showcase runner.
//!
//! Every field has a default, so a missing file, section or key falls back
//! to the sample equipment used by the standalone demos:
//!
//! ```toml
//! log_level = "debug"
//! color = false
//!
//! [factory]
//! kind = "Servidor"
//! name = "PowerEdge"
//!
//! [observer]
//! new_status = "baja"
//! observers = 2
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub log_level: String,
    pub color: bool,
    pub factory: FactorySample,
    pub adapter: EntrySample,
    pub observer: ObserverSample,
    pub singleton: EntrySample,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            color: true,
            factory: FactorySample::default(),
            adapter: EntrySample::new("Servidor Dell", "Servidor", "disponible"),
            observer: ObserverSample::default(),
            singleton: EntrySample::new("Notebook HP", "Portátil", "disponible"),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactorySample {
    pub kind: String,
    pub name: String,
    pub memory: String,
    pub processor: String,
}

impl Default for FactorySample {
    fn default() -> Self {
        Self {
            kind: "Notebook".to_string(),
            name: "Dell XPS".to_string(),
            memory: "16GB".to_string(),
            processor: "i7".to_string(),
        }
    }
}

/// A `{name, type, status}` triple to feed into an inventory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntrySample {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

impl EntrySample {
    pub fn new(name: &str, kind: &str, status: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            status: status.to_string(),
        }
    }
}

impl Default for EntrySample {
    fn default() -> Self {
        Self::new("Notebook HP", "Portátil", "disponible")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverSample {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub new_status: String,
    /// How many support listeners to register.
    pub observers: usize,
}

impl Default for ObserverSample {
    fn default() -> Self {
        Self {
            name: "Notebook HP".to_string(),
            kind: "Portátil".to_string(),
            status: "disponible".to_string(),
            new_status: "en reparación".to_string(),
            observers: 1,
        }
    }
}
