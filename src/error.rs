use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EquipmentError>;

#[derive(Error, Debug)]
pub enum EquipmentError {
    #[error("Unsupported equipment kind: {kind}")]
    UnsupportedKind { kind: String },

    #[error("Observer #{observer} failed to handle notification: {source}")]
    Notify {
        observer: usize,
        #[source]
        source: NotifyError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render inventory: {0}")]
    Render(#[from] serde_json::Error),
}

impl EquipmentError {
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedKind { kind: kind.into() }
    }
}

/// Raised by a listener that could not handle a status change.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct NotifyError {
    pub message: String,
}

impl NotifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_message() {
        let err = EquipmentError::unsupported_kind("Tablet");
        assert_eq!(err.to_string(), "Unsupported equipment kind: Tablet");
    }

    #[test]
    fn test_notify_error_keeps_source() {
        let err = EquipmentError::Notify {
            observer: 2,
            source: NotifyError::new("mailbox full"),
        };
        assert_eq!(
            err.to_string(),
            "Observer #2 failed to handle notification: mailbox full"
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("mailbox full"));
    }

    #[test]
    fn test_config_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: EquipmentError = ConfigError::from(parse_err).into();
        assert!(matches!(err, EquipmentError::Config(ConfigError::Parse { .. })));
    }
}
