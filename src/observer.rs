// Observer: an equipment record pushes every status change to the
// listeners registered on it.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::error::{EquipmentError, NotifyError, Result};

pub trait Observer: Send + Sync {
    fn notify(&self, change: &str) -> std::result::Result<(), NotifyError>;
}

impl<F> Observer for F
where
    F: Fn(&str) -> std::result::Result<(), NotifyError> + Send + Sync,
{
    fn notify(&self, change: &str) -> std::result::Result<(), NotifyError> {
        self(change)
    }
}

/// Support desk listener: keeps a copy of each change and, unless built
/// with [`Support::silent`], prints it.
#[derive(Debug)]
pub struct Support {
    echo: bool,
    received: Mutex<Vec<String>>,
}

impl Default for Support {
    fn default() -> Self {
        Self::new()
    }
}

impl Support {
    pub fn new() -> Self {
        Self {
            echo: true,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self {
            echo: false,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Observer for Support {
    fn notify(&self, change: &str) -> std::result::Result<(), NotifyError> {
        if self.echo {
            println!("Soporte notificado: {change}");
        }
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change.to_string());
        Ok(())
    }
}

pub struct ObservableEquipment {
    name: String,
    kind: String,
    status: String,
    observers: Vec<Arc<dyn Observer>>,
}

impl ObservableEquipment {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            status: status.into(),
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registering the same listener twice means it is notified twice.
    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
        debug!(
            equipment = %self.name,
            observers = self.observers.len(),
            "observer registered"
        );
    }

    /// Sets the new status, then notifies every listener in registration
    /// order before returning. The first listener error stops the fan-out;
    /// the status change itself is kept.
    pub fn change_status(&mut self, new_status: impl Into<String>) -> Result<()> {
        self.status = new_status.into();
        info!(equipment = %self.name, status = %self.status, "status changed");
        self.notify_observers()
    }

    fn notify_observers(&self) -> Result<()> {
        let change = format!("{} ha cambiado su estado a {}", self.name, self.status);
        for (index, observer) in self.observers.iter().enumerate() {
            observer.notify(&change).map_err(|source| {
                warn!(equipment = %self.name, observer = index, error = %source, "observer failed");
                EquipmentError::Notify {
                    observer: index,
                    source,
                }
            })?;
        }
        Ok(())
    }
}
