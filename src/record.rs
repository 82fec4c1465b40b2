use serde::{Deserialize, Serialize};

/// One `{name, type, status}` line of an inventory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

impl InventoryEntry {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            status: status.into(),
        }
    }
}
