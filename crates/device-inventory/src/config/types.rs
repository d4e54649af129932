use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tree::BuildOptions;

/// Runtime settings for the device inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Master switch. When off, change notifications are never registered.
    pub enabled: bool,
    /// Rebuild the tree in the background when devices change.
    pub auto_refresh: bool,
    pub batch_interval_ms: u64,
    /// Notification records held before new ones are dropped.
    pub notify_capacity: usize,
    /// Display name for the root enumerator; the machine name when unset.
    pub root_display_name: Option<String>,
    pub validate_topology: bool,
}

impl InventoryConfig {
    pub fn batch_interval(&self) -> Duration {
        Duration::from_millis(self.batch_interval_ms)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            root_name: self.root_display_name.clone(),
            validate: self.validate_topology,
        }
    }
}
