use super::constants::{DEFAULT_BATCH_INTERVAL_MS, DEFAULT_NOTIFY_CAPACITY};
use super::types::InventoryConfig;

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_refresh: true,
            batch_interval_ms: DEFAULT_BATCH_INTERVAL_MS,
            notify_capacity: DEFAULT_NOTIFY_CAPACITY,
            root_display_name: None,
            validate_topology: cfg!(debug_assertions),
        }
    }
}
