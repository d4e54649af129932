use super::types::InventoryConfig;
use super::util::{env_bool, env_non_empty, env_u64, env_usize};

impl InventoryConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_inventory();
        self.apply_env_notifications();
        self.apply_env_debug();
    }

    fn apply_env_inventory(&mut self) {
        if let Some(v) = env_bool("DEVICE_INVENTORY_ENABLED") {
            self.enabled = v;
        }
        if let Some(v) = env_bool("DEVICE_INVENTORY_AUTO_REFRESH") {
            self.auto_refresh = v;
        }
        if let Some(v) = env_non_empty("DEVICE_INVENTORY_ROOT_NAME") {
            self.root_display_name = Some(v);
        }
    }

    fn apply_env_notifications(&mut self) {
        if let Some(v) = env_u64("DEVICE_INVENTORY_BATCH_INTERVAL_MS") {
            self.batch_interval_ms = v;
        }
        if let Some(v) = env_usize("DEVICE_INVENTORY_NOTIFY_CAPACITY").filter(|v| *v > 0) {
            self.notify_capacity = v;
        }
    }

    fn apply_env_debug(&mut self) {
        if let Some(v) = env_bool("DEVICE_INVENTORY_VALIDATE_TOPOLOGY") {
            self.validate_topology = v;
        }
    }
}
