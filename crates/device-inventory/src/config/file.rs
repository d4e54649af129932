use anyhow::{Context, Result};
use serde::Deserialize;

use super::paths::resolve_config_path;
use super::types::InventoryConfig;
use super::util::non_empty;

impl InventoryConfig {
    pub(super) fn apply_file_config(&mut self) -> Result<bool> {
        let Some(path) = resolve_config_path()? else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        let file_cfg: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;

        self.apply_file_inventory(file_cfg.inventory);
        self.apply_file_notifications(file_cfg.notifications);
        self.apply_file_debug(file_cfg.debug);

        Ok(true)
    }

    fn apply_file_inventory(&mut self, inventory: Option<FileInventoryConfig>) {
        let Some(inventory) = inventory else {
            return;
        };
        if let Some(v) = inventory.enabled {
            self.enabled = v;
        }
        if let Some(v) = inventory.auto_refresh {
            self.auto_refresh = v;
        }
        if let Some(v) = non_empty(inventory.root_display_name) {
            self.root_display_name = Some(v);
        }
    }

    fn apply_file_notifications(&mut self, notifications: Option<FileNotificationsConfig>) {
        let Some(notifications) = notifications else {
            return;
        };
        if let Some(v) = notifications.batch_interval_ms {
            self.batch_interval_ms = v;
        }
        if let Some(v) = notifications.capacity.filter(|v| *v > 0) {
            self.notify_capacity = v;
        }
    }

    fn apply_file_debug(&mut self, debug: Option<FileDebugConfig>) {
        let Some(debug) = debug else {
            return;
        };
        if let Some(v) = debug.validate_topology {
            self.validate_topology = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    inventory: Option<FileInventoryConfig>,
    #[serde(default)]
    notifications: Option<FileNotificationsConfig>,
    #[serde(default)]
    debug: Option<FileDebugConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileInventoryConfig {
    #[serde(default)]
    enabled: Option<bool>,
    #[serde(default)]
    auto_refresh: Option<bool>,
    #[serde(default)]
    root_display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileNotificationsConfig {
    #[serde(default)]
    batch_interval_ms: Option<u64>,
    #[serde(default)]
    capacity: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileDebugConfig {
    #[serde(default)]
    validate_topology: Option<bool>,
}
