pub(super) const CONFIG_ENV: &str = "DEVICE_INVENTORY_CONFIG";

#[cfg(not(target_os = "windows"))]
pub(super) const CONFIG_CANDIDATES: [&str; 1] = ["/etc/device-inventory/inventory.toml"];
#[cfg(target_os = "windows")]
pub(super) const CONFIG_CANDIDATES: [&str; 1] = [r"C:\ProgramData\DeviceInventory\inventory.toml"];

pub(super) const DEFAULT_BATCH_INTERVAL_MS: u64 = 1_000;
pub(super) const DEFAULT_NOTIFY_CAPACITY: usize = 4_096;
