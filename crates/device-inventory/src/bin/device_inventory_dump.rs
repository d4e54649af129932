use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use device_inventory::{DeviceBackend, DeviceInventory, InventoryConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "device_inventory=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = InventoryConfig {
        auto_refresh: false,
        ..InventoryConfig::load()?
    };
    let inventory = DeviceInventory::start(config, backend());
    let tree = inventory.current_tree();

    info!(
        generation = tree.generation(),
        devices = tree.device_count(),
        interfaces = tree.interface_count(),
        orphans = tree.orphan_count(),
        "device tree enumerated"
    );

    let json = serde_json::to_string_pretty(&tree.snapshot())
        .context("failed serializing device tree snapshot")?;
    println!("{json}");
    Ok(())
}

#[cfg(target_os = "windows")]
fn backend() -> Arc<dyn DeviceBackend> {
    Arc::new(device_inventory::SetupApiBackend::new())
}

#[cfg(not(target_os = "windows"))]
fn backend() -> Arc<dyn DeviceBackend> {
    use device_inventory::item::ROOT_INSTANCE_ID;
    use device_inventory::{Guid, SyntheticBackend, SyntheticDevice, SyntheticInterface};

    const HID_INTERFACE: Guid = Guid::from_u128(0x4d1e55b2_f16f_11cf_88cb_001111000030);

    let backend = SyntheticBackend::new();
    backend.set_machine_name(std::env::var("HOSTNAME").ok().as_deref());
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID));
    backend.add_device(
        SyntheticDevice::new(r"PCI\VEN_8086&DEV_A36D&SUBSYS_00000000&REV_10\3&11583659&0&A0")
            .parent(ROOT_INSTANCE_ID)
            .name("USB 3.1 eXtensible Host Controller"),
    );
    backend.add_device(
        SyntheticDevice::new(r"USB\VID_046D&PID_C52B\6&2B7E4A1&0&1")
            .parent(r"PCI\VEN_8086&DEV_A36D&SUBSYS_00000000&REV_10\3&11583659&0&A0")
            .name("USB Receiver"),
    );
    backend.add_interface(
        SyntheticInterface::new(r"USB\VID_046D&PID_C52B\6&2B7E4A1&0&1", HID_INTERFACE)
            .path(r"\\?\HID#VID_046D&PID_C52B#6&2b7e4a1&0&1#{4d1e55b2-f16f-11cf-88cb-001111000030}"),
    );
    Arc::new(backend)
}
