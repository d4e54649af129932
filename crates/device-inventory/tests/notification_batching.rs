use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use device_inventory::item::ROOT_INSTANCE_ID;
use device_inventory::{
    DeviceInventory, DeviceNotification, Guid, InventoryConfig, SyntheticBackend,
    SyntheticDevice, TreeRef,
};

const BURST: usize = 25;

fn backend() -> Arc<SyntheticBackend> {
    let backend = Arc::new(SyntheticBackend::new());
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID));
    backend
}

fn record(inventory: &DeviceInventory) -> Arc<Mutex<Vec<(u64, DeviceNotification, bool)>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    inventory.subscribe(Arc::new(
        move |tree: &TreeRef, notification: &DeviceNotification| {
            let visible = notification
                .instance_id()
                .is_some_and(|id| tree.lookup_by_instance_id(id).is_some());
            sink.lock()
                .expect("sink")
                .push((tree.generation(), notification.clone(), visible));
        },
    ));
    seen
}

#[test]
fn burst_is_coalesced_into_one_rebuild_and_replayed_in_order() {
    let backend = backend();
    let inventory = DeviceInventory::start(
        InventoryConfig {
            batch_interval_ms: 250,
            ..InventoryConfig::default()
        },
        backend.clone(),
    );
    let seen = record(&inventory);
    let initial = inventory.current_tree().generation();

    let mut expected = Vec::new();
    for n in 0..BURST {
        let id = format!(r"USB\VID_1234&PID_{n:04}\1");
        backend.add_device(SyntheticDevice::new(id.clone()).parent(ROOT_INSTANCE_ID));
        let notification = DeviceNotification::InstanceEnumerated { instance_id: id };
        assert!(backend.emit(notification.clone()));
        expected.push(notification);
    }

    let deadline = Instant::now() + Duration::from_secs(10);
    while seen.lock().expect("seen").len() < BURST && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }

    let seen = seen.lock().expect("seen");
    assert_eq!(seen.len(), BURST);
    let replayed: Vec<_> = seen.iter().map(|(_, n, _)| n.clone()).collect();
    assert_eq!(replayed, expected);
    assert!(seen.iter().all(|(_, _, visible)| *visible));
    let generation = seen[0].0;
    assert!(generation > initial);
    assert!(seen.iter().all(|(g, _, _)| *g == generation));

    let stats = inventory.stats();
    assert_eq!(stats.pushed, BURST as u64);
    assert_eq!(stats.rebuilds, 1);
    assert_eq!(inventory.current_tree().device_count(), BURST + 1);
}

#[test]
fn interface_events_carry_their_class() {
    let backend = backend();
    let inventory = DeviceInventory::start(
        InventoryConfig {
            auto_refresh: false,
            ..InventoryConfig::default()
        },
        backend.clone(),
    );
    let seen = record(&inventory);
    let class = Guid::from_u128(0x53f5630d_b6bf_11d0_94f2_00a0c91efb8b);

    backend.emit(DeviceNotification::InterfaceArrival { class_guid: class });
    backend.emit(DeviceNotification::InterfaceRemoval { class_guid: class });
    assert_eq!(inventory.drain_now(), 2);

    let seen = seen.lock().expect("seen");
    let classes: Vec<_> = seen.iter().filter_map(|(_, n, _)| n.class_guid()).collect();
    assert_eq!(classes, vec![class, class]);
    assert!(seen[1].1.is_removal());
}

#[test]
fn overflow_still_rebuilds_and_reports_drops() {
    let backend = backend();
    let inventory = DeviceInventory::start(
        InventoryConfig {
            auto_refresh: false,
            notify_capacity: 4,
            ..InventoryConfig::default()
        },
        backend.clone(),
    );
    inventory.current_tree();

    backend.add_device(SyntheticDevice::new(r"USB\LATE\1").parent(ROOT_INSTANCE_ID));
    for n in 0..10 {
        backend.emit(DeviceNotification::InstanceStarted {
            instance_id: format!(r"USB\BURST\{n}"),
        });
    }

    assert_eq!(inventory.drain_now(), 4);
    let stats = inventory.stats();
    assert_eq!(stats.dropped, 6);
    assert_eq!(stats.rebuilds, 1);
    assert!(inventory.lookup(r"USB\LATE\1").is_some());
}
