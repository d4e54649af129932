use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use device_inventory::item::ROOT_INSTANCE_ID;
use device_inventory::{
    BuildOptions, DeviceItem, SyntheticBackend, SyntheticDevice, TreePublisher,
};

const READERS: usize = 4;

fn backend_with_devices(count: usize) -> Arc<SyntheticBackend> {
    let backend = Arc::new(SyntheticBackend::new());
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID));
    for n in 0..count {
        backend.add_device(
            SyntheticDevice::new(format!(r"ROOT\DEV\{n:04}"))
                .parent(ROOT_INSTANCE_ID)
                .name(&format!("Device {n}")),
        );
    }
    backend
}

#[test]
fn readers_never_observe_a_torn_tree_while_publishing() {
    let backend = backend_with_devices(32);
    let publisher = Arc::new(TreePublisher::new(
        backend.clone(),
        BuildOptions::default(),
    ));
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let publisher = Arc::clone(&publisher);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut last_generation = 0u64;
                let mut reads = 0usize;
                while !stop.load(Ordering::Relaxed) {
                    let tree = publisher.acquire_current();
                    assert!(tree.generation() >= last_generation);
                    last_generation = tree.generation();

                    let root = tree.root().expect("root");
                    let children = tree.children(root).count();
                    assert_eq!(children, tree.device_count() - 1);
                    for device in tree.devices() {
                        let id = device.instance_id().expect("instance id");
                        let found = tree.lookup_by_instance_id(id).map(DeviceItem::id);
                        assert_eq!(found, Some(device.id()));
                    }
                    reads += 1;
                }
                reads
            })
        })
        .collect();

    let writer = {
        let publisher = Arc::clone(&publisher);
        let backend = Arc::clone(&backend);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut published = 0usize;
            let mut n = 1000usize;
            while !stop.load(Ordering::Relaxed) {
                if n % 2 == 0 {
                    backend.add_device(
                        SyntheticDevice::new(format!(r"USB\HOTPLUG\{n}")).parent(ROOT_INSTANCE_ID),
                    );
                } else {
                    backend.remove_device(&format!(r"USB\HOTPLUG\{}", n - 1));
                }
                publisher.force_rebuild();
                published += 1;
                n += 1;
            }
            published
        })
    };

    let deadline = Instant::now() + Duration::from_millis(500);
    while Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }
    stop.store(true, Ordering::Relaxed);

    let published = writer.join().expect("writer");
    assert!(published > 0);
    for reader in readers {
        assert!(reader.join().expect("reader") > 0);
    }
}

#[test]
fn a_held_tree_outlives_its_replacement() {
    let backend = backend_with_devices(3);
    let publisher = TreePublisher::new(backend.clone(), BuildOptions::default());
    let held = publisher.acquire_current();
    let held_generation = held.generation();

    backend.remove_device(r"ROOT\DEV\0001");
    let fresh = publisher.force_rebuild();

    assert!(fresh.generation() > held_generation);
    assert_eq!(fresh.device_count(), 3);
    assert_eq!(held.device_count(), 4);
    assert_eq!(
        held.lookup_by_instance_id(r"ROOT\DEV\0001")
            .and_then(DeviceItem::name),
        Some("Device 1")
    );
}

#[test]
fn concurrent_first_access_builds_once() {
    let backend = backend_with_devices(8);
    let publisher = Arc::new(TreePublisher::new(
        backend.clone(),
        BuildOptions::default(),
    ));

    let handles: Vec<_> = (0..READERS)
        .map(|_| {
            let publisher = Arc::clone(&publisher);
            thread::spawn(move || publisher.acquire_current().generation())
        })
        .collect();
    let generations: Vec<u64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("reader"))
        .collect();

    assert!(generations.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(backend.open_count(), 1);
}
