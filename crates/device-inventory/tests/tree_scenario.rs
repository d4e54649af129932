use device_inventory::item::ROOT_INSTANCE_ID;
use device_inventory::backend::ClassScope;
use device_inventory::property::keys::{
    DEVPKEY_DEVICE_INSTANCE_ID, DEVPKEY_DEVICE_INTERFACE_CLASS_NAME,
    DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME,
};
use device_inventory::{
    BuildOptions, DeviceItem, DeviceTree, Guid, PropertyId, SyntheticBackend, SyntheticDevice,
    SyntheticInterface, WireValue,
};

const HID_INTERFACE: Guid = Guid::from_u128(0x4d1e55b2_f16f_11cf_88cb_001111000030);

fn scenario() -> SyntheticBackend {
    let backend = SyntheticBackend::new();
    backend.set_machine_name(Some("BUILD-AGENT"));
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID));
    backend.add_device(SyntheticDevice::new(r"PCI\A\0").parent(ROOT_INSTANCE_ID).name("A"));
    backend.add_device(SyntheticDevice::new(r"PCI\B\0").parent(ROOT_INSTANCE_ID).name("B"));
    backend.add_device(SyntheticDevice::new(r"USB\C\0").parent(r"PCI\A\0").name("C"));
    backend.add_interface(SyntheticInterface::new(r"PCI\B\0", HID_INTERFACE));
    backend
}

fn build(backend: &SyntheticBackend) -> DeviceTree {
    DeviceTree::build(
        backend,
        &BuildOptions {
            root_name: None,
            validate: true,
        },
        1,
    )
}

fn child_names<'a>(tree: &'a DeviceTree, item: &DeviceItem) -> Vec<&'a str> {
    tree.children(item).filter_map(DeviceItem::name).collect()
}

#[test]
fn four_devices_and_one_interface_link_into_expected_shape() {
    let tree = build(&scenario());

    let root = tree.root().expect("root");
    assert_eq!(root.instance_id(), Some(ROOT_INSTANCE_ID));
    assert_eq!(root.parent(), None);
    assert_eq!(child_names(&tree, root), vec!["A", "B"]);

    let a = tree.lookup_by_instance_id(r"PCI\A\0").expect("A");
    assert_eq!(child_names(&tree, a), vec!["C"]);
    assert_eq!(a.child_count(), 1);

    let b = tree.lookup_by_instance_id(r"PCI\B\0").expect("B");
    assert_eq!(b.child_count(), 0);
    assert_eq!(b.interface_count(), 1);
    let interface = tree.children(b).next().expect("interface under B");
    assert!(interface.is_interface());
    assert_eq!(
        interface.name(),
        Some("{4D1E55B2-F16F-11CF-88CB-001111000030}")
    );
    assert_eq!(tree.parent(interface).map(DeviceItem::id), Some(b.id()));

    assert_eq!(tree.device_count(), 4);
    assert_eq!(tree.interface_count(), 1);
    let hashes: Vec<u32> = tree.devices().map(DeviceItem::instance_id_hash).collect();
    assert!(hashes.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(tree.orphan_count(), 0);
    assert!(tree.validate().is_ok());
}

#[test]
fn interface_with_friendly_name_keeps_it() {
    let backend = scenario();
    backend.add_interface(
        SyntheticInterface::new(r"USB\C\0", HID_INTERFACE).property(
            DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME,
            WireValue::string("Keyboard"),
        ),
    );
    let tree = build(&backend);
    let c = tree.lookup_by_instance_id(r"usb\c\0").expect("C");
    let names = child_names(&tree, c);
    assert_eq!(names, vec!["Keyboard"]);
}

#[test]
fn interface_names_fall_back_one_step_at_a_time() {
    let hid = |extra: fn(SyntheticInterface) -> SyntheticInterface| {
        let backend = scenario();
        backend.add_interface(extra(SyntheticInterface::new(r"USB\C\0", HID_INTERFACE)));
        backend
    };
    let name_under_c = |backend: &SyntheticBackend| {
        let tree = build(backend);
        let c = tree.lookup_by_instance_id(r"USB\C\0").expect("C");
        let names = child_names(&tree, c);
        names.first().map(|name| name.to_string())
    };

    let with_friendly_name = hid(|i| {
        i.property(DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME, WireValue::string("Keyboard"))
            .property(DEVPKEY_DEVICE_INSTANCE_ID, WireValue::string(r"HID\KBD\1"))
    });
    with_friendly_name.set_class_property(
        HID_INTERFACE,
        ClassScope::Interface,
        DEVPKEY_DEVICE_INTERFACE_CLASS_NAME,
        WireValue::string("Human Interface Device"),
    );
    assert_eq!(name_under_c(&with_friendly_name).as_deref(), Some("Keyboard"));

    let with_class_name = hid(|i| {
        i.property(DEVPKEY_DEVICE_INSTANCE_ID, WireValue::string(r"HID\KBD\1"))
    });
    with_class_name.set_class_property(
        HID_INTERFACE,
        ClassScope::Interface,
        DEVPKEY_DEVICE_INTERFACE_CLASS_NAME,
        WireValue::string("Human Interface Device"),
    );
    assert_eq!(
        name_under_c(&with_class_name).as_deref(),
        Some("Human Interface Device")
    );

    let with_instance_id = hid(|i| {
        i.property(DEVPKEY_DEVICE_INSTANCE_ID, WireValue::string(r"HID\KBD\1"))
    });
    assert_eq!(name_under_c(&with_instance_id).as_deref(), Some(r"HID\KBD\1"));

    let bare = hid(|i| i);
    assert_eq!(
        name_under_c(&bare).as_deref(),
        Some("{4D1E55B2-F16F-11CF-88CB-001111000030}")
    );
}

#[test]
fn every_item_resolves_its_instance_id_property() {
    let tree = build(&scenario());
    for device in tree.devices() {
        let value = device.property(PropertyId::InstanceId);
        assert_eq!(value.as_str(), device.instance_id());
    }
}

#[test]
fn snapshot_mirrors_the_linked_tree() {
    let tree = build(&scenario());
    let snapshot = tree.snapshot();
    let root = snapshot.root.expect("root snapshot");
    assert_eq!(root.name.as_deref(), Some("BUILD-AGENT"));
    let names: Vec<_> = root
        .children
        .iter()
        .map(|child| child.name.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(root.children[1].children[0].is_interface);
}
