use super::*;
use crate::backend::{ClassScope, SyntheticBackend, SyntheticDevice, SyntheticInterface, WireValue};
use crate::property::keys::{
    DEVPKEY_DEVICE_INSTANCE_ID, DEVPKEY_DEVICE_INTERFACE_CLASS_NAME,
    DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME, DEVPKEY_NAME,
};
use crate::property::PropertyId;

const DISK_CLASS: Guid = Guid::from_u128(0x4d36e967_e325_11ce_bfc1_08002be10318);
const VOLUME_INTERFACE: Guid = Guid::from_u128(0x53f5630d_b6bf_11d0_94f2_00a0c91efb8b);

fn options() -> BuildOptions {
    BuildOptions {
        root_name: None,
        validate: true,
    }
}

fn small_topology() -> SyntheticBackend {
    let backend = SyntheticBackend::new();
    backend.set_machine_name(Some("WORKSTATION-7"));
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID).name("Root enumerator"));
    backend.add_device(SyntheticDevice::new(r"ACPI\PNP0A08\0").parent(ROOT_INSTANCE_ID).name("PCI bus"));
    backend.add_device(
        SyntheticDevice::new(r"SCSI\DISK&VEN_NVME\4&1")
            .parent(r"ACPI\PNP0A08\0")
            .class(DISK_CLASS)
            .name("NVMe disk")
            .with_icon(),
    );
    backend.add_device(SyntheticDevice::new(r"ROOT\BASICDISPLAY\0000").parent(ROOT_INSTANCE_ID));
    backend
}

#[test]
fn builds_linked_tree_with_machine_named_root() {
    let backend = small_topology();
    let tree = DeviceTree::build(&backend, &options(), 1);

    assert_eq!(tree.device_count(), 4);
    assert_eq!(tree.orphan_count(), 0);
    let root = tree.root().expect("root");
    assert_eq!(root.instance_id(), Some(ROOT_INSTANCE_ID));
    assert_eq!(root.name(), Some("WORKSTATION-7"));
    assert_eq!(root.child_count(), 2);

    let children: Vec<_> = tree
        .children(root)
        .map(|child| child.instance_id().unwrap_or_default().to_string())
        .collect();
    assert_eq!(children, vec![r"ACPI\PNP0A08\0", r"ROOT\BASICDISPLAY\0000"]);
    assert!(tree.validate().is_ok());
}

#[test]
fn root_name_option_overrides_machine_name() {
    let backend = small_topology();
    let options = BuildOptions {
        root_name: Some("lab-host".to_string()),
        validate: true,
    };
    let tree = DeviceTree::build(&backend, &options, 1);
    assert_eq!(tree.root().and_then(DeviceItem::name), Some("lab-host"));
}

#[test]
fn devices_are_sorted_by_hash() {
    let tree = DeviceTree::build(&small_topology(), &options(), 1);
    let hashes: Vec<u32> = tree.devices().map(DeviceItem::instance_id_hash).collect();
    assert!(hashes.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn lookup_is_case_insensitive() {
    let tree = DeviceTree::build(&small_topology(), &options(), 1);
    let disk = tree
        .lookup_by_instance_id(r"scsi\disk&ven_nvme\4&1")
        .expect("disk");
    assert_eq!(disk.name(), Some("NVMe disk"));
    assert_eq!(disk.class_guid(), DISK_CLASS);
    assert_eq!(
        tree.lookup_by_hash(disk.instance_id_hash()).map(DeviceItem::id),
        Some(disk.id())
    );
    assert!(tree.lookup_by_instance_id(r"USB\NOT\THERE").is_none());
}

#[test]
fn interfaces_follow_device_children() {
    let backend = small_topology();
    backend.add_device(SyntheticDevice::new(r"STORAGE\VOLUME\1").parent(r"SCSI\DISK&VEN_NVME\4&1"));
    backend.add_interface(
        SyntheticInterface::new(r"SCSI\DISK&VEN_NVME\4&1", VOLUME_INTERFACE)
            .path(r"\\?\scsi#disk#1")
            .property(
                DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME,
                WireValue::string("Boot volume"),
            ),
    );

    let tree = DeviceTree::build(&backend, &options(), 1);
    let disk = tree
        .lookup_by_instance_id(r"SCSI\DISK&VEN_NVME\4&1")
        .expect("disk");
    assert_eq!(disk.child_count(), 1);
    assert_eq!(disk.interface_count(), 1);

    let chain: Vec<bool> = tree.children(disk).map(DeviceItem::is_interface).collect();
    assert_eq!(chain, vec![false, true]);

    let interface = tree.interfaces().next().expect("interface");
    assert_eq!(interface.name(), Some("Boot volume"));
    assert_eq!(interface.interface_path(), Some(r"\\?\scsi#disk#1"));
    assert_eq!(tree.parent(interface).map(DeviceItem::id), Some(disk.id()));
    assert!(tree.validate().is_ok());
}

fn volume_on_pci_bus(interface: SyntheticInterface) -> DeviceTree {
    let backend = small_topology();
    backend.add_interface(interface);
    DeviceTree::build(&backend, &options(), 1)
}

fn only_interface_name(tree: &DeviceTree) -> Option<&str> {
    tree.interfaces().next().expect("interface").name()
}

#[test]
fn interface_name_falls_back_to_class_name() {
    let backend = small_topology();
    backend.add_interface(SyntheticInterface::new(r"ACPI\PNP0A08\0", VOLUME_INTERFACE));
    backend.set_class_property(
        VOLUME_INTERFACE,
        ClassScope::Interface,
        DEVPKEY_DEVICE_INTERFACE_CLASS_NAME,
        WireValue::string("Volume"),
    );

    let tree = DeviceTree::build(&backend, &options(), 1);
    assert_eq!(only_interface_name(&tree), Some("Volume"));
}

#[test]
fn interface_name_falls_back_to_its_own_instance_id() {
    let tree = volume_on_pci_bus(
        SyntheticInterface::new(r"ACPI\PNP0A08\0", VOLUME_INTERFACE).property(
            DEVPKEY_DEVICE_INSTANCE_ID,
            WireValue::string(r"STORAGE\VOLUMESNAPSHOT\1"),
        ),
    );
    let interface = tree.interfaces().next().expect("interface");
    assert_eq!(interface.name(), Some(r"STORAGE\VOLUMESNAPSHOT\1"));
    assert_eq!(interface.instance_id(), Some(r"STORAGE\VOLUMESNAPSHOT\1"));
}

#[test]
fn interface_name_falls_back_to_class_guid() {
    let tree = volume_on_pci_bus(SyntheticInterface::new(r"ACPI\PNP0A08\0", VOLUME_INTERFACE));
    let interface = tree.interfaces().next().expect("interface");
    assert_eq!(
        interface.name(),
        Some("{53F5630D-B6BF-11D0-94F2-00A0C91EFB8B}")
    );
    // Without an id of its own the interface is found under its owner's.
    assert_eq!(interface.instance_id(), Some(r"ACPI\PNP0A08\0"));
}

#[test]
fn empty_interface_name_is_replaced() {
    let tree = volume_on_pci_bus(
        SyntheticInterface::new(r"ACPI\PNP0A08\0", VOLUME_INTERFACE)
            .property(DEVPKEY_NAME, WireValue::string("")),
    );
    assert_eq!(
        only_interface_name(&tree),
        Some("{53F5630D-B6BF-11D0-94F2-00A0C91EFB8B}")
    );

    let tree = volume_on_pci_bus(
        SyntheticInterface::new(r"ACPI\PNP0A08\0", VOLUME_INTERFACE)
            .property(DEVPKEY_NAME, WireValue::string(""))
            .property(
                DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME,
                WireValue::string("Data volume"),
            ),
    );
    assert_eq!(only_interface_name(&tree), Some("Data volume"));
}

#[test]
fn reported_interface_name_wins() {
    let tree = volume_on_pci_bus(
        SyntheticInterface::new(r"ACPI\PNP0A08\0", VOLUME_INTERFACE)
            .property(DEVPKEY_NAME, WireValue::string("Recovery"))
            .property(
                DEVPKEY_DEVICE_INTERFACE_FRIENDLY_NAME,
                WireValue::string("Data volume"),
            ),
    );
    assert_eq!(only_interface_name(&tree), Some("Recovery"));
}

#[test]
fn orphans_attach_under_root() {
    let backend = small_topology();
    backend.add_device(SyntheticDevice::new(r"USB\LOST\1").parent(r"USB\ROOT_HUB\GONE"));

    let tree = DeviceTree::build(&backend, &options(), 1);
    assert_eq!(tree.orphan_count(), 1);
    let orphan = tree.lookup_by_instance_id(r"USB\LOST\1").expect("orphan");
    assert_eq!(tree.parent(orphan).and_then(DeviceItem::instance_id), Some(ROOT_INSTANCE_ID));
    assert!(tree.validate().is_ok());
}

#[test]
fn parent_cycle_leaves_tree_rootless() {
    let backend = SyntheticBackend::new();
    backend.add_device(SyntheticDevice::new("A").parent("B"));
    backend.add_device(SyntheticDevice::new("B").parent("A"));

    let tree = DeviceTree::build(&backend, &BuildOptions::default(), 1);
    assert!(tree.root().is_none());
    assert_eq!(
        tree.validate(),
        Err(TopologyError::Cycle { unreachable: 2 })
    );
}

#[test]
fn unavailable_enumeration_yields_empty_tree() {
    let backend = small_topology();
    backend.set_fail_open(true);

    let tree = DeviceTree::build(&backend, &options(), 3);
    assert!(tree.is_empty());
    assert!(!tree.has_enumeration());
    assert!(tree.root().is_none());
    assert_eq!(tree.generation(), 3);
    assert!(tree.validate().is_ok());
    assert_eq!(tree.snapshot().root, None);
}

#[test]
fn summary_fields_default_when_missing() {
    let backend = SyntheticBackend::new();
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID).phantom());
    backend.add_device(
        SyntheticDevice::new(r"PCI\VEN_1\0")
            .parent(ROOT_INSTANCE_ID)
            .property(
                crate::property::keys::DEVPKEY_DEVICE_UPPER_FILTERS,
                WireValue::string_list(&["partmgr"]),
            )
            .property(
                crate::property::keys::DEVPKEY_DEVICE_DEV_NODE_STATUS,
                WireValue::u32(0x0180_200A),
            ),
    );

    let tree = DeviceTree::build(&backend, &options(), 1);
    let root = tree.root().expect("root");
    assert_eq!(root.problem_code(), crate::item::CM_PROB_PHANTOM);
    assert!(!root.is_present());
    assert_eq!(root.dev_node_status(), 0);

    let pci = tree.lookup_by_instance_id(r"PCI\VEN_1\0").expect("pci");
    assert!(pci.is_present());
    assert_eq!(pci.problem_code(), 0);
    assert_eq!(pci.dev_node_status(), 0x0180_200A);
    assert!(pci.has_upper_filters());
    assert!(!pci.has_lower_filters());
    assert!(!pci.has_problem());
}

#[test]
fn interface_icon_comes_from_owner() {
    let backend = small_topology();
    backend.add_interface(SyntheticInterface::new(r"SCSI\DISK&VEN_NVME\4&1", VOLUME_INTERFACE));
    let tree = DeviceTree::build(&backend, &options(), 1);

    let interface = tree.interfaces().next().expect("interface");
    let icon = tree.icon(interface, IconSize::SMALL).expect("icon");
    assert_eq!(icon.size(), IconSize::SMALL);
    assert!(tree.icon(tree.root().expect("root"), IconSize::SMALL).is_none());
}

#[test]
fn snapshot_nests_children() {
    let tree = DeviceTree::build(&small_topology(), &options(), 9);
    let snapshot = tree.snapshot();
    assert_eq!(snapshot.generation, 9);
    assert_eq!(snapshot.device_count, 4);
    let root = snapshot.root.expect("root");
    assert_eq!(root.name.as_deref(), Some("WORKSTATION-7"));
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].children.len(), 1);
    assert_eq!(root.children[0].children[0].name.as_deref(), Some("NVMe disk"));

    let json = serde_json::to_string(&root).expect("serialize");
    assert!(json.contains(r#""class_guid":"{4D36E967-E325-11CE-BFC1-08002BE10318}""#));
}

#[test]
fn names_resolve_lazily() {
    let tree = DeviceTree::build(&small_topology(), &options(), 1);
    let display = tree
        .lookup_by_instance_id(r"ROOT\BASICDISPLAY\0000")
        .expect("display");
    assert!(!display.is_resolved(PropertyId::Manufacturer));
    assert!(!display.property(PropertyId::Manufacturer).is_valid());
    assert!(display.is_resolved(PropertyId::Manufacturer));
}
