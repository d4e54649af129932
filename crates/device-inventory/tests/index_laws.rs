use std::collections::BTreeSet;

use proptest::prelude::*;

use device_inventory::item::{instance_id_hash, ROOT_INSTANCE_ID};
use device_inventory::{
    BuildOptions, DeviceItem, DeviceTree, PropertyId, SyntheticBackend, SyntheticDevice,
};

fn tree_of(ids: &BTreeSet<String>) -> (SyntheticBackend, DeviceTree) {
    let backend = SyntheticBackend::new();
    backend.add_device(SyntheticDevice::new(ROOT_INSTANCE_ID));
    for id in ids {
        backend.add_device(SyntheticDevice::new(id.clone()).parent(ROOT_INSTANCE_ID));
    }
    let tree = DeviceTree::build(&backend, &BuildOptions::default(), 1);
    (backend, tree)
}

proptest! {
    #[test]
    fn device_list_is_sorted_and_every_id_is_found(
        ids in proptest::collection::btree_set(r"[A-Z]{1,3}\\[A-Z0-9&_]{1,10}\\[0-9]{1,2}", 0..48)
    ) {
        let (_backend, tree) = tree_of(&ids);
        prop_assert_eq!(tree.device_count(), ids.len() + 1);

        let hashes: Vec<u32> = tree.devices().map(DeviceItem::instance_id_hash).collect();
        prop_assert!(hashes.windows(2).all(|pair| pair[0] <= pair[1]));

        for id in &ids {
            let found = tree.lookup_by_instance_id(id);
            prop_assert_eq!(found.and_then(DeviceItem::instance_id), Some(id.as_str()));
            let by_lower = tree.lookup_by_instance_id(&id.to_lowercase());
            prop_assert_eq!(by_lower.map(DeviceItem::id), found.map(DeviceItem::id));
            let by_hash = tree.lookup_by_hash(instance_id_hash(id));
            prop_assert_eq!(by_hash.map(DeviceItem::instance_id_hash), Some(instance_id_hash(id)));
        }
    }

    #[test]
    fn hash_ignores_case(id in r"[A-Za-z0-9\\&_]{0,40}") {
        prop_assert_eq!(instance_id_hash(&id), instance_id_hash(&id.to_uppercase()));
    }

    #[test]
    fn properties_are_fetched_at_most_once(
        picks in proptest::collection::vec(0..PropertyId::COUNT, 1..24)
    ) {
        let ids: BTreeSet<String> = [r"PCI\VEN_8086\0".to_string()].into_iter().collect();
        let (backend, tree) = tree_of(&ids);
        let device = tree.lookup_by_instance_id(r"PCI\VEN_8086\0").expect("device");

        let first: Vec<_> = picks
            .iter()
            .map(|&index| device.property(PropertyId::ALL[index]).clone())
            .collect();
        let queries = backend.query_count();

        let second: Vec<_> = picks
            .iter()
            .map(|&index| device.property(PropertyId::ALL[index]).clone())
            .collect();
        prop_assert_eq!(backend.query_count(), queries);
        prop_assert_eq!(first, second);
        for &index in &picks {
            prop_assert!(device.is_resolved(PropertyId::ALL[index]));
        }
    }
}
