//! Device items: one device node or one device interface.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::{DeviceInfoSet, DeviceRecord, InterfaceRecord};
use crate::guid::Guid;
use crate::property::{
    self, PropertyCache, PropertyId, PropertyKind, PropertyValue, Subject, Variant,
};

/// Instance id of the OS's synthetic root enumerator.
pub const ROOT_INSTANCE_ID: &str = r"HTREE\ROOT\0";

/// Problem code assumed when none is reported (device not present).
pub const CM_PROB_PHANTOM: u32 = 0x2D;

pub const DN_HAS_PROBLEM: u32 = 0x0000_0400;

/// Index of an item within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ItemRecord {
    Device(DeviceRecord),
    Interface(InterfaceRecord),
}

pub struct DeviceItem {
    id: ItemId,
    info_set: Arc<DeviceInfoSet>,
    record: ItemRecord,
    instance_id: Option<String>,
    instance_id_hash: u32,
    parent_instance_id: Option<String>,
    class_guid: Guid,
    problem_code: u32,
    dev_node_status: u32,
    capabilities: u32,
    has_upper_filters: bool,
    has_lower_filters: bool,
    pub(crate) parent: Option<ItemId>,
    pub(crate) first_child: Option<ItemId>,
    pub(crate) next_sibling: Option<ItemId>,
    pub(crate) child_count: u32,
    pub(crate) interface_count: u32,
    properties: PropertyCache,
}

impl DeviceItem {
    fn blank(id: ItemId, info_set: Arc<DeviceInfoSet>, record: ItemRecord, class_guid: Guid) -> Self {
        Self {
            id,
            info_set,
            record,
            instance_id: None,
            instance_id_hash: 0,
            parent_instance_id: None,
            class_guid,
            problem_code: CM_PROB_PHANTOM,
            dev_node_status: 0,
            capabilities: 0,
            has_upper_filters: false,
            has_lower_filters: false,
            parent: None,
            first_child: None,
            next_sibling: None,
            child_count: 0,
            interface_count: 0,
            properties: PropertyCache::new(),
        }
    }

    /// Build a device-node item. Only the identity and summary properties
    /// are fetched here; everything else resolves on first access.
    pub(crate) fn from_device(
        id: ItemId,
        info_set: Arc<DeviceInfoSet>,
        record: DeviceRecord,
        root_name: Option<&str>,
    ) -> Self {
        let class_guid = record.class_guid;
        let mut item = Self::blank(id, info_set, ItemRecord::Device(record), class_guid);

        let instance_id = item.string_property(PropertyId::InstanceId);
        if let Some(instance_id) = &instance_id {
            item.instance_id_hash = instance_id_hash(instance_id);

            if let Some(name) = root_name.filter(|_| ids_equal(instance_id, ROOT_INSTANCE_ID)) {
                let preset = item.properties.preset(
                    PropertyId::Name,
                    PropertyValue::new(
                        PropertyKind::String,
                        Variant::String(name.to_string()),
                        name.to_string(),
                    ),
                );
                debug_assert!(preset, "root name resolved before override");
            }
        }
        item.instance_id = instance_id;
        item.parent_instance_id = item.string_property(PropertyId::ParentInstanceId);

        item.problem_code = item
            .property(PropertyId::ProblemCode)
            .as_u32()
            .unwrap_or(CM_PROB_PHANTOM);
        item.dev_node_status = item
            .property(PropertyId::DevNodeStatus)
            .as_u32()
            .unwrap_or(0);
        item.capabilities = item
            .property(PropertyId::DevCapabilities)
            .as_u32()
            .unwrap_or(0);
        item.has_upper_filters = item.has_entries(PropertyId::UpperFilters)
            || item.has_entries(PropertyId::ClassUpperFilters);
        item.has_lower_filters = item.has_entries(PropertyId::LowerFilters)
            || item.has_entries(PropertyId::ClassLowerFilters);

        item
    }

    /// Build an interface item owned by `owner`. Summary fields are
    /// inherited from the owning node, and a display name is always
    /// present.
    pub(crate) fn from_interface(
        id: ItemId,
        info_set: Arc<DeviceInfoSet>,
        record: InterfaceRecord,
        owner: &DeviceItem,
    ) -> Self {
        let class_guid = record.class_guid;
        let mut item = Self::blank(id, info_set, ItemRecord::Interface(record), class_guid);

        let own_instance_id = item.string_property(PropertyId::InstanceId);
        let instance_id = own_instance_id.clone().or_else(|| owner.instance_id.clone());
        item.instance_id_hash = instance_id.as_deref().map(instance_id_hash).unwrap_or(0);
        item.instance_id = instance_id;
        item.parent_instance_id = owner.instance_id.clone();
        item.problem_code = owner.problem_code;
        item.dev_node_status = owner.dev_node_status;
        item.capabilities = owner.capabilities;

        let own_name = property::resolve(&item.info_set, item.subject(), PropertyId::Name);
        let name = if own_name.as_str().is_some_and(|s| !s.is_empty()) {
            own_name
        } else {
            let text = item.synthesized_name(own_instance_id);
            PropertyValue::new(PropertyKind::String, Variant::String(text.clone()), text)
        };
        item.properties.preset(PropertyId::Name, name);

        item
    }

    fn synthesized_name(&self, own_instance_id: Option<String>) -> String {
        self.string_property(PropertyId::InterfaceFriendlyName)
            .or_else(|| self.string_property(PropertyId::InterfaceClassName))
            .or(own_instance_id)
            .unwrap_or_else(|| self.class_guid.to_string())
    }

    fn string_property(&self, id: PropertyId) -> Option<String> {
        self.property(id)
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }

    fn has_entries(&self, id: PropertyId) -> bool {
        self.property(id)
            .as_string_list()
            .is_some_and(|list| !list.is_empty())
    }

    fn subject(&self) -> Subject<'_> {
        match &self.record {
            ItemRecord::Device(record) => Subject::Device(record),
            ItemRecord::Interface(record) => Subject::Interface(record),
        }
    }

    /// Resolve `id`, fetching on first access and returning the cached
    /// value afterwards.
    pub fn property(&self, id: PropertyId) -> &PropertyValue {
        self.properties
            .get_or_resolve(id, || property::resolve(&self.info_set, self.subject(), id))
    }

    pub fn is_resolved(&self, id: PropertyId) -> bool {
        self.properties.is_resolved(id)
    }

    pub fn resolved_count(&self) -> usize {
        self.properties.resolved_count()
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name; the `Name` property.
    pub fn name(&self) -> Option<&str> {
        self.property(PropertyId::Name).text()
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn instance_id_hash(&self) -> u32 {
        self.instance_id_hash
    }

    pub fn parent_instance_id(&self) -> Option<&str> {
        self.parent_instance_id.as_deref()
    }

    pub fn class_guid(&self) -> Guid {
        self.class_guid
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.record, ItemRecord::Interface(_))
    }

    pub fn interface_path(&self) -> Option<&str> {
        match &self.record {
            ItemRecord::Interface(record) => record.path.as_deref(),
            ItemRecord::Device(_) => None,
        }
    }

    pub fn problem_code(&self) -> u32 {
        self.problem_code
    }

    pub fn dev_node_status(&self) -> u32 {
        self.dev_node_status
    }

    pub fn capabilities(&self) -> u32 {
        self.capabilities
    }

    pub fn is_present(&self) -> bool {
        self.problem_code != CM_PROB_PHANTOM
    }

    pub fn has_problem(&self) -> bool {
        self.dev_node_status & DN_HAS_PROBLEM != 0 || (self.is_present() && self.problem_code != 0)
    }

    pub fn has_upper_filters(&self) -> bool {
        self.has_upper_filters
    }

    pub fn has_lower_filters(&self) -> bool {
        self.has_lower_filters
    }

    pub fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<ItemId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<ItemId> {
        self.next_sibling
    }

    pub fn child_count(&self) -> u32 {
        self.child_count
    }

    pub fn interface_count(&self) -> u32 {
        self.interface_count
    }

    pub(crate) fn device_record(&self) -> Option<&DeviceRecord> {
        match &self.record {
            ItemRecord::Device(record) => Some(record),
            ItemRecord::Interface(_) => None,
        }
    }

    pub(crate) fn info_set(&self) -> &DeviceInfoSet {
        &self.info_set
    }
}

impl fmt::Debug for DeviceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceItem")
            .field("id", &self.id)
            .field("instance_id", &self.instance_id)
            .field("is_interface", &self.is_interface())
            .field("class_guid", &self.class_guid)
            .field("parent", &self.parent)
            .field("first_child", &self.first_child)
            .field("next_sibling", &self.next_sibling)
            .field("properties", &self.properties)
            .finish()
    }
}

/// Case-insensitive X65599 hash over the UTF-16 form of an instance id.
pub fn instance_id_hash(instance_id: &str) -> u32 {
    instance_id.encode_utf16().fold(0u32, |hash, unit| {
        hash.wrapping_mul(65599).wrapping_add(u32::from(upcase(unit)))
    })
}

/// Case-insensitive instance id comparison, consistent with
/// [`instance_id_hash`].
pub fn ids_equal(a: &str, b: &str) -> bool {
    a.encode_utf16().map(upcase).eq(b.encode_utf16().map(upcase))
}

fn upcase(unit: u16) -> u16 {
    let Some(c) = char::from_u32(u32::from(unit)) else {
        return unit;
    };
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u16::try_from(u32::from(u)).unwrap_or(unit),
        _ => unit,
    }
}
