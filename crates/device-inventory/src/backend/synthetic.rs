//! In-memory backend. Holds a mutable device database and hands out
//! immutable snapshots of it as enumeration handles, so trees built from
//! earlier snapshots never observe later edits.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use super::{
    prop_type, BackendError, ClassScope, DeviceBackend, DeviceIcon, DeviceInfoHandle,
    DeviceRecord, IconSize, InterfaceRecord, NotificationRegistration, QueryError, QueryInfo,
    QueryTarget,
};
use crate::guid::Guid;
use crate::item::ids_equal;
use crate::notify::{DeviceNotification, NotificationQueue};
use crate::property::keys::{
    DEVPKEY_DEVICE_CLASS_GUID, DEVPKEY_DEVICE_INSTANCE_ID, DEVPKEY_DEVICE_INTERFACE_CLASS_GUID,
    DEVPKEY_DEVICE_PARENT, DEVPKEY_DEVICE_PROBLEM_CODE, DEVPKEY_NAME,
};
use crate::property::PropertyKey;

const ERROR_GEN_FAILURE: u32 = 31;

/// A property value in the OS wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireValue {
    pub prop_type: u32,
    pub bytes: Vec<u8>,
}

impl WireValue {
    pub fn raw(prop_type: u32, bytes: Vec<u8>) -> Self {
        Self { prop_type, bytes }
    }

    /// UTF-16LE with a terminating NUL.
    pub fn string(value: &str) -> Self {
        let mut bytes = utf16_bytes(value);
        bytes.extend_from_slice(&[0, 0]);
        Self::raw(prop_type::STRING, bytes)
    }

    /// NUL-separated UTF-16LE entries with a double-NUL terminator.
    pub fn string_list<S: AsRef<str>>(values: &[S]) -> Self {
        let mut bytes = Vec::new();
        for value in values {
            bytes.extend(utf16_bytes(value.as_ref()));
            bytes.extend_from_slice(&[0, 0]);
        }
        bytes.extend_from_slice(&[0, 0]);
        Self::raw(prop_type::STRING_LIST, bytes)
    }

    pub fn u32(value: u32) -> Self {
        Self::raw(prop_type::UINT32, value.to_le_bytes().to_vec())
    }

    pub fn i32(value: i32) -> Self {
        Self::raw(prop_type::INT32, value.to_le_bytes().to_vec())
    }

    pub fn u64(value: u64) -> Self {
        Self::raw(prop_type::UINT64, value.to_le_bytes().to_vec())
    }

    pub fn guid(value: Guid) -> Self {
        Self::raw(prop_type::GUID, value.to_le_bytes().to_vec())
    }

    pub fn boolean(value: bool) -> Self {
        Self::raw(prop_type::BOOLEAN, vec![if value { 0xFF } else { 0 }])
    }

    pub fn filetime(ticks: u64) -> Self {
        Self::raw(prop_type::FILETIME, ticks.to_le_bytes().to_vec())
    }

    pub fn binary(bytes: &[u8]) -> Self {
        Self::raw(prop_type::BINARY, bytes.to_vec())
    }

    pub fn ntstatus(status: i32) -> Self {
        Self::raw(prop_type::NTSTATUS, status.to_le_bytes().to_vec())
    }
}

fn utf16_bytes(value: &str) -> Vec<u8> {
    value.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// A device node. Identity properties (instance id, parent, class GUID)
/// and a zero problem code are filled in automatically.
#[derive(Debug, Clone)]
pub struct SyntheticDevice {
    instance_id: String,
    class_guid: Guid,
    properties: HashMap<PropertyKey, WireValue>,
    icon: bool,
}

impl SyntheticDevice {
    pub fn new(instance_id: impl Into<String>) -> Self {
        let instance_id = instance_id.into();
        let mut properties = HashMap::new();
        properties.insert(DEVPKEY_DEVICE_INSTANCE_ID, WireValue::string(&instance_id));
        properties.insert(DEVPKEY_DEVICE_PROBLEM_CODE, WireValue::u32(0));
        Self {
            instance_id,
            class_guid: Guid::ZERO,
            properties,
            icon: false,
        }
    }

    pub fn parent(mut self, parent_instance_id: &str) -> Self {
        self.properties
            .insert(DEVPKEY_DEVICE_PARENT, WireValue::string(parent_instance_id));
        self
    }

    pub fn class(mut self, class_guid: Guid) -> Self {
        self.class_guid = class_guid;
        self.properties
            .insert(DEVPKEY_DEVICE_CLASS_GUID, WireValue::guid(class_guid));
        self
    }

    pub fn name(self, name: &str) -> Self {
        self.property(DEVPKEY_NAME, WireValue::string(name))
    }

    /// Report no problem code, as the OS does for non-present devices.
    pub fn phantom(mut self) -> Self {
        self.properties.remove(&DEVPKEY_DEVICE_PROBLEM_CODE);
        self
    }

    pub fn property(mut self, key: PropertyKey, value: WireValue) -> Self {
        self.properties.insert(key, value);
        self
    }

    pub fn with_icon(mut self) -> Self {
        self.icon = true;
        self
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
}

/// A device interface exposed by the device named by `device_instance_id`.
/// Only the interface class GUID is reported by default; anything else,
/// including an instance id of its own, is added with [`Self::property`].
#[derive(Debug, Clone)]
pub struct SyntheticInterface {
    device_instance_id: String,
    class_guid: Guid,
    path: Option<String>,
    properties: HashMap<PropertyKey, WireValue>,
}

impl SyntheticInterface {
    pub fn new(device_instance_id: impl Into<String>, class_guid: Guid) -> Self {
        let device_instance_id = device_instance_id.into();
        let mut properties = HashMap::new();
        properties.insert(
            DEVPKEY_DEVICE_INTERFACE_CLASS_GUID,
            WireValue::guid(class_guid),
        );
        Self {
            device_instance_id,
            class_guid,
            path: None,
            properties,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn property(mut self, key: PropertyKey, value: WireValue) -> Self {
        self.properties.insert(key, value);
        self
    }
}

#[derive(Debug, Clone, Default)]
struct Database {
    devices: Vec<SyntheticDevice>,
    interfaces: Vec<SyntheticInterface>,
    class_properties: HashMap<(Guid, ClassScope, PropertyKey), WireValue>,
    interface_classes: Vec<Guid>,
    failing: HashSet<PropertyKey>,
    machine_name: Option<String>,
}

type QueueSlot = Arc<Mutex<Option<Arc<NotificationQueue>>>>;

/// Backend over an in-memory device database. Used off Windows and in
/// tests; counts every property query so memoization is observable.
#[derive(Debug, Default)]
pub struct SyntheticBackend {
    database: RwLock<Database>,
    fail_open: AtomicBool,
    fail_registration: AtomicBool,
    queries: Arc<AtomicUsize>,
    opened: AtomicUsize,
    registered: QueueSlot,
}

impl SyntheticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Database> {
        self.database.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Database> {
        self.database.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_device(&self, device: SyntheticDevice) {
        self.write().devices.push(device);
    }

    /// Remove a device and every interface it exposes.
    pub fn remove_device(&self, instance_id: &str) -> bool {
        let mut database = self.write();
        let before = database.devices.len();
        database
            .devices
            .retain(|device| !ids_equal(&device.instance_id, instance_id));
        database
            .interfaces
            .retain(|interface| !ids_equal(&interface.device_instance_id, instance_id));
        database.devices.len() != before
    }

    pub fn add_interface(&self, interface: SyntheticInterface) {
        let mut database = self.write();
        if !database.interface_classes.contains(&interface.class_guid) {
            database.interface_classes.push(interface.class_guid);
        }
        database.interfaces.push(interface);
    }

    pub fn set_class_property(
        &self,
        class_guid: Guid,
        scope: ClassScope,
        key: PropertyKey,
        value: WireValue,
    ) {
        self.write()
            .class_properties
            .insert((class_guid, scope, key), value);
    }

    pub fn set_machine_name(&self, name: Option<&str>) {
        self.write().machine_name = name.map(str::to_owned);
    }

    /// Make every query for `key` fail with an OS error.
    pub fn fail_key(&self, key: PropertyKey) {
        self.write().failing.insert(key);
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_registration(&self, fail: bool) {
        self.fail_registration.store(fail, Ordering::SeqCst);
    }

    /// Property queries issued so far, across every snapshot.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn is_registered(&self) -> bool {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Deliver a change event the way the OS callback would. Returns false
    /// when nobody is registered or the queue refused it.
    pub fn emit(&self, notification: DeviceNotification) -> bool {
        let queue = self
            .registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match queue {
            Some(queue) => queue.push(notification),
            None => false,
        }
    }
}

impl DeviceBackend for SyntheticBackend {
    fn open_device_info_set(&self) -> Result<Box<dyn DeviceInfoHandle>, BackendError> {
        if self.fail_open.load(Ordering::SeqCst) {
            return Err(BackendError::EnumerationUnavailable(
                "synthetic enumeration disabled".to_string(),
            ));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SyntheticInfoSet {
            database: self.read().clone(),
            queries: Arc::clone(&self.queries),
        }))
    }

    fn interface_classes(&self) -> Vec<Guid> {
        self.read().interface_classes.clone()
    }

    fn machine_name(&self) -> Option<String> {
        self.read().machine_name.clone()
    }

    fn register_notifications(
        &self,
        queue: Arc<NotificationQueue>,
    ) -> Result<NotificationRegistration, BackendError> {
        if self.fail_registration.load(Ordering::SeqCst) {
            return Err(BackendError::RegistrationFailed(
                "synthetic registration disabled".to_string(),
            ));
        }
        *self
            .registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(queue);
        debug!("synthetic notification callback registered");

        let slot = Arc::clone(&self.registered);
        Ok(NotificationRegistration::new(move || {
            slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        }))
    }
}

struct SyntheticInfoSet {
    database: Database,
    queries: Arc<AtomicUsize>,
}

impl SyntheticInfoSet {
    fn lookup(&self, target: QueryTarget<'_>, key: &PropertyKey) -> Option<&WireValue> {
        match target {
            QueryTarget::Device(record) => self
                .database
                .devices
                .get(record.index as usize)?
                .properties
                .get(key),
            QueryTarget::Interface(record) => self
                .database
                .interfaces
                .get(record.slot as usize)?
                .properties
                .get(key),
            QueryTarget::Class { guid, scope } => {
                self.database.class_properties.get(&(guid, scope, *key))
            }
        }
    }
}

impl DeviceInfoHandle for SyntheticInfoSet {
    fn device(&self, index: u32) -> Option<DeviceRecord> {
        let device = self.database.devices.get(index as usize)?;
        Some(DeviceRecord {
            index,
            class_guid: device.class_guid,
        })
    }

    fn interface(
        &self,
        device: &DeviceRecord,
        class: &Guid,
        index: u32,
    ) -> Option<InterfaceRecord> {
        let owner = self.database.devices.get(device.index as usize)?;
        let (slot, interface) = self
            .database
            .interfaces
            .iter()
            .enumerate()
            .filter(|(_, interface)| {
                interface.class_guid == *class
                    && ids_equal(&interface.device_instance_id, &owner.instance_id)
            })
            .nth(index as usize)?;
        Some(InterfaceRecord {
            slot: u32::try_from(slot).ok()?,
            device_index: device.index,
            class_guid: interface.class_guid,
            path: interface.path.clone(),
        })
    }

    fn query(
        &self,
        target: QueryTarget<'_>,
        key: &PropertyKey,
        buffer: &mut [u8],
    ) -> Result<QueryInfo, QueryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.database.failing.contains(key) {
            return Err(QueryError::Os(ERROR_GEN_FAILURE));
        }

        let value = self.lookup(target, key).ok_or(QueryError::NotFound)?;
        let size = value.bytes.len();
        if buffer.len() < size {
            return Err(QueryError::InsufficientBuffer {
                required: size,
                prop_type: value.prop_type,
            });
        }
        buffer[..size].copy_from_slice(&value.bytes);
        Ok(QueryInfo {
            prop_type: value.prop_type,
            size,
        })
    }

    fn icon(&self, device: &DeviceRecord, size: IconSize) -> Option<DeviceIcon> {
        let owner = self.database.devices.get(device.index as usize)?;
        owner
            .icon
            .then(|| DeviceIcon::new(device.index as isize + 1, size, release_icon))
    }
}

fn release_icon(_handle: isize) {}
