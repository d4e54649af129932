//! SetupAPI / CfgMgr32 backend.

use std::ffi::c_void;
use std::mem::size_of;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};
use windows::core::{GUID, PCWSTR, PWSTR};
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    CM_Enumerate_Classes, CM_Register_Notification, CM_Unregister_Notification,
    SetupDiDestroyDeviceInfoList, SetupDiEnumDeviceInfo, SetupDiEnumDeviceInterfaces,
    SetupDiGetClassDevsW, SetupDiGetClassPropertyW, SetupDiGetDeviceInterfaceDetailW,
    SetupDiGetDeviceInterfacePropertyW, SetupDiGetDevicePropertyW, SetupDiLoadDeviceIcon,
    CM_ENUMERATE_CLASSES_INTERFACE, CM_NOTIFY_ACTION, CM_NOTIFY_ACTION_DEVICEINSTANCEENUMERATED,
    CM_NOTIFY_ACTION_DEVICEINSTANCEREMOVED, CM_NOTIFY_ACTION_DEVICEINSTANCESTARTED,
    CM_NOTIFY_ACTION_DEVICEINTERFACEARRIVAL, CM_NOTIFY_ACTION_DEVICEINTERFACEREMOVAL,
    CM_NOTIFY_EVENT_DATA, CM_NOTIFY_FILTER, CM_NOTIFY_FILTER_FLAG_ALL_DEVICE_INSTANCES,
    CM_NOTIFY_FILTER_FLAG_ALL_INTERFACE_CLASSES, CM_NOTIFY_FILTER_TYPE,
    CM_NOTIFY_FILTER_TYPE_DEVICEINSTANCE, CM_NOTIFY_FILTER_TYPE_DEVICEINTERFACE, CR_NO_SUCH_VALUE,
    CR_SUCCESS, DICLASSPROP_INSTALLER, DICLASSPROP_INTERFACE, DIGCF_ALLCLASSES, HCMNOTIFICATION,
    HDEVINFO, SP_DEVICE_INTERFACE_DATA, SP_DEVICE_INTERFACE_DETAIL_DATA_W, SP_DEVINFO_DATA,
};
use windows::Win32::Devices::Properties::{DEVPROPKEY, DEVPROPTYPE};
use windows::Win32::Foundation::{
    ERROR_INSUFFICIENT_BUFFER, ERROR_NOT_FOUND, ERROR_NO_MORE_ITEMS, HWND,
};
use windows::Win32::System::SystemInformation::{ComputerNameDnsHostname, GetComputerNameExW};
use windows::Win32::UI::WindowsAndMessaging::{DestroyIcon, HICON};

use super::{
    host_name_from_wide, BackendError, ClassScope, DeviceBackend, DeviceIcon, DeviceInfoHandle, DeviceRecord,
    IconSize, InterfaceRecord, NotificationRegistration, QueryError, QueryInfo, QueryTarget,
};
use crate::guid::Guid;
use crate::notify::{DeviceNotification, NotificationQueue};
use crate::property::PropertyKey;

/// Live device database of the local machine.
#[derive(Debug, Default)]
pub struct SetupApiBackend;

impl SetupApiBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceBackend for SetupApiBackend {
    fn open_device_info_set(&self) -> Result<Box<dyn DeviceInfoHandle>, BackendError> {
        // SAFETY: no class filter and no enumerator; the returned set is
        // owned by `SetupApiInfoSet` and destroyed in its Drop.
        let handle = unsafe {
            SetupDiGetClassDevsW(None, PCWSTR::null(), HWND::default(), DIGCF_ALLCLASSES)
        }
        .map_err(|err| BackendError::EnumerationUnavailable(err.to_string()))?;
        Ok(Box::new(SetupApiInfoSet {
            handle,
            interfaces: Mutex::new(Vec::new()),
        }))
    }

    fn interface_classes(&self) -> Vec<Guid> {
        let mut classes = Vec::new();
        let mut index = 0u32;
        loop {
            let mut guid = GUID::zeroed();
            // SAFETY: `guid` is a valid out pointer for the duration of the call.
            let status =
                unsafe { CM_Enumerate_Classes(index, &mut guid, CM_ENUMERATE_CLASSES_INTERFACE) };
            if status == CR_NO_SUCH_VALUE {
                break;
            }
            if status != CR_SUCCESS {
                warn!(index, status = status.0, "interface class enumeration stopped early");
                break;
            }
            classes.push(from_win_guid(&guid));
            index += 1;
        }
        classes
    }

    fn machine_name(&self) -> Option<String> {
        // The sizing call fails by design and reports the length with the
        // terminator.
        let mut size = 0u32;
        let _ = unsafe { GetComputerNameExW(ComputerNameDnsHostname, PWSTR::null(), &mut size) };
        if size == 0 {
            warn!("computer name length unavailable");
            return None;
        }

        let mut buffer = vec![0u16; size as usize];
        if let Err(err) = unsafe {
            GetComputerNameExW(ComputerNameDnsHostname, PWSTR(buffer.as_mut_ptr()), &mut size)
        } {
            warn!(error = %err, "GetComputerNameExW failed");
            return None;
        }
        buffer.truncate(size as usize);
        host_name_from_wide(&buffer)
    }

    fn register_notifications(
        &self,
        queue: Arc<NotificationQueue>,
    ) -> Result<NotificationRegistration, BackendError> {
        let context = Arc::into_raw(queue) as usize;

        let interfaces = match register_filter(
            CM_NOTIFY_FILTER_TYPE_DEVICEINTERFACE,
            CM_NOTIFY_FILTER_FLAG_ALL_INTERFACE_CLASSES,
            context,
        ) {
            Ok(handle) => handle,
            Err(err) => {
                release_context(context);
                return Err(err);
            }
        };
        let instances = match register_filter(
            CM_NOTIFY_FILTER_TYPE_DEVICEINSTANCE,
            CM_NOTIFY_FILTER_FLAG_ALL_DEVICE_INSTANCES,
            context,
        ) {
            Ok(handle) => handle,
            Err(err) => {
                interfaces.unregister();
                release_context(context);
                return Err(err);
            }
        };
        debug!("device change notifications registered");

        Ok(NotificationRegistration::new(move || {
            // Unregistering waits for in-flight callbacks, so the context
            // is unreachable once both calls return.
            instances.unregister();
            interfaces.unregister();
            release_context(context);
            debug!("device change notifications unregistered");
        }))
    }
}

struct NotifyHandle(HCMNOTIFICATION);

// SAFETY: the handle is only passed back to CM_Unregister_Notification,
// which may be called from any thread.
unsafe impl Send for NotifyHandle {}

impl NotifyHandle {
    fn unregister(self) {
        // SAFETY: the handle came from a successful CM_Register_Notification.
        let status = unsafe { CM_Unregister_Notification(self.0) };
        if status != CR_SUCCESS {
            warn!(status = status.0, "failed unregistering device notification");
        }
    }
}

fn register_filter(
    filter_type: CM_NOTIFY_FILTER_TYPE,
    flags: u32,
    context: usize,
) -> Result<NotifyHandle, BackendError> {
    let filter = CM_NOTIFY_FILTER {
        cbSize: size_of::<CM_NOTIFY_FILTER>() as u32,
        Flags: flags,
        FilterType: filter_type,
        ..Default::default()
    };
    let mut handle = HCMNOTIFICATION::default();
    // SAFETY: `context` is an `Arc<NotificationQueue>` kept alive until
    // every registration using it has been unregistered.
    let status = unsafe {
        CM_Register_Notification(
            &filter,
            Some(context as *const c_void),
            Some(notification_callback),
            &mut handle,
        )
    };
    if status != CR_SUCCESS {
        return Err(BackendError::RegistrationFailed(format!(
            "CM_Register_Notification returned 0x{:X}",
            status.0
        )));
    }
    Ok(NotifyHandle(handle))
}

fn release_context(context: usize) {
    // SAFETY: matches the single `Arc::into_raw` in `register_notifications`.
    drop(unsafe { Arc::from_raw(context as *const NotificationQueue) });
}

unsafe extern "system" fn notification_callback(
    _notify: HCMNOTIFICATION,
    context: *const c_void,
    action: CM_NOTIFY_ACTION,
    event: *const CM_NOTIFY_EVENT_DATA,
    _event_size: u32,
) -> u32 {
    if context.is_null() || event.is_null() {
        return 0;
    }
    // SAFETY: the context outlives the registration; the OS keeps `event`
    // valid for the duration of the callback.
    let queue = unsafe { &*(context as *const NotificationQueue) };
    let event = unsafe { &*event };

    let notification = match action {
        CM_NOTIFY_ACTION_DEVICEINTERFACEARRIVAL => DeviceNotification::InterfaceArrival {
            class_guid: from_win_guid(unsafe { &event.u.DeviceInterface.ClassGuid }),
        },
        CM_NOTIFY_ACTION_DEVICEINTERFACEREMOVAL => DeviceNotification::InterfaceRemoval {
            class_guid: from_win_guid(unsafe { &event.u.DeviceInterface.ClassGuid }),
        },
        CM_NOTIFY_ACTION_DEVICEINSTANCEENUMERATED => DeviceNotification::InstanceEnumerated {
            instance_id: unsafe { wide_to_string(event.u.DeviceInstance.InstanceId.as_ptr()) },
        },
        CM_NOTIFY_ACTION_DEVICEINSTANCESTARTED => DeviceNotification::InstanceStarted {
            instance_id: unsafe { wide_to_string(event.u.DeviceInstance.InstanceId.as_ptr()) },
        },
        CM_NOTIFY_ACTION_DEVICEINSTANCEREMOVED => DeviceNotification::InstanceRemoved {
            instance_id: unsafe { wide_to_string(event.u.DeviceInstance.InstanceId.as_ptr()) },
        },
        _ => return 0,
    };
    queue.push(notification);
    0
}

/// Reads a NUL-terminated UTF-16 string.
///
/// # Safety
/// `ptr` must point at a readable, NUL-terminated wide string.
unsafe fn wide_to_string(ptr: *const u16) -> String {
    let mut len = 0usize;
    while unsafe { *ptr.add(len) } != 0 {
        len += 1;
    }
    String::from_utf16_lossy(unsafe { std::slice::from_raw_parts(ptr, len) })
}

struct SetupApiInfoSet {
    handle: HDEVINFO,
    // Indexed by `InterfaceRecord::slot`.
    interfaces: Mutex<Vec<SP_DEVICE_INTERFACE_DATA>>,
}

// SAFETY: a device information set may be queried from any thread; the
// interface slot table is guarded by its mutex.
unsafe impl Send for SetupApiInfoSet {}
unsafe impl Sync for SetupApiInfoSet {}

impl SetupApiInfoSet {
    fn devinfo(&self, index: u32) -> Option<SP_DEVINFO_DATA> {
        let mut data = SP_DEVINFO_DATA {
            cbSize: size_of::<SP_DEVINFO_DATA>() as u32,
            ..Default::default()
        };
        // SAFETY: `data` is a correctly sized out structure.
        match unsafe { SetupDiEnumDeviceInfo(self.handle, index, &mut data) } {
            Ok(()) => Some(data),
            Err(err) => {
                if err.code() != ERROR_NO_MORE_ITEMS.to_hresult() {
                    debug!(index, error = %err, "device enumeration stopped");
                }
                None
            }
        }
    }

    fn interface_data(&self, slot: u32) -> Option<SP_DEVICE_INTERFACE_DATA> {
        self.interfaces
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(slot as usize)
            .copied()
    }

    fn interface_path(&self, data: &SP_DEVICE_INTERFACE_DATA) -> Option<String> {
        let mut required = 0u32;
        // SAFETY: size probe; no detail buffer is passed.
        let _ = unsafe {
            SetupDiGetDeviceInterfaceDetailW(self.handle, data, None, 0, Some(&mut required), None)
        };
        let required = required as usize;
        if required < size_of::<SP_DEVICE_INTERFACE_DETAIL_DATA_W>() {
            return None;
        }

        // u32 storage keeps the detail header aligned.
        let mut storage = vec![0u32; required.div_ceil(size_of::<u32>())];
        let detail = storage.as_mut_ptr().cast::<SP_DEVICE_INTERFACE_DETAIL_DATA_W>();
        // SAFETY: `storage` holds at least `required` bytes and is aligned
        // for the header; cbSize is the fixed header size.
        unsafe {
            (*detail).cbSize = size_of::<SP_DEVICE_INTERFACE_DETAIL_DATA_W>() as u32;
            SetupDiGetDeviceInterfaceDetailW(
                self.handle,
                data,
                Some(detail),
                required as u32,
                None,
                None,
            )
            .ok()?;
            Some(wide_to_string((*detail).DevicePath.as_ptr()))
        }
    }
}

impl DeviceInfoHandle for SetupApiInfoSet {
    fn device(&self, index: u32) -> Option<DeviceRecord> {
        let data = self.devinfo(index)?;
        Some(DeviceRecord {
            index,
            class_guid: from_win_guid(&data.ClassGuid),
        })
    }

    fn interface(
        &self,
        device: &DeviceRecord,
        class: &Guid,
        index: u32,
    ) -> Option<InterfaceRecord> {
        let devinfo = self.devinfo(device.index)?;
        let class = to_win_guid(class);
        let mut data = SP_DEVICE_INTERFACE_DATA {
            cbSize: size_of::<SP_DEVICE_INTERFACE_DATA>() as u32,
            ..Default::default()
        };
        // SAFETY: all pointers reference live locals of the right size.
        unsafe { SetupDiEnumDeviceInterfaces(self.handle, Some(&devinfo), &class, index, &mut data) }
            .ok()?;

        let path = self.interface_path(&data);
        let mut slots = self
            .interfaces
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let slot = u32::try_from(slots.len()).ok()?;
        slots.push(data);
        Some(InterfaceRecord {
            slot,
            device_index: device.index,
            class_guid: from_win_guid(&data.InterfaceClassGuid),
            path,
        })
    }

    fn query(
        &self,
        target: QueryTarget<'_>,
        key: &PropertyKey,
        buffer: &mut [u8],
    ) -> Result<QueryInfo, QueryError> {
        let key = DEVPROPKEY {
            fmtid: to_win_guid(&key.fmtid),
            pid: key.pid,
        };
        let mut prop_type = DEVPROPTYPE::default();
        let mut required = 0u32;
        let out = (!buffer.is_empty()).then_some(&mut *buffer);

        // SAFETY: every out pointer references a live local; `out` is the
        // caller's buffer with its true length.
        let result = unsafe {
            match target {
                QueryTarget::Device(record) => {
                    let devinfo = self.devinfo(record.index).ok_or(QueryError::NotFound)?;
                    SetupDiGetDevicePropertyW(
                        self.handle,
                        &devinfo,
                        &key,
                        &mut prop_type,
                        out,
                        Some(&mut required),
                        0,
                    )
                }
                QueryTarget::Interface(record) => {
                    let data = self.interface_data(record.slot).ok_or(QueryError::NotFound)?;
                    SetupDiGetDeviceInterfacePropertyW(
                        self.handle,
                        &data,
                        &key,
                        &mut prop_type,
                        out,
                        Some(&mut required),
                        0,
                    )
                }
                QueryTarget::Class { guid, scope } => {
                    let flags = match scope {
                        ClassScope::Installer => DICLASSPROP_INSTALLER,
                        ClassScope::Interface => DICLASSPROP_INTERFACE,
                    };
                    SetupDiGetClassPropertyW(
                        &to_win_guid(&guid),
                        &key,
                        &mut prop_type,
                        out,
                        Some(&mut required),
                        flags,
                    )
                }
            }
        };

        match result {
            Ok(()) => Ok(QueryInfo {
                prop_type: prop_type.0,
                size: required as usize,
            }),
            Err(err) if err.code() == ERROR_INSUFFICIENT_BUFFER.to_hresult() => {
                Err(QueryError::InsufficientBuffer {
                    required: required as usize,
                    prop_type: prop_type.0,
                })
            }
            Err(err) if err.code() == ERROR_NOT_FOUND.to_hresult() => Err(QueryError::NotFound),
            Err(err) => Err(QueryError::Os((err.code().0 as u32) & 0xFFFF)),
        }
    }

    fn icon(&self, device: &DeviceRecord, size: IconSize) -> Option<DeviceIcon> {
        let devinfo = self.devinfo(device.index)?;
        let mut icon = HICON::default();
        // SAFETY: `icon` is a valid out pointer; ownership passes to DeviceIcon.
        unsafe {
            SetupDiLoadDeviceIcon(self.handle, &devinfo, size.width, size.height, 0, &mut icon)
        }
        .ok()?;
        Some(DeviceIcon::new(icon.0 as isize, size, destroy_icon))
    }
}

impl Drop for SetupApiInfoSet {
    fn drop(&mut self) {
        // SAFETY: the set was created by SetupDiGetClassDevsW and is
        // destroyed exactly once.
        if let Err(err) = unsafe { SetupDiDestroyDeviceInfoList(self.handle) } {
            warn!(error = %err, "failed destroying device information set");
        }
    }
}

fn destroy_icon(handle: isize) {
    // SAFETY: `handle` came from SetupDiLoadDeviceIcon and is released once.
    if let Err(err) = unsafe { DestroyIcon(HICON(handle as _)) } {
        debug!(error = %err, "failed destroying device icon");
    }
}

fn from_win_guid(guid: &GUID) -> Guid {
    Guid {
        data1: guid.data1,
        data2: guid.data2,
        data3: guid.data3,
        data4: guid.data4,
    }
}

fn to_win_guid(guid: &Guid) -> GUID {
    GUID::from_values(guid.data1, guid.data2, guid.data3, guid.data4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_name_ignores_the_environment() {
        let backend = SetupApiBackend::new();
        let name = backend.machine_name().expect("machine name");
        assert!(!name.is_empty());

        let saved = std::env::var_os("COMPUTERNAME");
        std::env::set_var("COMPUTERNAME", "RENAMED-BY-ENV");
        let after = backend.machine_name();
        match saved {
            Some(value) => std::env::set_var("COMPUTERNAME", value),
            None => std::env::remove_var("COMPUTERNAME"),
        }
        assert_eq!(after.as_deref(), Some(name.as_str()));
    }
}
