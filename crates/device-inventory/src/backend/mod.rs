//! Boundary with the OS device-management facility.
//!
//! A [`DeviceBackend`] opens enumeration handles ([`DeviceInfoHandle`]) and
//! registers change notifications. Property values cross this seam in the
//! OS wire shape: a `DEVPROPTYPE` code plus little-endian bytes.

mod synthetic;

#[cfg(target_os = "windows")]
mod setupapi;

pub use synthetic::{SyntheticBackend, SyntheticDevice, SyntheticInterface, WireValue};

#[cfg(target_os = "windows")]
pub use setupapi::SetupApiBackend;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::guid::Guid;
use crate::notify::NotificationQueue;
use crate::property::PropertyKey;

/// `DEVPROPTYPE` codes understood by the property layer.
pub mod prop_type {
    pub const INT32: u32 = 0x0000_0006;
    pub const UINT32: u32 = 0x0000_0007;
    pub const INT64: u32 = 0x0000_0008;
    pub const UINT64: u32 = 0x0000_0009;
    pub const GUID: u32 = 0x0000_000D;
    pub const FILETIME: u32 = 0x0000_0010;
    pub const BOOLEAN: u32 = 0x0000_0011;
    pub const STRING: u32 = 0x0000_0012;
    pub const SECURITY_DESCRIPTOR_STRING: u32 = 0x0000_0014;
    pub const NTSTATUS: u32 = 0x0000_0018;
    pub const BINARY: u32 = 0x0000_1003;
    pub const STRING_LIST: u32 = 0x0000_2012;
}

/// One device node as reported by the enumeration handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub index: u32,
    pub class_guid: Guid,
}

/// One device interface exposed by a device node. `slot` is the
/// handle-local identifier the backend uses to address it in queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub slot: u32,
    pub device_index: u32,
    pub class_guid: Guid,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassScope {
    Installer,
    Interface,
}

/// The three accessor shapes a property can be queried through.
#[derive(Debug, Clone, Copy)]
pub enum QueryTarget<'a> {
    Device(&'a DeviceRecord),
    Interface(&'a InterfaceRecord),
    Class { guid: Guid, scope: ClassScope },
}

/// Result of a successful query: the value's type and the bytes written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryInfo {
    pub prop_type: u32,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const SMALL: IconSize = IconSize {
        width: 16,
        height: 16,
    };
}

/// An icon handle owned by the caller; released on drop.
pub struct DeviceIcon {
    handle: isize,
    size: IconSize,
    release: fn(isize),
}

impl DeviceIcon {
    pub fn new(handle: isize, size: IconSize, release: fn(isize)) -> Self {
        Self {
            handle,
            size,
            release,
        }
    }

    pub fn handle(&self) -> isize {
        self.handle
    }

    pub fn size(&self) -> IconSize {
        self.size
    }
}

impl fmt::Debug for DeviceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceIcon")
            .field("handle", &self.handle)
            .field("size", &self.size)
            .finish()
    }
}

impl Drop for DeviceIcon {
    fn drop(&mut self) {
        (self.release)(self.handle);
    }
}

/// One open enumeration context. Every query for items produced by the
/// handle must go through the same handle.
pub trait DeviceInfoHandle: Send + Sync {
    /// Device record at `index`, or `None` once enumeration is exhausted.
    fn device(&self, index: u32) -> Option<DeviceRecord>;

    /// Interface `index` of class `class` exposed by `device`, or `None`
    /// once exhausted.
    fn interface(&self, device: &DeviceRecord, class: &Guid, index: u32)
        -> Option<InterfaceRecord>;

    /// Two-phase property query. A buffer smaller than the value yields
    /// [`QueryError::InsufficientBuffer`] carrying the required size.
    fn query(
        &self,
        target: QueryTarget<'_>,
        key: &PropertyKey,
        buffer: &mut [u8],
    ) -> Result<QueryInfo, QueryError>;

    fn icon(&self, device: &DeviceRecord, size: IconSize) -> Option<DeviceIcon>;
}

/// Unregisters a notification subscription when dropped.
pub struct NotificationRegistration {
    unregister: Option<Box<dyn FnOnce() + Send>>,
}

impl NotificationRegistration {
    pub fn new(unregister: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unregister: Some(Box::new(unregister)),
        }
    }
}

impl fmt::Debug for NotificationRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRegistration")
            .field("active", &self.unregister.is_some())
            .finish()
    }
}

impl Drop for NotificationRegistration {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

pub trait DeviceBackend: Send + Sync {
    /// Open one enumeration context covering every device class.
    fn open_device_info_set(&self) -> Result<Box<dyn DeviceInfoHandle>, BackendError>;

    /// Every registered device-interface class.
    fn interface_classes(&self) -> Vec<Guid>;

    fn machine_name(&self) -> Option<String>;

    /// Subscribe to device-instance and device-interface change events.
    /// Callbacks push onto `queue` and must not block.
    fn register_notifications(
        &self,
        queue: Arc<NotificationQueue>,
    ) -> Result<NotificationRegistration, BackendError>;
}

/// Owning wrapper around one enumeration handle, shared by a tree and
/// every item built from it. The handle is released when the last
/// reference drops.
pub struct DeviceInfoSet {
    handle: Box<dyn DeviceInfoHandle>,
}

impl DeviceInfoSet {
    pub fn new(handle: Box<dyn DeviceInfoHandle>) -> Self {
        Self { handle }
    }
}

impl Deref for DeviceInfoSet {
    type Target = dyn DeviceInfoHandle;

    fn deref(&self) -> &Self::Target {
        self.handle.as_ref()
    }
}

impl fmt::Debug for DeviceInfoSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeviceInfoSet")
    }
}

/// Errors from the platform boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    EnumerationUnavailable(String),
    RegistrationFailed(String),
    Unsupported(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnumerationUnavailable(msg) => {
                write!(f, "device enumeration unavailable: {msg}")
            }
            Self::RegistrationFailed(msg) => {
                write!(f, "device notification registration failed: {msg}")
            }
            Self::Unsupported(msg) => write!(f, "device backend unsupported: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Errors from a single property query. These never leave the property
/// layer; a failed query resolves to "no value".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    NotFound,
    InsufficientBuffer { required: usize, prop_type: u32 },
    TypeMismatch { expected: u32, actual: u32 },
    Os(u32),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "property not found"),
            Self::InsufficientBuffer {
                required,
                prop_type,
            } => write!(
                f,
                "insufficient buffer: {required} bytes required for type 0x{prop_type:X}"
            ),
            Self::TypeMismatch { expected, actual } => write!(
                f,
                "property type mismatch: expected 0x{expected:X}, got 0x{actual:X}"
            ),
            Self::Os(code) => write!(f, "property query failed with OS error {code}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Host name from a UTF-16 buffer filled by the OS. Stops at the first
/// NUL; a blank name counts as none.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn host_name_from_wide(wide: &[u16]) -> Option<String> {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    let name = String::from_utf16_lossy(&wide[..len]);
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::{host_name_from_wide, NotificationRegistration, QueryError};

    fn wide(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn host_name_stops_at_terminator() {
        let mut buffer = wide("build-agent-07\0");
        buffer.extend(wide("stale tail"));
        assert_eq!(host_name_from_wide(&buffer).as_deref(), Some("build-agent-07"));
        assert_eq!(host_name_from_wide(&wide("  WS-12 ")).as_deref(), Some("WS-12"));
        assert_eq!(host_name_from_wide(&wide("\0ignored")), None);
        assert_eq!(host_name_from_wide(&[]), None);
    }

    #[test]
    fn registration_unregisters_once_on_drop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let registration = NotificationRegistration::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        drop(registration);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn query_error_display_names_required_size() {
        let err = QueryError::InsufficientBuffer {
            required: 42,
            prop_type: super::prop_type::STRING,
        };
        assert_eq!(
            err.to_string(),
            "insufficient buffer: 42 bytes required for type 0x12"
        );
    }
}
