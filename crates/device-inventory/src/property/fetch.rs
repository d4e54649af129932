use tracing::trace;

use super::format;
use super::table::{Fetch, PropertyId, Scope};
use super::{PropertyKey, PropertyKind, PropertyValue, Variant};
use crate::backend::{
    prop_type, ClassScope, DeviceInfoSet, DeviceRecord, InterfaceRecord, QueryError, QueryInfo,
    QueryTarget,
};
use crate::guid::Guid;

/// What a property is being resolved for.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Subject<'a> {
    Device(&'a DeviceRecord),
    Interface(&'a InterfaceRecord),
}

/// Run the table entry for `id` against `subject`. Never fails: a value
/// that cannot be fetched resolves to [`PropertyValue::absent`].
pub(crate) fn resolve(set: &DeviceInfoSet, subject: Subject<'_>, id: PropertyId) -> PropertyValue {
    let entry = id.entry();
    let kind = entry.fetch.kind();
    let reader = Reader {
        set,
        targets: targets(subject, entry.scope),
        key: &entry.key,
    };

    let value = match entry.fetch {
        Fetch::String => reader.string().map(|s| {
            let rendered = s.clone();
            PropertyValue::new(kind, Variant::String(s), rendered)
        }),
        Fetch::StringList => reader.string_list().map(|list| list_value(kind, list)),
        Fetch::StringOrStringList => reader
            .string()
            .map(|s| vec![s])
            .or_else(|| reader.string_list())
            .map(|list| list_value(kind, list)),
        Fetch::U32 => reader.u32().map(|v| u32_value(kind, v, v.to_string())),
        Fetch::U32Hex => reader.u32().map(|v| u32_value(kind, v, format::hex_u32(v))),
        Fetch::I32 => reader
            .i32()
            .map(|v| PropertyValue::new(kind, Variant::I32(v), v.to_string())),
        Fetch::I64 => reader
            .i64()
            .map(|v| PropertyValue::new(kind, Variant::I64(v), v.to_string())),
        Fetch::U64 => reader
            .u64()
            .map(|v| PropertyValue::new(kind, Variant::U64(v), v.to_string())),
        Fetch::U64Hex => reader
            .u64()
            .map(|v| PropertyValue::new(kind, Variant::U64(v), format::hex_u64(v))),
        Fetch::Boolean => reader
            .boolean()
            .map(|v| PropertyValue::new(kind, Variant::Boolean(v), format::boolean(v))),
        Fetch::TimeStamp => reader
            .filetime()
            .map(|v| PropertyValue::new(kind, Variant::TimeStamp(v), format::timestamp(v))),
        Fetch::Guid => reader
            .guid()
            .map(|g| PropertyValue::new(kind, Variant::Guid(g), g.to_string())),
        Fetch::BusTypeGuid => reader
            .guid()
            .map(|g| PropertyValue::new(kind, Variant::Guid(g), format::bus_type_guid(&g))),
        Fetch::NtStatus => reader.status().map(|s| PropertyValue {
            kind,
            raw: Some(Variant::Status(s)),
            rendered: format::nt_status(s),
        }),
        Fetch::Binary => reader.binary().map(|bytes| {
            let rendered = format::binary(&bytes);
            PropertyValue::new(kind, Variant::Binary(bytes), rendered)
        }),
        Fetch::PowerData => reader.binary().map(|bytes| {
            let rendered = format::power_data(&bytes);
            PropertyValue::new(kind, Variant::Binary(bytes), rendered)
        }),
        Fetch::PciInterruptSupport => reader
            .u32()
            .map(|v| u32_value(kind, v, format::pci_interrupt_support(v))),
        Fetch::PciLinkSpeed => reader
            .u32()
            .map(|v| u32_value(kind, v, format::pci_link_speed(v))),
        Fetch::PciLinkWidth => reader
            .u32()
            .map(|v| u32_value(kind, v, format::pci_link_width(v))),
        Fetch::PciDeviceType => reader
            .u32()
            .map(|v| u32_value(kind, v, format::pci_device_type(v))),
        Fetch::PciSpeedAndMode => reader
            .u32()
            .map(|v| u32_value(kind, v, format::pci_speed_and_mode(v))),
        Fetch::DevNodeStatus => reader
            .u32()
            .map(|v| u32_value(kind, v, format::dev_node_status(v))),
        Fetch::Capabilities => reader
            .u32()
            .map(|v| u32_value(kind, v, format::capabilities(v))),
    };

    value.unwrap_or_else(|| {
        trace!(property = id.name(), "property has no value");
        PropertyValue::absent(kind)
    })
}

fn u32_value(kind: PropertyKind, value: u32, rendered: String) -> PropertyValue {
    PropertyValue::new(kind, Variant::U32(value), rendered)
}

fn list_value(kind: PropertyKind, list: Vec<String>) -> PropertyValue {
    let rendered = format::string_list(&list);
    PropertyValue::new(kind, Variant::StringList(list), rendered)
}

/// Accessors to try, in order. Class-wide properties skip the instance
/// accessor and try the class scope matching the item first.
fn targets(subject: Subject<'_>, scope: Scope) -> [Option<QueryTarget<'_>>; 2] {
    match (scope, subject) {
        (Scope::Instance, Subject::Device(record)) => [Some(QueryTarget::Device(record)), None],
        (Scope::Instance, Subject::Interface(record)) => {
            [Some(QueryTarget::Interface(record)), None]
        }
        (Scope::Class, Subject::Device(record)) => [
            Some(class_target(record.class_guid, ClassScope::Installer)),
            Some(class_target(record.class_guid, ClassScope::Interface)),
        ],
        (Scope::Class, Subject::Interface(record)) => [
            Some(class_target(record.class_guid, ClassScope::Interface)),
            Some(class_target(record.class_guid, ClassScope::Installer)),
        ],
    }
}

fn class_target<'a>(guid: Guid, scope: ClassScope) -> QueryTarget<'a> {
    QueryTarget::Class { guid, scope }
}

/// Reject a value whose reported type is none of `accept`.
pub(super) fn expect_type(info: QueryInfo, accept: &[u32]) -> Result<QueryInfo, QueryError> {
    if accept.contains(&info.prop_type) {
        return Ok(info);
    }
    Err(QueryError::TypeMismatch {
        expected: accept.first().copied().unwrap_or_default(),
        actual: info.prop_type,
    })
}

struct Reader<'a> {
    set: &'a DeviceInfoSet,
    targets: [Option<QueryTarget<'a>>; 2],
    key: &'a PropertyKey,
}

impl Reader<'_> {
    /// Fixed-size kinds fetch straight into a stack buffer and must match
    /// both type and size.
    fn fixed<const N: usize>(&self, expected: u32) -> Option<[u8; N]> {
        for target in self.targets.iter().flatten() {
            let mut buffer = [0u8; N];
            let fetched = self
                .set
                .query(*target, self.key, &mut buffer)
                .and_then(|info| expect_type(info, &[expected]));
            match fetched {
                Ok(info) if info.size == N => return Some(buffer),
                Ok(info) => trace!(key = ?self.key, size = info.size, "property size mismatch"),
                Err(err) => trace!(key = ?self.key, error = %err, "property query failed"),
            }
        }
        None
    }

    /// Two-phase query: probe for the size, then fetch. The probe must
    /// report an insufficient buffer with an accepted type.
    fn variable(&self, accept: &[u32]) -> Option<Vec<u8>> {
        for target in self.targets.iter().flatten() {
            let required = match self.set.query(*target, self.key, &mut []) {
                Err(QueryError::InsufficientBuffer {
                    required,
                    prop_type,
                }) if required > 0 && accept.contains(&prop_type) => required,
                Ok(_) => continue,
                Err(err) => {
                    trace!(key = ?self.key, error = %err, "property probe failed");
                    continue;
                }
            };

            let mut buffer = vec![0u8; required];
            let fetched = self
                .set
                .query(*target, self.key, &mut buffer)
                .and_then(|info| expect_type(info, accept));
            match fetched {
                Ok(info) => {
                    buffer.truncate(info.size);
                    return Some(buffer);
                }
                Err(err) => trace!(key = ?self.key, error = %err, "property fetch failed"),
            }
        }
        None
    }

    fn u32(&self) -> Option<u32> {
        self.fixed::<4>(prop_type::UINT32).map(u32::from_le_bytes)
    }

    fn i32(&self) -> Option<i32> {
        self.fixed::<4>(prop_type::INT32).map(i32::from_le_bytes)
    }

    fn i64(&self) -> Option<i64> {
        self.fixed::<8>(prop_type::INT64).map(i64::from_le_bytes)
    }

    fn u64(&self) -> Option<u64> {
        self.fixed::<8>(prop_type::UINT64).map(u64::from_le_bytes)
    }

    fn status(&self) -> Option<i32> {
        self.fixed::<4>(prop_type::NTSTATUS).map(i32::from_le_bytes)
    }

    fn filetime(&self) -> Option<u64> {
        self.fixed::<8>(prop_type::FILETIME).map(u64::from_le_bytes)
    }

    fn boolean(&self) -> Option<bool> {
        self.fixed::<1>(prop_type::BOOLEAN).map(|b| b[0] != 0)
    }

    fn guid(&self) -> Option<Guid> {
        self.fixed::<16>(prop_type::GUID)
            .and_then(|bytes| Guid::from_le_bytes(&bytes))
    }

    fn string(&self) -> Option<String> {
        self.variable(&[prop_type::STRING, prop_type::SECURITY_DESCRIPTOR_STRING])
            .map(|bytes| decode_string(&bytes))
    }

    fn string_list(&self) -> Option<Vec<String>> {
        self.variable(&[prop_type::STRING_LIST])
            .map(|bytes| decode_string_list(&bytes))
    }

    fn binary(&self) -> Option<Vec<u8>> {
        self.variable(&[prop_type::BINARY])
    }
}

fn utf16_units(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

pub(crate) fn decode_string(bytes: &[u8]) -> String {
    let units = utf16_units(bytes);
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..end])
}

pub(crate) fn decode_string_list(bytes: &[u8]) -> Vec<String> {
    utf16_units(bytes)
        .split(|&u| u == 0)
        .filter(|entry| !entry.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}
