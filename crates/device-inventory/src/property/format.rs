//! Display renderers for property values.

use chrono::{DateTime, Utc};

use crate::guid::Guid;

const FILETIME_UNIX_EPOCH_SECS: i64 = 11_644_473_600;
const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;

pub(super) fn hex_u32(value: u32) -> String {
    format!("0x{value:X}")
}

pub(super) fn hex_u64(value: u64) -> String {
    format!("0x{value:X}")
}

pub(super) fn boolean(value: bool) -> String {
    let text = if value { "true" } else { "false" };
    text.to_string()
}

pub(super) fn string_list(items: &[String]) -> String {
    items.join(", ")
}

/// FILETIME → `YYYY-MM-DD HH:MM:SS` (UTC). Out-of-range values render as
/// the raw tick count.
pub(super) fn timestamp(ticks: u64) -> String {
    let secs = (ticks / FILETIME_TICKS_PER_SEC) as i64 - FILETIME_UNIX_EPOCH_SECS;
    let nanos = ((ticks % FILETIME_TICKS_PER_SEC) * 100) as u32;
    match DateTime::<Utc>::from_timestamp(secs, nanos) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ticks.to_string(),
    }
}

pub(super) fn binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

const NT_STATUS_NAMES: &[(u32, &str)] = &[
    (0xC000_0001, "STATUS_UNSUCCESSFUL"),
    (0xC000_0002, "STATUS_NOT_IMPLEMENTED"),
    (0xC000_000D, "STATUS_INVALID_PARAMETER"),
    (0xC000_000E, "STATUS_NO_SUCH_DEVICE"),
    (0xC000_0022, "STATUS_ACCESS_DENIED"),
    (0xC000_009A, "STATUS_INSUFFICIENT_RESOURCES"),
    (0xC000_009D, "STATUS_DEVICE_NOT_CONNECTED"),
    (0xC000_00A3, "STATUS_DEVICE_NOT_READY"),
    (0xC000_00BB, "STATUS_NOT_SUPPORTED"),
    (0xC000_0182, "STATUS_DEVICE_CONFIGURATION_ERROR"),
    (0xC000_0185, "STATUS_IO_DEVICE_ERROR"),
    (0xC000_025E, "STATUS_PLUGPLAY_NO_DEVICE"),
    (0xC000_026C, "STATUS_DRIVER_UNABLE_TO_LOAD"),
    (0xC000_02B6, "STATUS_DEVICE_REMOVED"),
    (0xC000_038E, "STATUS_DRIVER_FAILED_PRIOR_UNLOAD"),
];

/// Success has no text; failures render by name when known.
pub(super) fn nt_status(status: i32) -> Option<String> {
    if status == 0 {
        return None;
    }
    let code = status as u32;
    Some(match NT_STATUS_NAMES.iter().find(|(c, _)| *c == code) {
        Some((_, name)) => format!("{name} (0x{code:08X})"),
        None => format!("0x{code:08X}"),
    })
}

const BUS_TYPE_NAMES: &[(Guid, &str)] = &[
    (Guid::from_u128(0x1530ea73_086b_11d1_a09f_00c04fc340b1), "GUID_BUS_TYPE_INTERNAL"),
    (Guid::from_u128(0x09343630_af9f_11d0_92e9_0000f81e1b30), "GUID_BUS_TYPE_PCMCIA"),
    (Guid::from_u128(0xc8ebdfb0_b510_11d0_80e5_00a0c92542e3), "GUID_BUS_TYPE_PCI"),
    (Guid::from_u128(0xe676f854_d87d_11d0_92b2_00a0c9055fc5), "GUID_BUS_TYPE_ISAPNP"),
    (Guid::from_u128(0xddc35509_f3fc_11d0_a537_0000f8753ed1), "GUID_BUS_TYPE_EISA"),
    (Guid::from_u128(0x1c75997a_dc33_11d0_92b2_00a0c9055fc5), "GUID_BUS_TYPE_MCA"),
    (Guid::from_u128(0x77114a87_8944_11d1_bd90_00a0c906be2d), "GUID_BUS_TYPE_SERENUM"),
    (Guid::from_u128(0x9d7debbc_c85d_11d1_9eb4_006008c3a19a), "GUID_BUS_TYPE_USB"),
    (Guid::from_u128(0xc4ca1000_2ddc_11d5_a17a_00c04f60524d), "GUID_BUS_TYPE_LPTENUM"),
    (Guid::from_u128(0x441ee000_4342_11d5_a184_00c04f60524d), "GUID_BUS_TYPE_USBPRINT"),
    (Guid::from_u128(0x441ee001_4342_11d5_a184_00c04f60524d), "GUID_BUS_TYPE_DOT4PRT"),
    (Guid::from_u128(0xf74e73eb_9ac5_45eb_be4d_772cc71ddfb3), "GUID_BUS_TYPE_1394"),
    (Guid::from_u128(0xeeaf37d0_1963_47c4_aa48_72476db7cf49), "GUID_BUS_TYPE_HID"),
    (Guid::from_u128(0xc06ff265_ae09_48f0_812c_16753d7cba83), "GUID_BUS_TYPE_AVC"),
    (Guid::from_u128(0x7ae17dc1_c944_44d6_881f_4c2e61053bc1), "GUID_BUS_TYPE_IRDA"),
    (Guid::from_u128(0xe700cc04_4036_4e89_9579_89ebf45f00cd), "GUID_BUS_TYPE_SD"),
    (Guid::from_u128(0xd7b46895_001a_4942_891f_a7d46610a843), "GUID_BUS_TYPE_ACPI"),
    (Guid::from_u128(0x06d10322_7de0_4cef_8e25_197d0e7442e2), "GUID_BUS_TYPE_SW_DEVICE"),
    (Guid::from_u128(0x375a5912_804c_45aa_bdc2_fdd25a1d9512), "GUID_BUS_TYPE_SCM"),
];

pub(super) fn bus_type_guid(guid: &Guid) -> String {
    BUS_TYPE_NAMES
        .iter()
        .find(|(g, _)| g == guid)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| guid.to_string())
}

const INTERRUPT_LINE_BASED: u32 = 0x1;
const INTERRUPT_MSI: u32 = 0x2;
const INTERRUPT_MSIX: u32 = 0x4;

pub(super) fn pci_interrupt_support(flags: u32) -> String {
    let mut parts = Vec::new();
    if flags & INTERRUPT_LINE_BASED != 0 {
        parts.push("Line based");
    }
    if flags & INTERRUPT_MSI != 0 {
        parts.push("Msi");
    }
    if flags & INTERRUPT_MSIX != 0 {
        parts.push("MsiX");
    }
    if parts.is_empty() {
        format!("(0x{flags:x})")
    } else {
        format!("{} (0x{flags:x})", parts.join(", "))
    }
}

pub(super) fn pci_link_speed(value: u32) -> String {
    let label = match value {
        1 => "2.5 GT/s",
        2 => "5.0 GT/s",
        3 => "8.0 GT/s",
        4 => "16.0 GT/s",
        5 => "32.0 GT/s",
        6 => "64.0 GT/s",
        _ => return hex_u32(value),
    };
    label.to_string()
}

pub(super) fn pci_link_width(value: u32) -> String {
    match value {
        1 | 2 | 4 | 8 | 12 | 16 | 32 => format!("x{value}"),
        _ => hex_u32(value),
    }
}

const PCI_DEVICE_TYPES: &[&str] = &[
    "PCI Conventional",
    "PCI-X",
    "PCI Express Endpoint",
    "PCI Express Legacy Endpoint",
    "PCI Express Root Complex Integrated Endpoint",
    "PCI Express Treated as PCI",
    "PCI Conventional Bridge",
    "PCI-X Bridge",
    "PCI Express Root Port",
    "PCI Express Upstream Switch Port",
    "PCI Express Downstream Switch Port",
    "PCI Express to PCI-X Bridge",
    "PCI-X to PCI Express Bridge",
    "PCI Express Treated as PCI Bridge",
    "PCI Express Event Collector",
];

pub(super) fn pci_device_type(value: u32) -> String {
    PCI_DEVICE_TYPES
        .get(value as usize)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| hex_u32(value))
}

/// Low nibble is the bus speed, next nibble the bus mode.
pub(super) fn pci_speed_and_mode(value: u32) -> String {
    let speed = match value & 0xF {
        0 => "33 MHz",
        1 => "66 MHz",
        2 => "133 MHz",
        3 => "266 MHz",
        4 => "533 MHz",
        _ => "unknown speed",
    };
    let mode = match (value >> 4) & 0xF {
        0 => "Conventional PCI",
        1 => "PCI-X Mode 1",
        2 => "PCI-X 266 (Mode 2)",
        3 => "PCI-X 533 (Mode 2)",
        _ => "unknown mode",
    };
    format!("{mode}, {speed} (0x{value:X})")
}

const DEV_NODE_STATUS_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "DN_ROOT_ENUMERATED"),
    (0x0000_0002, "DN_DRIVER_LOADED"),
    (0x0000_0004, "DN_ENUM_LOADED"),
    (0x0000_0008, "DN_STARTED"),
    (0x0000_0010, "DN_MANUAL"),
    (0x0000_0020, "DN_NEED_TO_ENUM"),
    (0x0000_0040, "DN_NOT_FIRST_TIME"),
    (0x0000_0080, "DN_HARDWARE_ENUM"),
    (0x0000_0100, "DN_LIAR"),
    (0x0000_0200, "DN_HAS_MARK"),
    (0x0000_0400, "DN_HAS_PROBLEM"),
    (0x0000_0800, "DN_FILTERED"),
    (0x0000_1000, "DN_MOVED"),
    (0x0000_2000, "DN_DISABLEABLE"),
    (0x0000_4000, "DN_REMOVABLE"),
    (0x0000_8000, "DN_PRIVATE_PROBLEM"),
    (0x0001_0000, "DN_MF_PARENT"),
    (0x0002_0000, "DN_MF_CHILD"),
    (0x0004_0000, "DN_WILL_BE_REMOVED"),
    (0x0008_0000, "DN_NOT_FIRST_TIMEE"),
    (0x0010_0000, "DN_STOP_FREE_RES"),
    (0x0020_0000, "DN_REBAL_CANDIDATE"),
    (0x0040_0000, "DN_BAD_PARTIAL"),
    (0x0080_0000, "DN_NT_ENUMERATOR"),
    (0x0100_0000, "DN_NT_DRIVER"),
    (0x0200_0000, "DN_NEEDS_LOCKING"),
    (0x0400_0000, "DN_ARM_WAKEUP"),
    (0x0800_0000, "DN_APM_ENUMERATOR"),
    (0x1000_0000, "DN_APM_DRIVER"),
    (0x2000_0000, "DN_SILENT_INSTALL"),
    (0x4000_0000, "DN_NO_SHOW_IN_DM"),
    (0x8000_0000, "DN_BOOT_LOG_PROB"),
];

const CAPABILITY_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "CM_DEVCAP_LOCKSUPPORTED"),
    (0x0000_0002, "CM_DEVCAP_EJECTSUPPORTED"),
    (0x0000_0004, "CM_DEVCAP_REMOVABLE"),
    (0x0000_0008, "CM_DEVCAP_DOCKDEVICE"),
    (0x0000_0010, "CM_DEVCAP_UNIQUEID"),
    (0x0000_0020, "CM_DEVCAP_SILENTINSTALL"),
    (0x0000_0040, "CM_DEVCAP_RAWDEVICEOK"),
    (0x0000_0080, "CM_DEVCAP_SURPRISEREMOVALOK"),
    (0x0000_0100, "CM_DEVCAP_HARDWAREDISABLED"),
    (0x0000_0200, "CM_DEVCAP_NONDYNAMIC"),
    (0x0000_0400, "CM_DEVCAP_SECUREDEVICE"),
];

const POWER_CAPABILITY_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "PDCAP_D0_SUPPORTED"),
    (0x0000_0002, "PDCAP_D1_SUPPORTED"),
    (0x0000_0004, "PDCAP_D2_SUPPORTED"),
    (0x0000_0008, "PDCAP_D3_SUPPORTED"),
    (0x0000_0010, "PDCAP_WAKE_FROM_D0_SUPPORTED"),
    (0x0000_0020, "PDCAP_WAKE_FROM_D1_SUPPORTED"),
    (0x0000_0040, "PDCAP_WAKE_FROM_D2_SUPPORTED"),
    (0x0000_0080, "PDCAP_WAKE_FROM_D3_SUPPORTED"),
    (0x0000_0100, "PDCAP_WARM_EJECT_SUPPORTED"),
];

/// Names of the set bits joined by ` | `; bits without a name are
/// appended as hex. Zero renders as `0x0`.
fn flags(value: u32, names: &[(u32, &str)]) -> String {
    if value == 0 {
        return hex_u32(0);
    }
    let mut parts = Vec::new();
    let mut remaining = value;
    for (bit, name) in names {
        if value & bit != 0 {
            parts.push((*name).to_string());
            remaining &= !bit;
        }
    }
    if remaining != 0 {
        parts.push(hex_u32(remaining));
    }
    parts.join(" | ")
}

pub(super) fn dev_node_status(value: u32) -> String {
    flags(value, DEV_NODE_STATUS_FLAGS)
}

pub(super) fn capabilities(value: u32) -> String {
    flags(value, CAPABILITY_FLAGS)
}

fn device_power_state(value: u32) -> &'static str {
    match value {
        1 => "D0",
        2 => "D1",
        3 => "D2",
        4 => "D3",
        _ => "Unspecified",
    }
}

fn system_power_state(value: u32) -> &'static str {
    match value {
        1 => "S0",
        2 => "S1",
        3 => "S2",
        4 => "S3",
        5 => "S4",
        6 => "S5",
        _ => "Unspecified",
    }
}

const POWER_DATA_SIZE: usize = 56;
const POWER_SYSTEM_MAXIMUM: usize = 7;

/// Decode a `CM_POWER_DATA` blob. Anything shorter than the structure
/// falls back to hex bytes.
pub(super) fn power_data(bytes: &[u8]) -> String {
    if bytes.len() < POWER_DATA_SIZE {
        return binary(bytes);
    }
    let word = |index: usize| {
        let at = index * 4;
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    };

    let most_recent = word(1);
    let caps = word(2);
    let (d1, d2, d3) = (word(3), word(4), word(5));
    let mapping = (1..POWER_SYSTEM_MAXIMUM)
        .map(|s| {
            format!(
                "{}->{}",
                system_power_state(s as u32),
                device_power_state(word(6 + s))
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let deepest_wake = word(6 + POWER_SYSTEM_MAXIMUM);

    format!(
        "Current: {}; Capabilities: {}; Latency D1/D2/D3: {}/{}/{}; Mapping: {}; Deepest wake: {}",
        device_power_state(most_recent),
        flags(caps, POWER_CAPABILITY_FLAGS),
        d1,
        d2,
        d3,
        mapping,
        system_power_state(deepest_wake)
    )
}
