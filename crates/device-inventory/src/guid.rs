//! Platform-neutral GUID used for class identifiers and property key
//! format ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const ZERO: Guid = Guid::from_u128(0);

    /// Build from the canonical big-endian reading of the textual form,
    /// e.g. `0xa45c254e_df1c_4efd_8020_67d146a850e0`.
    pub const fn from_u128(value: u128) -> Self {
        let tail = (value as u64).to_be_bytes();
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: tail,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// In-memory (little-endian) layout, as the OS stores a GUID.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..16].copy_from_slice(&self.data4);
        out
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 16 {
            return None;
        }
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);
        Some(Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        })
    }

    /// Parse "XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX", braces optional.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim().trim_start_matches('{').trim_end_matches('}');
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 5 {
            return Err(format!("invalid GUID format: {s}"));
        }
        if parts[0].len() != 8 || parts[1].len() != 4 || parts[2].len() != 4 {
            return Err(format!("invalid GUID segment lengths: {s}"));
        }

        let d1 = u32::from_str_radix(parts[0], 16).map_err(|e| format!("GUID d1: {e}"))?;
        let d2 = u16::from_str_radix(parts[1], 16).map_err(|e| format!("GUID d2: {e}"))?;
        let d3 = u16::from_str_radix(parts[2], 16).map_err(|e| format!("GUID d3: {e}"))?;

        // parts[3] (4 hex) + parts[4] (12 hex) = 16 hex chars = 8 bytes
        let d4_hex = format!("{}{}", parts[3], parts[4]);
        if d4_hex.len() != 16 || !d4_hex.is_ascii() {
            return Err(format!("invalid GUID d4 segment: {d4_hex}"));
        }
        let mut d4 = [0u8; 8];
        for (i, byte) in d4.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&d4_hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| format!("GUID d4[{i}]: {e}"))?;
        }

        Ok(Self {
            data1: d1,
            data2: d2,
            data3: d3,
            data4: d4,
        })
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Guid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
