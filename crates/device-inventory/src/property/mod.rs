//! Lazily resolved, memoized device properties.
//!
//! Every device item carries one [`PropertyCache`] slot per [`PropertyId`].
//! A slot starts unresolved; the first read runs the table entry's fetch
//! strategy and stores the outcome, success or failure, for the lifetime
//! of the item.

mod fetch;
mod format;
pub mod keys;
mod table;

pub use keys::PropertyKey;
pub use table::{Fetch, PropertyEntry, PropertyId, Scope, PROPERTY_TABLE};

pub(crate) use fetch::{resolve, Subject};

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::guid::Guid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    String,
    StringList,
    U32,
    I32,
    U64,
    I64,
    Guid,
    Boolean,
    TimeStamp,
    Binary,
    Status,
}

/// Decoded raw value of a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    String(String),
    StringList(Vec<String>),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    Guid(Guid),
    Boolean(bool),
    /// FILETIME ticks (100 ns since 1601-01-01 UTC).
    TimeStamp(u64),
    Binary(Vec<u8>),
    Status(i32),
}

/// A resolved property. `raw` is `None` when the fetch failed. `rendered`
/// accompanies every present value except a success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub kind: PropertyKind,
    pub raw: Option<Variant>,
    pub rendered: Option<String>,
}

impl PropertyValue {
    pub fn absent(kind: PropertyKind) -> Self {
        Self {
            kind,
            raw: None,
            rendered: None,
        }
    }

    pub fn new(kind: PropertyKind, raw: Variant, rendered: String) -> Self {
        Self {
            kind,
            raw: Some(raw),
            rendered: Some(rendered),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.raw.is_some()
    }

    /// Display text, if any.
    pub fn text(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.raw {
            Some(Variant::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_string_list(&self) -> Option<&[String]> {
        match &self.raw {
            Some(Variant::StringList(list)) => Some(list),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self.raw {
            Some(Variant::U32(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self.raw {
            Some(Variant::U64(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.raw {
            Some(Variant::Boolean(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_guid(&self) -> Option<Guid> {
        match self.raw {
            Some(Variant::Guid(v)) => Some(v),
            _ => None,
        }
    }
}

/// Fixed-size array of write-once property slots.
pub struct PropertyCache {
    slots: Box<[OnceLock<PropertyValue>]>,
}

impl PropertyCache {
    pub fn new() -> Self {
        Self {
            slots: (0..PropertyId::COUNT).map(|_| OnceLock::new()).collect(),
        }
    }

    pub fn is_resolved(&self, id: PropertyId) -> bool {
        self.slots[id as usize].get().is_some()
    }

    pub fn get(&self, id: PropertyId) -> Option<&PropertyValue> {
        self.slots[id as usize].get()
    }

    /// Return the cached value, running `fetch` on first access only.
    pub fn get_or_resolve(
        &self,
        id: PropertyId,
        fetch: impl FnOnce() -> PropertyValue,
    ) -> &PropertyValue {
        self.slots[id as usize].get_or_init(fetch)
    }

    /// Seed a slot before anyone reads it. Returns false if it was
    /// already resolved.
    pub(crate) fn preset(&self, id: PropertyId, value: PropertyValue) -> bool {
        self.slots[id as usize].set(value).is_ok()
    }

    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}

impl Default for PropertyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PropertyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyCache")
            .field("resolved", &self.resolved_count())
            .field("slots", &self.slots.len())
            .finish()
    }
}
