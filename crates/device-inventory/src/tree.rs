//! One immutable snapshot of the device topology.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::backend::{DeviceBackend, DeviceIcon, DeviceInfoSet, IconSize};
use crate::guid::Guid;
use crate::item::{ids_equal, instance_id_hash, DeviceItem, ItemId, ROOT_INSTANCE_ID};

/// Knobs for a single rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Display name for the root enumerator; the backend's machine name
    /// when unset.
    pub root_name: Option<String>,
    /// Walk every chain after linking and log any inconsistency.
    pub validate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Some device is not reachable from the root.
    Cycle { unreachable: usize },
    /// A sibling chain ran longer than the item count.
    RunawayChain { parent: ItemId },
    MultipleRoots { roots: usize },
    DanglingLink { item: ItemId },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { unreachable } => {
                write!(f, "{unreachable} devices unreachable from the root")
            }
            Self::RunawayChain { parent } => {
                write!(f, "child chain of item {} does not terminate", parent.index())
            }
            Self::MultipleRoots { roots } => write!(f, "{roots} devices have no parent"),
            Self::DanglingLink { item } => {
                write!(f, "item {} links outside the tree", item.index())
            }
        }
    }
}

impl std::error::Error for TopologyError {}

/// Nested, serializable view of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub name: Option<String>,
    pub instance_id: Option<String>,
    pub class_guid: Guid,
    pub problem_code: u32,
    pub is_interface: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DeviceSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub generation: u64,
    pub device_count: usize,
    pub interface_count: usize,
    pub orphan_count: usize,
    pub root: Option<DeviceSnapshot>,
}

/// Items live in one arena: device nodes in enumeration order, then
/// interfaces in discovery order. `devices` indexes the device nodes
/// sorted by instance id hash.
pub struct DeviceTree {
    info_set: Option<Arc<DeviceInfoSet>>,
    items: Vec<DeviceItem>,
    devices: Vec<ItemId>,
    interfaces: Vec<ItemId>,
    root: Option<ItemId>,
    orphan_count: usize,
    generation: u64,
}

impl DeviceTree {
    /// The degenerate tree published when enumeration is unavailable.
    pub fn empty(generation: u64) -> Self {
        Self {
            info_set: None,
            items: Vec::new(),
            devices: Vec::new(),
            interfaces: Vec::new(),
            root: None,
            orphan_count: 0,
            generation,
        }
    }

    /// Enumerate, link and index the backend's current topology. Never
    /// fails; an unavailable enumeration yields an empty tree.
    pub fn build(backend: &dyn DeviceBackend, options: &BuildOptions, generation: u64) -> Self {
        let started = Instant::now();
        let handle = match backend.open_device_info_set() {
            Ok(handle) => handle,
            Err(err) => {
                warn!(error = %err, generation, "device enumeration unavailable, publishing empty tree");
                return Self::empty(generation);
            }
        };
        let info_set = Arc::new(DeviceInfoSet::new(handle));
        let root_name = options.root_name.clone().or_else(|| backend.machine_name());

        let mut items = Vec::new();
        let mut index = 0u32;
        while let Some(record) = info_set.device(index) {
            let id = next_id(&items);
            items.push(DeviceItem::from_device(
                id,
                Arc::clone(&info_set),
                record,
                root_name.as_deref(),
            ));
            index += 1;
        }
        let device_count = items.len();

        let mut linker = Linker::new(device_count);
        let (root, orphan_count) = linker.link_devices(&mut items);

        let mut interfaces = Vec::new();
        for class in backend.interface_classes() {
            for owner in 0..device_count {
                let Some(record) = items[owner].device_record().cloned() else {
                    continue;
                };
                let mut slot = 0u32;
                while let Some(interface) = info_set.interface(&record, &class, slot) {
                    let id = next_id(&items);
                    let item =
                        DeviceItem::from_interface(id, Arc::clone(&info_set), interface, &items[owner]);
                    items.push(item);
                    linker.append(&mut items, ItemId(owner as u32), id);
                    items[owner].interface_count += 1;
                    interfaces.push(id);
                    slot += 1;
                }
            }
        }

        let mut devices: Vec<ItemId> = (0..device_count as u32).map(ItemId).collect();
        devices.sort_by_key(|id| items[id.index()].instance_id_hash());

        let tree = Self {
            info_set: Some(info_set),
            items,
            devices,
            interfaces,
            root,
            orphan_count,
            generation,
        };

        debug!(
            generation,
            devices = tree.devices.len(),
            interfaces = tree.interfaces.len(),
            orphans = orphan_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "device tree rebuilt"
        );

        if options.validate {
            if let Err(err) = tree.validate() {
                error!(generation, error = %err, "device tree topology is inconsistent");
            }
        }
        tree
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn root(&self) -> Option<&DeviceItem> {
        self.root.map(|id| &self.items[id.index()])
    }

    pub fn item(&self, id: ItemId) -> Option<&DeviceItem> {
        self.items.get(id.index())
    }

    pub fn parent(&self, item: &DeviceItem) -> Option<&DeviceItem> {
        item.parent().and_then(|id| self.item(id))
    }

    /// Device nodes in ascending instance id hash order.
    pub fn devices(&self) -> impl ExactSizeIterator<Item = &DeviceItem> + '_ {
        self.devices.iter().map(move |id| &self.items[id.index()])
    }

    /// Interfaces in discovery order.
    pub fn interfaces(&self) -> impl ExactSizeIterator<Item = &DeviceItem> + '_ {
        self.interfaces.iter().map(move |id| &self.items[id.index()])
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    /// Rootless devices that were re-attached under the root.
    pub fn orphan_count(&self) -> usize {
        self.orphan_count
    }

    /// Device children first, then interfaces.
    pub fn children<'a>(&'a self, item: &DeviceItem) -> Children<'a> {
        Children {
            tree: self,
            next: item.first_child(),
            remaining: self.items.len(),
        }
    }

    /// Case-insensitive lookup. Walks the run of equal hashes so
    /// colliding ids still resolve.
    pub fn lookup_by_instance_id(&self, instance_id: &str) -> Option<&DeviceItem> {
        let hash = instance_id_hash(instance_id);
        self.hash_run(hash).find(|item| {
            item.instance_id()
                .is_some_and(|candidate| ids_equal(candidate, instance_id))
        })
    }

    /// First device whose instance id hashes to `hash`.
    pub fn lookup_by_hash(&self, hash: u32) -> Option<&DeviceItem> {
        self.hash_run(hash).next()
    }

    fn hash_run(&self, hash: u32) -> impl Iterator<Item = &DeviceItem> + '_ {
        let start = self
            .devices
            .partition_point(|id| self.items[id.index()].instance_id_hash() < hash);
        self.devices[start..]
            .iter()
            .map(move |id| &self.items[id.index()])
            .take_while(move |item| item.instance_id_hash() == hash)
    }

    /// Small icon for the item; interfaces borrow their owner's.
    pub fn icon(&self, item: &DeviceItem, size: IconSize) -> Option<DeviceIcon> {
        let owner = if item.is_interface() {
            self.parent(item)?
        } else {
            item
        };
        let record = owner.device_record()?;
        owner.info_set().icon(record, size)
    }

    /// Walk every chain from the root with a bound on iterations.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let bound = self.items.len();
        for item in &self.items {
            for link in [item.parent(), item.first_child(), item.next_sibling()]
                .into_iter()
                .flatten()
            {
                if link.index() >= bound {
                    return Err(TopologyError::DanglingLink { item: item.id() });
                }
            }
        }

        let roots = self.devices().filter(|item| item.parent().is_none()).count();
        if roots > 1 {
            return Err(TopologyError::MultipleRoots { roots });
        }

        let Some(root) = self.root else {
            return if self.devices.is_empty() {
                Ok(())
            } else {
                Err(TopologyError::Cycle {
                    unreachable: self.devices.len(),
                })
            };
        };

        let mut seen = vec![false; bound];
        let mut stack = vec![root];
        let mut reached_devices = 0usize;
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(TopologyError::RunawayChain { parent: id });
            }
            let item = &self.items[id.index()];
            if !item.is_interface() {
                reached_devices += 1;
            }
            let mut steps = 0usize;
            let mut child = item.first_child();
            while let Some(next) = child {
                steps += 1;
                if steps > bound {
                    return Err(TopologyError::RunawayChain { parent: id });
                }
                stack.push(next);
                child = self.items[next.index()].next_sibling();
            }
        }

        if reached_devices < self.devices.len() {
            return Err(TopologyError::Cycle {
                unreachable: self.devices.len() - reached_devices,
            });
        }
        Ok(())
    }

    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot {
            generation: self.generation,
            device_count: self.devices.len(),
            interface_count: self.interfaces.len(),
            orphan_count: self.orphan_count,
            root: self.root().map(|root| self.snapshot_item(root)),
        }
    }

    fn snapshot_item(&self, item: &DeviceItem) -> DeviceSnapshot {
        DeviceSnapshot {
            name: item.name().map(str::to_owned),
            instance_id: item.instance_id().map(str::to_owned),
            class_guid: item.class_guid(),
            problem_code: item.problem_code(),
            is_interface: item.is_interface(),
            children: self
                .children(item)
                .map(|child| self.snapshot_item(child))
                .collect(),
        }
    }

    /// False for the degenerate tree built when enumeration failed.
    pub fn has_enumeration(&self) -> bool {
        self.info_set.is_some()
    }
}

impl fmt::Debug for DeviceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceTree")
            .field("generation", &self.generation)
            .field("devices", &self.devices.len())
            .field("interfaces", &self.interfaces.len())
            .field("root", &self.root)
            .field("orphans", &self.orphan_count)
            .finish()
    }
}

impl Index<ItemId> for DeviceTree {
    type Output = DeviceItem;

    fn index(&self, id: ItemId) -> &DeviceItem {
        &self.items[id.index()]
    }
}

pub struct Children<'a> {
    tree: &'a DeviceTree,
    next: Option<ItemId>,
    remaining: usize,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a DeviceItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.tree.item(self.next?)?;
        self.next = item.next_sibling();
        Some(item)
    }
}

fn next_id(items: &[DeviceItem]) -> ItemId {
    ItemId(items.len() as u32)
}

/// Appends children in O(1) by remembering each parent's last child.
struct Linker {
    tails: Vec<Option<ItemId>>,
}

impl Linker {
    fn new(capacity: usize) -> Self {
        Self {
            tails: vec![None; capacity],
        }
    }

    fn append(&mut self, items: &mut [DeviceItem], parent: ItemId, child: ItemId) {
        match self.tails[parent.index()] {
            Some(tail) => items[tail.index()].next_sibling = Some(child),
            None => items[parent.index()].first_child = Some(child),
        }
        self.tails[parent.index()] = Some(child);
        items[child.index()].parent = Some(parent);
    }

    /// Attach every device to its parent; returns the root and how many
    /// extra rootless devices were folded under it.
    fn link_devices(&mut self, items: &mut [DeviceItem]) -> (Option<ItemId>, usize) {
        let mut by_hash: HashMap<u32, Vec<ItemId>> = HashMap::new();
        for item in items.iter() {
            if let Some(instance_id) = item.instance_id() {
                by_hash
                    .entry(instance_id_hash(instance_id))
                    .or_default()
                    .push(item.id());
            }
        }

        let mut rootless = Vec::new();
        for index in 0..items.len() {
            let child = ItemId(index as u32);
            let parent = items[index].parent_instance_id().and_then(|parent_id| {
                by_hash
                    .get(&instance_id_hash(parent_id))?
                    .iter()
                    .copied()
                    .filter(|candidate| *candidate != child)
                    .find(|candidate| {
                        items[candidate.index()]
                            .instance_id()
                            .is_some_and(|id| ids_equal(id, parent_id))
                    })
            });
            match parent {
                Some(parent) => {
                    self.append(items, parent, child);
                    items[parent.index()].child_count += 1;
                }
                None => rootless.push(child),
            }
        }

        let Some(root) = rootless
            .iter()
            .copied()
            .find(|id| {
                items[id.index()]
                    .instance_id()
                    .is_some_and(|instance_id| ids_equal(instance_id, ROOT_INSTANCE_ID))
            })
            .or_else(|| rootless.first().copied())
        else {
            return (None, 0);
        };

        let mut orphans = 0usize;
        for orphan in rootless.into_iter().filter(|id| *id != root) {
            warn!(
                instance_id = items[orphan.index()].instance_id().unwrap_or("<unknown>"),
                parent_instance_id = items[orphan.index()].parent_instance_id().unwrap_or("<none>"),
                "device parent not found, attaching under root"
            );
            self.append(items, root, orphan);
            items[root.index()].child_count += 1;
            orphans += 1;
        }
        (Some(root), orphans)
    }
}

#[cfg(test)]
mod tests;
