//! Device inventory: a live, lazily-described tree of every device node and
//! device interface the OS reports.
//!
//! [`DeviceInventory::start`] wires the pieces together: a
//! [`TreePublisher`] that hands out immutable [`DeviceTree`] snapshots, a
//! [`NotificationQueue`] fed by the backend's change callbacks, and a
//! [`NotifyWorker`] that batches those changes into single rebuilds.

pub mod backend;
mod config;
pub mod guid;
pub mod item;
pub mod notify;
pub mod property;
pub mod publisher;
pub mod tree;

use std::ops::Deref;
use std::sync::Arc;

use tracing::{info, warn};

pub use backend::{
    BackendError, DeviceBackend, NotificationRegistration, SyntheticBackend, SyntheticDevice,
    SyntheticInterface, WireValue,
};
#[cfg(target_os = "windows")]
pub use backend::SetupApiBackend;
pub use config::InventoryConfig;
pub use guid::Guid;
pub use item::{DeviceItem, ItemId};
pub use notify::{
    DeviceNotification, NotificationDrain, NotificationQueue, NotificationSink, NotificationStats,
    NotifyWorker,
};
pub use property::{PropertyId, PropertyKind, PropertyValue, Variant};
pub use publisher::{TreePublisher, TreeRef};
pub use tree::{BuildOptions, DeviceSnapshot, DeviceTree, TopologyError, TreeSnapshot};

/// A device item together with the tree that owns it.
#[derive(Debug, Clone)]
pub struct DeviceRef {
    tree: TreeRef,
    id: ItemId,
}

impl DeviceRef {
    pub fn tree(&self) -> &TreeRef {
        &self.tree
    }
}

impl Deref for DeviceRef {
    type Target = DeviceItem;

    fn deref(&self) -> &DeviceItem {
        &self.tree[self.id]
    }
}

pub struct DeviceInventory {
    // Unregister before the worker stops so no push outlives the drain.
    registration: Option<NotificationRegistration>,
    worker: Option<NotifyWorker>,
    config: InventoryConfig,
    publisher: Arc<TreePublisher>,
    drain: Arc<NotificationDrain>,
}

impl DeviceInventory {
    /// Build the inventory and, when enabled, subscribe to device changes.
    /// No tree is built until the first [`current_tree`](Self::current_tree).
    pub fn start(config: InventoryConfig, backend: Arc<dyn DeviceBackend>) -> Self {
        let publisher = Arc::new(TreePublisher::new(
            Arc::clone(&backend),
            config.build_options(),
        ));
        let queue = Arc::new(NotificationQueue::new(config.notify_capacity));
        let drain = Arc::new(NotificationDrain::new(
            Arc::clone(&publisher),
            Arc::clone(&queue),
        ));

        let mut inventory = Self {
            registration: None,
            worker: None,
            config,
            publisher,
            drain,
        };

        if !inventory.config.enabled {
            info!("device support disabled, change notifications not registered");
            return inventory;
        }

        match backend.register_notifications(queue) {
            Ok(registration) => inventory.registration = Some(registration),
            Err(err) => {
                warn!(error = %err, "device change notifications unavailable, auto refresh disabled");
                return inventory;
            }
        }

        if inventory.config.auto_refresh {
            match NotifyWorker::spawn(
                Arc::clone(&inventory.drain),
                inventory.config.batch_interval(),
            ) {
                Ok(worker) => inventory.worker = Some(worker),
                Err(err) => {
                    warn!(error = %err, "failed spawning device notification worker");
                }
            }
        }

        info!(
            auto_refresh = inventory.worker.is_some(),
            batch_interval_ms = inventory.config.batch_interval_ms,
            capacity = inventory.config.notify_capacity,
            "device inventory started"
        );
        inventory
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// The published tree, building it on first use.
    pub fn current_tree(&self) -> TreeRef {
        self.publisher.acquire_current()
    }

    pub fn force_rebuild(&self) -> TreeRef {
        self.publisher.force_rebuild()
    }

    /// Case-insensitive lookup in the current tree.
    pub fn lookup(&self, instance_id: &str) -> Option<DeviceRef> {
        let tree = self.current_tree();
        let id = tree.lookup_by_instance_id(instance_id)?.id();
        Some(DeviceRef { tree, id })
    }

    pub fn subscribe(&self, sink: Arc<dyn NotificationSink>) {
        self.drain.subscribe(sink);
    }

    /// Drain pending notifications on the calling thread.
    pub fn drain_now(&self) -> usize {
        self.drain.drain()
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }

    pub fn is_auto_refreshing(&self) -> bool {
        self.worker.as_ref().is_some_and(NotifyWorker::is_running)
    }

    pub fn stats(&self) -> NotificationStats {
        self.drain.stats()
    }
}

impl std::fmt::Debug for DeviceInventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceInventory")
            .field("config", &self.config)
            .field("registered", &self.registration.is_some())
            .field("worker", &self.worker)
            .field("publisher", &self.publisher)
            .finish()
    }
}
