//! Device change notifications.
//!
//! OS callbacks push records onto a [`NotificationQueue`] from arbitrary
//! threads. A [`NotificationDrain`] later takes the whole batch at once,
//! rebuilds the tree a single time and replays the batch, oldest first, to
//! every subscribed [`NotificationSink`].

mod worker;

pub use worker::NotifyWorker;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};
use std::thread::Thread;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::guid::Guid;
use crate::publisher::{TreePublisher, TreeRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceNotification {
    InterfaceArrival { class_guid: Guid },
    InterfaceRemoval { class_guid: Guid },
    InstanceEnumerated { instance_id: String },
    InstanceStarted { instance_id: String },
    InstanceRemoved { instance_id: String },
}

impl DeviceNotification {
    pub fn instance_id(&self) -> Option<&str> {
        match self {
            Self::InstanceEnumerated { instance_id }
            | Self::InstanceStarted { instance_id }
            | Self::InstanceRemoved { instance_id } => Some(instance_id),
            Self::InterfaceArrival { .. } | Self::InterfaceRemoval { .. } => None,
        }
    }

    pub fn class_guid(&self) -> Option<Guid> {
        match self {
            Self::InterfaceArrival { class_guid } | Self::InterfaceRemoval { class_guid } => {
                Some(*class_guid)
            }
            _ => None,
        }
    }

    pub fn is_removal(&self) -> bool {
        matches!(
            self,
            Self::InterfaceRemoval { .. } | Self::InstanceRemoved { .. }
        )
    }
}

/// Counters for the notification path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationStats {
    pub pushed: u64,
    pub dropped: u64,
    pub drains: u64,
    pub rebuilds: u64,
}

/// Multi-producer buffer with a single whole-batch consumer. The lock is
/// held only to append or swap out the batch; records beyond `capacity`
/// pending are dropped and counted.
pub struct NotificationQueue {
    pending: Mutex<Vec<DeviceNotification>>,
    capacity: usize,
    pushed: AtomicU64,
    dropped: AtomicU64,
    dropped_since_take: AtomicU64,
    signaled: AtomicBool,
    waker: OnceLock<Thread>,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
            pushed: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            dropped_since_take: AtomicU64::new(0),
            signaled: AtomicBool::new(false),
            waker: OnceLock::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn pending(&self) -> MutexGuard<'_, Vec<DeviceNotification>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enqueue a record and signal the drain worker. Returns false if the
    /// queue was full; the drain still rebuilds for dropped records.
    pub fn push(&self, value: DeviceNotification) -> bool {
        let accepted = {
            let mut pending = self.pending();
            if pending.len() < self.capacity {
                pending.push(value);
                true
            } else {
                false
            }
        };

        if accepted {
            self.pushed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            self.dropped_since_take.fetch_add(1, Ordering::AcqRel);
        }
        self.signal();
        accepted
    }

    /// Detach every pending record, returned in arrival order.
    pub fn take_all(&self) -> Vec<DeviceNotification> {
        std::mem::take(&mut *self.pending())
    }

    /// Records dropped since the previous call.
    pub fn take_dropped(&self) -> u64 {
        self.dropped_since_take.swap(0, Ordering::AcqRel)
    }

    pub fn len(&self) -> usize {
        self.pending().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pushed(&self) -> u64 {
        self.pushed.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn is_signaled(&self) -> bool {
        self.signaled.load(Ordering::Acquire)
    }

    pub(crate) fn clear_signal(&self) -> bool {
        self.signaled.swap(false, Ordering::AcqRel)
    }

    /// Register the thread to unpark on the first push after a drain.
    pub(crate) fn set_waker(&self, thread: Thread) -> bool {
        self.waker.set(thread).is_ok()
    }

    fn signal(&self) {
        if !self.signaled.swap(true, Ordering::AcqRel) {
            if let Some(thread) = self.waker.get() {
                thread.unpark();
            }
        }
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("capacity", &self.capacity)
            .field("pending", &self.len())
            .field("pushed", &self.pushed())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// Receives each replayed notification together with the tree that was
/// rebuilt for its batch.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, tree: &TreeRef, notification: &DeviceNotification);
}

impl<F> NotificationSink for F
where
    F: Fn(&TreeRef, &DeviceNotification) + Send + Sync,
{
    fn deliver(&self, tree: &TreeRef, notification: &DeviceNotification) {
        self(tree, notification)
    }
}

pub struct NotificationDrain {
    publisher: Arc<TreePublisher>,
    queue: Arc<NotificationQueue>,
    sinks: RwLock<Vec<Arc<dyn NotificationSink>>>,
    drains: AtomicU64,
    rebuilds: AtomicU64,
}

impl NotificationDrain {
    pub fn new(publisher: Arc<TreePublisher>, queue: Arc<NotificationQueue>) -> Self {
        Self {
            publisher,
            queue,
            sinks: RwLock::new(Vec::new()),
            drains: AtomicU64::new(0),
            rebuilds: AtomicU64::new(0),
        }
    }

    pub fn queue(&self) -> &Arc<NotificationQueue> {
        &self.queue
    }

    pub fn subscribe(&self, sink: Arc<dyn NotificationSink>) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    /// Take the pending batch; if anything was pending (or dropped),
    /// rebuild once and replay the batch. Returns the number of records
    /// replayed.
    pub fn drain(&self) -> usize {
        self.drains.fetch_add(1, Ordering::Relaxed);
        let batch = self.queue.take_all();
        let dropped = self.queue.take_dropped();
        if batch.is_empty() && dropped == 0 {
            return 0;
        }
        if dropped > 0 {
            warn!(
                dropped,
                capacity = self.queue.capacity(),
                "device notifications dropped, queue full"
            );
        }

        let tree = self.publisher.force_rebuild();
        self.rebuilds.fetch_add(1, Ordering::Relaxed);

        let sinks = self
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for notification in &batch {
            log_notification(&tree, notification);
            for sink in &sinks {
                sink.deliver(&tree, notification);
            }
        }
        batch.len()
    }

    pub fn stats(&self) -> NotificationStats {
        NotificationStats {
            pushed: self.queue.pushed(),
            dropped: self.queue.dropped(),
            drains: self.drains.load(Ordering::Relaxed),
            rebuilds: self.rebuilds.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for NotificationDrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDrain")
            .field("queue", &self.queue)
            .field("stats", &self.stats())
            .finish()
    }
}

fn log_notification(tree: &TreeRef, notification: &DeviceNotification) {
    match notification {
        DeviceNotification::InterfaceArrival { class_guid } => {
            info!(class_guid = %class_guid, "device interface arrived");
        }
        DeviceNotification::InterfaceRemoval { class_guid } => {
            info!(class_guid = %class_guid, "device interface removed");
        }
        DeviceNotification::InstanceEnumerated { instance_id } => {
            info!(instance_id = %instance_id, name = ?device_name(tree, instance_id), "device arrived");
        }
        DeviceNotification::InstanceStarted { instance_id } => {
            info!(instance_id = %instance_id, name = ?device_name(tree, instance_id), "device started");
        }
        DeviceNotification::InstanceRemoved { instance_id } => {
            info!(instance_id = %instance_id, "device removed");
        }
    }
}

fn device_name<'a>(tree: &'a TreeRef, instance_id: &str) -> Option<&'a str> {
    tree.lookup_by_instance_id(instance_id)?.name()
}

#[cfg(test)]
mod tests;
