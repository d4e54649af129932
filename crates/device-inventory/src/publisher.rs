//! Holds the currently published device tree.
//!
//! Readers take a shared lock only long enough to clone an `Arc`. A
//! rebuild runs with no publication lock held and swaps the finished tree
//! in under a short exclusive lock; the previous tree is freed once its
//! last reader lets go.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use crate::backend::DeviceBackend;
use crate::tree::{BuildOptions, DeviceTree};

/// Owning handle on one published tree.
pub type TreeRef = Arc<DeviceTree>;

pub struct TreePublisher {
    backend: Arc<dyn DeviceBackend>,
    options: BuildOptions,
    current: RwLock<Option<TreeRef>>,
    // Serializes rebuilds; never held by readers of a published tree.
    rebuild: Mutex<()>,
    next_generation: AtomicU64,
}

impl TreePublisher {
    pub fn new(backend: Arc<dyn DeviceBackend>, options: BuildOptions) -> Self {
        Self {
            backend,
            options,
            current: RwLock::new(None),
            rebuild: Mutex::new(()),
            next_generation: AtomicU64::new(1),
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// The published tree, if any, without triggering a build.
    pub fn peek(&self) -> Option<TreeRef> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The published tree; the first call builds one synchronously.
    pub fn acquire_current(&self) -> TreeRef {
        if let Some(tree) = self.peek() {
            return tree;
        }

        let _rebuild = self.rebuild.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tree) = self.peek() {
            return tree;
        }
        self.publish(self.rebuild_tree())
    }

    /// Build a fresh tree from the backend without publishing it.
    pub fn rebuild_tree(&self) -> DeviceTree {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        DeviceTree::build(self.backend.as_ref(), &self.options, generation)
    }

    /// Swap `tree` in and return a handle on it. The previous tree is
    /// released after the lock is dropped.
    pub fn publish(&self, tree: DeviceTree) -> TreeRef {
        let tree = Arc::new(tree);
        let previous = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            current.replace(Arc::clone(&tree))
        };
        debug!(
            generation = tree.generation(),
            previous = previous.as_ref().map(|old| old.generation()),
            "device tree published"
        );
        drop(previous);
        tree
    }

    /// Rebuild and publish unconditionally.
    pub fn force_rebuild(&self) -> TreeRef {
        let _rebuild = self.rebuild.lock().unwrap_or_else(PoisonError::into_inner);
        self.publish(self.rebuild_tree())
    }
}

impl std::fmt::Debug for TreePublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreePublisher")
            .field("options", &self.options)
            .field("current", &self.peek().map(|tree| tree.generation()))
            .finish()
    }
}
