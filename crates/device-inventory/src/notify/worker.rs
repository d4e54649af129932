use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::NotificationDrain;

const THREAD_NAME: &str = "DeviceNotifyWorker";

/// Background thread that batches notifications: it sleeps until a push
/// arrives, waits out the batch interval so a burst lands in one batch,
/// then drains. Stopped and joined on drop.
pub struct NotifyWorker {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl NotifyWorker {
    pub fn spawn(drain: Arc<NotificationDrain>, interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&shutdown);
        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run(drain, stop, interval))?;

        Ok(Self {
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                warn!(thread = THREAD_NAME, "device notification worker panicked");
            }
        }
    }
}

impl Drop for NotifyWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for NotifyWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyWorker")
            .field("running", &self.is_running())
            .finish()
    }
}

fn run(drain: Arc<NotificationDrain>, shutdown: Arc<AtomicBool>, interval: Duration) {
    let queue = Arc::clone(drain.queue());
    if !queue.set_waker(thread::current()) {
        warn!(thread = THREAD_NAME, "notification queue already has a worker");
    }
    info!(
        thread = THREAD_NAME,
        interval_ms = interval.as_millis() as u64,
        "device notification worker started"
    );

    loop {
        while !queue.is_signaled() && !shutdown.load(Ordering::SeqCst) {
            thread::park();
        }
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        sleep_unless_shutdown(interval, &shutdown);
        if shutdown.load(Ordering::SeqCst) {
            break;
        }

        queue.clear_signal();
        let replayed = drain.drain();
        debug!(thread = THREAD_NAME, replayed, "device notification batch drained");
    }

    info!(thread = THREAD_NAME, "device notification worker stopped");
}

fn sleep_unless_shutdown(interval: Duration, shutdown: &AtomicBool) {
    let deadline = Instant::now() + interval;
    while !shutdown.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::park_timeout(deadline - now);
    }
}
