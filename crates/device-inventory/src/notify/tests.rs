use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::backend::{SyntheticBackend, SyntheticDevice};
use crate::tree::BuildOptions;

fn started(id: &str) -> DeviceNotification {
    DeviceNotification::InstanceStarted {
        instance_id: id.to_string(),
    }
}

fn drain_over(backend: &Arc<SyntheticBackend>, capacity: usize) -> NotificationDrain {
    let publisher = Arc::new(TreePublisher::new(backend.clone(), BuildOptions::default()));
    NotificationDrain::new(publisher, Arc::new(NotificationQueue::new(capacity)))
}

fn recording_sink(drain: &NotificationDrain) -> Arc<Mutex<Vec<(u64, DeviceNotification)>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    drain.subscribe(Arc::new(
        move |tree: &TreeRef, notification: &DeviceNotification| {
            sink.lock()
                .expect("sink lock")
                .push((tree.generation(), notification.clone()));
        },
    ));
    seen
}

#[test]
fn take_all_returns_arrival_order() {
    let queue = NotificationQueue::new(16);
    for id in ["A", "B", "C"] {
        assert!(queue.push(started(id)));
    }
    assert_eq!(queue.len(), 3);
    assert!(queue.is_signaled());

    let batch = queue.take_all();
    assert_eq!(batch, vec![started("A"), started("B"), started("C")]);
    assert!(queue.is_empty());
    assert!(queue.take_all().is_empty());
}

#[test]
fn full_queue_drops_and_counts() {
    let queue = NotificationQueue::new(2);
    assert!(queue.push(started("A")));
    assert!(queue.push(started("B")));
    assert!(!queue.push(started("C")));
    assert_eq!(queue.dropped(), 1);
    assert_eq!(queue.pushed(), 2);
    assert_eq!(queue.take_dropped(), 1);
    assert_eq!(queue.take_dropped(), 0);

    queue.take_all();
    assert!(queue.push(started("D")));
}

#[test]
fn concurrent_pushes_are_all_taken_once() {
    let queue = Arc::new(NotificationQueue::new(10_000));
    let producers: Vec<_> = (0..4)
        .map(|producer| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for n in 0..250 {
                    queue.push(started(&format!("{producer}-{n}")));
                }
            })
        })
        .collect();

    let mut seen = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(10);
    while seen.len() < 1000 && Instant::now() < deadline {
        seen.extend(queue.take_all());
    }
    for producer in producers {
        producer.join().expect("producer");
    }
    seen.extend(queue.take_all());

    assert_eq!(seen.len(), 1000);
    for producer in 0..4 {
        let order: Vec<usize> = seen
            .iter()
            .filter_map(DeviceNotification::instance_id)
            .filter_map(|id| id.strip_prefix(&format!("{producer}-")))
            .map(|n| n.parse().expect("sequence"))
            .collect();
        assert_eq!(order, (0..250).collect::<Vec<_>>());
    }
}

#[test]
fn bounded_queue_accounts_for_every_push_under_contention() {
    let queue = Arc::new(NotificationQueue::new(8));
    let producers: Vec<_> = (0..4)
        .map(|producer| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                (0..500)
                    .filter(|n| queue.push(started(&format!("{producer}-{n}"))))
                    .count()
            })
        })
        .collect();

    let mut taken = 0usize;
    let mut largest = 0usize;
    while producers.iter().any(|producer| !producer.is_finished()) {
        let batch = queue.take_all();
        largest = largest.max(batch.len());
        taken += batch.len();
    }
    let accepted: usize = producers
        .into_iter()
        .map(|producer| producer.join().expect("producer"))
        .sum();
    taken += queue.take_all().len();

    assert!(largest <= queue.capacity());
    assert_eq!(taken, accepted);
    assert_eq!(queue.pushed(), accepted as u64);
    assert_eq!(queue.pushed() + queue.dropped(), 2000);
    assert_eq!(queue.take_dropped(), queue.dropped());
    assert!(queue.is_empty());
}

#[test]
fn empty_drain_does_not_rebuild() {
    let backend = Arc::new(SyntheticBackend::new());
    let drain = drain_over(&backend, 8);

    assert_eq!(drain.drain(), 0);
    assert_eq!(backend.open_count(), 0);
    let stats = drain.stats();
    assert_eq!(stats.drains, 1);
    assert_eq!(stats.rebuilds, 0);
}

#[test]
fn burst_rebuilds_once_and_replays_in_order() {
    let backend = Arc::new(SyntheticBackend::new());
    backend.add_device(SyntheticDevice::new("ROOT"));
    let drain = drain_over(&backend, 64);
    let seen = recording_sink(&drain);

    let burst: Vec<_> = (0..5).map(|n| started(&format!("DEV{n}"))).collect();
    for notification in &burst {
        drain.queue().push(notification.clone());
    }
    assert_eq!(drain.drain(), 5);

    assert_eq!(backend.open_count(), 1);
    let seen = seen.lock().expect("seen");
    let generations: Vec<u64> = seen.iter().map(|(generation, _)| *generation).collect();
    assert!(generations.windows(2).all(|pair| pair[0] == pair[1]));
    let replayed: Vec<_> = seen.iter().map(|(_, n)| n.clone()).collect();
    assert_eq!(replayed, burst);
    assert_eq!(drain.stats().rebuilds, 1);
}

#[test]
fn dropped_records_still_force_a_rebuild() {
    let backend = Arc::new(SyntheticBackend::new());
    let drain = drain_over(&backend, 1);
    drain.queue().push(started("A"));
    drain.queue().push(started("B"));

    assert_eq!(drain.drain(), 1);
    assert_eq!(drain.stats().dropped, 1);
    assert_eq!(drain.stats().rebuilds, 1);
    assert_eq!(drain.drain(), 0);
    assert_eq!(drain.stats().rebuilds, 1);
}

#[test]
fn worker_drains_after_interval() {
    let backend = Arc::new(SyntheticBackend::new());
    backend.add_device(SyntheticDevice::new("ROOT"));
    let drain = Arc::new(drain_over(&backend, 64));
    let seen = recording_sink(&drain);
    let worker = NotifyWorker::spawn(Arc::clone(&drain), Duration::from_millis(20)).expect("spawn");
    assert!(worker.is_running());

    drain.queue().push(started("A"));
    drain.queue().push(started("B"));

    let deadline = Instant::now() + Duration::from_secs(5);
    while seen.lock().expect("seen").len() < 2 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(seen.lock().expect("seen").len(), 2);
    assert_eq!(drain.stats().rebuilds, 1);
    drop(worker);
}

#[test]
fn notification_serializes_with_kind_tag() {
    let json = serde_json::to_value(started(r"USB\VID_046D\1")).expect("json");
    assert_eq!(json["kind"], "instance_started");
    assert_eq!(json["instance_id"], r"USB\VID_046D\1");

    let removal = DeviceNotification::InterfaceRemoval {
        class_guid: crate::guid::Guid::ZERO,
    };
    assert!(removal.is_removal());
    assert_eq!(removal.class_guid(), Some(crate::guid::Guid::ZERO));
    assert_eq!(removal.instance_id(), None);
}
