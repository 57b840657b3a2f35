// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small job queue: seed tasks, fill a large task in place, order by
//! priority (highest first), and split at a priority threshold.

// Imports
use growvec::GrowVec;
use std::cmp::Ordering;

#[derive(Clone)]
struct Task {
    id: u32,
    priority: u8,
    payload: [u8; 1024],
}

impl Task {
    fn new(id: u32, priority: u8, label: &str) -> Self {
        let mut payload = [0u8; 1024];
        payload[..label.len()].copy_from_slice(label.as_bytes());
        Self {
            id,
            priority,
            payload,
        }
    }

    fn label(&self) -> &str {
        let end = self.payload.iter().position(|&b| b == 0).unwrap_or(1024);
        std::str::from_utf8(&self.payload[..end]).unwrap()
    }
}

// Descending: higher priority sorts first.
fn by_priority_desc(a: &Task, b: &Task) -> Ordering {
    b.priority.cmp(&a.priority)
}

// Consistent with `by_priority_desc`: an element is `Less` than the key when
// its priority is higher.
fn against_threshold(elem: &Task, threshold: &u8) -> Ordering {
    threshold.cmp(&elem.priority)
}

fn seeded_queue() -> GrowVec<Task> {
    let mut queue = GrowVec::from_slice(&[
        Task::new(101, 50, "Regular Maintenance"),
        Task::new(102, 99, "CRITICAL SERVER PATCH"),
        Task::new(103, 10, "Log Rotation"),
    ]);

    let heavy = queue
        .push_slot()
        .unwrap()
        .write(Task::new(104, 85, ""));
    let label = b"Heavy Simulation Data [1KB]...";
    heavy.payload[..label.len()].copy_from_slice(label);

    queue
}

#[test]
fn queue_seeding_and_slot_fill() {
    let queue = seeded_queue();
    assert_eq!(queue.len(), 4);
    // from_slice is capacity-exact; the slot push grows through the policy.
    assert_eq!(queue.capacity(), 6);
    let heavy = queue.last().unwrap();
    assert_eq!(heavy.id, 104);
    assert_eq!(heavy.label(), "Heavy Simulation Data [1KB]...");
}

#[test]
fn sort_then_cut_at_threshold() {
    let mut queue = seeded_queue();
    queue.sort(by_priority_desc);

    let order: Vec<u32> = queue.iter().map(|t| t.id).collect();
    assert_eq!(order, [102, 104, 101, 103]);

    let cutoff = queue.lower_bound_index(&50, against_threshold);
    let (run, skip) = queue.data().split_at(cutoff);
    assert_eq!(run.iter().map(|t| t.priority).collect::<Vec<_>>(), [99, 85]);
    assert_eq!(skip.iter().map(|t| t.id).collect::<Vec<_>>(), [101, 103]);

    let first_skipped = queue.lower_bound(&50, against_threshold).unwrap();
    assert_eq!(first_skipped.label(), "Regular Maintenance");
    assert!(queue.lower_bound(&0, against_threshold).is_none());
}

#[test]
fn drain_queue_by_priority() {
    let mut queue = seeded_queue();
    // Ascending so the highest priority sits at the back.
    queue.sort(|a, b| a.priority.cmp(&b.priority));

    let mut executed = Vec::new();
    while let Ok(task) = queue.try_pop() {
        executed.push(task.id);
    }
    assert_eq!(executed, [102, 104, 101, 103]);
    assert!(queue.is_empty());
}
