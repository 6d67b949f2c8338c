//! Ready queues ordered by virtual runtime.
//!
//! A queue stores handles (indices into the caller's process list) keyed by
//! the virtual runtime the process had when it was inserted. Processes are
//! never updated while queued: the scheduler takes them out, runs them and
//! inserts them again with the new key.
//!
//! Equal virtual runtimes are yielded in insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};

/// The ordering structure used by the scheduler to pick the next process.
pub trait ReadyQueue {
    /// Insert the process identified by `handle` with its current virtual runtime.
    fn insert(&mut self, handle: usize, vruntime: i64);

    /// Returns the handle with the minimum virtual runtime, without removing it.
    fn peek_min(&self) -> Option<usize>;

    /// Removes and returns the handle with the minimum virtual runtime.
    ///
    /// Returns [`None`] if the queue is empty.
    fn extract_min(&mut self) -> Option<usize>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// A queued handle.
///
/// `seq` increases with every insertion and breaks ties between equal
/// virtual runtimes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct QueueEntry {
    vruntime: i64,
    seq: u64,
    handle: usize,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vruntime
            .cmp(&other.vruntime)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A ready queue backed by a binary min-heap.
#[derive(Debug, Default)]
pub struct MinHeapQueue {
    entries: BinaryHeap<Reverse<QueueEntry>>,
    next_seq: u64,
}

impl MinHeapQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadyQueue for MinHeapQueue {
    fn insert(&mut self, handle: usize, vruntime: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Reverse(QueueEntry {
            vruntime,
            seq,
            handle,
        }));
    }

    fn peek_min(&self) -> Option<usize> {
        self.entries.peek().map(|Reverse(entry)| entry.handle)
    }

    fn extract_min(&mut self) -> Option<usize> {
        self.entries.pop().map(|Reverse(entry)| entry.handle)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A ready queue backed by an ordered tree, like the red-black tree of the
/// Linux CFS run queue.
#[derive(Debug, Default)]
pub struct TreeQueue {
    entries: BTreeSet<QueueEntry>,
    next_seq: u64,
}

impl TreeQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadyQueue for TreeQueue {
    fn insert(&mut self, handle: usize, vruntime: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(QueueEntry {
            vruntime,
            seq,
            handle,
        });
    }

    fn peek_min(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.handle)
    }

    fn extract_min(&mut self) -> Option<usize> {
        self.entries.pop_first().map(|entry| entry.handle)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
