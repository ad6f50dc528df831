//! Priority frontier with insertion-order tie-breaking.

use std::collections::BinaryHeap;

/// A frontier entry: flat cell index with its f-score and insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest (f, seq) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered open list. Entries are never updated in place; a cell may be
/// pushed several times and the caller discards stale copies on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            next_seq: 0,
        }
    }

    /// Push `idx` with score `f`, stamping it with the next sequence number.
    pub(crate) fn push(&mut self, f: i32, idx: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, seq, idx });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    /// Total number of pushes so far.
    #[inline]
    pub(crate) fn pushed(&self) -> u64 {
        self.next_seq
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
