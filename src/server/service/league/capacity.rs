//! Least-loaded-first bin allocator.
//!
//! `CapacityQueue` hands out bins in order of their current load. A bin that reaches its
//! capacity is dropped from the queue for the rest of the cycle. Bins with equal load are
//! served in registration order, so filling K equally loaded bins with enough capacity
//! deals items out round-robin.

use std::{cmp::Reverse, collections::BinaryHeap};

struct Bin<K> {
    key: K,
    current: u32,
    capacity: u32,
}

pub struct CapacityQueue<K> {
    bins: Vec<Bin<K>>,
    /// `(current, registration index)` of every bin that may still have room.
    heap: BinaryHeap<Reverse<(u32, usize)>>,
}

impl<K: Copy> CapacityQueue<K> {
    pub fn new() -> Self {
        Self {
            bins: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    /// Adds a bin holding `current` items out of `capacity`.
    ///
    /// A bin registered at or above capacity is remembered for `loads` but never handed out.
    pub fn register(&mut self, key: K, current: u32, capacity: u32) {
        let index = self.bins.len();
        self.bins.push(Bin {
            key,
            current,
            capacity,
        });
        if current < capacity {
            self.heap.push(Reverse((current, index)));
        }
    }

    /// Assigns one item to the least-loaded bin with room.
    ///
    /// # Returns
    /// - `Some(key)` - The bin the item was counted against
    /// - `None` - Every bin is full; the caller must register a new one
    pub fn place(&mut self) -> Option<K> {
        while let Some(Reverse((_, index))) = self.heap.pop() {
            let bin = &mut self.bins[index];
            if bin.current < bin.capacity {
                bin.current += 1;
                if bin.current < bin.capacity {
                    self.heap.push(Reverse((bin.current, index)));
                }
                return Some(bin.key);
            }
        }
        None
    }

    /// Final load of every registered bin, in registration order.
    pub fn loads(&self) -> Vec<(K, u32)> {
        self.bins.iter().map(|bin| (bin.key, bin.current)).collect()
    }
}
