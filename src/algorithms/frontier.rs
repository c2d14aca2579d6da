//! The open list of an A* search.
//!
//! A binary min-heap keyed by f = g + h. Entries are never removed
//! from the middle of the heap: when a node gets a better priority a new
//! entry is pushed and the caller recognises the old one as stale by
//! its sequence number.

use std::{cmp::Ordering, collections::BinaryHeap};

use ordered_float::OrderedFloat;

use crate::types::node::NodeId;

/// One frontier entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub f_value: OrderedFloat<f32>,
    /// Insertion order, unique per frontier.
    pub seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest f first, then the
        // earliest insertion.
        other
            .f_value
            .cmp(&self.f_value)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` with priority `f_value` and return the entry's
    /// sequence number.
    pub fn push(&mut self, node: NodeId, f_value: f32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            node,
            f_value: OrderedFloat(f_value),
            seq,
        });
        seq
    }

    /// Remove the entry with the smallest f-value. Equal f-values come
    /// out in insertion order.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod frontier_tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop())
            .map(|entry| entry.node.index())
            .collect()
    }

    #[test]
    fn test_pops_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId(0), 5.0);
        frontier.push(NodeId(1), 1.5);
        frontier.push(NodeId(2), 3.0);
        frontier.push(NodeId(3), 0.25);

        assert_eq!(drain(&mut frontier), vec![3, 1, 2, 0]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_ties_come_out_in_insertion_order() {
        let mut frontier = Frontier::new();
        for id in [4, 2, 9, 1] {
            frontier.push(NodeId(id), 2.0);
        }
        frontier.push(NodeId(0), 1.0);

        assert_eq!(drain(&mut frontier), vec![0, 4, 2, 9, 1]);
    }

    #[test]
    fn test_sequence_numbers_are_unique() {
        let mut frontier = Frontier::new();
        let a = frontier.push(NodeId(0), 1.0);
        let b = frontier.push(NodeId(0), 0.5);
        assert_ne!(a, b);
        assert_eq!(frontier.len(), 2);

        let entry = frontier.pop().unwrap();
        assert_eq!(entry.seq, b);
        assert_eq!(entry.f_value, OrderedFloat(0.5));
    }

    #[test]
    fn test_clear_resets_sequence() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId(0), 1.0);
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.push(NodeId(1), 1.0), 0);
    }
}
