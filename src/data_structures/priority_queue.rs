use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A (cumulative distance, node) pair awaiting processing.
///
/// Ordered by distance only. Nodes need no ordering of their own, so entries
/// with equal distances compare equal and pop in an unspecified order.
#[derive(Debug, Clone)]
pub struct FrontierEntry<N, D> {
    pub distance: D,
    pub node: N,
}

impl<N, D: Ord> PartialEq for FrontierEntry<N, D> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N, D: Ord> Eq for FrontierEntry<N, D> {}

impl<N, D: Ord> PartialOrd for FrontierEntry<N, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, D: Ord> Ord for FrontierEntry<N, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// Min-priority frontier for shortest path search, backed by a `BinaryHeap`.
///
/// There is no decrease-key: a node may sit in the frontier several times
/// with different distances and the search discards the stale ones on pop.
#[derive(Debug)]
pub struct Frontier<N, D>
where
    D: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<FrontierEntry<N, D>>>,
}

impl<N, D> Frontier<N, D>
where
    D: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given cumulative distance
    pub fn push(&mut self, node: N, distance: D) {
        self.heap.push(Reverse(FrontierEntry { distance, node }));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, D)> {
        self.heap
            .pop()
            .map(|Reverse(FrontierEntry { distance, node })| (node, distance))
    }

    /// Returns the smallest distance without removing its entry
    pub fn peek_distance(&self) -> Option<D> {
        self.heap.peek().map(|Reverse(entry)| entry.distance)
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<N, D> Default for Frontier<N, D>
where
    D: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
