//! Min-priority queue of `(node, cost)` entries used to order node visits.
//!
//! The queue never deduplicates: pushing a node that is already queued
//! leaves the older entry in place, and the search tolerates the stale
//! entry when it surfaces.

mod state;

use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use state::State;

/// Backing data structure of a [`PriorityQueue`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStrategy {
    /// Binary heap, O(log n) push and pop
    #[default]
    BinaryHeap,
    /// Vector kept sorted on insert, O(n) push and O(1) pop.
    /// Competitive on small graphs.
    SortedVec,
}

#[derive(Debug, Clone)]
enum Backing<N, W> {
    Heap(BinaryHeap<State<N, W>>),
    // Ascending by `State` ordering, so the cheapest entry is last
    Sorted(Vec<State<N, W>>),
}

/// Min-priority queue keyed by cost.
///
/// `pop` always yields an entry whose cost is not greater than any entry
/// still in the queue. Entries with equal cost come out in push order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<N, W> {
    backing: Backing<N, W>,
    pushed: u64,
}

impl<N, W: PartialOrd + Copy> PriorityQueue<N, W> {
    pub fn new(strategy: QueueStrategy) -> Self {
        Self::with_capacity(strategy, 0)
    }

    pub fn with_capacity(strategy: QueueStrategy, capacity: usize) -> Self {
        let backing = match strategy {
            QueueStrategy::BinaryHeap => Backing::Heap(BinaryHeap::with_capacity(capacity)),
            QueueStrategy::SortedVec => Backing::Sorted(Vec::with_capacity(capacity)),
        };
        Self { backing, pushed: 0 }
    }

    pub fn strategy(&self) -> QueueStrategy {
        match self.backing {
            Backing::Heap(_) => QueueStrategy::BinaryHeap,
            Backing::Sorted(_) => QueueStrategy::SortedVec,
        }
    }

    /// Inserts a new entry. Existing entries for `node` are kept.
    pub fn push(&mut self, node: N, cost: W) {
        let state = State {
            cost,
            seq: self.pushed,
            node,
        };
        self.pushed += 1;

        match &mut self.backing {
            Backing::Heap(heap) => heap.push(state),
            Backing::Sorted(entries) => {
                let idx = entries.partition_point(|probe| *probe < state);
                entries.insert(idx, state);
            }
        }
    }

    /// Removes and returns the cheapest entry
    pub fn pop(&mut self) -> Option<(N, W)> {
        let state = match &mut self.backing {
            Backing::Heap(heap) => heap.pop(),
            Backing::Sorted(entries) => entries.pop(),
        }?;
        Some((state.node, state.cost))
    }

    /// Cost of the entry `pop` would return next
    pub fn peek_cost(&self) -> Option<W> {
        match &self.backing {
            Backing::Heap(heap) => heap.peek().map(|state| state.cost),
            Backing::Sorted(entries) => entries.last().map(|state| state.cost),
        }
    }

    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Heap(heap) => heap.len(),
            Backing::Sorted(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N, W: PartialOrd + Copy> Default for PriorityQueue<N, W> {
    fn default() -> Self {
        Self::new(QueueStrategy::default())
    }
}
