//! Frontiers: FIFO, LIFO and evaluation-ordered.
//!
//! The frontier stores [`NodeId`] handles only; the nodes themselves live in
//! the search's [`aima_kernel::SearchTree`]. It owns the set of
//! generated-but-unexpanded nodes and tracks its own high-water mark.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use aima_kernel::NodeId;

use crate::policy::FrontierKind;

/// The priority-frontier ordering key: `(f, depth, creation_order)`.
///
/// Lower `f` first, then shallower depth, then older node. `f` is compared
/// with `f64::total_cmp`, so the order is total even for odd heuristics.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f: f64,
    pub depth: u32,
    pub creation_order: usize,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.depth.cmp(&other.depth))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<FrontierKey>`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

#[derive(Debug)]
enum Queue {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    Priority(BinaryHeap<FrontierEntry>),
}

/// Collection of nodes awaiting expansion.
#[derive(Debug)]
pub struct Frontier {
    queue: Queue,
    high_water: usize,
}

impl Frontier {
    /// An empty frontier of the given kind.
    #[must_use]
    pub fn new(kind: FrontierKind) -> Self {
        let queue = match kind {
            FrontierKind::Fifo => Queue::Fifo(VecDeque::new()),
            FrontierKind::Lifo => Queue::Lifo(Vec::new()),
            FrontierKind::Priority => Queue::Priority(BinaryHeap::new()),
        };
        Self {
            queue,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FrontierKind {
        match self.queue {
            Queue::Fifo(_) => FrontierKind::Fifo,
            Queue::Lifo(_) => FrontierKind::Lifo,
            Queue::Priority(_) => FrontierKind::Priority,
        }
    }

    /// Push a node. `key` only matters for priority frontiers.
    pub fn push(&mut self, node: NodeId, key: FrontierKey) {
        match &mut self.queue {
            Queue::Fifo(q) => q.push_back(node),
            Queue::Lifo(s) => s.push(node),
            Queue::Priority(h) => h.push(FrontierEntry {
                key: Reverse(key),
                node,
            }),
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Pop the next node per this frontier's ordering.
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.queue {
            Queue::Fifo(q) => q.pop_front(),
            Queue::Lifo(s) => s.pop(),
            Queue::Priority(h) => h.pop().map(|e| e.node),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(q) => q.len(),
            Queue::Lifo(s) => s.len(),
            Queue::Priority(h) => h.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
