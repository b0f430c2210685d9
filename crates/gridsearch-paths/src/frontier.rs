//! Frontier collections used by the strategies.
//!
//! | Type | Extraction |
//! |---|---|
//! | [`FifoFrontier`] | oldest pushed first |
//! | [`LifoFrontier`] | newest pushed first |
//! | [`PriorityFrontier`] | smallest [`Priority`], then oldest |
//! | [`BeamLevel`] | the `k` best distinct positions of a whole level at once |
//!
//! All four implement [`Frontier`]; the first three also implement
//! [`Extract`] for one-at-a-time removal.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use gridsearch_core::Point;

/// A collection of pending search nodes.
pub trait Frontier {
    type Item;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A frontier that hands back one item at a time.
pub trait Extract: Frontier {
    fn pop(&mut self) -> Option<Self::Item>;
}

// ---------------------------------------------------------------------------
// FIFO / LIFO
// ---------------------------------------------------------------------------

/// First-in, first-out queue.
#[derive(Debug)]
pub struct FifoFrontier<T>(VecDeque<T>);

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for FifoFrontier<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> Extract for FifoFrontier<T> {
    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

/// Last-in, first-out stack.
#[derive(Debug)]
pub struct LifoFrontier<T>(Vec<T>);

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for LifoFrontier<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> Extract for LifoFrontier<T> {
    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Ordering key for [`PriorityFrontier`]: `cost` first, then `tie`,
/// smaller wins on both.
///
/// Strategies derive `tie` from the path length: greedy search passes the
/// length itself (shorter first), A* passes its negation (deeper first).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    pub cost: i32,
    pub tie: i32,
}

impl Priority {
    pub const fn new(cost: i32, tie: i32) -> Self {
        Self { cost, tie }
    }
}

/// An item paired with its priority.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prioritized<T> {
    pub priority: Priority,
    pub item: T,
}

struct HeapEntry<T> {
    priority: Priority,
    seq: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue.
///
/// Entries with equal [`Priority`] come out in insertion order, so
/// extraction order is fully deterministic.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for PriorityFrontier<T> {
    type Item = Prioritized<T>;

    fn push(&mut self, entry: Prioritized<T>) {
        self.heap.push(HeapEntry {
            priority: entry.priority,
            seq: self.seq,
            item: entry.item,
        });
        self.seq += 1;
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Extract for PriorityFrontier<T> {
    fn pop(&mut self) -> Option<Prioritized<T>> {
        self.heap.pop().map(|e| Prioritized {
            priority: e.priority,
            item: e.item,
        })
    }
}

// ---------------------------------------------------------------------------
// Beam level
// ---------------------------------------------------------------------------

/// A candidate for the next beam level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<T> {
    pub key: i32,
    pub pos: Point,
    pub item: T,
}

/// Collects the candidates generated while expanding one beam level.
#[derive(Debug)]
pub struct BeamLevel<T> {
    candidates: Vec<Candidate<T>>,
}

impl<T> BeamLevel<T> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Drain the level and return at most `width` items.
    ///
    /// Later candidates for an already-seen position are dropped first; the
    /// survivors are then ranked by `key`, keeping generation order among
    /// equal keys.
    pub fn take_best(&mut self, width: usize) -> Vec<T> {
        let mut seen = HashSet::new();
        let mut kept: Vec<Candidate<T>> = self
            .candidates
            .drain(..)
            .filter(|c| seen.insert(c.pos))
            .collect();
        kept.sort_by_key(|c| c.key);
        kept.truncate(width);
        kept.into_iter().map(|c| c.item).collect()
    }
}

impl<T> Default for BeamLevel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for BeamLevel<T> {
    type Item = Candidate<T>;

    #[inline]
    fn push(&mut self, candidate: Candidate<T>) {
        self.candidates.push(candidate);
    }

    #[inline]
    fn len(&self) -> usize {
        self.candidates.len()
    }
}
