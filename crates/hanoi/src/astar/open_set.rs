//! Min-priority open set keyed by `g + h`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::{SearchState, StateId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    priority: u32,
    estimate: u32,
    id: StateId,
}

// BinaryHeap is a max-heap; invert so the smallest key pops first.
// Ties: lower estimate, then earlier insertion.
impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.estimate.cmp(&self.estimate))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
}

impl OpenSet {
    pub(crate) fn push(&mut self, id: StateId, state: &SearchState) {
        self.heap.push(OpenEntry {
            priority: state.priority(),
            estimate: state.estimate(),
            id,
        });
    }

    pub(crate) fn pop_min(&mut self) -> Option<StateId> {
        self.heap.pop().map(|e| e.id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
