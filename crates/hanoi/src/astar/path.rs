//! Backward-pointer path reconstruction.

use crate::state::{SearchState, StateId};

/// Walk `parent` links from `terminal` to the root and return the states in
/// forward order (root first).
///
/// Panics if a link points outside `arena` or the chain is longer than the
/// arena (a cycle); both mean the arena was built incorrectly.
pub fn reconstruct_path(arena: &[SearchState], terminal: StateId) -> Vec<SearchState> {
    let mut path = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(id) = cursor {
        assert!(
            path.len() < arena.len(),
            "parent chain from {terminal:?} does not terminate"
        );
        let state = &arena[id.0];
        path.push(state.clone());
        cursor = state.parent();
    }
    path.reverse();
    path
}
