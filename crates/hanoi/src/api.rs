//! Curated internal API.
//!
//! - Convenience surface for the CLI, benches, and examples. Not a stability
//!   promise; re-exports move when the modules do.

// State model
pub use crate::cfg::{Peg, GOAL_PEG, MAX_DISCS, PEG_COUNT, SOURCE_PEG};
pub use crate::state::{PegAssignment, SearchState, StateId};
// Move rule and heuristic
pub use crate::heuristic::estimate;
pub use crate::moves::{legal_moves, moves_along, optimal_move_count, successors, Move};
// Search
pub use crate::astar::{
    astar_search, astar_search_with_cfg, expand, reconstruct_path, SearchCfg, SearchReport,
    SearchStats, SearchStatus,
};
pub use crate::error::SearchError;
