//! A* search over Tower-of-Hanoi configurations.
//!
//! Purpose
//! - Find a shortest move sequence from "all discs on peg 0" to "all discs on
//!   peg 2", returning the forward path of `SearchState`s.
//!
//! Why this design
//! - States live in an arena for the duration of one run; parents are arena
//!   indices, so reconstruction is a walk over `StateId`s and no state is ever
//!   mutated.
//! - The open set is a binary heap (min by `g + h`); stale heap entries left
//!   behind by a cheaper rediscovery are skipped on pop, which is observably
//!   the same as a linear min-scan with decrease-key.
//! - The visited-cost table keeps the lowest cost at which each configuration
//!   was scheduled and suppresses re-insertion at equal or worse cost.
//!
//! Layout: `types.rs` (config, outcome, stats), `open_set.rs` (priority
//! queue), `search.rs` (runner and expansion), `path.rs` (reconstruction).

mod open_set;
mod path;
mod search;
mod types;

pub use path::reconstruct_path;
pub use search::{astar_search, astar_search_with_cfg, expand};
pub use types::{SearchCfg, SearchReport, SearchStats, SearchStatus};
