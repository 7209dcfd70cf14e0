//! A* solver for the 3-peg Tower of Hanoi.
//!
//! Layers, leaves first:
//! - `state`: `PegAssignment` (identity) and `SearchState` (cost, estimate, parent).
//! - `moves`: legal-move enumeration, typed `Move`s, optimal move count.
//! - `heuristic`: per-disc distance to the goal peg.
//! - `astar`: the search runner, expansion, and path reconstruction.
//!
//! API Policy
//! - The crate is small and internal to this workspace; `api` is the curated
//!   surface the CLI and benches import from.

pub mod api;
pub mod astar;
pub mod cfg;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod state;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use astar::{astar_search, astar_search_with_cfg, SearchCfg, SearchReport, SearchStatus};
pub use error::SearchError;
pub use state::{PegAssignment, SearchState, StateId};
