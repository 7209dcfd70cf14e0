//! Configuration and outcome types for the A* runner.

use crate::state::SearchState;

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    /// Optional cap on node expansions. `None` (the default) runs to completion;
    /// the state space is finite so termination is guaranteed either way.
    pub max_expansions: Option<usize>,
}

/// Terminal status of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Goal reached; `SearchReport::path` is populated.
    Succeeded,
    /// Open set drained without reaching the goal.
    Exhausted,
    /// `SearchCfg::max_expansions` hit before either of the above.
    BudgetExceeded,
}

/// Counters collected during one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded (the goal pop is not counted).
    pub expanded: usize,
    /// Successor states produced by expansion, before filtering.
    pub generated: usize,
    /// States pushed onto the open set, including the root.
    pub inserted: usize,
    /// Insertions of an already-recorded configuration at a strictly lower cost.
    pub reopened: usize,
    /// Heap entries superseded by a cheaper rediscovery and skipped on pop.
    pub stale_skipped: usize,
    /// Peak open-set size.
    pub max_open: usize,
}

/// Full result of `astar_search_with_cfg`.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub status: SearchStatus,
    /// Forward path from the initial state to the goal; `None` unless `Succeeded`.
    pub path: Option<Vec<SearchState>>,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Number of moves in the solution, if any.
    pub fn move_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}
