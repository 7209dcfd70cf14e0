//! A* runner: seed, pop-min, goal test, expand, filter through the visited-cost table.

use std::collections::HashMap;

use crate::error::SearchError;
use crate::moves::successors;
use crate::state::{PegAssignment, SearchState, StateId};

use super::open_set::OpenSet;
use super::path::reconstruct_path;
use super::types::{SearchCfg, SearchReport, SearchStats, SearchStatus};

/// Solve the `discs`-disc puzzle with default settings.
///
/// Returns `Ok(Some(path))` on success and `Ok(None)` if the open set drains
/// without reaching the goal. A disc count of zero (or above `MAX_DISCS`) is an
/// input error.
pub fn astar_search(discs: usize) -> Result<Option<Vec<SearchState>>, SearchError> {
    Ok(astar_search_with_cfg(discs, SearchCfg::default())?.path)
}

/// Solve with explicit configuration and return status and counters alongside the path.
pub fn astar_search_with_cfg(discs: usize, cfg: SearchCfg) -> Result<SearchReport, SearchError> {
    SearchError::check_disc_count(discs)?;
    let span = tracing::debug_span!("astar", discs);
    let _guard = span.enter();
    Ok(AStarRunner::new(PegAssignment::initial(discs), cfg).run())
}

/// Children of `parent` (stored at `parent_id`), one per legal move.
///
/// Each child costs one more than its parent and carries a fresh estimate.
/// No deduplication happens here.
pub fn expand(parent_id: StateId, parent: &SearchState) -> Vec<SearchState> {
    successors(parent.assignment())
        .into_iter()
        .map(|next| SearchState::child(next, parent_id, parent))
        .collect()
}

/// A* runner owning the arena, open set, and visited-cost table of one run.
struct AStarRunner {
    cfg: SearchCfg,
    arena: Vec<SearchState>,
    open: OpenSet,
    best_cost: HashMap<PegAssignment, u32>,
    stats: SearchStats,
}

impl AStarRunner {
    fn new(start: PegAssignment, cfg: SearchCfg) -> Self {
        let mut runner = Self {
            cfg,
            arena: Vec::new(),
            open: OpenSet::default(),
            best_cost: HashMap::new(),
            stats: SearchStats::default(),
        };
        runner.schedule(SearchState::root(start));
        runner
    }

    /// Record the state's cost, store it, and push it onto the open set.
    fn schedule(&mut self, state: SearchState) {
        self.best_cost
            .insert(state.assignment().clone(), state.cost_so_far());
        let id = StateId(self.arena.len());
        self.open.push(id, &state);
        self.arena.push(state);
        self.stats.inserted += 1;
        self.stats.max_open = self.stats.max_open.max(self.open.len());
    }

    fn run(mut self) -> SearchReport {
        tracing::debug!(
            estimate = self.arena[0].estimate(),
            max_expansions = ?self.cfg.max_expansions,
            "astar_start"
        );
        while let Some(id) = self.open.pop_min() {
            let current = &self.arena[id.0];
            if self.is_stale(current) {
                self.stats.stale_skipped += 1;
                continue;
            }
            if current.is_goal() {
                let path = reconstruct_path(&self.arena, id);
                tracing::debug!(
                    moves = path.len() - 1,
                    expanded = self.stats.expanded,
                    inserted = self.stats.inserted,
                    "astar_succeeded"
                );
                return self.finish(SearchStatus::Succeeded, Some(path));
            }
            if let Some(cap) = self.cfg.max_expansions {
                if self.stats.expanded >= cap {
                    tracing::warn!(cap, "astar expansion budget exhausted");
                    return self.finish(SearchStatus::BudgetExceeded, None);
                }
            }
            self.expand_and_schedule(id);
        }
        tracing::debug!(expanded = self.stats.expanded, "astar_exhausted");
        self.finish(SearchStatus::Exhausted, None)
    }

    /// A heap entry whose configuration was since scheduled at a lower cost.
    fn is_stale(&self, state: &SearchState) -> bool {
        self.best_cost
            .get(state.assignment())
            .is_some_and(|&best| state.cost_so_far() > best)
    }

    fn expand_and_schedule(&mut self, id: StateId) {
        let children = expand(id, &self.arena[id.0]);
        self.stats.expanded += 1;
        self.stats.generated += children.len();
        tracing::trace!(
            state = %self.arena[id.0].assignment(),
            cost = self.arena[id.0].cost_so_far(),
            children = children.len(),
            "expand"
        );
        for child in children {
            debug_assert_eq!(child.cost_so_far(), self.arena[id.0].cost_so_far() + 1);
            match self.best_cost.get(child.assignment()).copied() {
                None => self.schedule(child),
                Some(best) if child.cost_so_far() < best => {
                    self.stats.reopened += 1;
                    self.schedule(child);
                }
                Some(_) => {}
            }
        }
    }

    fn finish(self, status: SearchStatus, path: Option<Vec<SearchState>>) -> SearchReport {
        SearchReport {
            status,
            path,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
pub(super) fn run_from(start: PegAssignment, cfg: SearchCfg) -> SearchReport {
    AStarRunner::new(start, cfg).run()
}
