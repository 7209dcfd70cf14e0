//! Puzzle configurations and search-state records.
//!
//! Purpose
//! - `PegAssignment` is the identity of a configuration: one peg per disc,
//!   indexed by disc (0 = smallest).
//! - `SearchState` wraps an assignment with the bookkeeping A* needs (cost so
//!   far, heuristic estimate, parent link). Identity stays with the
//!   assignment, so the visited-cost table unifies states reached by
//!   different routes.
//!
//! Parent links are `StateId`s into the arena owned by one search run; a
//! state never points forward and is never mutated after construction.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cfg::{Peg, GOAL_PEG, PEG_COUNT, SOURCE_PEG};
use crate::error::SearchError;
use crate::heuristic::estimate;

/// Index of a `SearchState` inside the arena of one search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub usize);

/// Peg of every disc, indexed by disc number.
///
/// Invariants:
/// - Every value is in `0..PEG_COUNT`.
/// - Length is fixed for the lifetime of a search run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PegAssignment {
    pegs: Vec<Peg>,
}

impl PegAssignment {
    /// All `discs` discs stacked on `peg`.
    pub fn all_on(discs: usize, peg: Peg) -> Self {
        assert!((peg as usize) < PEG_COUNT, "peg {peg} out of range");
        Self {
            pegs: vec![peg; discs],
        }
    }

    /// Start configuration: everything on the source peg.
    pub fn initial(discs: usize) -> Self {
        Self::all_on(discs, SOURCE_PEG)
    }

    /// Goal configuration: everything on the goal peg.
    pub fn goal(discs: usize) -> Self {
        Self::all_on(discs, GOAL_PEG)
    }

    /// Validate an explicit per-disc peg vector.
    pub fn from_pegs(pegs: Vec<Peg>) -> Result<Self, SearchError> {
        if let Some((disc, &peg)) = pegs
            .iter()
            .enumerate()
            .find(|(_, peg)| **peg as usize >= PEG_COUNT)
        {
            return Err(SearchError::InvalidPeg { disc, peg });
        }
        Ok(Self { pegs })
    }

    #[inline]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    #[inline]
    pub fn disc_count(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    pub fn peg_of(&self, disc: usize) -> Peg {
        self.pegs[disc]
    }

    /// Goal test: every disc on the goal peg.
    pub fn is_goal(&self) -> bool {
        self.pegs.iter().all(|&p| p == GOAL_PEG)
    }

    /// Smallest disc on each peg (the only one that may move), `None` for empty pegs.
    pub fn topmost_discs(&self) -> [Option<usize>; PEG_COUNT] {
        let mut tops = [None; PEG_COUNT];
        for (disc, &peg) in self.pegs.iter().enumerate() {
            let slot = &mut tops[peg as usize];
            if slot.is_none() {
                *slot = Some(disc);
            }
        }
        tops
    }

    #[inline]
    pub fn topmost(&self, peg: Peg) -> Option<usize> {
        self.topmost_discs()[peg as usize]
    }

    /// Discs on each peg from bottom (largest) to top (smallest), for renderers.
    pub fn stacks(&self) -> [Vec<usize>; PEG_COUNT] {
        let mut stacks: [Vec<usize>; PEG_COUNT] = Default::default();
        for (disc, &peg) in self.pegs.iter().enumerate().rev() {
            stacks[peg as usize].push(disc);
        }
        stacks
    }

    /// Copy with `disc` relocated to `to`. Legality is the caller's concern.
    pub(crate) fn with_disc_on(&self, disc: usize, to: Peg) -> Self {
        debug_assert!((to as usize) < PEG_COUNT);
        let mut pegs = self.pegs.clone();
        pegs[disc] = to;
        Self { pegs }
    }
}

impl fmt::Display for PegAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, peg) in self.pegs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{peg}")?;
        }
        f.write_str("]")
    }
}

/// One node of the search: a configuration plus how it was reached.
///
/// Equality and hashing look at the assignment only.
#[derive(Clone, Debug)]
pub struct SearchState {
    assignment: PegAssignment,
    cost_so_far: u32,
    estimate: u32,
    parent: Option<StateId>,
}

impl SearchState {
    /// Root of a search run (cost 0, no parent).
    pub fn root(assignment: PegAssignment) -> Self {
        let estimate = estimate(&assignment);
        Self {
            assignment,
            cost_so_far: 0,
            estimate,
            parent: None,
        }
    }

    /// State one move after `parent` (stored at `parent_id`).
    pub fn child(assignment: PegAssignment, parent_id: StateId, parent: &SearchState) -> Self {
        let estimate = estimate(&assignment);
        Self {
            assignment,
            cost_so_far: parent.cost_so_far + 1,
            estimate,
            parent: Some(parent_id),
        }
    }

    #[inline]
    pub fn assignment(&self) -> &PegAssignment {
        &self.assignment
    }

    #[inline]
    pub fn cost_so_far(&self) -> u32 {
        self.cost_so_far
    }

    #[inline]
    pub fn estimate(&self) -> u32 {
        self.estimate
    }

    /// A* selection key `f = g + h`.
    #[inline]
    pub fn priority(&self) -> u32 {
        self.cost_so_far + self.estimate
    }

    #[inline]
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.assignment.is_goal()
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.assignment == other.assignment
    }
}

impl Eq for SearchState {}

impl Hash for SearchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.assignment.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equality_ignores_cost_estimate_and_parent() {
        let a = PegAssignment::from_pegs(vec![1, 2, 0]).unwrap();
        let root = SearchState::root(a.clone());
        let other_parent = SearchState::root(PegAssignment::initial(3));
        let via_child = SearchState::child(a.clone(), StateId(17), &other_parent);
        assert_ne!(root.cost_so_far(), via_child.cost_so_far());
        assert_ne!(root.parent(), via_child.parent());
        assert_eq!(root, via_child);
        assert_eq!(hash_of(&root), hash_of(&via_child));

        let mut set = HashSet::new();
        set.insert(root);
        assert!(!set.insert(via_child));
    }

    #[test]
    fn different_assignments_are_distinct() {
        let a = SearchState::root(PegAssignment::from_pegs(vec![0, 1]).unwrap());
        let b = SearchState::root(PegAssignment::from_pegs(vec![1, 0]).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn from_pegs_rejects_out_of_range() {
        assert_eq!(
            PegAssignment::from_pegs(vec![0, 3, 1]),
            Err(SearchError::InvalidPeg { disc: 1, peg: 3 })
        );
    }

    #[test]
    fn topmost_is_smallest_index_per_peg() {
        let a = PegAssignment::from_pegs(vec![2, 0, 2, 0]).unwrap();
        assert_eq!(a.topmost_discs(), [Some(1), None, Some(0)]);
        assert_eq!(a.topmost(1), None);
    }

    #[test]
    fn stacks_run_bottom_to_top() {
        let a = PegAssignment::from_pegs(vec![2, 0, 2, 0]).unwrap();
        let [p0, p1, p2] = a.stacks();
        assert_eq!(p0, vec![3, 1]);
        assert!(p1.is_empty());
        assert_eq!(p2, vec![2, 0]);
    }

    #[test]
    fn goal_and_priority() {
        let start = SearchState::root(PegAssignment::initial(3));
        assert!(!start.is_goal());
        assert_eq!(start.cost_so_far(), 0);
        assert_eq!(start.estimate(), 6);
        assert_eq!(start.priority(), 6);
        assert!(PegAssignment::goal(3).is_goal());
        assert_eq!(PegAssignment::goal(2).to_string(), "[2 2]");
    }

    #[test]
    fn child_cost_is_parent_plus_one() {
        let parent = SearchState::root(PegAssignment::initial(2));
        let next = parent.assignment().with_disc_on(0, 2);
        let child = SearchState::child(next, StateId(0), &parent);
        assert_eq!(child.cost_so_far(), 1);
        assert_eq!(child.estimate(), 2);
        assert_eq!(child.parent(), Some(StateId(0)));
    }
}
