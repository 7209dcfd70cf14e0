//! Legal-move enumeration and typed moves.
//!
//! Rule: the topmost (smallest-indexed) disc of an origin peg may move onto a
//! destination peg that is empty or whose topmost disc has a larger index.
//! Topmost detection uses disc indices only; there is no explicit stack.

use crate::cfg::{Peg, PEG_COUNT};
use crate::state::{PegAssignment, SearchState};

/// A single-disc move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub disc: usize,
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    /// The move turning `before` into `after`, if they are exactly one legal move apart.
    pub fn between(before: &PegAssignment, after: &PegAssignment) -> Option<Move> {
        if before.disc_count() != after.disc_count() {
            return None;
        }
        let mut changed = before
            .pegs()
            .iter()
            .zip(after.pegs())
            .enumerate()
            .filter(|(_, (a, b))| a != b);
        let (disc, (&from, &to)) = changed.next()?;
        if changed.next().is_some() {
            return None;
        }
        let mv = Move { disc, from, to };
        mv.is_legal_in(before).then_some(mv)
    }

    /// Check the move against the topmost discs of `assignment`.
    pub fn is_legal_in(&self, assignment: &PegAssignment) -> bool {
        if self.from == self.to
            || self.from as usize >= PEG_COUNT
            || self.to as usize >= PEG_COUNT
        {
            return false;
        }
        let tops = assignment.topmost_discs();
        if tops[self.from as usize] != Some(self.disc) {
            return false;
        }
        match tops[self.to as usize] {
            None => true,
            Some(top) => top > self.disc,
        }
    }
}

/// All legal moves from `assignment`, ordered by (origin, destination).
pub fn legal_moves(assignment: &PegAssignment) -> Vec<Move> {
    let tops = assignment.topmost_discs();
    let mut out = Vec::with_capacity(PEG_COUNT);
    for (from, top_from) in tops.iter().enumerate() {
        let Some(disc) = *top_from else {
            continue;
        };
        for (to, top_to) in tops.iter().enumerate() {
            if to == from {
                continue;
            }
            let legal = match *top_to {
                None => true,
                Some(top) => top > disc,
            };
            if legal {
                out.push(Move {
                    disc,
                    from: from as Peg,
                    to: to as Peg,
                });
            }
        }
    }
    out
}

/// Configurations reachable from `assignment` by exactly one legal move.
/// Empty when nothing can move (e.g. no discs at all).
pub fn successors(assignment: &PegAssignment) -> Vec<PegAssignment> {
    legal_moves(assignment)
        .into_iter()
        .map(|mv| assignment.with_disc_on(mv.disc, mv.to))
        .collect()
}

/// Moves taken along a forward-ordered path. `None` if two consecutive states
/// are not one legal move apart.
pub fn moves_along(path: &[SearchState]) -> Option<Vec<Move>> {
    path.windows(2)
        .map(|w| Move::between(w[0].assignment(), w[1].assignment()))
        .collect()
}

/// Proven optimum for the 3-peg puzzle: `2^discs - 1`. `None` on overflow.
pub fn optimal_move_count(discs: usize) -> Option<u64> {
    let shift = u32::try_from(discs).ok()?;
    1u64.checked_shl(shift).map(|p| p - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pegs(v: &[Peg]) -> PegAssignment {
        PegAssignment::from_pegs(v.to_vec()).unwrap()
    }

    #[test]
    fn start_position_has_two_moves() {
        let mv = legal_moves(&PegAssignment::initial(3));
        assert_eq!(
            mv,
            vec![
                Move { disc: 0, from: 0, to: 1 },
                Move { disc: 0, from: 0, to: 2 },
            ]
        );
    }

    #[test]
    fn generic_position_has_three_moves() {
        // peg0: [2,1], peg1: [], peg2: [0]
        let a = pegs(&[2, 0, 0]);
        let next = successors(&a);
        assert_eq!(next.len(), 3);
        assert!(next.contains(&pegs(&[2, 1, 0])));
        assert!(next.contains(&pegs(&[0, 0, 0])));
        assert!(next.contains(&pegs(&[1, 0, 0])));
    }

    #[test]
    fn larger_disc_never_lands_on_smaller() {
        // peg0: [1], peg2: [0] -> disc 1 may only go to peg 1.
        let a = pegs(&[2, 0]);
        let moves = legal_moves(&a);
        assert!(moves.contains(&Move { disc: 1, from: 0, to: 1 }));
        assert!(!moves.contains(&Move { disc: 1, from: 0, to: 2 }));
    }

    #[test]
    fn empty_assignment_has_no_successors() {
        assert!(successors(&PegAssignment::initial(0)).is_empty());
    }

    #[test]
    fn between_detects_illegal_and_multi_moves() {
        let a = pegs(&[0, 0]);
        assert_eq!(
            Move::between(&a, &pegs(&[2, 0])),
            Some(Move { disc: 0, from: 0, to: 2 })
        );
        // disc 1 is covered by disc 0
        assert_eq!(Move::between(&a, &pegs(&[0, 1])), None);
        assert_eq!(Move::between(&a, &pegs(&[1, 1])), None);
        assert_eq!(Move::between(&a, &a), None);
        assert_eq!(Move::between(&a, &pegs(&[0, 0, 0])), None);
    }

    #[test]
    fn optimal_counts() {
        assert_eq!(optimal_move_count(1), Some(1));
        assert_eq!(optimal_move_count(3), Some(7));
        assert_eq!(optimal_move_count(63), Some(u64::MAX >> 1));
        assert_eq!(optimal_move_count(64), None);
    }

    proptest! {
        #[test]
        fn successors_differ_in_one_legal_position(v in prop::collection::vec(0u8..3, 1..12)) {
            let a = PegAssignment::from_pegs(v).unwrap();
            let tops = a.topmost_discs();
            for s in successors(&a) {
                let diffs: Vec<usize> = (0..a.disc_count())
                    .filter(|&d| a.peg_of(d) != s.peg_of(d))
                    .collect();
                prop_assert_eq!(diffs.len(), 1);
                let disc = diffs[0];
                prop_assert_eq!(tops[a.peg_of(disc) as usize], Some(disc));
                match tops[s.peg_of(disc) as usize] {
                    None => {}
                    Some(top) => prop_assert!(top > disc),
                }
                prop_assert!(Move::between(&a, &s).is_some());
            }
        }

        #[test]
        fn every_nonempty_position_can_move(v in prop::collection::vec(0u8..3, 1..12)) {
            let a = PegAssignment::from_pegs(v).unwrap();
            let n = successors(&a).len();
            // Smallest disc always has two moves; a third exists unless all discs share a peg.
            prop_assert!(n == 2 || n == 3);
        }
    }
}
