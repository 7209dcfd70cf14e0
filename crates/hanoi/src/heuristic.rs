//! Remaining-move estimate.
//!
//! Each disc contributes its distance to the goal peg, `GOAL_PEG - peg`
//! (0 when already there, 2 from the source peg). Purely local, no lookahead.

use crate::cfg::GOAL_PEG;
use crate::state::PegAssignment;

/// `Σ_disc (2 - peg(disc))`. Zero exactly on the goal configuration.
pub fn estimate(assignment: &PegAssignment) -> u32 {
    assignment
        .pegs()
        .iter()
        .map(|&peg| {
            assert!(peg <= GOAL_PEG, "peg {peg} out of range in assignment");
            u32::from(GOAL_PEG - peg)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(estimate(&PegAssignment::initial(4)), 8);
        assert_eq!(estimate(&PegAssignment::goal(4)), 0);
        let mixed = PegAssignment::from_pegs(vec![0, 1, 2, 1]).unwrap();
        assert_eq!(estimate(&mixed), 4);
    }

    proptest! {
        #[test]
        fn zero_iff_goal(pegs in prop::collection::vec(0u8..3, 1..16)) {
            let a = PegAssignment::from_pegs(pegs).unwrap();
            prop_assert_eq!(estimate(&a) == 0, a.is_goal());
        }

        #[test]
        fn bounded_by_twice_disc_count(pegs in prop::collection::vec(0u8..3, 1..16)) {
            let a = PegAssignment::from_pegs(pegs).unwrap();
            prop_assert!(estimate(&a) as usize <= 2 * a.disc_count());
        }
    }
}
