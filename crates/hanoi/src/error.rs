//! Error type shared by the state model and the search entry points.

use std::fmt;

use crate::cfg::{Peg, MAX_DISCS, PEG_COUNT};

/// Input-validation failures. "No solution" is not an error; see
/// `astar::SearchStatus::Exhausted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Zero discs requested.
    InvalidDiscCount { discs: usize },
    /// More discs than `MAX_DISCS`.
    TooManyDiscs { discs: usize, max: usize },
    /// A peg assignment referenced a peg outside `0..PEG_COUNT`.
    InvalidPeg { disc: usize, peg: Peg },
}

impl SearchError {
    pub(crate) fn check_disc_count(discs: usize) -> Result<(), Self> {
        if discs == 0 {
            return Err(Self::InvalidDiscCount { discs });
        }
        if discs > MAX_DISCS {
            return Err(Self::TooManyDiscs {
                discs,
                max: MAX_DISCS,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDiscCount { discs } => {
                write!(f, "disc count must be at least 1 (got {discs})")
            }
            Self::TooManyDiscs { discs, max } => {
                write!(f, "disc count {discs} exceeds the supported maximum of {max}")
            }
            Self::InvalidPeg { disc, peg } => write!(
                f,
                "disc {disc} is assigned to peg {peg}, expected a peg in 0..{PEG_COUNT}"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
