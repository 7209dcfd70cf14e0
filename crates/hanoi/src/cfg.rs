//! Fixed puzzle constants (internal).
//!
//! Policy
//! - The solver is specialised to the classic 3-peg puzzle moving everything
//!   from peg 0 to peg 2. These are constants, not knobs; runtime settings
//!   live in `astar::SearchCfg`.

/// Peg index type. Valid values are `0..PEG_COUNT`.
pub type Peg = u8;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;
/// Peg every disc starts on.
pub const SOURCE_PEG: Peg = 0;
/// Peg every disc must end on.
pub const GOAL_PEG: Peg = 2;
/// Largest disc count accepted by the search. Path costs are `u32` and the
/// optimal solution has `2^N - 1` moves, so anything above 31 cannot be costed.
pub const MAX_DISCS: usize = 31;
