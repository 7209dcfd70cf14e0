//! Plain-text rendering of path states (peg stacks plus g/h/f).

use std::fmt::Write as _;

use hanoi::api::{Move, SearchState};

/// One block per state: a header line and one line per peg, discs bottom to top.
pub fn render_step(step: usize, state: &SearchState, mv: Option<Move>) -> String {
    let mut out = format!(
        "step {step:>4}  g={} h={} f={}",
        state.cost_so_far(),
        state.estimate(),
        state.priority()
    );
    if let Some(mv) = mv {
        let _ = write!(out, "  (disc {} : {} -> {})", mv.disc, mv.from, mv.to);
    }
    out.push('\n');
    for (peg, stack) in state.assignment().stacks().iter().enumerate() {
        let discs: Vec<String> = stack.iter().map(|d| d.to_string()).collect();
        let _ = writeln!(out, "  peg {peg} | {}", discs.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi::api::{PegAssignment, StateId};

    #[test]
    fn renders_stacks_and_move() {
        let root = SearchState::root(PegAssignment::initial(2));
        let next = SearchState::child(
            PegAssignment::from_pegs(vec![2, 0]).unwrap(),
            StateId(0),
            &root,
        );
        let mv = Move {
            disc: 0,
            from: 0,
            to: 2,
        };
        let text = render_step(1, &next, Some(mv));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step    1  g=1 h=2 f=3  (disc 0 : 0 -> 2)");
        assert_eq!(lines[1], "  peg 0 | 1");
        assert_eq!(lines[2], "  peg 1 | ");
        assert_eq!(lines[3], "  peg 2 | 0");
    }
}
