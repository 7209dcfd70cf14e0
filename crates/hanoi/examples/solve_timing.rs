//! Timing probe: how far does plain A* with the per-disc heuristic scale?
//!
//! Runs the solver for N = 1..=10 and prints move count, expansions, peak
//! open-set size, and wall time per run.

use std::time::Instant;

use hanoi::api::{astar_search_with_cfg, optimal_move_count, SearchCfg};

fn main() {
    for discs in 1..=10 {
        let start = Instant::now();
        let report =
            astar_search_with_cfg(discs, SearchCfg::default()).expect("disc count is valid");
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        let moves = report.move_count().expect("goal is reachable");
        assert_eq!(Some(moves as u64), optimal_move_count(discs));
        println!(
            "discs={discs} moves={moves} expanded={} max_open={} time_ms={elapsed_ms:.3}",
            report.stats.expanded, report.stats.max_open
        );
    }
}
