mod export;
mod provenance;
mod render;

use std::path::Path;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hanoi::api::{
    astar_search_with_cfg, moves_along, optimal_move_count, SearchCfg, SearchReport,
    SearchStatus,
};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hanoi-cli")]
#[command(about = "Solve the Tower of Hanoi with A* and print or export the path")]
struct Cmd {
    /// Log search start/finish events (debug level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve and print every state of the solution path
    Solve {
        #[arg(long, default_value_t = 3)]
        discs: usize,
        /// Stop after this many expansions
        #[arg(long)]
        max_expansions: Option<usize>,
        /// Only log the summary, do not print the path
        #[arg(long)]
        quiet: bool,
    },
    /// Solve and write the path (.csv, .parquet, or JSON) plus a provenance sidecar
    Export {
        #[arg(long, default_value_t = 3)]
        discs: usize,
        #[arg(long)]
        max_expansions: Option<usize>,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Solve {
            discs,
            max_expansions,
            quiet,
        } => solve(discs, max_expansions, quiet),
        Action::Export {
            discs,
            max_expansions,
            out,
        } => export_path(discs, max_expansions, out),
        Action::Report => report(),
    }
}

fn run_search(discs: usize, max_expansions: Option<usize>) -> Result<SearchReport> {
    let report = astar_search_with_cfg(discs, SearchCfg { max_expansions })?;
    let s = report.stats;
    tracing::info!(
        discs,
        status = ?report.status,
        moves = ?report.move_count(),
        optimal = ?optimal_move_count(discs),
        expanded = s.expanded,
        inserted = s.inserted,
        max_open = s.max_open,
        "search"
    );
    match report.status {
        SearchStatus::Succeeded | SearchStatus::Exhausted => Ok(report),
        SearchStatus::BudgetExceeded => bail!(
            "expansion budget of {} reached before the goal",
            max_expansions.unwrap_or_default()
        ),
    }
}

fn solve(discs: usize, max_expansions: Option<usize>, quiet: bool) -> Result<()> {
    let report = run_search(discs, max_expansions)?;
    let Some(path) = report.path else {
        println!("no solution found for {discs} discs");
        return Ok(());
    };
    if quiet {
        return Ok(());
    }
    let Some(moves) = moves_along(&path) else {
        bail!("solution path contains an illegal step");
    };
    for (i, state) in path.iter().enumerate() {
        let mv = i.checked_sub(1).map(|k| moves[k]);
        print!("{}", render::render_step(i, state, mv));
    }
    println!("solved {discs} discs in {} moves", moves.len());
    Ok(())
}

fn export_path(discs: usize, max_expansions: Option<usize>, out: String) -> Result<()> {
    tracing::info!(discs, out, "export");
    let report = run_search(discs, max_expansions)?;
    let rows = match &report.path {
        Some(path) => export::rows_from_path(path)?,
        None => Vec::new(),
    };
    let format = export::write_rows(&rows, Path::new(&out))?;
    let params = serde_json::json!({
        "discs": discs,
        "max_expansions": max_expansions,
        "format": format!("{format:?}").to_lowercase(),
    });
    let summary = serde_json::json!({
        "status": format!("{:?}", report.status),
        "moves": report.move_count(),
        "expanded": report.stats.expanded,
        "generated": report.stats.generated,
        "inserted": report.stats.inserted,
        "reopened": report.stats.reopened,
        "max_open": report.stats.max_open,
    });
    let sidecar =
        provenance::write_sidecar(&out, provenance::Payload::new(params).with_summary(summary))?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "solver_version": hanoi::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
