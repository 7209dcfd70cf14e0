//! Solution-path export (CSV / Parquet via polars, JSON via serde).

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use hanoi::api::{moves_along, SearchState};
use polars::prelude::*;
use serde::Serialize;

/// One row per path state. The move columns describe how the row was reached
/// and are empty for the initial state.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct StepRow {
    pub step: u32,
    pub cost: u32,
    pub estimate: u32,
    pub priority: u32,
    pub pegs: String,
    pub disc: Option<u32>,
    pub from: Option<u32>,
    pub to: Option<u32>,
}

/// Output encoding, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Parquet,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Format::Csv,
            Some("parquet") => Format::Parquet,
            _ => Format::Json,
        }
    }
}

pub fn rows_from_path(path: &[SearchState]) -> Result<Vec<StepRow>> {
    let moves = moves_along(path).context("solution path contains an illegal step")?;
    let rows = path
        .iter()
        .enumerate()
        .map(|(i, state)| {
            let mv = i.checked_sub(1).map(|k| moves[k]);
            StepRow {
                step: i as u32,
                cost: state.cost_so_far(),
                estimate: state.estimate(),
                priority: state.priority(),
                pegs: state.assignment().to_string(),
                disc: mv.map(|m| m.disc as u32),
                from: mv.map(|m| u32::from(m.from)),
                to: mv.map(|m| u32::from(m.to)),
            }
        })
        .collect();
    Ok(rows)
}

fn to_frame(rows: &[StepRow]) -> Result<DataFrame> {
    let df = polars::df!(
        "step" => rows.iter().map(|r| r.step).collect::<Vec<_>>(),
        "cost" => rows.iter().map(|r| r.cost).collect::<Vec<_>>(),
        "estimate" => rows.iter().map(|r| r.estimate).collect::<Vec<_>>(),
        "priority" => rows.iter().map(|r| r.priority).collect::<Vec<_>>(),
        "pegs" => rows.iter().map(|r| r.pegs.clone()).collect::<Vec<_>>(),
        "disc" => rows.iter().map(|r| r.disc).collect::<Vec<_>>(),
        "from" => rows.iter().map(|r| r.from).collect::<Vec<_>>(),
        "to" => rows.iter().map(|r| r.to).collect::<Vec<_>>()
    )?;
    Ok(df)
}

/// Write `rows` to `out` in the format implied by its extension.
pub fn write_rows(rows: &[StepRow], out: &Path) -> Result<Format> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let format = Format::from_path(out);
    match format {
        Format::Json => {
            std::fs::write(out, serde_json::to_vec_pretty(rows)?)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Format::Csv => {
            let mut df = to_frame(rows)?;
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
        Format::Parquet => {
            let mut df = to_frame(rows)?;
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }
    Ok(format)
}
