//! Solves a sudoku grid supplied on the command line.
//!
//! The grid is an 81-character string in row-major order, with `0` or
//! `.` marking empty cells:
//!
//! ```sh
//! cargo run --example solve_grid -- \
//!     "009016042104209060020008700350090100067401905000750086090004857800960020470805000"
//! ```
//!
//! Killer cages can be supplied as a JSON file holding an array of
//! `{"target": ..., "cells": [{"row": ..., "col": ...}, ...]}` records:
//!
//! ```sh
//! cargo run --example solve_grid -- --cages cages.json "000...000"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use gridlock_core::{DIMENSION, KillerCage, TOTAL_CELLS};
use gridlock_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file describing killer cages.
    #[arg(long, value_name = "FILE")]
    cages: Option<PathBuf>,

    /// 81 cells in row-major order; `0` or `.` marks an empty cell.
    grid: String,
}

fn parse_grid(input: &str) -> Result<Vec<Vec<i32>>, String> {
    let cells = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '.' => Ok(0),
            _ => c
                .to_digit(10)
                .map(|digit| i32::try_from(digit).expect("digit fits in i32"))
                .ok_or_else(|| format!("invalid cell character: {c:?}")),
        })
        .collect::<Result<Vec<i32>, String>>()?;
    if cells.len() != TOTAL_CELLS {
        return Err(format!("expected {TOTAL_CELLS} cells; found {}", cells.len()));
    }
    Ok(cells.chunks(DIMENSION).map(<[i32]>::to_vec).collect())
}

fn load_cages(path: &Path) -> Result<Vec<KillerCage>, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("reading {}: {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("parsing {}: {err}", path.display()))
}

fn render(grid: &[Vec<i32>]) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn run(args: &Args) -> Result<String, String> {
    let grid = parse_grid(&args.grid)?;
    let cages = match &args.cages {
        Some(path) => load_cages(path)?,
        None => Vec::new(),
    };
    let mut solver = Solver::with_cages(&grid, &cages).map_err(|err| err.to_string())?;
    let solution = solver.solve().map_err(|err| err.to_string())?;
    Ok(render(&solution))
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(solution) => println!("{solution}"),
        Err(message) => {
            eprintln!("error: {message}");
            process::exit(1);
        }
    }
}
