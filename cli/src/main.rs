//! Galaxies solver CLI
//!
//! Reads a captured board, runs propagation to a fixpoint and prints the
//! resulting grid and verdict.

use anyhow::Context;
use clap::Parser;
use galaxies_core::{parse_board, render, Solver, SolverConfig, Verdict};
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "galaxies-solve")]
#[command(about = "Solve Galaxies puzzles by constraint propagation")]
struct Args {
    /// Board text file ("-" reads stdin)
    board: String,

    /// Upper bound on propagation passes (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_passes: usize,

    /// Emit the solve report as JSON instead of a rendered board
    #[arg(long)]
    json: bool,

    /// Suppress the rendered board, print only the verdict
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Args::parse()) {
        Ok(Verdict::Solved) => ExitCode::SUCCESS,
        Ok(Verdict::Stuck | Verdict::Cancelled) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<Verdict> {
    let text = if args.board == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading board from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.board)
            .with_context(|| format!("reading board from {}", args.board))?
    };

    let mut grid = parse_board(&text)?;
    let solver = Solver::new(SolverConfig {
        max_passes: args.max_passes,
        cancel: None,
    });
    let report = solver.solve(&mut grid)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !args.quiet {
            print!("{}", render(&grid));
        }
        println!("{:?} after {} passes", report.verdict, report.passes);
    }
    Ok(report.verdict)
}
