// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: print every subset of NUMBERS summing to TARGET.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use subset_sum::statistics::Counters;
use subset_sum::{Solver, SolverOptions, TableStorage};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Enumerate every subset of NUMBERS that sums exactly to TARGET.
#[derive(Parser, Debug)]
#[command(name = "subsetsum", version)]
struct Args {
    /// Sum every printed subset must reach
    #[arg(allow_negative_numbers = true)]
    target: i64,

    /// Values to choose from
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Reachability table layout (bits or bytes)
    #[arg(long, default_value_t = TableStorage::Bits)]
    storage: TableStorage,

    /// Keep values too large to take part in any solution
    #[arg(long)]
    no_trim: bool,

    /// Stop after this many solutions
    #[arg(long)]
    limit: Option<usize>,

    /// Print only the number of solutions
    #[arg(long)]
    count: bool,
}

fn write_values(out: &mut impl Write, values: &[i64]) -> io::Result<()> {
    let joined: Vec<String> = values.iter().map(i64::to_string).collect();
    if joined.is_empty() {
        write!(out, "[ ]")
    } else {
        write!(out, "[ {} ]", joined.join(", "))
    }
}

fn run(args: &Args, out: &mut impl Write) -> io::Result<()> {
    let options = SolverOptions::builder()
        .storage(args.storage)
        .trim_rows(!args.no_trim)
        .build();
    let mut solver = Solver::with_options(&args.numbers, args.target, options);
    debug!(
        scale = solver.scale(),
        table_bytes = solver.memory_size(),
        "solver ready"
    );
    if let Some(reason) = solver.infeasibility() {
        info!(%reason, "no solution");
    }

    if !args.count {
        writeln!(out, "target = {}", args.target)?;
        write_values(out, &args.numbers)?;
        writeln!(out)?;
        writeln!(out, "------")?;
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut found = 0usize;
    for indices in solver.solutions().take(limit) {
        found += 1;
        if args.count {
            continue;
        }
        let subset: Vec<i64> = indices.iter().map(|&i| args.numbers[i]).collect();
        let sum: i64 = subset.iter().sum();
        write_values(out, &subset)?;
        writeln!(out, " = {}", sum)?;
    }

    if args.count {
        writeln!(out, "{}", found)?;
    }

    let stats = solver.statistics();
    debug!(
        solutions = found,
        expanded = stats.get(Counters::StatesExpanded),
        pushed = stats.get(Counters::ChildrenPushed),
        peak_frontier = stats.peak_frontier(),
        "enumeration finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&args, &mut out).context("failed to write solutions")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
