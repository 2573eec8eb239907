use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use caves::{CaveSystem, END_CAVE, START_CAVE};
use paths::{count_paths, RevisitPolicy};

mod caves;
mod error;
mod paths;

#[derive(Parser, Debug)]
#[command(name = "day12")]
#[command(about = "Counts the paths through a cave system from start to end")]
struct Args {
    /// Edge list, one `a-b` connection per line
    #[arg(default_value = "input")]
    input_file: PathBuf,

    /// Only solve the given part (1 or 2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let caves = CaveSystem::load(&args.input_file)
        .with_context(|| format!("failed to load input from {}", args.input_file.display()))?;
    debug!(
        caves = caves.len(),
        big_caves = caves.caves().filter(|cave| cave.is_big()).count(),
        edges = caves.edge_count(),
        "loaded cave system"
    );

    if caves.is_empty() {
        warn!("input file contains no connections");
    }
    for name in [START_CAVE, END_CAVE] {
        if !caves.contains(name) {
            warn!(cave = name, "cave system has no {} cave, there are no paths", name);
        }
    }

    // if two large caves are connected to each other, then there's an infinite number of paths
    // since we can just loop between those two caves forever
    for (first, second) in caves.connected_big_caves() {
        warn!(first, second, "big caves are directly connected, the search will not terminate");
    }

    if args.part.map_or(true, |part| part == 1) {
        let result = solve_part1(&caves);
        println!("number of paths part 1: {}", result);
    }
    if args.part.map_or(true, |part| part == 2) {
        let result = solve_part2(&caves);
        println!("number of paths part 2: {}", result);
    }

    Ok(())
}

fn solve_part1(caves: &CaveSystem) -> usize {
    let result = count_paths(caves, RevisitPolicy::NoRevisits);
    debug!(result, "counted paths without revisits");
    result
}

fn solve_part2(caves: &CaveSystem) -> usize {
    let result = count_paths(caves, RevisitPolicy::OneBonusRevisit);
    debug!(result, "counted paths with one small cave revisit");
    result
}
