//! Puzzle Solver
//!
//! Runs two exhaustive searches over fixed puzzle instances: a teleporter
//! maze that must be traced through every dot from start to end, and a
//! tiling puzzle where four pieces must form a symmetrical pattern on a 5x5
//! board. Every solution found is printed.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use puzzlebox::{maze, pieces, puzzles, PuzzleOps};

/// Solves the teleporter maze and the symmetry tiling puzzle.
#[derive(Parser)]
#[command(name = "puzzlebox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print at most this many solutions per puzzle.
    #[arg(short = 'n', long, global = true)]
    max_solutions: Option<usize>,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the teleporter maze.
    Maze,
    /// Solve the symmetry tiling puzzle.
    Symmetry,
    /// Show the number of solutions of each puzzle.
    Count,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Maze) => run_solver(&maze::MAZE_PUZZLE, cli.max_solutions),
        Some(Command::Symmetry) => run_solver(&pieces::SYMMETRY_PUZZLE, cli.max_solutions),
        Some(Command::Count) => run_count(),
        None => {
            // default: solve everything
            for puzzle in puzzles() {
                run_solver(puzzle, cli.max_solutions)?;
            }
            Ok(())
        }
    }
}

/// Sets up `env_logger`, letting `RUST_LOG` override the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Solves one puzzle and prints its solutions.
fn run_solver(puzzle: &dyn PuzzleOps, max_solutions: Option<usize>) -> anyhow::Result<()> {
    let output = puzzle
        .format_solutions(max_solutions)
        .with_context(|| format!("failed to build the {} puzzle", puzzle.name()))?;
    print!("{output}");
    Ok(())
}

/// Prints the solution count of every puzzle.
fn run_count() -> anyhow::Result<()> {
    for puzzle in puzzles() {
        let count = puzzle
            .count_solutions()
            .with_context(|| format!("failed to build the {} puzzle", puzzle.name()))?;
        println!("{}: {} solutions", puzzle.name(), count);
    }
    Ok(())
}
