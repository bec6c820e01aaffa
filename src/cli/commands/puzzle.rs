//! Puzzle command - solve an 8-puzzle board with A*

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::CommonConfig, output},
    puzzle::{self, PuzzleBoard, Solution},
};

#[derive(Parser, Debug)]
#[command(about = "Solve an 8-puzzle board optimally with A*")]
pub struct PuzzleArgs {
    /// Board to solve, e.g. "1,2,3,4,5,6,0,7,8" or "123456078".
    /// A random solvable board is generated when omitted.
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Random seed for reproducible board generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every board along the solution path
    #[arg(long)]
    pub show_path: bool,

    /// Export the solution to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Serialize)]
struct SolutionExport {
    start: [u8; 9],
    solvable: bool,
    moves: usize,
    expanded: usize,
    elapsed_seconds: f64,
    path: Option<Vec<[u8; 9]>>,
}

impl SolutionExport {
    fn new(start: &PuzzleBoard, solution: &Solution) -> Self {
        Self {
            start: *start.tiles(),
            solvable: start.is_solvable(),
            moves: solution.moves,
            expanded: solution.expanded,
            elapsed_seconds: solution.elapsed.as_secs_f64(),
            path: solution
                .path
                .as_ref()
                .map(|path| path.iter().map(|board| *board.tiles()).collect()),
        }
    }
}

pub fn execute(args: PuzzleArgs) -> Result<()> {
    let config = CommonConfig::new(args.seed, !args.no_progress);

    let board = match &args.board {
        Some(s) => PuzzleBoard::from_string(s)?,
        None => puzzle::solvable_board(&mut config.rng()),
    };

    output::print_section("8-Puzzle");
    println!("{board}");

    let spinner = config.progress.then(|| output::create_spinner("Searching..."));
    let solution = puzzle::solve(&board);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match &solution.path {
        Some(path) => {
            if args.show_path {
                for (step, state) in path.iter().enumerate() {
                    println!("\nStep {step}:");
                    println!("{state}");
                }
            }
            println!("\nSolved.");
            output::print_kv("Moves", &solution.moves.to_string());
        }
        None => {
            println!("\nNo solution: the board has odd inversion parity.");
        }
    }
    output::print_kv("Expanded", &solution.expanded.to_string());
    output::print_kv(
        "Time",
        &format!("{:.4}s", solution.elapsed.as_secs_f64()),
    );

    if let Some(path) = &args.export {
        let export = SolutionExport::new(&board, &solution);
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\nSolution exported to: {}", path.display());
    }

    Ok(())
}
