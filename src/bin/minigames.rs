//! minigames CLI - drive the A* puzzle solver and the tic-tac-toe engine
//!
//! This binary is the "UI layer" collaborator of the core library: it
//! parses arguments, renders boards as text, and calls the same four
//! operations any other driver would (generate, solve, best-move, place).

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minigames")]
#[command(version, about = "A* 8-puzzle solver and perfect tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an 8-puzzle board (random solvable board when none is given)
    Puzzle(minigames::cli::commands::puzzle::PuzzleArgs),

    /// Compute the optimal tic-tac-toe move for a position
    BestMove(minigames::cli::commands::best_move::BestMoveArgs),

    /// Play tic-tac-toe against the engine
    Play(minigames::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Puzzle(args) => minigames::cli::commands::puzzle::execute(args),
        Commands::BestMove(args) => minigames::cli::commands::best_move::execute(args),
        Commands::Play(args) => minigames::cli::commands::play::execute(args),
    }
}
