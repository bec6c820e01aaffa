//! Best-move command - query the minimax engine for a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    tictactoe::{self, GameBoard, GameStatus, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal tic-tac-toe move for a position")]
pub struct BestMoveArgs {
    /// Board as 9 characters of 'X', 'O' and '.', e.g. "XO...X..."
    #[arg(long, short = 'b')]
    pub board: String,

    /// Which player the engine moves for (`x` or `o`)
    #[arg(long, short = 'p', default_value = "o")]
    pub player: String,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = GameBoard::from_string(&args.board)?;
    let player = Player::from_str_token(&args.player)?;

    output::print_section("Tic-Tac-Toe");
    println!("{board}\n");

    match board.status() {
        GameStatus::Win(winner) => {
            println!("Position is already decided: {winner:?} has won.");
            return Ok(());
        }
        GameStatus::Draw => {
            println!("Position is a draw; no moves left.");
            return Ok(());
        }
        GameStatus::Ongoing => {}
    }

    match tictactoe::best_move(&board, player) {
        Some(pos) => {
            output::print_kv("Player", &format!("{player:?}"));
            output::print_kv(
                "Best move",
                &format!("position {pos} (row {}, col {})", pos / 3, pos % 3),
            );
        }
        None => println!("No move available."),
    }

    Ok(())
}
