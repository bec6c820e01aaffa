//! Play command - interactive tic-tac-toe against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    tictactoe::{self, GameBoard, GameStatus, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play tic-tac-toe against the minimax engine")]
pub struct PlayArgs {
    /// Let the engine make the first move
    #[arg(long)]
    pub engine_first: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    output::print_section("Tic-Tac-Toe");
    println!("You play X, the engine plays O.");
    println!("Cells are numbered 0-8, left to right, top to bottom. 'q' quits.\n");

    let mut board = GameBoard::new();

    if args.engine_first {
        engine_turn(&mut board);
    }

    loop {
        println!("{board}\n");

        let Some(pos) = prompt_move(&board, &mut lines)? else {
            println!("Game abandoned.");
            return Ok(());
        };
        board.place(pos, Player::X);

        if report_if_over(&board) {
            break;
        }

        engine_turn(&mut board);
        if report_if_over(&board) {
            break;
        }
    }

    println!("\nFinal board:");
    println!("{board}");
    Ok(())
}

fn engine_turn(board: &mut GameBoard) {
    if let Some(pos) = tictactoe::best_move(board, Player::O) {
        board.place(pos, Player::O);
        println!("Engine plays {pos}.\n");
    }
}

/// Ask for a legal human move until one is given. Returns `None` on quit
/// or end of input.
fn prompt_move<B: BufRead>(
    board: &GameBoard,
    lines: &mut io::Lines<B>,
) -> Result<Option<usize>> {
    loop {
        print!("Your move (0-8): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let input = line?;
        let input = input.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(pos) if pos < 9 && board.is_empty(pos) => return Ok(Some(pos)),
            Ok(pos) if pos < 9 => println!("Cell {pos} is occupied."),
            _ => println!("Enter a number between 0 and 8."),
        }
    }
}

/// Print the outcome if the game has ended
fn report_if_over(board: &GameBoard) -> bool {
    match board.status() {
        GameStatus::Ongoing => false,
        GameStatus::Win(Player::X) => {
            println!("You win!");
            true
        }
        GameStatus::Win(Player::O) => {
            println!("Engine wins!");
            true
        }
        GameStatus::Draw => {
            println!("It's a draw.");
            true
        }
    }
}
