//! Search engines for two small games
//!
//! This crate provides:
//! - An A* solver for the 3x3 sliding-tile puzzle (8-puzzle) with a
//!   Manhattan-distance heuristic and optimality guarantee
//! - A solvable-board generator based on the inversion-parity invariant
//! - A minimax engine (with alpha-beta pruning) that plays perfect
//!   tic-tac-toe
//!
//! Both engines are pure with respect to their callers: they take explicit
//! state arguments and return explicit values, with no shared mutable state.
//! The CLI in `src/bin/minigames.rs` is one possible driver; any UI layer
//! can call the same operations.

pub mod cli;
pub mod error;
pub mod puzzle;
pub mod tictactoe;

pub use error::{Error, Result};
pub use puzzle::{GOAL, PuzzleBoard, Solution, solvable_board, solve};
pub use tictactoe::{Cell, GameBoard, GameStatus, Player, best_move};
