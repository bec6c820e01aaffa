//! Sliding-tile puzzle implementation

pub mod board;
pub mod generator;
pub mod solver;

pub use board::{GOAL, PuzzleBoard};
pub use generator::solvable_board;
pub use solver::{Solution, solve};
