//! Tic-tac-toe game implementation

pub mod board;
pub mod lines;
pub mod minimax;

pub use board::{Cell, GameBoard, GameStatus, Player};
pub use lines::WINNING_LINES;
pub use minimax::best_move;
