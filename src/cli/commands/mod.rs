//! CLI commands

pub mod best_move;
pub mod play;
pub mod puzzle;
