//! CLI infrastructure for the minigames toolkit
//!
//! This module provides the command-line driver for the two engines:
//! solving puzzle boards, querying the tic-tac-toe engine, and playing an
//! interactive game.

pub mod commands;
pub mod config;
pub mod output;
