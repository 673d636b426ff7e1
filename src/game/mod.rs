//! Core game engine: grid, chain analysis, board state, players, and the
//! bot strategy.

mod board;
mod bot;
mod chain;
mod display;
mod grid;
mod player;

pub use board::{Board, GameMode};
pub use bot::BotStrategy;
pub use chain::{ConnectedCell, Direction, count_run, find_connected_cell};
pub use grid::Grid;
pub use player::{Player, PlayerKind};
