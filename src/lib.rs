//! Tic-Tac-Frenzy library - console connection game
//!
//! A turn-driven game for any number of players on an N×N grid, played at
//! the console. Classic mode ends on the first connection of three; Frenzy
//! mode scores every connection until the grid fills up, longest chains
//! earning the most points. Any seat can be handed to a heuristic bot.
//!
//! # Architecture
//!
//! - **Grid**: square marker grid with flat cell-number addressing
//! - **Chain**: directional run counting and connected-cell scoring
//! - **Board**: turn rotation, scoring, completion, and winner rules
//! - **Bot**: block-or-extend heuristic over ranked open cells
//! - **Console**: line-oriented terminal surface and the session loop
//!
//! # Example
//!
//! ```
//! use tictac_frenzy::{Board, Player, PlayerKind};
//!
//! let players = vec![
//!     Player::new(1, 'x', PlayerKind::Human),
//!     Player::new(2, 'o', PlayerKind::Bot),
//! ];
//!
//! // Classic sizes the grid off the player count: 2 players, 3×3 cells.
//! let mut board = Board::classic(players, Some(7));
//! board.toggle_player_turn();
//! assert!(board.mark_cell(0, 'x'));
//! assert!(!board.is_completed());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod game;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console surface and session
pub use console::{Console, Session, TerminalConsole};

// Crate-level exports - Game engine
pub use game::{
    Board, BotStrategy, ConnectedCell, Direction, GameMode, Grid, Player, PlayerKind, count_run,
    find_connected_cell,
};
