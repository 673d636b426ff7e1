//! Board state: grid, seated players, turn rotation, and scoring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::{Display, EnumIter};
use tracing::debug;

use crate::game::chain;
use crate::game::grid::Grid;
use crate::game::player::Player;

/// Grid cells beyond the player count for a Classic board.
const CLASSIC_EXTRA_CELLS: usize = 1;

/// Completion policy of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum GameMode {
    /// The first connection ends the game.
    Classic,
    /// Connections earn points until the grid is full.
    Frenzy,
}

/// A running game: the grid, the players in seat order, and whose turn it
/// is.
///
/// The board owns its players outright. Turn state is an index into the
/// player list, `None` until the opening turn is drawn.
#[derive(Debug)]
pub struct Board {
    mode: GameMode,
    grid: Grid,
    players: Vec<Player>,
    turn_index: Option<usize>,
    rng: StdRng,
}

impl Board {
    /// Creates a Classic board; the grid side is the player count plus one.
    pub fn classic(players: Vec<Player>, seed: Option<u64>) -> Self {
        let grid_size = players.len() + CLASSIC_EXTRA_CELLS;
        Self::with_mode(GameMode::Classic, players, grid_size, seed)
    }

    /// Creates a Frenzy board with the given grid side.
    pub fn frenzy(players: Vec<Player>, grid_size: usize, seed: Option<u64>) -> Self {
        Self::with_mode(GameMode::Frenzy, players, grid_size, seed)
    }

    fn with_mode(
        mode: GameMode,
        players: Vec<Player>,
        grid_size: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            mode,
            grid: Grid::new(grid_size),
            players,
            turn_index: None,
            rng,
        }
    }

    /// Mode this board plays under.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Players in seat order; seat `n` sits at index `n - 1`.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player holding the turn, or `None` before the opening draw.
    pub fn player_turn(&self) -> Option<&Player> {
        self.turn_index.map(|index| &self.players[index])
    }

    /// Advances the turn.
    ///
    /// The first call draws a random seat; every later call hands the turn
    /// to the next seat in order, wrapping around, so each player moves
    /// exactly once per round.
    pub fn toggle_player_turn(&mut self) {
        let next = match self.turn_index {
            None => self.rng.random_range(0..self.players.len()),
            Some(current) => (current + 1) % self.players.len(),
        };
        debug!(seat = next + 1, "turn handed over");
        self.turn_index = Some(next);
    }

    /// Marks a cell with `marker` and credits the connected score to the
    /// turn holder.
    ///
    /// Returns `false`, changing nothing, when no turn is active, the cell
    /// number is out of range, or the cell is occupied. A mark connecting
    /// nothing is legal and adds zero points.
    pub fn mark_cell(&mut self, cell_number: usize, marker: char) -> bool {
        let Some(turn_index) = self.turn_index else {
            debug!(cell = cell_number, "mark rejected, no active turn");
            return false;
        };
        if !self.grid.mark(cell_number, marker) {
            debug!(cell = cell_number, "mark rejected, out of range or occupied");
            return false;
        }

        let row = self.grid.row_of(cell_number);
        let column = self.grid.column_of(cell_number);
        let connected =
            chain::find_connected_cell(&self.grid, row, column, marker, usize::MAX).total_connected;

        let player = &mut self.players[turn_index];
        let score = player.score() + connected;
        player.set_score(score);
        debug!(
            cell = cell_number,
            marker = %marker,
            connected,
            score,
            "cell marked"
        );
        true
    }

    /// Whether the game is over under this board's mode.
    ///
    /// Classic ends on a full grid or on the first score; Frenzy only ends
    /// on a full grid.
    pub fn is_completed(&self) -> bool {
        match self.mode {
            GameMode::Classic => {
                self.grid.is_full() || self.players.iter().any(|player| *player.score() > 0)
            }
            GameMode::Frenzy => self.grid.is_full(),
        }
    }

    /// The strict top scorer, or `None` when the highest score is shared.
    ///
    /// An all-zero scoreboard is a draw as well.
    pub fn winner(&self) -> Option<&Player> {
        let mut winner: Option<&Player> = None;
        let mut top_score = 0;

        for player in &self.players {
            if *player.score() > top_score {
                top_score = *player.score();
                winner = Some(player);
            } else if *player.score() == top_score {
                winner = None;
            }
        }

        winner
    }

    /// Clears the grid and the turn holder and zeroes every score.
    ///
    /// The grid size and the seating survive for a rematch.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.turn_index = None;
        self.players.iter_mut().for_each(|player| player.reset());
        debug!("board reset");
    }
}
