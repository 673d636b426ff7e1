//! Bot move selection.
//!
//! The strategy ranks every open cell for the bot's own marker, scans the
//! opponents for the single most threatening one, and then weighs finishing
//! its own chain against blocking. Ties between equally threatening
//! opponents go to whoever moves sooner after the bot, and a cell that
//! blocks while extending the bot's own chain beats a plain block.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::game::board::Board;
use crate::game::chain::{self, ConnectedCell};
use crate::game::grid::Grid;
use crate::game::player::Player;

/// Chain total treated as a finished connection worth taking outright.
const CONNECT_TARGET: usize = 3;

/// Heuristic cell selector for bot players.
///
/// Only the last-resort pick is random; everything before it is
/// deterministic, so a seeded strategy replays identically.
#[derive(Debug)]
pub struct BotStrategy {
    rng: StdRng,
}

impl BotStrategy {
    /// Creates a strategy; a `seed` pins down the random fallback.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Picks the cell number `bot` should mark on `board`.
    ///
    /// The board must still have an open cell; the game loop checks for
    /// completion before asking anyone to move.
    #[instrument(skip(self, board, bot), fields(seat = *bot.number(), marker = %bot.marker()))]
    pub fn select_cell(&mut self, board: &Board, bot: &Player) -> usize {
        let available = board.grid().available_cells();
        assert!(!available.is_empty(), "no cell left to select");

        let ranked = rank_cells(board.grid(), *bot.marker(), &available);
        let block_cells = cells_to_block(board, bot, &available);

        // Take the bot's own best cell when it already completes a
        // connection; a stronger opponent threat below may override it.
        let mut best_cell = (ranked[0].total_connected >= CONNECT_TARGET).then_some(ranked[0]);

        for block_cell in &block_cells {
            // Threats are sorted; past the zeros nothing needs blocking.
            if block_cell.total_connected == 0 {
                break;
            }

            if block_cell.total_connected > ranked[0].total_connected {
                debug!(
                    row = block_cell.row,
                    column = block_cell.column,
                    threat = block_cell.total_connected,
                    "blocking a stronger opponent"
                );
                best_cell = Some(*block_cell);
                break;
            }

            // On equal totals, hunt for a cell that blocks the opponent
            // and extends the bot's own chain at the same time. Failing
            // that, settle for the plain blocking cell.
            let mut dual_purpose_found = false;
            for ranked_cell in &ranked {
                if block_cell.total_connected == ranked[0].total_connected
                    && block_cell.total_connected == ranked_cell.total_connected
                {
                    best_cell = Some(*block_cell);
                    if block_cell.row == ranked_cell.row && block_cell.column == ranked_cell.column
                    {
                        dual_purpose_found = true;
                    } else {
                        continue;
                    }
                }
                break;
            }
            if dual_purpose_found {
                break;
            }
        }

        if let Some(cell) = best_cell {
            debug!(
                row = cell.row,
                column = cell.column,
                total = cell.total_connected,
                "selected a scored cell"
            );
            return board.grid().cell_number_of(cell.row, cell.column);
        }

        // No finished or threatened connection anywhere. Grow the most
        // promising chain if even a single neighbor lines up.
        let top = ranked[0];
        if top.chain_sum() >= 1 {
            debug!(row = top.row, column = top.column, "extending a forming chain");
            return board.grid().cell_number_of(top.row, top.column);
        }

        let open_cells: Vec<usize> = available.iter().copied().collect();
        let cell_number = *open_cells
            .choose(&mut self.rng)
            .expect("available cells checked non-empty");
        debug!(cell = cell_number, "picking at random");
        cell_number
    }
}

/// Scores every available cell for `marker` and sorts the results, best
/// first: higher totals win, and among equal totals the larger raw chain
/// sum (a cell feeding several lines at once) ranks ahead.
fn rank_cells(grid: &Grid, marker: char, available: &BTreeSet<usize>) -> Vec<ConnectedCell> {
    let mut cells: Vec<ConnectedCell> = available
        .iter()
        .map(|&cell_number| {
            chain::find_connected_cell(
                grid,
                grid.row_of(cell_number),
                grid.column_of(cell_number),
                marker,
                usize::MAX,
            )
        })
        .collect();

    cells.sort_by(|a, b| {
        (b.total_connected, b.chain_sum()).cmp(&(a.total_connected, a.chain_sum()))
    });
    cells
}

/// Ranked cells of the single opponent most worth blocking.
///
/// Opponents are visited in seating order starting with the seat right
/// after the bot, so with equal threats the one who moves sooner keeps the
/// spot.
fn cells_to_block(board: &Board, bot: &Player, available: &BTreeSet<usize>) -> Vec<ConnectedCell> {
    let players = board.players();
    let total_players = players.len();
    let start = bot.number() % total_players;

    let mut block_cells: Vec<ConnectedCell> = Vec::new();
    let mut player_to_block: Option<&Player> = None;

    for step in 0..total_players {
        let index = (start + step) % total_players;
        if index == bot.number() - 1 {
            break;
        }

        let opponent = &players[index];
        let opponent_cells = rank_cells(board.grid(), *opponent.marker(), available);
        let sooner = match player_to_block {
            None => opponent,
            Some(current) => next_to_act(*bot.number(), current, opponent),
        };

        let replaces = match block_cells.first() {
            None => true,
            Some(best) => {
                opponent_cells[0].total_connected > best.total_connected
                    || (opponent_cells[0].total_connected == best.total_connected
                        && sooner.number() == opponent.number())
            }
        };
        if replaces {
            debug!(opponent = *opponent.number(), "opponent marked for blocking");
            block_cells = opponent_cells;
            player_to_block = Some(opponent);
        }
    }

    block_cells
}

/// Of two opponents, the one whose turn comes up sooner after the bot's.
///
/// Turn order wraps, so for a bot at seat 3 of five, seat 4 beats both
/// seat 1 and seat 2. Seat numbers are unique; the final clause pins the
/// result to `player1` should `player2` ever alias the bot's own seat.
fn next_to_act<'a>(bot_number: usize, player1: &'a Player, player2: &'a Player) -> &'a Player {
    let number1 = *player1.number();
    let number2 = *player2.number();

    if (number1 < number2 && number2 < bot_number)
        || (number2 < bot_number && bot_number < number1)
        || (bot_number < number1 && number1 < number2)
        || bot_number == number2
    {
        player1
    } else {
        player2
    }
}
