//! Text rendering for boards: headers, scores, grid layout, turn, and
//! result lines.

use crate::game::board::{Board, GameMode};
use crate::game::chain;

/// ANSI escape restoring the default foreground color.
const COLOR_DEFAULT: &str = "\x1b[0m";
/// ANSI escape for bright cyan, used on connected markers.
const COLOR_CYAN: &str = "\x1b[96m";

/// Chain total from which a marked cell is drawn highlighted.
const HIGHLIGHT_THRESHOLD: usize = 3;

impl GameMode {
    /// One- or two-line description of the mode's rules.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Connect three characters to win the game.",
            Self::Frenzy => {
                "Connect three or more characters to earn points.\n\
                 The one with the most points wins."
            }
        }
    }

    /// Underlined title block shown above every screen of the mode.
    pub fn header(&self) -> String {
        let title = self.to_string();
        format!("{title}\n{}\n{}\n", "-".repeat(title.len()), self.description())
    }
}

impl Board {
    /// Scoreboard, one line per player in seat order.
    pub fn score_text(&self) -> String {
        let mut text = String::from("Score: \n");
        for player in self.players() {
            text.push_str(&format!(
                "{}-{} ({}): {}\n",
                player.name(),
                player.number(),
                player.marker(),
                player.score()
            ));
        }
        text
    }

    /// ASCII grid with cell numbers standing in for empty cells.
    ///
    /// Markers sitting on a chain totaling three or more are colored cyan
    /// so finished connections stand out.
    pub fn layout_text(&self) -> String {
        let grid = self.grid();
        let size = grid.size();
        let row_border = format!("{}-\n", "-----".repeat(size));
        let mut text = String::new();

        for row in 0..size {
            text.push_str(&row_border);
            text.push_str("| ");

            for column in 0..size {
                let marker = grid.marker_at(row, column);
                let shown = match marker {
                    Some(marker) => marker.to_string(),
                    None => grid.cell_number_of(row, column).to_string(),
                };

                let connected = marker.is_some_and(|marker| {
                    chain::find_connected_cell(grid, row, column, marker, HIGHLIGHT_THRESHOLD)
                        .total_connected
                        >= HIGHLIGHT_THRESHOLD
                });
                if connected {
                    text.push_str(COLOR_CYAN);
                }

                text.push_str(&format!("{shown:>2}{COLOR_DEFAULT} | "));
            }

            text.push('\n');
        }

        text.push_str(&row_border);
        text
    }

    /// Announcement line for the active turn.
    ///
    /// Callers draw a turn before rendering; without one there is nothing
    /// to announce.
    pub fn turn_text(&self) -> String {
        let player = self
            .player_turn()
            .expect("turn text requested with no active turn");
        format!(
            "{}-{} ({}) turn...\n",
            player.name(),
            player.number(),
            player.marker()
        )
    }

    /// Game-over line naming the strict top scorer, or calling the draw.
    pub fn result_text(&self) -> String {
        match self.winner() {
            Some(winner) => format!(
                "Game over! {}-{} ({}) has won!\n",
                winner.name(),
                winner.number(),
                winner.marker()
            ),
            None => String::from("Game over! The game ends with draw.\n"),
        }
    }
}
