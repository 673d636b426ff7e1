//! Player identity, kind, and score tracking.

use derive_getters::Getters;
use derive_new::new;

/// Where a player's cell selections come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Selections are typed at the console.
    Human,
    /// Selections are produced by [`BotStrategy`](crate::BotStrategy).
    Bot,
}

/// One seated participant of a game.
///
/// Seat numbers are 1-based and unique on a board, as are markers. Scores
/// belong to the current game and are zeroed by a board reset.
#[derive(Debug, Clone, Getters, new)]
pub struct Player {
    /// 1-based seat number, fixed for the life of the player.
    number: usize,
    /// Single-character marker drawn on the grid.
    marker: char,
    /// Human or bot.
    kind: PlayerKind,
    /// Points accumulated in the current game.
    #[new(default)]
    score: usize,
    /// Score as it stood before the most recent update.
    #[new(default)]
    last_score: usize,
}

impl Player {
    /// Display name for the player's kind.
    pub fn name(&self) -> &'static str {
        match self.kind {
            PlayerKind::Human => "Player",
            PlayerKind::Bot => "Bot",
        }
    }

    /// Overwrites the score, remembering the outgoing value in
    /// [`last_score`](Self::last_score).
    pub fn set_score(&mut self, score: usize) {
        self.last_score = self.score;
        self.score = score;
    }

    /// Points gained by the most recent score update.
    pub fn score_gained(&self) -> usize {
        self.score - self.last_score
    }

    /// Zeroes both scores for a fresh game.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.last_score = 0;
    }
}
