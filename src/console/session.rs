//! Interactive session: mode menu, player setup, and the game loop.

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::Result;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::console::io::Console;
use crate::game::{Board, BotStrategy, GameMode, Player, PlayerKind};

/// Drives games over a [`Console`], from the mode menu through rematches.
///
/// The session re-prompts on any invalid input and only fails when the
/// console itself does, so closing stdin is the one way out.
pub struct Session<C: Console> {
    console: C,
    config: GameConfig,
    strategy: BotStrategy,
    game_mode_header: String,
    selected_cell_history: String,
}

impl<C: Console> Session<C> {
    /// Creates a session over `console` with the given settings.
    pub fn new(console: C, config: GameConfig) -> Self {
        let strategy = BotStrategy::new(*config.rng_seed());
        Self {
            console,
            config,
            strategy,
            game_mode_header: String::new(),
            selected_cell_history: String::new(),
        }
    }

    /// Runs games until console input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        let mut board = self.require_game_mode()?;

        loop {
            if board.is_completed() {
                self.console.render(&format!("{}\n", board.result_text()));
                info!("game over");

                board.reset();
                board.toggle_player_turn();
                self.selected_cell_history.clear();

                if !self.require_rematch()? {
                    self.game_mode_header.clear();
                    board = self.require_game_mode()?;
                }

                continue;
            }

            let (number, marker, name, kind) = {
                let player = board
                    .player_turn()
                    .expect("a turn is drawn whenever a game is running");
                (*player.number(), *player.marker(), player.name(), *player.kind())
            };

            let selected_cell = match kind {
                PlayerKind::Human => self.require_cell_selection(&board)?,
                PlayerKind::Bot => {
                    let pause = *self.config.bot_think_millis();
                    if pause > 0 {
                        std::thread::sleep(Duration::from_millis(pause));
                    }
                    let bot = board
                        .player_turn()
                        .expect("a turn is drawn whenever a game is running");
                    self.strategy.select_cell(&board, bot)
                }
            };

            board.mark_cell(selected_cell, marker);
            board.toggle_player_turn();
            self.console.clear_screen();

            let gained = board.players()[number - 1].score_gained();
            self.selected_cell_history
                .push_str(&format!("{name}-{number} ({marker}) selected '{selected_cell}'"));
            if gained > 0 {
                self.selected_cell_history
                    .push_str(&format!(", gained +{gained} points"));
            }
            self.selected_cell_history.push_str("\n\n");

            self.console.render(&format!(
                "{}\n{}{}\n{}\n",
                self.game_mode_header,
                self.selected_cell_history,
                board.score_text(),
                board.layout_text()
            ));
        }
    }

    /// Shows the mode menu and builds a board for the selected mode, with
    /// players seated and the opening turn drawn.
    fn require_game_mode(&mut self) -> Result<Board> {
        let main_menu = Self::main_menu_text();

        self.console.clear_screen();
        self.console.render(&format!("{main_menu}\n"));

        let mut board = loop {
            let line = self.console.prompt_line("Select game mode: ")?;
            self.console.render("\n");

            let mode = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|choice| choice.checked_sub(1))
                .and_then(|index| GameMode::iter().nth(index));

            match mode {
                Some(mode @ GameMode::Classic) => {
                    self.game_mode_header = mode.header();
                    let players = self.require_players()?;
                    break Board::classic(players, *self.config.rng_seed());
                }
                Some(mode @ GameMode::Frenzy) => {
                    self.game_mode_header = mode.header();
                    let grid_size = self.require_grid_size()?;
                    let players = self.require_players()?;
                    break Board::frenzy(players, grid_size, *self.config.rng_seed());
                }
                None => {
                    self.console.clear_screen();
                    self.console.render(&format!(
                        "{main_menu}\n** Invalid game mode, please reselect!\n"
                    ));
                }
            }
        };

        info!(
            mode = %board.mode(),
            players = board.players().len(),
            grid_size = board.grid().size(),
            "game configured"
        );
        board.toggle_player_turn();
        Ok(board)
    }

    /// Prompts for the Frenzy grid side until a size of at least the
    /// configured minimum comes in.
    fn require_grid_size(&mut self) -> Result<usize> {
        let min = *self.config.min_grid_size();

        self.console.clear_screen();
        self.console.render(&format!("{}\n", self.game_mode_header));

        loop {
            let line = self
                .console
                .prompt_line(&format!("Input grid size (min {min}): "))?;
            self.console.render("\n");

            match line.trim().parse::<usize>() {
                Ok(size) if size >= min => return Ok(size),
                _ => {
                    self.console.clear_screen();
                    self.console.render(&format!(
                        "{}\n** Invalid grid size, please reinput!\n",
                        self.game_mode_header
                    ));
                }
            }
        }
    }

    /// Seats the players: asks for a count, then a unique one-character
    /// marker and a human/bot choice per seat.
    fn require_players(&mut self) -> Result<Vec<Player>> {
        let min = *self.config.min_players();
        let mut players: Vec<Player> = Vec::new();

        self.console.clear_screen();
        self.console.render(&format!("{}\n", self.game_mode_header));

        loop {
            let line = self
                .console
                .prompt_line(&format!("Input number of players (min {min}): "))?;

            self.console.clear_screen();
            self.console.render(&self.game_mode_header);

            let total = match line.trim().parse::<usize>() {
                Ok(total) if total >= min => total,
                _ => {
                    self.console
                        .render("\n** Invalid number of players, please reinput!\n");
                    continue;
                }
            };

            let mut used_markers: BTreeSet<char> = BTreeSet::new();

            self.console.render(&format!(
                "\n{}{}",
                ready_players_text(&players, total),
                setup_player_text(&players)
            ));

            while players.len() < total {
                let marker = loop {
                    let line = self.console.prompt_line("Marker: (1 char) ")?;

                    self.console.clear_screen();
                    self.console.render(&format!(
                        "{}\n{}{}",
                        self.game_mode_header,
                        ready_players_text(&players, total),
                        setup_player_text(&players)
                    ));

                    let mut chars = line.chars();
                    match (chars.next(), chars.next()) {
                        (Some(marker), None) if !used_markers.contains(&marker) => break marker,
                        _ => {
                            self.console
                                .render("\n** Invalid marker, please reinput!\n");
                        }
                    }
                };

                used_markers.insert(marker);
                self.console.render(&format!("Marker: {marker}\n"));

                loop {
                    let line = self.console.prompt_line("As a bot? (y/n): ")?;

                    self.console.clear_screen();
                    self.console.render(&format!(
                        "{}\n{}{}Marker: {marker}\n",
                        self.game_mode_header,
                        ready_players_text(&players, total),
                        setup_player_text(&players)
                    ));

                    let kind = match line.to_lowercase().as_str() {
                        "y" | "yes" => PlayerKind::Bot,
                        "n" | "no" => PlayerKind::Human,
                        _ => {
                            self.console
                                .render("\n** Invalid player option, please reselect!\n");
                            continue;
                        }
                    };

                    players.push(Player::new(players.len() + 1, marker, kind));
                    break;
                }

                self.console.clear_screen();
                self.console.render(&format!(
                    "{}\n{}",
                    self.game_mode_header,
                    ready_players_text(&players, total)
                ));

                if players.len() < total {
                    self.console.render(&setup_player_text(&players));
                }
            }

            self.console.prompt_line("\nInput anything to start...")?;
            self.console.render("\n");

            info!(players = players.len(), "players seated");
            return Ok(players);
        }
    }

    /// Prompts the human turn holder for an open cell number.
    fn require_cell_selection(&mut self, board: &Board) -> Result<usize> {
        let grid = board.grid();
        let max_cell = grid.size() * grid.size() - 1;

        self.console.clear_screen();
        self.console.render(&format!(
            "{}\n{}{}\n{}\n{}",
            self.game_mode_header,
            self.selected_cell_history,
            board.score_text(),
            board.layout_text(),
            board.turn_text()
        ));

        loop {
            let line = self.console.prompt_line("Select cell by number: ")?;
            self.console.render("\n");

            let selected = line.trim().parse::<usize>().ok().filter(|&cell| {
                cell <= max_cell && grid.marker_at(grid.row_of(cell), grid.column_of(cell)).is_none()
            });

            match selected {
                Some(cell) => return Ok(cell),
                None => {
                    self.console.clear_screen();
                    self.console.render(&format!(
                        "{}\n{}{}\n{}\n{}\n** Invalid cell number, please reselect!\n",
                        self.game_mode_header,
                        self.selected_cell_history,
                        board.score_text(),
                        board.layout_text(),
                        board.turn_text()
                    ));
                }
            }
        }
    }

    /// Asks whether the same seating plays again.
    fn require_rematch(&mut self) -> Result<bool> {
        let line = self.console.prompt_line("Rematch? (y/n) ")?;
        self.console.render("\n");

        let rematch = matches!(line.to_lowercase().as_str(), "y" | "yes");
        debug!(rematch, "rematch answered");
        Ok(rematch)
    }

    fn main_menu_text() -> String {
        let title = "Tic-Tac-Toe";
        let mut text = format!("{title}\n{}\n", "-".repeat(title.len()));
        for (index, mode) in GameMode::iter().enumerate() {
            text.push_str(&format!("{}. {mode}\n", index + 1));
        }
        text
    }
}

/// Progress block listing who is seated so far.
fn ready_players_text(players: &[Player], total: usize) -> String {
    let mut ready = String::new();
    for player in players {
        ready.push_str(&format!(
            "{}-{} ({}) is ready!\n",
            player.name(),
            player.number(),
            player.marker()
        ));
    }
    if !ready.is_empty() {
        ready.insert(0, '\n');
    }
    format!("{}/{} Players are set.\n{}", players.len(), total, ready)
}

/// Banner announcing which seat is being set up next.
fn setup_player_text(players: &[Player]) -> String {
    format!("\nSetting up player-{}...\n", players.len() + 1)
}
