//! Tests for the rendered game text: headers, scoreboard, grid, result.

use tictac_frenzy::{Board, GameMode, Player, PlayerKind};

fn two_players() -> Vec<Player> {
    vec![
        Player::new(1, 'x', PlayerKind::Human),
        Player::new(2, 'o', PlayerKind::Bot),
    ]
}

#[test]
fn test_mode_headers_are_underlined_titles() {
    assert_eq!(
        GameMode::Classic.header(),
        "Classic\n-------\nConnect three characters to win the game.\n"
    );
    assert_eq!(
        GameMode::Frenzy.header(),
        "Frenzy\n------\nConnect three or more characters to earn points.\n\
         The one with the most points wins.\n"
    );
}

#[test]
fn test_player_names_follow_their_kind() {
    assert_eq!(Player::new(1, 'x', PlayerKind::Human).name(), "Player");
    assert_eq!(Player::new(2, 'o', PlayerKind::Bot).name(), "Bot");
}

#[test]
fn test_score_text_lists_every_seat() {
    let board = Board::classic(two_players(), Some(1));
    assert_eq!(board.score_text(), "Score: \nPlayer-1 (x): 0\nBot-2 (o): 0\n");
}

#[test]
fn test_empty_layout_shows_cell_numbers() {
    let board = Board::classic(two_players(), Some(1));
    let layout = board.layout_text();

    // 3×3: borders are five dashes per column plus the closing one.
    assert!(layout.starts_with("----------------\n| "));
    assert!(layout.ends_with("----------------\n"));
    assert!(layout.contains(" 0\u{1b}[0m | "));
    assert!(layout.contains(" 8\u{1b}[0m | "));
    assert!(!layout.contains("\u{1b}[96m"), "nothing to highlight yet");
}

#[test]
fn test_layout_highlights_connected_markers() {
    let mut board = Board::classic(two_players(), Some(1));
    board.toggle_player_turn();
    board.mark_cell(0, 'x');
    board.mark_cell(1, 'x');

    let layout = board.layout_text();
    assert!(layout.contains(" x\u{1b}[0m | "), "plain markers stay uncolored");
    assert!(!layout.contains("\u{1b}[96m"), "a pair is not yet a connection");

    board.mark_cell(2, 'x');
    let layout = board.layout_text();
    assert_eq!(
        layout.matches("\u{1b}[96m x\u{1b}[0m").count(),
        3,
        "every marker of the finished line lights up"
    );
}

#[test]
fn test_turn_text_names_the_holder() {
    let mut board = Board::classic(two_players(), Some(1));
    board.toggle_player_turn();
    while *board.player_turn().expect("turn active").number() != 2 {
        board.toggle_player_turn();
    }

    assert_eq!(board.turn_text(), "Bot-2 (o) turn...\n");
}

#[test]
fn test_result_text_for_draw_and_win() {
    let mut board = Board::classic(two_players(), Some(1));
    assert_eq!(board.result_text(), "Game over! The game ends with draw.\n");

    board.toggle_player_turn();
    while *board.player_turn().expect("turn active").number() != 1 {
        board.toggle_player_turn();
    }
    for cell in [0, 1, 2] {
        board.mark_cell(cell, 'x');
    }

    assert_eq!(board.result_text(), "Game over! Player-1 (x) has won!\n");
}
