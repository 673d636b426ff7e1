//! Tests for board turn rotation, scoring, completion, and winner rules.

use tictac_frenzy::{Board, GameMode, Player, PlayerKind};

fn two_players() -> Vec<Player> {
    vec![
        Player::new(1, 'x', PlayerKind::Human),
        Player::new(2, 'o', PlayerKind::Human),
    ]
}

fn seats(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|number| {
            let marker = char::from_digit(number as u32, 10).unwrap();
            Player::new(number, marker, PlayerKind::Human)
        })
        .collect()
}

#[test]
fn test_classic_grid_is_player_count_plus_one() {
    let board = Board::classic(two_players(), Some(1));
    assert_eq!(board.mode(), GameMode::Classic);
    assert_eq!(board.grid().size(), 3);

    assert_eq!(Board::classic(seats(4), Some(1)).grid().size(), 5);
}

#[test]
fn test_mark_requires_an_active_turn() {
    let mut board = Board::classic(two_players(), Some(1));
    assert!(!board.mark_cell(0, 'x'), "no turn has been drawn yet");

    board.toggle_player_turn();
    assert!(board.mark_cell(0, 'x'));
}

#[test]
fn test_mark_on_occupied_cell_changes_nothing() {
    let mut board = Board::classic(two_players(), Some(1));
    board.toggle_player_turn();
    assert!(board.mark_cell(0, 'x'));

    let scores_before: Vec<usize> = board.players().iter().map(|p| *p.score()).collect();
    assert!(!board.mark_cell(0, 'o'));
    assert_eq!(board.grid().marker_at(0, 0), Some('x'), "the first marker stays");

    let scores_after: Vec<usize> = board.players().iter().map(|p| *p.score()).collect();
    assert_eq!(scores_before, scores_after, "a failed mark never scores");
}

#[test]
fn test_mark_out_of_range_is_rejected() {
    let mut board = Board::classic(two_players(), Some(1));
    board.toggle_player_turn();
    assert!(!board.mark_cell(9, 'x'));
    assert!(!board.mark_cell(400, 'x'));
}

#[test]
fn test_first_turn_is_drawn_then_rotation_follows_seating() {
    let mut board = Board::classic(seats(3), Some(99));
    board.toggle_player_turn();
    let opener = *board.player_turn().expect("turn drawn").number();

    board.toggle_player_turn();
    let second = *board.player_turn().expect("turn active").number();
    assert_eq!(second, opener % 3 + 1, "the next seat follows in order");
}

#[test]
fn test_one_round_visits_every_seat_once() {
    let mut board = Board::classic(seats(3), Some(7));

    let mut seen = Vec::new();
    for _ in 0..3 {
        board.toggle_player_turn();
        seen.push(*board.player_turn().expect("turn active").number());
    }
    let opener = seen[0];
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3], "a full round reaches every seat");

    board.toggle_player_turn();
    assert_eq!(
        *board.player_turn().expect("turn active").number(),
        opener,
        "the rotation wraps back to the opener"
    );
}

#[test]
fn test_scoreless_mark_is_legal() {
    let mut board = Board::classic(two_players(), Some(1));
    board.toggle_player_turn();

    assert!(board.mark_cell(4, 'x'), "an isolated mark is a valid move");
    let mover = board.player_turn().expect("turn active");
    assert_eq!(*mover.score(), 0);
    assert_eq!(mover.score_gained(), 0);
}

#[test]
fn test_classic_completes_on_the_first_connection() {
    let mut board = Board::classic(two_players(), Some(5));
    board.toggle_player_turn();

    assert!(!board.is_completed());
    board.mark_cell(0, 'x');
    board.mark_cell(1, 'x');
    assert!(!board.is_completed(), "a pair scores nothing yet");

    board.mark_cell(2, 'x');
    assert!(board.is_completed(), "the first connection ends Classic");
}

#[test]
fn test_classic_full_scoreless_grid_is_a_draw() {
    let mut board = Board::classic(two_players(), Some(5));
    board.toggle_player_turn();

    // Filled in cell order, none of these placements ever connects.
    let markers = ['x', 'x', 'o', 'o', 'o', 'x', 'x', 'x', 'o'];
    for (cell, marker) in markers.iter().enumerate() {
        assert!(!board.is_completed());
        assert!(board.mark_cell(cell, *marker));
    }

    assert!(board.is_completed(), "a full grid ends Classic even scoreless");
    assert!(board.winner().is_none());
    assert_eq!(board.result_text(), "Game over! The game ends with draw.\n");
}

#[test]
fn test_frenzy_keeps_going_until_the_grid_is_full() {
    let mut board = Board::frenzy(two_players(), 3, Some(5));
    board.toggle_player_turn();

    for cell in [0, 1, 2] {
        board.mark_cell(cell, 'x');
    }
    assert!(!board.is_completed(), "a connection does not end Frenzy");

    for cell in 3..9 {
        board.mark_cell(cell, 'o');
    }
    assert!(board.is_completed(), "the full grid does");
}

#[test]
fn test_winner_needs_the_strictly_highest_score() {
    let mut board = Board::frenzy(two_players(), 5, Some(3));
    board.toggle_player_turn();
    let first = *board.player_turn().expect("turn drawn").number();
    let first_marker = *board.player_turn().expect("turn drawn").marker();

    // The opener builds a three-chain on the top row.
    for cell in [0, 1, 2] {
        assert!(board.mark_cell(cell, first_marker));
    }
    assert_eq!(*board.players()[first - 1].score(), 3);

    board.toggle_player_turn();
    let second = *board.player_turn().expect("turn active").number();
    let second_marker = *board.player_turn().expect("turn active").marker();

    // The other seat answers with a three-chain on the bottom row.
    for cell in [20, 21, 22] {
        assert!(board.mark_cell(cell, second_marker));
    }
    assert_eq!(*board.players()[second - 1].score(), 3);

    assert!(board.winner().is_none(), "equal top scores are a draw");

    // Extending to four in a row breaks the tie.
    board.toggle_player_turn();
    assert!(board.mark_cell(3, first_marker));
    assert_eq!(*board.players()[first - 1].score(), 7);

    let winner = board.winner().expect("a strict top scorer exists now");
    assert_eq!(*winner.number(), first);
    assert!(board.result_text().contains("has won!"));
}

#[test]
fn test_single_leader_beats_tied_losers() {
    let mut board = Board::frenzy(seats(3), 6, Some(4));
    board.toggle_player_turn();

    // The opener lands five points in one move: four in a row laid down
    // ends-first connects both halves when the middle drops in.
    let leader = *board.player_turn().expect("turn drawn").number();
    let marker = *board.player_turn().expect("turn drawn").marker();
    for cell in [0, 1, 3, 4] {
        assert!(board.mark_cell(cell, marker));
    }
    assert!(board.mark_cell(2, marker));

    // The two other seats take three points each.
    for row_start in [12, 24] {
        board.toggle_player_turn();
        let marker = *board.player_turn().expect("turn active").marker();
        for offset in [0, 1, 2] {
            assert!(board.mark_cell(row_start + offset, marker));
        }
    }

    let mut scores: Vec<usize> = board.players().iter().map(|p| *p.score()).collect();
    scores.sort_unstable();
    assert_eq!(scores, vec![3, 3, 5]);

    let winner = board.winner().expect("the five-point seat stands alone");
    assert_eq!(*winner.number(), leader);
}

#[test]
fn test_draw_when_the_top_score_is_shared_by_later_seats() {
    let mut board = Board::frenzy(seats(3), 6, Some(8));
    board.toggle_player_turn();

    // One seat scores 3, the two others 5 each: no strict maximum.
    let marker = *board.player_turn().expect("turn drawn").marker();
    for cell in [0, 1, 2] {
        assert!(board.mark_cell(cell, marker));
    }

    for row_start in [12, 24] {
        board.toggle_player_turn();
        let marker = *board.player_turn().expect("turn active").marker();
        // Four in a row laid down ends-first, so only the middle placement
        // scores: both half-runs connect at once for five points.
        for offset in [0, 1, 3, 4] {
            assert!(board.mark_cell(row_start + offset, marker));
        }
        assert!(board.mark_cell(row_start + 2, marker));
    }

    let scores: Vec<usize> = board.players().iter().map(|p| *p.score()).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![3, 5, 5]);
    assert!(board.winner().is_none(), "the shared top score forces a draw");
}

#[test]
fn test_scores_accumulate_and_remember_the_previous_value() {
    let mut board = Board::frenzy(vec![Player::new(1, 'x', PlayerKind::Human)], 5, Some(1));
    board.toggle_player_turn();

    board.mark_cell(0, 'x');
    board.mark_cell(1, 'x');
    let player = &board.players()[0];
    assert_eq!(*player.score(), 0);

    board.mark_cell(2, 'x');
    let player = &board.players()[0];
    assert_eq!(*player.score(), 3);
    assert_eq!(*player.last_score(), 0);
    assert_eq!(player.score_gained(), 3);

    board.mark_cell(3, 'x');
    let player = &board.players()[0];
    assert_eq!(*player.score(), 7);
    assert_eq!(*player.last_score(), 3);
    assert_eq!(player.score_gained(), 4);
}

#[test]
fn test_reset_clears_everything_but_the_seating() {
    let mut board = Board::frenzy(two_players(), 4, Some(2));
    board.toggle_player_turn();
    for cell in [0, 1, 2] {
        board.mark_cell(cell, 'x');
    }

    board.reset();

    assert!(board.player_turn().is_none(), "the turn holder is cleared");
    assert_eq!(board.grid().size(), 4, "the grid keeps its size");
    assert_eq!(board.grid().available_cells().len(), 16, "every cell is open again");
    assert!(board.players().iter().all(|p| *p.score() == 0));
    assert_eq!(board.players().len(), 2, "the seating survives");
}
