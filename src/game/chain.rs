//! Chain analysis: directional run counting and connected-cell scoring.
//!
//! A "chain" is measured per axis by scanning outward from a reference cell
//! in two opposite directions and summing the runs. An axis only counts once
//! the combined run reaches two, which keeps a line from being scored twice
//! when scanned from both ends and leaves a lone neighbor worthless.

use crate::game::grid::Grid;

/// One of the eight scan directions radiating from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward smaller rows.
    Up,
    /// Toward larger rows.
    Down,
    /// Toward smaller columns.
    Left,
    /// Toward larger columns.
    Right,
    /// Up and to the left.
    UpLeft,
    /// Up and to the right.
    UpRight,
    /// Down and to the left.
    DownLeft,
    /// Down and to the right.
    DownRight,
}

impl Direction {
    /// `(row, column)` step taken by one move in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (-1, 1),
            Self::DownLeft => (1, -1),
            Self::DownRight => (1, 1),
        }
    }

    /// The other half of this direction's axis.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }
}

/// Chain metrics for a marker at (or hypothetically at) one cell.
///
/// The four chain fields hold the combined run of both directions on their
/// axis, excluding the reference cell itself. `total_connected` adds `run +
/// 1` for every axis whose run reached two, so it is either zero or at
/// least three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedCell {
    /// Row of the reference cell.
    pub row: usize,
    /// Column of the reference cell.
    pub column: usize,
    /// Combined run on the up/down axis.
    pub vertical_chain: usize,
    /// Combined run on the left/right axis.
    pub horizontal_chain: usize,
    /// Combined run on the upper-left/lower-right axis.
    pub diagonal_left_chain: usize,
    /// Combined run on the upper-right/lower-left axis.
    pub diagonal_right_chain: usize,
    /// Cells connected through the reference cell, counting itself once per
    /// scoring axis.
    pub total_connected: usize,
}

impl ConnectedCell {
    /// Sum of the four axis runs, scoring or not.
    pub fn chain_sum(&self) -> usize {
        self.vertical_chain
            + self.horizontal_chain
            + self.diagonal_left_chain
            + self.diagonal_right_chain
    }
}

/// Counts consecutive `target_marker` cells starting one step away from
/// `(row, column)` in `direction`.
///
/// The scan stops at the grid boundary, at the first cell not holding
/// `target_marker`, or once the run reaches `max_chain`.
pub fn count_run(
    grid: &Grid,
    row: usize,
    column: usize,
    direction: Direction,
    target_marker: char,
    max_chain: usize,
) -> usize {
    let size = grid.size() as isize;
    let (delta_row, delta_column) = direction.delta();
    let mut row = row as isize;
    let mut column = column as isize;
    let mut run = 0;

    loop {
        row += delta_row;
        column += delta_column;

        if row < 0 || row >= size || column < 0 || column >= size {
            break;
        }
        if grid.marker_at(row as usize, column as usize) != Some(target_marker) {
            break;
        }

        run += 1;
        if run >= max_chain {
            break;
        }
    }

    run
}

/// Measures the four axes around `(row, column)` for `target_marker`.
///
/// The cell itself does not have to hold `target_marker`, so callers can
/// score hypothetical placements on empty cells.
pub fn find_connected_cell(
    grid: &Grid,
    row: usize,
    column: usize,
    target_marker: char,
    max_chain: usize,
) -> ConnectedCell {
    let vertical_chain = axis_run(grid, row, column, Direction::Up, target_marker, max_chain);
    let horizontal_chain = axis_run(grid, row, column, Direction::Left, target_marker, max_chain);
    let diagonal_left_chain =
        axis_run(grid, row, column, Direction::UpLeft, target_marker, max_chain);
    let diagonal_right_chain =
        axis_run(grid, row, column, Direction::UpRight, target_marker, max_chain);

    let total_connected = axis_score(vertical_chain)
        + axis_score(horizontal_chain)
        + axis_score(diagonal_left_chain)
        + axis_score(diagonal_right_chain);

    ConnectedCell {
        row,
        column,
        vertical_chain,
        horizontal_chain,
        diagonal_left_chain,
        diagonal_right_chain,
        total_connected,
    }
}

fn axis_run(
    grid: &Grid,
    row: usize,
    column: usize,
    direction: Direction,
    target_marker: char,
    max_chain: usize,
) -> usize {
    count_run(grid, row, column, direction, target_marker, max_chain)
        + count_run(
            grid,
            row,
            column,
            direction.opposite(),
            target_marker,
            max_chain,
        )
}

/// An axis joins `total_connected` only from a run of two, and then counts
/// the reference cell as well.
fn axis_score(run: usize) -> usize {
    if run >= 2 { run + 1 } else { 0 }
}
