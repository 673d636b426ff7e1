//! Square marker grid with flat cell-number addressing.

use std::collections::BTreeSet;

/// An N×N grid of single-character markers.
///
/// Cells are addressed either by `(row, column)` or by a flat cell number
/// counted row-major from the top-left corner, so `cell_number = row * size
/// + column`. The two addressings are a bijection over the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty grid of `size` × `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Column component of a flat cell number.
    pub fn column_of(&self, cell_number: usize) -> usize {
        cell_number % self.size
    }

    /// Row component of a flat cell number.
    pub fn row_of(&self, cell_number: usize) -> usize {
        cell_number / self.size
    }

    /// Flat cell number of a `(row, column)` position.
    pub fn cell_number_of(&self, row: usize, column: usize) -> usize {
        row * self.size + column
    }

    /// Marker occupying `(row, column)`, or `None` for an empty cell.
    ///
    /// Both coordinates must be less than [`size`](Self::size).
    pub fn marker_at(&self, row: usize, column: usize) -> Option<char> {
        self.cells[self.cell_number_of(row, column)]
    }

    /// Writes `marker` into the cell addressed by `cell_number`.
    ///
    /// Returns `false`, leaving the grid untouched, when the cell number
    /// falls outside the grid or the cell is already occupied.
    pub fn mark(&mut self, cell_number: usize, marker: char) -> bool {
        if self.row_of(cell_number) >= self.size || self.cells[cell_number].is_some() {
            return false;
        }
        self.cells[cell_number] = Some(marker);
        true
    }

    /// Cell numbers of every empty cell, in ascending order.
    pub fn available_cells(&self) -> BTreeSet<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(cell_number, _)| cell_number)
            .collect()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empties every cell; the size is kept.
    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }
}
