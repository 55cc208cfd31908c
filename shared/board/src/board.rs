use common::*;
use strum::IntoEnumIterator;

use crate::{BoardError, Cell, CoordType, Direction};

/// Square grid of `width * width` cells, all created up front. Coordinates run from 1 to `width`
/// inclusive in both dimensions.
#[derive(Clone, Debug)]
pub struct SquareBoard {
    width: CoordType,
    /// Row-major
    cells: Box<[Cell]>,
}

impl SquareBoard {
    pub fn new(width: CoordType) -> Result<Self, BoardError> {
        if width < 1 {
            return Err(BoardError::InvalidWidth(width));
        }

        let cells = (1..=width)
            .cartesian_product(1..=width)
            .map(|(i, j)| Cell::new(i, j))
            .collect::<Box<[Cell]>>();

        debug!("created square board"; "width" => width, "cells" => cells.len());
        Ok(Self { width, cells })
    }

    pub fn width(&self) -> CoordType {
        self.width
    }

    #[inline]
    pub fn contains(&self, i: CoordType, j: CoordType) -> bool {
        let range = 1..=self.width;
        range.contains(&i) && range.contains(&j)
    }

    /// Coords must be in range
    #[inline]
    fn flatten(&self, i: CoordType, j: CoordType) -> usize {
        debug_assert!(self.contains(i, j), "({}, {}) out of range", i, j);
        (i - 1) as usize * self.width as usize + (j - 1) as usize
    }

    pub fn cell_or_none(&self, i: CoordType, j: CoordType) -> Option<&Cell> {
        self.contains(i, j)
            .as_some_from(|| &self.cells[self.flatten(i, j)])
    }

    /// Strict version of [cell_or_none](Self::cell_or_none) for coordinates the caller expects
    /// to be valid
    pub fn cell(&self, i: CoordType, j: CoordType) -> Result<&Cell, BoardError> {
        self.cell_or_none(i, j).ok_or(BoardError::OutOfBounds {
            i,
            j,
            width: self.width,
        })
    }

    /// Every cell exactly once, in row-major order
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Cells in row `i` for each column in `js`, in the order given. Out of range columns are
    /// skipped
    pub fn row(&self, i: CoordType, js: impl IntoIterator<Item = CoordType>) -> Vec<&Cell> {
        js.into_iter()
            .filter_map(|j| self.cell_or_none(i, j))
            .collect()
    }

    /// Cells in column `j` for each row in `is`, in the order given. Out of range rows are
    /// skipped
    pub fn column(&self, is: impl IntoIterator<Item = CoordType>, j: CoordType) -> Vec<&Cell> {
        is.into_iter()
            .filter_map(|i| self.cell_or_none(i, j))
            .collect()
    }

    pub fn neighbour(&self, cell: &Cell, direction: Direction) -> Option<&Cell> {
        let (di, dj) = direction.offset();
        let i = cell.i().checked_add(di)?;
        let j = cell.j().checked_add(dj)?;
        self.cell_or_none(i, j)
    }

    /// Filters out neighbours off the edge of the board
    pub fn neighbours<'a>(&'a self, cell: &Cell) -> impl Iterator<Item = (Direction, &'a Cell)> + 'a {
        let cell = *cell;
        Direction::iter().filter_map(move |dir| self.neighbour(&cell, dir).map(|n| (dir, n)))
    }
}
