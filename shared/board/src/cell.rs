use crate::{CoordType, Direction, SquareBoard};
use common::*;
use derive_more::Display;

/// A single position on a [SquareBoard]. Only ever created by the board that owns it
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "({}, {})", i, j)]
pub struct Cell {
    /// Row, from 1
    i: CoordType,
    /// Column, from 1
    j: CoordType,
}

slog_value_display!(Cell);

impl Cell {
    pub(crate) const fn new(i: CoordType, j: CoordType) -> Self {
        Self { i, j }
    }

    pub const fn i(&self) -> CoordType {
        self.i
    }

    pub const fn j(&self) -> CoordType {
        self.j
    }

    /// The adjacent cell on the given board, or None at the edge
    pub fn neighbour<'b>(&self, board: &'b SquareBoard, direction: Direction) -> Option<&'b Cell> {
        board.neighbour(self, direction)
    }
}
