//! Square grid of cells addressed by 1-based `(row, column)` coordinates.

mod board;
mod cell;
mod direction;
mod error;

pub use board::SquareBoard;
pub use cell::Cell;
pub use direction::Direction;
pub use error::BoardError;

pub type CoordType = i32;
