use crate::CoordType;
use common::*;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BoardError {
    #[error("Board width must be positive, not {0}")]
    InvalidWidth(CoordType),

    #[error("Cell ({i}, {j}) is outside of a board of width {width}")]
    OutOfBounds {
        i: CoordType,
        j: CoordType,
        width: CoordType,
    },
}
