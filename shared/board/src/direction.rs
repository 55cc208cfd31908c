use crate::CoordType;
use common::*;
use derive_more::Display;
use strum::EnumIter;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

slog_value_display!(Direction);

impl Direction {
    /// (row, column) delta
    pub const fn offset(self) -> (CoordType, CoordType) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn reversed() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Left.reversed(), Direction::Right);

        for dir in Direction::iter() {
            assert_ne!(dir.reversed(), dir);
            assert_eq!(dir.reversed().reversed(), dir);
        }
    }

    #[test]
    fn reversed_offsets_cancel() {
        for dir in Direction::iter() {
            let (di, dj) = dir.offset();
            let (ri, rj) = dir.reversed().offset();
            assert_eq!((di + ri, dj + rj), (0, 0));
            assert_eq!(di.abs() + dj.abs(), 1, "{} is not a unit step", dir);
        }
    }
}
