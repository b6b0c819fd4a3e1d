//! Movement directions and the obstruction tracer for sliding pieces.

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::Error;
use crate::position::Position;
use std::cmp::Ordering;

/// One of the eight compass directions. `Up` points towards rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Direction {
    /// The direction from `from` to `to`, derived from the signs of the displacement.
    pub fn between(from: Position, to: Position) -> Result<Self, Error> {
        let (dx, dy) = from.delta(to);
        use Ordering::*;

        Ok(match (dx.cmp(&0), dy.cmp(&0)) {
            (Equal, Equal) => return Err(Error::DegenerateDirection),
            (Equal, Less) => Direction::Up,
            (Equal, Greater) => Direction::Down,
            (Less, Equal) => Direction::Left,
            (Greater, Equal) => Direction::Right,
            (Less, Less) => Direction::UpLeft,
            (Less, Greater) => Direction::DownLeft,
            (Greater, Less) => Direction::UpRight,
            (Greater, Greater) => Direction::DownRight,
        })
    }

    /// Unit step `(dx, dy)`.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::UpRight => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.step();
        dx != 0 && dy != 0
    }
}

/// Whether every cell strictly between `start` and `end` along `direction` is empty.
///
/// `end` must be reachable from `start` by whole steps of `direction`.
pub fn path_clear(board: &Board, start: Position, end: Position, direction: Direction) -> bool {
    let (dx, dy) = direction.step();
    let mut cursor = start;

    for _ in 0..BOARD_SIZE {
        match cursor.offset(dx, dy) {
            Some(next) if next == end => return true,
            Some(next) if board.is_empty(next) => cursor = next,
            _ => return false,
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Kind, Role};

    fn at(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn zero_displacement_has_no_direction() {
        assert_eq!(Direction::between(at(2, 2), at(2, 2)), Err(Error::DegenerateDirection));
    }

    #[test]
    fn direction_follows_displacement_signs() {
        assert_eq!(Direction::between(at(0, 1), at(0, 3)), Ok(Direction::Down));
        assert_eq!(Direction::between(at(1, 6), at(1, 4)), Ok(Direction::Up));
        assert_eq!(Direction::between(at(4, 4), at(1, 4)), Ok(Direction::Left));
        assert_eq!(Direction::between(at(2, 0), at(4, 2)), Ok(Direction::DownRight));
        assert_eq!(Direction::between(at(5, 7), at(2, 4)), Ok(Direction::UpLeft));
        assert!(Direction::UpLeft.is_diagonal());
        assert!(!Direction::Right.is_diagonal());
    }

    #[test]
    fn adjacent_cells_are_trivially_clear() {
        let board = Board::standard();
        assert!(path_clear(&board, at(0, 0), at(0, 1), Direction::Down));
    }

    #[test]
    fn own_pawn_blocks_rook() {
        let board = Board::standard();
        assert!(!path_clear(&board, at(0, 0), at(0, 3), Direction::Down));
    }

    #[test]
    fn pawn_row_blocks_bishop_diagonal() {
        let board = Board::standard();
        assert!(!path_clear(&board, at(2, 0), at(4, 2), Direction::DownRight));
    }

    #[test]
    fn open_file_is_clear_up_to_the_target() {
        let mut board = Board::new();
        board.place(Some(Kind::new(Color::Black, Role::Rook)), at(3, 0)).unwrap();
        board.place(Some(Kind::new(Color::White, Role::Pawn)), at(3, 7)).unwrap();
        assert!(path_clear(&board, at(3, 0), at(3, 7), Direction::Down));
        assert!(!path_clear(&board, at(3, 0), at(3, 7), Direction::Right));
    }
}
