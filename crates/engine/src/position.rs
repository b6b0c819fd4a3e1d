//! Board cell coordinates.

use crate::constants::BOARD_SIZE;
use std::fmt;

/// A cell of the board, `x` is the file and `y` the rank, both in `0..8`.
///
/// Rank 0 is the top row as drawn on screen, where black starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Returns `None` if either coordinate falls outside the board.
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
            Some(Position { x, y })
        } else {
            None
        }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    /// Signed displacement `(dx, dy)` from `self` to `to`.
    pub fn delta(self, to: Position) -> (i8, i8) {
        (to.x as i8 - self.x as i8, to.y as i8 - self.y as i8)
    }

    /// The cell reached by stepping `(dx, dy)`, if it is still on the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Position> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Position::new(x as u8, y as u8)
    }

    /// Every cell, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Position { x, y }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub fn any_position() -> impl Strategy<Value = Position> {
        (0..8u8, 0..8u8).prop_map(|(x, y)| Position { x, y })
    }

    #[test]
    fn rejects_coordinates_off_the_board() {
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
        assert!(Position::new(7, 7).is_some());
    }

    #[test]
    fn enumerates_all_sixty_four_cells() {
        assert_eq!(Position::all().count(), 64);
    }

    proptest! {
        #[test]
        fn offset_by_delta_lands_on_target(a in any_position(), b in any_position()) {
            let (dx, dy) = a.delta(b);
            prop_assert_eq!(a.offset(dx, dy), Some(b));
        }
    }
}
