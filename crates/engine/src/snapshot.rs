//! Read-only view of the game consumed by renderers once per frame.

use crate::constants::BOARD_SIZE;
use crate::piece::{Color, Kind};
use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied {
        kind: Kind,
        selected: bool,
    },
}

/// Light and dark squares alternate in a brick pattern starting light at `(0, 0)`.
pub fn is_light_square(at: Position) -> bool {
    (at.x() + at.y()) % 2 == 0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) selected: Option<Position>,
    pub(crate) active: Option<(Color, &'static str)>,
    pub(crate) black_score: Vec<Kind>,
    pub(crate) white_score: Vec<Kind>,
}

impl Snapshot {
    pub fn cell(&self, at: Position) -> Cell {
        self.cells[at.y() as usize][at.x() as usize]
    }

    /// Every cell paired with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(|at| (at, self.cell(at)))
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Colour and display name of the side to move.
    pub fn active(&self) -> Option<(Color, &'static str)> {
        self.active
    }

    /// Kinds captured by `color`.
    pub fn score(&self, color: Color) -> &[Kind] {
        match color {
            Color::Black => &self.black_score,
            Color::White => &self.white_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_follow_brick_pattern() {
        assert!(is_light_square(Position::new(0, 0).unwrap()));
        assert!(!is_light_square(Position::new(1, 0).unwrap()));
        assert!(!is_light_square(Position::new(0, 1).unwrap()));
        assert!(is_light_square(Position::new(7, 7).unwrap()));
    }
}
