//! Normalised input consumed by the game.

use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerDown(Position),
}

/// Maps a pointer location to a board cell by dividing through the cell size.
///
/// Returns `None` for locations left of, above, or past the board.
pub fn cell_at(px: f32, py: f32, cell_width: f32, cell_height: f32) -> Option<Position> {
    if [px, py, cell_width, cell_height].iter().any(|v| !v.is_finite()) {
        return None;
    }

    if px < 0.0 || py < 0.0 || cell_width <= 0.0 || cell_height <= 0.0 {
        return None;
    }

    let x = (px / cell_width).floor();
    let y = (py / cell_height).floor();
    if x > u8::MAX as f32 || y > u8::MAX as f32 {
        return None;
    }

    Position::new(x as u8, y as u8)
}
