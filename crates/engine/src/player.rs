//! A side of the game and the pieces it has captured.

use crate::constants::{BLACK_PLAYER_NAME, MAX_CAPTURES, WHITE_PLAYER_NAME};
use crate::error::Error;
use crate::piece::{Color, Kind};
use arrayvec::ArrayVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    name: &'static str,
    score: ArrayVec<Kind, MAX_CAPTURES>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        let name = match color {
            Color::Black => BLACK_PLAYER_NAME,
            Color::White => WHITE_PLAYER_NAME,
        };

        Player {
            color,
            name,
            score: ArrayVec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Captured kinds, in capture order.
    pub fn score(&self) -> &[Kind] {
        &self.score
    }

    /// Appends a captured kind. The score never shrinks.
    pub fn record_capture(&mut self, kind: Kind) -> Result<(), Error> {
        self.score
            .try_push(kind)
            .map_err(|_| Error::ScoreOverflow { player: self.color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Role;

    #[test]
    fn players_are_named_after_their_color() {
        assert_eq!(Player::new(Color::Black).name(), "BLACK");
        assert_eq!(Player::new(Color::White).name(), "WHITE");
    }

    #[test]
    fn score_is_bounded() {
        let mut player = Player::new(Color::White);
        let pawn = Kind::new(Color::Black, Role::Pawn);

        for _ in 0..MAX_CAPTURES {
            player.record_capture(pawn).unwrap();
        }

        assert_eq!(player.record_capture(pawn), Err(Error::ScoreOverflow { player: Color::White }));
        assert_eq!(player.score().len(), MAX_CAPTURES);
    }
}
