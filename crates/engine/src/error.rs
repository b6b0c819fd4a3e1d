use crate::assets::AssetError;
use crate::piece::Color;
use thiserror::Error;

/// Failures that are fatal to the game. Illegal moves are not among them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot construct a piece from an empty slot")]
    InvalidPiece,
    #[error("{player} already holds the maximum number of captures")]
    ScoreOverflow { player: Color },
    #[error("direction is undefined for a zero displacement")]
    DegenerateDirection,
    #[error(transparent)]
    Asset(#[from] AssetError),
}
