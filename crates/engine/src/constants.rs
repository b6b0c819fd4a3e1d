//! Constants used across the chess engine.

use crate::piece::{Color, Kind, Role};

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// The most pieces one side can ever capture.
pub const MAX_CAPTURES: usize = 16;

pub const BLACK_PLAYER_NAME: &str = "BLACK";
pub const WHITE_PLAYER_NAME: &str = "WHITE";

/// Rank where black pawns start and may advance two cells.
pub const BLACK_PAWN_RANK: u8 = 1;
/// Rank where white pawns start and may advance two cells.
pub const WHITE_PAWN_RANK: u8 = 6;

const fn b(role: Role) -> Option<Kind> {
    Some(Kind::new(Color::Black, role))
}

const fn w(role: Role) -> Option<Kind> {
    Some(Kind::new(Color::White, role))
}

const E: Option<Kind> = None;

use Role::{Bishop as B, King as K, Knight as N, Pawn as P, Queen as Q, Rook as R};

/// The standard starting layout, indexed `[y][x]`. Black sits on ranks 0 and 1.
///
/// `None` marks an empty template slot and is never placed as a piece.
pub const STARTING_LAYOUT: [[Option<Kind>; BOARD_SIZE]; BOARD_SIZE] = [
    [b(R), b(N), b(B), b(Q), b(K), b(B), b(N), b(R)],
    [b(P), b(P), b(P), b(P), b(P), b(P), b(P), b(P)],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [w(P), w(P), w(P), w(P), w(P), w(P), w(P), w(P)],
    [w(R), w(N), w(B), w(Q), w(K), w(B), w(N), w(R)],
];
