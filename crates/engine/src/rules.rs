//! Per-role movement rules.

use crate::board::Board;
use crate::constants::{BLACK_PAWN_RANK, WHITE_PAWN_RANK};
use crate::direction::{path_clear, Direction};
use crate::piece::{Color, Piece, Role};
use crate::position::Position;
use thiserror::Error;

/// Why a move was refused. Refusals never alter the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the piece is already on that cell")]
    NoDisplacement,
    #[error("the destination holds an allied piece")]
    OwnPiece,
    #[error("a {0} cannot move that way")]
    Pattern(Role),
    #[error("the path is blocked")]
    Blocked,
    #[error("{0} movement is not supported")]
    Unsupported(Role),
}

/// Decides whether `piece` may move from its current cell to `target`.
pub fn check(board: &Board, piece: &Piece, target: Position) -> Result<(), Rejection> {
    let from = piece.position();
    let (dx, dy) = from.delta(target);

    if dx == 0 && dy == 0 {
        return Err(Rejection::NoDisplacement);
    }

    let occupant = board.occupant(target);
    if occupant.is_some_and(|o| o.is_allied(piece)) {
        return Err(Rejection::OwnPiece);
    }

    match piece.role() {
        Role::Pawn => {
            let (forward, start_rank) = match piece.color() {
                Color::Black => (1, BLACK_PAWN_RANK),
                Color::White => (-1, WHITE_PAWN_RANK),
            };

            let legal = match occupant {
                None => dx == 0 && (dy == forward || (dy == 2 * forward && from.y() == start_rank)),
                Some(_) => dy == forward && dx.abs() == 1,
            };

            legal.then_some(()).ok_or(Rejection::Pattern(Role::Pawn))
        }

        Role::Rook if (dx == 0) != (dy == 0) => slide(board, from, target),
        Role::Bishop if dx.abs() == dy.abs() => slide(board, from, target),
        role @ (Role::Rook | Role::Bishop) => Err(Rejection::Pattern(role)),

        role @ (Role::Knight | Role::Queen | Role::King) => Err(Rejection::Unsupported(role)),
    }
}

pub fn is_legal(board: &Board, piece: &Piece, target: Position) -> bool {
    check(board, piece, target).is_ok()
}

fn slide(board: &Board, from: Position, to: Position) -> Result<(), Rejection> {
    let direction = Direction::between(from, to).map_err(|_| Rejection::NoDisplacement)?;
    if path_clear(board, from, to, direction) {
        Ok(())
    } else {
        Err(Rejection::Blocked)
    }
}
