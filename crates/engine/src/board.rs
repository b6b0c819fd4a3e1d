//! The 8x8 grid of pieces.

use crate::constants::{BOARD_SIZE, STARTING_LAYOUT};
use crate::error::Error;
use crate::piece::{Kind, Piece};
use crate::position::Position;
use std::fmt;

/// Exclusive owner of every live piece.
///
/// Each cell holds at most one piece and a stored piece always reports the
/// cell it sits in as its position.
#[derive(Debug, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard starting position, black on ranks 0 and 1.
    pub fn standard() -> Self {
        // The compiled-in layout only ever places live kinds.
        Self::from_layout(&STARTING_LAYOUT).expect("starting layout holds only live kinds")
    }

    /// Builds a board from a `[y][x]` template, placing every occupied slot.
    pub fn from_layout(layout: &[[Option<Kind>; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, Error> {
        let mut board = Board::new();
        for at in Position::all() {
            let slot = layout[at.y() as usize][at.x() as usize];
            if slot.is_some() {
                board.place(slot, at)?;
            }
        }
        Ok(board)
    }

    /// Constructs a piece from a template slot at `at`, replacing any occupant.
    pub fn place(&mut self, slot: Option<Kind>, at: Position) -> Result<(), Error> {
        let kind = slot.ok_or(Error::InvalidPiece)?;
        self.set(at, Some(Piece::new(kind, at)));
        Ok(())
    }

    pub fn occupant(&self, at: Position) -> Option<&Piece> {
        self.cells[at.y() as usize][at.x() as usize].as_ref()
    }

    /// Detaches the piece at `at`, handing its ownership to the caller.
    pub fn remove(&mut self, at: Position) -> Option<Piece> {
        self.cells[at.y() as usize][at.x() as usize].take()
    }

    /// Overwrites a cell and returns whatever was there.
    ///
    /// A stored piece has its position rewritten to `at`.
    pub fn set(&mut self, at: Position, piece: Option<Piece>) -> Option<Piece> {
        let piece = piece.map(|mut p| {
            p.set_position(at);
            p
        });

        std::mem::replace(&mut self.cells[at.y() as usize][at.x() as usize], piece)
    }

    pub fn is_empty(&self, at: Position) -> bool {
        self.occupant(at).is_none()
    }

    /// All live pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().flatten()
    }

    /// Whether every stored piece agrees with the cell holding it.
    pub fn is_consistent(&self) -> bool {
        Position::all().all(|at| self.occupant(at).is_none_or(|p| p.position() == at))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for y in 0..BOARD_SIZE {
            write!(f, "{} | ", y)?;
            for x in 0..BOARD_SIZE {
                let c = self.cells[y][x].as_ref().map_or('.', |p| p.kind().letter());
                write!(f, "{} ", c)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    0 1 2 3 4 5 6 7")
    }
}
