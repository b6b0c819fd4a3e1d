//! Defines the record of an executed move.

use crate::piece::Kind;
use crate::position::Position;
use std::fmt;

/// A move that has been applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub kind: Kind,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Kind>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}->{}", self.kind, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " x {}", captured)?;
        }
        Ok(())
    }
}
