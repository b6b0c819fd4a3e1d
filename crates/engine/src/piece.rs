//! Piece identity: colour, role and the owned visual handle.

use crate::assets::{AssetError, AssetResolver, Sprite};
use crate::position::Position;
use once_cell::sync::OnceCell;
use std::fmt;
use std::ops::Not;
use tracing::debug;

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "black",
            Color::White => "white",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    pub const ALL: [Role; 6] = [Role::King, Role::Queen, Role::Rook, Role::Bishop, Role::Knight, Role::Pawn];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Role::King => "king",
            Role::Queen => "queen",
            Role::Rook => "rook",
            Role::Bishop => "bishop",
            Role::Knight => "knight",
            Role::Pawn => "pawn",
        })
    }
}

/// The role and colour of a piece, e.g. a black pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind {
    pub color: Color,
    pub role: Role,
}

impl Kind {
    pub const fn new(color: Color, role: Role) -> Self {
        Kind { color, role }
    }

    /// Two kinds are allied iff they share a colour.
    pub fn is_allied(self, other: Kind) -> bool {
        self.color == other.color
    }

    /// Letter used in board diagrams, upper case for white.
    pub fn letter(self) -> char {
        let c = match self.role {
            Role::King => 'k',
            Role::Queen => 'q',
            Role::Rook => 'r',
            Role::Bishop => 'b',
            Role::Knight => 'n',
            Role::Pawn => 'p',
        };

        match self.color {
            Color::Black => c,
            Color::White => c.to_ascii_uppercase(),
        }
    }

    pub fn glyph(self) -> char {
        match (self.color, self.role) {
            (Color::White, Role::King) => '♔',
            (Color::White, Role::Queen) => '♕',
            (Color::White, Role::Rook) => '♖',
            (Color::White, Role::Bishop) => '♗',
            (Color::White, Role::Knight) => '♘',
            (Color::White, Role::Pawn) => '♙',
            (Color::Black, Role::King) => '♚',
            (Color::Black, Role::Queen) => '♛',
            (Color::Black, Role::Rook) => '♜',
            (Color::Black, Role::Bishop) => '♝',
            (Color::Black, Role::Knight) => '♞',
            (Color::Black, Role::Pawn) => '♟',
        }
    }
}

impl Kind {
    /// All twelve live kinds.
    pub fn all() -> impl Iterator<Item = Kind> {
        Color::ALL
            .into_iter()
            .flat_map(|color| Role::ALL.into_iter().map(move |role| Kind::new(color, role)))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

/// A live piece on the board.
///
/// The kind never changes after construction. The position is rewritten by the
/// board whenever the piece is stored into a cell, so both always agree.
#[derive(Debug)]
pub struct Piece {
    kind: Kind,
    position: Position,
    sprite: OnceCell<Sprite>,
}

impl Piece {
    pub fn new(kind: Kind, position: Position) -> Self {
        Piece {
            kind,
            position,
            sprite: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.kind.color
    }

    pub fn role(&self) -> Role {
        self.kind.role
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn is_allied(&self, other: &Piece) -> bool {
        self.kind.is_allied(other.kind)
    }

    /// The visual handle, resolved on first use and kept until the piece is dropped.
    pub fn sprite<R: AssetResolver + ?Sized>(&self, resolver: &R) -> Result<&Sprite, AssetError> {
        self.sprite.get_or_try_init(|| {
            let sprite = resolver.resolve(self.kind)?;
            debug!(kind = %self.kind, at = %self.position, id = sprite.id(), "sprite created");
            Ok(sprite)
        })
    }

    /// Whether the visual handle has been created yet.
    pub fn has_sprite(&self) -> bool {
        self.sprite.get().is_some()
    }
}
