//! Board model, selection state machine and movement rules for a two-player chess board.

pub mod assets;
pub mod board;
pub mod constants;
pub mod direction;
pub mod error;
pub mod game;
pub mod input;
pub mod r#move;
pub mod piece;
pub mod player;
pub mod position;
pub mod rules;
pub mod snapshot;

pub use assets::{AssetError, AssetResolver, GlyphSet, Sprite};
pub use board::Board;
pub use error::Error;
pub use game::{Game, Outcome, Selected};
pub use input::Event;
pub use piece::{Color, Kind, Piece, Role};
pub use player::Player;
pub use position::Position;
pub use rules::Rejection;
pub use snapshot::{Cell, Snapshot};
