//! The game aggregate: board, players, selection and turn.

use crate::assets::{AssetError, AssetResolver, Sprite};
use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::Error;
use crate::input::Event;
use crate::piece::{Color, Piece};
use crate::player::Player;
use crate::position::Position;
use crate::r#move::Move;
use crate::rules::{self, Rejection};
use crate::snapshot::{Cell, Snapshot};
use tracing::{debug, info, instrument};

/// The piece currently picked up, and the side that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
    pub at: Position,
    pub by: Color,
}

/// What a single input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// An own piece is now selected.
    Selected(Position),
    /// A move was applied and the turn passed.
    Moved(Move),
    /// The move was refused; the selection is kept.
    Rejected(Rejection),
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    black: Player,
    white: Player,
    selected: Option<Selected>,
    active: Option<Color>,
    quit: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game in the standard layout with black to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    /// A game over an arbitrary board, black to move.
    pub fn with_board(board: Board) -> Self {
        Game {
            board,
            black: Player::new(Color::Black),
            white: Player::new(Color::White),
            selected: None,
            active: Some(Color::Black),
            quit: false,
        }
    }

    /// Starts over from the standard layout. Previous pieces are dropped.
    pub fn reset(&mut self) {
        *self = Game::new();
        info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// The side to move, or `None` before the game has started.
    pub fn active(&self) -> Option<&Player> {
        self.active.map(|c| self.player(c))
    }

    pub fn selected(&self) -> Option<Selected> {
        self.selected
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|s| self.board.occupant(s.at))
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, event: Event) -> Result<Outcome, Error> {
        match event {
            Event::PointerDown(at) => self.click(at),
        }
    }

    /// Advances the selection state machine by a pointer-down on `at`.
    #[instrument(level = "debug", skip_all, fields(%at), err)]
    pub fn click(&mut self, at: Position) -> Result<Outcome, Error> {
        let Some(active) = self.active else {
            return Ok(Outcome::Ignored);
        };

        let occupant = self.board.occupant(at).map(Piece::color);

        match self.selected {
            None if occupant == Some(active) => Ok(self.select(at, active)),
            None => Ok(Outcome::Ignored),
            Some(s) if occupant == Some(s.by) => Ok(self.select(at, active)),
            Some(s) => self.execute(s.at, at),
        }
    }

    fn select(&mut self, at: Position, by: Color) -> Outcome {
        if self.selected != Some(Selected { at, by }) {
            debug!(%at, player = self.player(by).name(), "selected");
        }

        self.selected = Some(Selected { at, by });
        Outcome::Selected(at)
    }

    /// Applies the move of the piece on `from` to `to` if the rules allow it.
    ///
    /// Only the side to move may move; anything else is ignored. A refused move
    /// leaves the game untouched. On success the active player's score records
    /// any capture, the selection is cleared and the turn passes.
    #[instrument(level = "debug", skip_all, fields(%from, %to), err)]
    pub fn execute(&mut self, from: Position, to: Position) -> Result<Outcome, Error> {
        let Some(active) = self.active else {
            return Ok(Outcome::Ignored);
        };

        let Some(piece) = self.board.occupant(from) else {
            return Ok(Outcome::Ignored);
        };

        if piece.color() != active {
            debug!(kind = %piece.kind(), "not this side's turn");
            return Ok(Outcome::Ignored);
        }

        if let Err(reason) = rules::check(&self.board, piece, to) {
            debug!(kind = %piece.kind(), %reason, "move rejected");
            return Ok(Outcome::Rejected(reason));
        }

        let kind = piece.kind();
        let captured = self.board.occupant(to).map(Piece::kind);

        if let Some(victim) = captured {
            self.player_mut(active).record_capture(victim)?;
            drop(self.board.remove(to));
        }

        let piece = self.board.remove(from);
        self.board.set(to, piece);

        self.selected = None;
        self.active = Some(!active);

        let mv = Move { kind, from, to, captured };
        info!(player = self.player(active).name(), %mv, "moved");

        Ok(Outcome::Moved(mv))
    }

    /// The sprite of the piece on `at`, creating it on first use.
    pub fn sprite_at<R: AssetResolver + ?Sized>(
        &self,
        at: Position,
        resolver: &R,
    ) -> Result<Option<&Sprite>, AssetError> {
        self.board.occupant(at).map(|p| p.sprite(resolver)).transpose()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let selected = self.selected.map(|s| s.at);

        for piece in self.board.pieces() {
            let at = piece.position();
            cells[at.y() as usize][at.x() as usize] = Cell::Occupied {
                kind: piece.kind(),
                selected: selected == Some(at),
            };
        }

        Snapshot {
            cells,
            selected,
            active: self.active().map(|p| (p.color(), p.name())),
            black_score: self.black.score().to_vec(),
            white_score: self.white.score().to_vec(),
        }
    }
}
