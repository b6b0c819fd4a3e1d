//! The board window, built with Iced.
//!
//! `ChessApp` owns the `Game`. The canvas turns left clicks into board cells and
//! sends them back as `Message::CellClicked`; `update` feeds them to the game.

use engine::assets::ensure_complete;
use engine::snapshot::is_light_square;
use engine::{input, Cell, Color as Side, Game, GlyphSet, Kind, Outcome, Position};
use iced::mouse::{Cursor, Event as MouseEvent};
use iced::widget::canvas::event::Status;
use iced::widget::canvas::{Event as CanvasEvent, Geometry, Program, Stroke};
use iced::widget::{canvas, text, Button, Column, Container, Row};
use iced::{
    executor, window, Application, Command, Element, Font, Length, Pixels, Point, Rectangle, Renderer, Settings,
    Size, Subscription, Theme,
};
use tracing::{debug, error, info};

use crate::config::Config;

/// Opens the board window and blocks until it is closed.
pub fn run(config: Config) -> anyhow::Result<()> {
    ensure_complete(&GlyphSet)?;

    let size = Size::new(config.screen_width + 40.0, config.screen_height + 180.0);
    info!(width = config.screen_width, height = config.screen_height, "opening board window");

    ChessApp::run(Settings {
        window: window::Settings {
            size,
            ..window::Settings::default()
        },
        flags: config,
        ..Settings::default()
    })?;

    Ok(())
}

#[derive(Debug, Clone)]
enum Message {
    NewGame,
    CellClicked(Position),
}

struct ChessApp {
    game: Game,
    config: Config,
    board_cache: canvas::Cache,
}

/// Whether an outcome changed anything the board canvas draws.
fn needs_redraw(outcome: &Outcome) -> bool {
    matches!(outcome, Outcome::Selected(_) | Outcome::Moved(_))
}

fn score_line(name: &str, captured: &[Kind]) -> String {
    let glyphs: String = captured.iter().map(|k| k.glyph()).collect();
    format!("{name}: {glyphs}")
}

impl Application for ChessApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(config: Config) -> (Self, Command<Message>) {
        let app = ChessApp {
            game: Game::new(),
            config,
            board_cache: canvas::Cache::new(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Chess")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CellClicked(at) => match self.game.click(at) {
                Ok(Outcome::Rejected(reason)) => {
                    debug!(%at, %reason, "click ignored");
                    Command::none()
                }
                Ok(outcome) => {
                    if needs_redraw(&outcome) {
                        self.board_cache.clear();
                    }
                    Command::none()
                }
                Err(e) => {
                    error!("{e}");
                    window::close(window::Id::MAIN)
                }
            },
            Message::NewGame => {
                self.game.reset();
                self.board_cache.clear();
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }

    fn view(&'_ self) -> Element<'_, Message> {
        let snapshot = self.game.snapshot();

        let status = match snapshot.active() {
            Some((_, name)) => format!("{name} to move"),
            None => String::from("Waiting to start"),
        };

        let board = canvas(BoardCanvas::new(&self.game, &self.config, &self.board_cache))
            .width(Length::Fixed(self.config.screen_width))
            .height(Length::Fixed(self.config.screen_height));

        let font = Font::with_name(self.config.piece_font);
        let scores = Column::new()
            .spacing(4)
            .push(text(score_line(self.game.player(Side::Black).name(), snapshot.score(Side::Black))).font(font))
            .push(text(score_line(self.game.player(Side::White).name(), snapshot.score(Side::White))).font(font));

        let controls = Row::new()
            .spacing(10)
            .push(Button::new(text("New Game")).on_press(Message::NewGame));

        let content = Column::new()
            .spacing(20)
            .align_items(iced::Alignment::Center)
            .push(text(status).size(Pixels(24.0)))
            .push(board)
            .push(scores)
            .push(controls);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

struct BoardCanvas<'a> {
    game: &'a Game,
    config: &'a Config,
    cache: &'a canvas::Cache,
}

impl<'a> BoardCanvas<'a> {
    fn new(game: &'a Game, config: &'a Config, cache: &'a canvas::Cache) -> Self {
        Self { game, config, cache }
    }

    fn cell_origin(&self, at: Position) -> Point {
        Point::new(
            at.x() as f32 * self.config.cell_width(),
            at.y() as f32 * self.config.cell_height(),
        )
    }
}

impl<'a> Program<Message> for BoardCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let board = self.cache.draw(renderer, bounds.size(), |frame| {
            let cell = Size::new(self.config.cell_width(), self.config.cell_height());
            let snapshot = self.game.snapshot();

            for (at, content) in snapshot.cells() {
                let origin = self.cell_origin(at);
                let color = if is_light_square(at) {
                    self.config.light_square
                } else {
                    self.config.dark_square
                };
                frame.fill(&canvas::Path::rectangle(origin, cell), color);

                if let Cell::Occupied { .. } = content {
                    let sprite = match self.game.sprite_at(at, &GlyphSet) {
                        Ok(Some(sprite)) => sprite,
                        Ok(None) => continue,
                        Err(e) => {
                            error!("{e}");
                            continue;
                        }
                    };

                    frame.fill_text(canvas::Text {
                        content: sprite.glyph().to_string(),
                        position: Point::new(origin.x + cell.width / 2.0, origin.y + cell.height / 2.0),
                        color: iced::Color::BLACK,
                        size: Pixels(cell.height * 0.8),
                        font: Font::with_name(self.config.piece_font),
                        horizontal_alignment: iced::alignment::Horizontal::Center,
                        vertical_alignment: iced::alignment::Vertical::Center,
                        ..canvas::Text::default()
                    });
                }
            }

            if let Some(at) = snapshot.selected() {
                let inset = self.config.highlight_width / 2.0;
                let origin = self.cell_origin(at);
                let path = canvas::Path::rectangle(
                    Point::new(origin.x + inset, origin.y + inset),
                    Size::new(cell.width - 2.0 * inset, cell.height - 2.0 * inset),
                );
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(self.config.highlight_width)
                        .with_color(self.config.highlight),
                );
            }
        });

        vec![board]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: CanvasEvent,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (Status, Option<Message>) {
        if let CanvasEvent::Mouse(MouseEvent::ButtonPressed(iced::mouse::Button::Left)) = event {
            if let Some(pos) = cursor.position_in(bounds) {
                let cell = input::cell_at(pos.x, pos.y, self.config.cell_width(), self.config.cell_height());
                if let Some(at) = cell {
                    return (Status::Captured, Some(Message::CellClicked(at)));
                }
            }
        }
        (Status::Ignored, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Role;

    #[test]
    fn score_line_lists_captured_glyphs() {
        let captured = [Kind::new(Side::White, Role::Pawn), Kind::new(Side::White, Role::Rook)];
        assert_eq!(score_line("BLACK", &captured), "BLACK: ♙♖");
        assert_eq!(score_line("WHITE", &[]), "WHITE: ");
    }

    #[test]
    fn only_visible_changes_invalidate_the_board() {
        let mut game = Game::new();
        let at = |x, y| Position::new(x, y).unwrap();

        let ignored = game.click(at(4, 4)).unwrap();
        assert!(!needs_redraw(&ignored));

        let selected = game.click(at(0, 1)).unwrap();
        assert!(needs_redraw(&selected));

        let rejected = game.click(at(0, 5)).unwrap();
        assert!(!needs_redraw(&rejected));

        let moved = game.click(at(0, 3)).unwrap();
        assert!(needs_redraw(&moved));
    }
}
