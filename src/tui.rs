//! The terminal front end: the board is drawn with background colours and
//! driven by mouse clicks.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use engine::assets::ensure_complete;
use engine::constants::BOARD_SIZE;
use engine::snapshot::is_light_square;
use engine::{input, Cell, Color as Side, Game, GlyphSet, Outcome, Position};
use std::io::{self, Write};
use tracing::{debug, info};

// Terminal columns and rows covered by one board cell.
const CELL_COLS: u16 = 4;
const CELL_ROWS: u16 = 2;

// Top-left terminal cell of the board, leaving room for rank labels.
const ORIGIN_COL: u16 = 2;
const ORIGIN_ROW: u16 = 1;

const LIGHT_SQUARE: Color = Color::Rgb { r: 0xEE, g: 0xEE, b: 0xD5 };
const DARK_SQUARE: Color = Color::Rgb { r: 0x7D, g: 0x94, b: 0x5D };
const HIGHLIGHT: Color = Color::Rgb { r: 0xEE, g: 0x72, b: 0xF1 };

/// Restores the terminal when dropped, including on early return.
struct Screen;

impl Screen {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, event::EnableMouseCapture, cursor::Hide)?;
        Ok(Screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, event::DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the game loop until `q`, `Esc` or `Ctrl-C`.
pub fn run() -> anyhow::Result<()> {
    ensure_complete(&GlyphSet)?;

    let mut game = Game::new();
    let _screen = Screen::enter()?;
    let mut out = io::stdout();
    let mut last: Option<String> = None;

    info!("terminal board ready");

    while !game.should_quit() {
        draw(&mut out, &game, last.as_deref())?;

        match event::read()? {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(at) = cell_at(column, row) {
                    last = match game.click(at)? {
                        Outcome::Moved(mv) => Some(mv.to_string()),
                        Outcome::Rejected(reason) => Some(reason.to_string()),
                        Outcome::Selected(_) | Outcome::Ignored => last,
                    };
                }
            }
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => game.request_quit(),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => game.request_quit(),
                KeyCode::Char('n') => {
                    game.reset();
                    last = None;
                }
                _ => {}
            },
            Event::Resize(..) => queue!(out, Clear(ClearType::All))?,
            _ => {}
        }
    }

    debug!("leaving terminal board");
    Ok(())
}

/// Maps a terminal cell to a board cell through the fixed cell size.
fn cell_at(column: u16, row: u16) -> Option<Position> {
    let x = column.checked_sub(ORIGIN_COL)?;
    let y = row.checked_sub(ORIGIN_ROW)?;
    input::cell_at(x as f32, y as f32, CELL_COLS as f32, CELL_ROWS as f32)
}

fn draw(out: &mut impl Write, game: &Game, last: Option<&str>) -> anyhow::Result<()> {
    let snapshot = game.snapshot();

    for (at, content) in snapshot.cells() {
        let background = match content {
            Cell::Occupied { selected: true, .. } => HIGHLIGHT,
            _ if is_light_square(at) => LIGHT_SQUARE,
            _ => DARK_SQUARE,
        };

        let glyph = match game.sprite_at(at, &GlyphSet)? {
            Some(sprite) => sprite.glyph(),
            None => ' ',
        };

        let col = ORIGIN_COL + at.x() as u16 * CELL_COLS;
        let row = ORIGIN_ROW + at.y() as u16 * CELL_ROWS;
        queue!(out, SetBackgroundColor(background), SetForegroundColor(Color::Black))?;
        for dy in 0..CELL_ROWS {
            let line = if dy == 0 { format!(" {glyph}  ") } else { "    ".to_owned() };
            queue!(out, cursor::MoveTo(col, row + dy), Print(line))?;
        }
    }

    queue!(out, ResetColor)?;
    for i in 0..BOARD_SIZE as u16 {
        queue!(
            out,
            cursor::MoveTo(0, ORIGIN_ROW + i * CELL_ROWS),
            Print(i),
            cursor::MoveTo(ORIGIN_COL + i * CELL_COLS + 1, 0),
            Print(i),
        )?;
    }

    let side = ORIGIN_COL + BOARD_SIZE as u16 * CELL_COLS + 3;
    let status = match snapshot.active() {
        Some((_, name)) => format!("{name} to move"),
        None => String::from("waiting to start"),
    };

    let lines = [
        status,
        score_line(game, Side::Black),
        score_line(game, Side::White),
        last.unwrap_or_default().to_owned(),
        String::new(),
        String::from("click: select / move"),
        String::from("n: new game   q: quit"),
    ];

    for (i, line) in lines.iter().enumerate() {
        queue!(
            out,
            cursor::MoveTo(side, ORIGIN_ROW + i as u16),
            Clear(ClearType::UntilNewLine),
            Print(line),
        )?;
    }

    out.flush()?;
    Ok(())
}

fn score_line(game: &Game, side: Side) -> String {
    let player = game.player(side);
    let glyphs: String = player.score().iter().map(|k| k.glyph()).collect();
    format!("{}: {}", player.name(), glyphs)
}
