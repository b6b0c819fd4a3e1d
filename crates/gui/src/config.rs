//! Configuration for the board window.

use engine::constants::BOARD_SIZE;
use iced::Color;

#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,

    // Board colours
    pub light_square: Color,
    pub dark_square: Color,
    pub highlight: Color,
    pub highlight_width: f32,

    /// Font family that carries the chess glyphs.
    pub piece_font: &'static str,
}

impl Config {
    pub fn cell_width(&self) -> f32 {
        self.screen_width / BOARD_SIZE as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.screen_height / BOARD_SIZE as f32
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 600.0,
            screen_height: 600.0,
            light_square: Color::from_rgb8(0xEE, 0xEE, 0xD5),
            dark_square: Color::from_rgb8(0x7D, 0x94, 0x5D),
            highlight: Color::from_rgb8(0xEE, 0x72, 0xF1),
            highlight_width: 4.0,
            piece_font: "DejaVu Sans",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cells_are_seventy_five_pixels() {
        let config = Config::default();
        assert_eq!(config.cell_width(), 75.0);
        assert_eq!(config.cell_height(), 75.0);
    }
}
