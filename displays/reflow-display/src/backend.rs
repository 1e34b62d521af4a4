//! Text-cell display trait
//!
//! Defines the interface an application uses to place text on the panel
//! by character cell instead of by pixel column.

use crate::config::GLYPH_WIDTH;
use crate::controller::UnitCanvas;
use crate::error::LcdError;
use crate::renderer::{CharSink, TextRenderer};

/// Character-cell text display
pub trait TextDisplay {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), LcdError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), LcdError>;

    /// Draw text and blank the remainder of the row
    fn draw_line(&mut self, row: u8, text: &str) -> Result<(), LcdError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), LcdError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

impl<C: UnitCanvas> TextRenderer<C> {
    /// Position at a character cell and render, leaving the session open
    fn render_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), LcdError> {
        let (columns, rows) = self.dimensions();
        if row >= rows || col >= columns {
            return Err(LcdError::OutOfRangeCursor {
                row,
                column: col.saturating_mul(GLYPH_WIDTH),
            });
        }

        self.canvas_mut()
            .set_row_and_column(row, col * GLYPH_WIDTH)?;
        self.render_str(text)
    }
}

impl<C: UnitCanvas> TextDisplay for TextRenderer<C> {
    fn clear(&mut self) -> Result<(), LcdError> {
        self.canvas_mut().clear_screen()
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), LcdError> {
        self.render_at(row, col, text)?;
        self.canvas_mut().close_draw_session()
    }

    fn draw_line(&mut self, row: u8, text: &str) -> Result<(), LcdError> {
        self.render_at(row, 0, text)?;
        self.render_char(b'\n')
    }

    fn flush(&mut self) -> Result<(), LcdError> {
        CharSink::flush(self)
    }

    fn dimensions(&self) -> (u8, u8) {
        let config = self.canvas().config();
        (config.text_columns(), config.rows)
    }
}
