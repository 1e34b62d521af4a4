//! Text renderer
//!
//! Paints characters from the 5x8 font through a [`UnitCanvas`]. Each
//! printable character takes a 6-column cell: five glyph columns and one
//! blank spacer. Control characters move nothing vertically; changing row
//! is left to the caller.

use crate::config::GLYPH_WIDTH;
use crate::controller::{UnitCanvas, BLANK_UNIT, UNIT_BYTES};
use crate::error::LcdError;
use crate::font;

/// Blank columns a tab always emits before aligning to the next stop
const TAB_LEAD_BLANKS: u8 = 5;

/// Consumer of single characters
pub trait CharSink {
    /// Render or interpret one character
    fn put_char(&mut self, c: u8) -> Result<(), LcdError>;

    /// Push out anything still buffered
    fn flush(&mut self) -> Result<(), LcdError> {
        Ok(())
    }
}

/// Character renderer over a column canvas
pub struct TextRenderer<C> {
    canvas: C,
}

impl<C: UnitCanvas> TextRenderer<C> {
    /// Render onto `canvas` starting at its current cursor
    pub fn new(canvas: C) -> Self {
        Self { canvas }
    }

    /// The canvas being drawn on
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Access the canvas, e.g. to change row between lines
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give back the canvas
    pub fn into_inner(self) -> C {
        self.canvas
    }

    /// Render one character at the cursor
    ///
    /// - `\n` blanks the rest of the row without changing row
    /// - `\r` and NUL are ignored
    /// - `\t` pads with blanks to the next tab stop
    /// - characters outside the font are rejected before anything is drawn
    pub fn render_char(&mut self, c: u8) -> Result<(), LcdError> {
        match c {
            b'\n' => self.canvas.clear_rest_of_row(),
            b'\r' | 0 => Ok(()),
            b'\t' => self.render_tab(),
            _ => self.render_glyph(c),
        }
    }

    /// Render every byte of a string
    pub fn render_str(&mut self, text: &str) -> Result<(), LcdError> {
        for c in text.bytes() {
            self.render_char(c)?;
        }
        Ok(())
    }

    fn render_glyph(&mut self, c: u8) -> Result<(), LcdError> {
        let glyph = font::glyph_for(c).ok_or(LcdError::UnsupportedCharacter(c))?;

        let cursor = self.canvas.cursor();
        if u16::from(cursor.column) + u16::from(GLYPH_WIDTH) > u16::from(self.canvas.config().width)
        {
            return Err(LcdError::OutOfRangeCursor {
                row: cursor.row,
                column: cursor.column,
            });
        }

        for &column in &glyph.columns {
            self.canvas.draw_unit([column; UNIT_BYTES])?;
        }
        // Spacer column between characters
        self.canvas.draw_unit(BLANK_UNIT)
    }

    fn render_tab(&mut self) -> Result<(), LcdError> {
        let width = self.canvas.config().width;
        let span = self.canvas.config().tab_span();

        for _ in 0..TAB_LEAD_BLANKS {
            if self.canvas.cursor().column >= width {
                return Ok(());
            }
            self.canvas.draw_unit(BLANK_UNIT)?;
        }

        // At least one more blank, then up to the next stop; clipped at
        // the right edge.
        loop {
            let column = self.canvas.cursor().column;
            if column >= width {
                return Ok(());
            }
            self.canvas.draw_unit(BLANK_UNIT)?;
            if u16::from(column + 1) % span == 0 {
                return Ok(());
            }
        }
    }
}

impl<C: UnitCanvas> CharSink for TextRenderer<C> {
    fn put_char(&mut self, c: u8) -> Result<(), LcdError> {
        self.render_char(c)
    }

    fn flush(&mut self) -> Result<(), LcdError> {
        self.canvas.close_draw_session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, DISPLAY_WIDTH, ROW_COUNT};
    use crate::controller::DrawSession;
    use crate::testing::{self, command, data, drain, expected_init, unit, Event, RecordingDelay};
    use proptest::prelude::*;

    const ADDR: u8 = 0x3F;

    fn renderer() -> (TextRenderer<testing::TestController>, testing::Log) {
        let (mut lcd, log) = testing::controller(DisplayConfig::default());
        lcd.initialize(&mut RecordingDelay::new(log.clone())).unwrap();
        drain(&log);
        (TextRenderer::new(lcd), log)
    }

    /// Data transaction still open (no trailing stop)
    fn open_data(units: &[[u8; 4]]) -> Vec<Event> {
        let mut events = data(ADDR, units);
        events.pop();
        events
    }

    #[test]
    fn test_render_letter() {
        let (mut text, log) = renderer();
        text.render_char(b'A').unwrap();

        assert_eq!(
            drain(&log),
            open_data(&[
                unit(0xF8),
                unit(0x24),
                unit(0x22),
                unit(0x24),
                unit(0xF8),
                BLANK_UNIT,
            ])
        );
        assert_eq!(text.canvas().cursor().column, 6);
        assert_eq!(text.canvas().session(), DrawSession::Open);

        text.flush().unwrap();
        assert_eq!(drain(&log), vec![Event::Stop]);
    }

    #[test]
    fn test_consecutive_letters_share_session() {
        let (mut text, log) = renderer();
        text.render_str("Hi").unwrap();

        let events = drain(&log);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, Event::Start(..)))
                .count(),
            1
        );
        assert_eq!(events.len(), 2 + 12 * 4);
        assert_eq!(text.canvas().cursor().column, 12);
    }

    #[test]
    fn test_newline_clears_rest_of_row() {
        let (mut text, log) = renderer();
        text.canvas_mut().set_row_and_column(4, 10).unwrap();
        drain(&log);

        text.render_char(b'\n').unwrap();

        let blanks = vec![BLANK_UNIT; (DISPLAY_WIDTH - 10) as usize];
        assert_eq!(drain(&log), data(ADDR, &blanks));
        assert_eq!(text.canvas().cursor().row, 4);
        assert_eq!(text.canvas().session(), DrawSession::Closed);
    }

    #[test]
    fn test_carriage_return_and_nul_are_ignored() {
        let (mut text, log) = renderer();
        text.canvas_mut().set_row_and_column(1, 30).unwrap();
        drain(&log);

        text.render_char(b'\r').unwrap();
        text.render_char(0).unwrap();

        assert!(drain(&log).is_empty());
        assert_eq!(text.canvas().cursor().column, 30);
    }

    #[test]
    fn test_unsupported_character_draws_nothing() {
        let (mut text, log) = renderer();

        for c in [0x01, 0x1B, 0x7F, 0xB0, 0xFF] {
            assert_eq!(text.render_char(c), Err(LcdError::UnsupportedCharacter(c)));
        }
        assert!(drain(&log).is_empty());
        assert_eq!(text.canvas().cursor().column, 0);
    }

    #[test]
    fn test_glyph_past_right_edge_is_rejected() {
        let (mut text, log) = renderer();
        text.canvas_mut().set_row_and_column(0, DISPLAY_WIDTH - 5).unwrap();
        drain(&log);

        assert_eq!(
            text.render_char(b'X'),
            Err(LcdError::OutOfRangeCursor {
                row: 0,
                column: DISPLAY_WIDTH - 5
            })
        );
        assert!(drain(&log).is_empty());
    }

    #[test]
    fn test_last_cell_fits() {
        let (mut text, _log) = renderer();
        text.canvas_mut().set_row_and_column(0, DISPLAY_WIDTH - 6).unwrap();
        text.render_char(b'X').unwrap();
        assert_eq!(text.canvas().cursor().column, DISPLAY_WIDTH);
    }

    #[test]
    fn test_tab_from_aligned_column_moves_full_stop() {
        let (mut text, _log) = renderer();
        text.render_char(b'\t').unwrap();
        assert_eq!(text.canvas().cursor().column, 24);

        text.render_char(b'\t').unwrap();
        assert_eq!(text.canvas().cursor().column, 48);
    }

    #[test]
    fn test_tab_clipped_at_right_edge() {
        let (mut text, log) = renderer();
        text.canvas_mut().set_row_and_column(0, DISPLAY_WIDTH - 2).unwrap();
        drain(&log);

        text.render_char(b'\t').unwrap();
        assert_eq!(drain(&log), open_data(&[BLANK_UNIT; 2]));
        assert_eq!(text.canvas().cursor().column, DISPLAY_WIDTH);
    }

    #[test]
    fn test_clear_screen_then_letter() {
        let (mut lcd, log) = testing::controller(DisplayConfig::default());
        lcd.initialize(&mut RecordingDelay::new(log.clone())).unwrap();
        lcd.clear_screen().unwrap();
        lcd.set_row_and_column(0, 0).unwrap();

        let mut text = TextRenderer::new(lcd);
        text.render_char(b'H').unwrap();
        text.flush().unwrap();

        let mut expected = expected_init();
        let blank_row = vec![BLANK_UNIT; DISPLAY_WIDTH as usize];
        for row in 0..ROW_COUNT {
            expected.extend(command(ADDR, &[0xB0 | row, 0x10, 0x00]));
            expected.extend(data(ADDR, &blank_row));
        }
        expected.extend(command(ADDR, &[0xB0, 0x10, 0x00]));
        expected.extend(data(
            ADDR,
            &[
                unit(0xFE),
                unit(0x10),
                unit(0x10),
                unit(0x10),
                unit(0xFE),
                BLANK_UNIT,
            ],
        ));

        assert_eq!(drain(&log), expected);
    }

    proptest! {
        #[test]
        fn tab_aligns_to_next_stop(start in 0..(DISPLAY_WIDTH - TAB_LEAD_BLANKS)) {
            let (mut text, log) = renderer();
            text.canvas_mut().set_row_and_column(0, start).unwrap();
            drain(&log);

            text.render_char(b'\t').unwrap();

            let end = text.canvas().cursor().column;
            let span = 24u16;
            let next_stop = (u16::from(start) + 6).div_ceil(span) * span;
            prop_assert_eq!(u16::from(end), next_stop.min(u16::from(DISPLAY_WIDTH)));
            prop_assert!(end - start >= TAB_LEAD_BLANKS);

            let blanks = vec![BLANK_UNIT; (end - start) as usize];
            prop_assert_eq!(drain(&log), open_data(&blanks));
        }

        #[test]
        fn printable_characters_advance_one_cell(c in 0x20u8..=0x7E, cell in 0u8..26) {
            let (mut text, log) = renderer();
            text.canvas_mut().set_row_and_column(2, cell * 6).unwrap();
            drain(&log);

            text.render_char(c).unwrap();

            prop_assert_eq!(text.canvas().cursor().column, cell * 6 + 6);
            let events = drain(&log);
            prop_assert_eq!(events.len(), 2 + 6 * 4);
            prop_assert_eq!(&events[events.len() - 4..], &[Event::Byte(0); 4]);
        }
    }
}
