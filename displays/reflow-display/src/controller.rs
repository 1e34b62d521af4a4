//! LCD controller
//!
//! Owns the panel's cursor and the streaming draw session. Pixel data is
//! sent as one long data-mode transaction that stays open between draw
//! calls; any addressing command closes it first, because the panel would
//! take a command byte sent mid-stream as pixel data.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use reflow_hal::{BusTransport, Direction};

use crate::command::{
    column_select, row_select, COMMAND_MODE, DATA_MODE, GREYSCALE_RAMP, INIT_GROUPS,
    INIT_STEP_DELAY_MS, INIT_TRAILER, RESET_DELAY_MS,
};
use crate::config::DisplayConfig;
use crate::error::LcdError;

/// Bytes written per logical column
///
/// The panel runs in greyscale mode, so one pixel column of a row takes
/// four bytes.
pub const UNIT_BYTES: usize = 4;

/// One logical column of pixel data
pub type Unit = [u8; UNIT_BYTES];

/// All pixels off
pub const BLANK_UNIT: Unit = [0; UNIT_BYTES];

/// Current drawing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// 8-pixel row
    pub row: u8,
    /// Logical column, advanced by one per draw unit
    pub column: u8,
}

/// Data-mode transaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawSession {
    #[default]
    Closed,
    Open,
}

/// Column-oriented drawing surface
///
/// The text renderer draws through this trait so it stays independent of
/// the bus and pin types behind the controller.
pub trait UnitCanvas {
    /// Current drawing position
    fn cursor(&self) -> Cursor;

    /// Panel geometry
    fn config(&self) -> &DisplayConfig;

    /// Move to a row and column in one command
    fn set_row_and_column(&mut self, row: u8, column: u8) -> Result<(), LcdError>;

    /// Draw one logical column and advance the cursor
    fn draw_unit(&mut self, unit: Unit) -> Result<(), LcdError>;

    /// Blank from the cursor to the end of the row
    fn clear_rest_of_row(&mut self) -> Result<(), LcdError>;

    /// Blank every row
    fn clear_screen(&mut self) -> Result<(), LcdError>;

    /// Commit any streamed pixel data
    fn close_draw_session(&mut self) -> Result<(), LcdError>;
}

fn pin_error<E: embedded_hal::digital::Error>(e: E) -> LcdError {
    LcdError::Pin(e.kind())
}

/// NHD-C160100DiZ controller
pub struct Controller<B, RST, CS> {
    bus: B,
    /// Active-low reset line
    reset: RST,
    /// Chip select, held high
    chip_select: CS,
    config: DisplayConfig,
    cursor: Cursor,
    session: DrawSession,
}

impl<B, RST, CS> Controller<B, RST, CS>
where
    B: BusTransport,
    RST: OutputPin,
    CS: OutputPin,
{
    /// Create a controller; call [`Controller::initialize`] before drawing
    pub fn new(bus: B, reset: RST, chip_select: CS, config: DisplayConfig) -> Self {
        Self {
            bus,
            reset,
            chip_select,
            config,
            cursor: Cursor::default(),
            session: DrawSession::Closed,
        }
    }

    /// Reset the panel and send the power-on sequence
    ///
    /// Leaves the cursor at (0, 0) with no draw session open.
    pub fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), LcdError> {
        self.config.validate()?;
        self.close_draw_session()?;

        self.chip_select.set_high().map_err(pin_error)?;
        self.bus.open()?;

        self.reset.set_low().map_err(pin_error)?;
        delay.delay_ms(RESET_DELAY_MS);
        self.reset.set_high().map_err(pin_error)?;
        delay.delay_ms(RESET_DELAY_MS);

        self.begin_command()?;
        for (i, group) in INIT_GROUPS.iter().enumerate() {
            if i > 0 {
                delay.delay_ms(INIT_STEP_DELAY_MS);
            }
            self.bus.write_all(group)?;
        }
        self.bus.write_all(&GREYSCALE_RAMP)?;
        self.bus.write_all(&INIT_TRAILER)?;
        self.bus.end_transaction()?;
        delay.delay_ms(INIT_STEP_DELAY_MS);

        self.cursor = Cursor::default();
        self.session = DrawSession::Closed;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "LCD initialized ({} columns x {} rows)",
            self.config.width,
            self.config.rows
        );

        Ok(())
    }

    /// Select a row, leaving the column untouched
    pub fn set_row(&mut self, row: u8) -> Result<(), LcdError> {
        if row >= self.config.rows {
            return Err(LcdError::OutOfRangeCursor {
                row,
                column: self.cursor.column,
            });
        }
        self.close_draw_session()?;

        self.cursor.row = row;
        self.begin_command()?;
        self.bus.write_byte(row_select(row))?;
        self.bus.end_transaction()?;
        Ok(())
    }

    /// Select a column in the current row
    pub fn set_column(&mut self, column: u8) -> Result<(), LcdError> {
        self.check_position(self.cursor.row, column)?;
        self.close_draw_session()?;

        self.cursor.column = column;
        self.begin_command()?;
        self.bus.write_all(&column_select(column))?;
        self.bus.end_transaction()?;
        Ok(())
    }

    /// Select row and column in a single transaction
    pub fn set_row_and_column(&mut self, row: u8, column: u8) -> Result<(), LcdError> {
        self.check_position(row, column)?;
        self.close_draw_session()?;

        self.cursor = Cursor { row, column };
        self.begin_command()?;
        self.bus.write_byte(row_select(row))?;
        self.bus.write_all(&column_select(column))?;
        self.bus.end_transaction()?;
        Ok(())
    }

    /// Start streaming pixel data; no-op if a session is already open
    pub fn open_draw_session(&mut self) -> Result<(), LcdError> {
        if self.session == DrawSession::Open {
            return Ok(());
        }

        self.bus
            .begin_transaction(self.config.address, Direction::Write)?;
        self.bus.write_byte(DATA_MODE)?;
        self.session = DrawSession::Open;

        #[cfg(feature = "defmt")]
        defmt::trace!("draw session opened at {}", self.cursor);

        Ok(())
    }

    /// Stop streaming pixel data
    pub fn close_draw_session(&mut self) -> Result<(), LcdError> {
        if self.session == DrawSession::Open {
            self.session = DrawSession::Closed;
            self.bus.end_transaction()?;

            #[cfg(feature = "defmt")]
            defmt::trace!("draw session closed at {}", self.cursor);
        }
        Ok(())
    }

    /// Draw one logical column, opening a session if needed
    pub fn draw_unit(&mut self, unit: Unit) -> Result<(), LcdError> {
        if self.cursor.column >= self.config.width {
            return Err(LcdError::OutOfRangeCursor {
                row: self.cursor.row,
                column: self.cursor.column,
            });
        }

        self.open_draw_session()?;
        self.bus.write_all(&unit)?;
        self.cursor.column += 1;
        Ok(())
    }

    /// Blank from the cursor to the end of the row and close the session
    pub fn clear_rest_of_row(&mut self) -> Result<(), LcdError> {
        while self.cursor.column < self.config.width {
            self.draw_unit(BLANK_UNIT)?;
        }
        self.close_draw_session()
    }

    /// Blank a row from `start_column` to its end
    pub fn clear_row(&mut self, row: u8, start_column: u8) -> Result<(), LcdError> {
        self.set_row_and_column(row, start_column)?;
        self.clear_rest_of_row()
    }

    /// Blank every row
    pub fn clear_screen(&mut self) -> Result<(), LcdError> {
        for row in 0..self.config.rows {
            self.clear_row(row, 0)?;
        }
        Ok(())
    }

    /// Current drawing position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether a data-mode transaction is open
    pub fn session(&self) -> DrawSession {
        self.session
    }

    /// Panel geometry and address
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Release the bus and pins
    pub fn release(self) -> (B, RST, CS) {
        (self.bus, self.reset, self.chip_select)
    }

    fn begin_command(&mut self) -> Result<(), LcdError> {
        self.bus
            .begin_transaction(self.config.address, Direction::Write)?;
        self.bus.write_byte(COMMAND_MODE)?;
        Ok(())
    }

    fn check_position(&self, row: u8, column: u8) -> Result<(), LcdError> {
        if row >= self.config.rows || column >= self.config.width {
            return Err(LcdError::OutOfRangeCursor { row, column });
        }
        Ok(())
    }
}

impl<B, RST, CS> UnitCanvas for Controller<B, RST, CS>
where
    B: BusTransport,
    RST: OutputPin,
    CS: OutputPin,
{
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn config(&self) -> &DisplayConfig {
        &self.config
    }

    fn set_row_and_column(&mut self, row: u8, column: u8) -> Result<(), LcdError> {
        Controller::set_row_and_column(self, row, column)
    }

    fn draw_unit(&mut self, unit: Unit) -> Result<(), LcdError> {
        Controller::draw_unit(self, unit)
    }

    fn clear_rest_of_row(&mut self) -> Result<(), LcdError> {
        Controller::clear_rest_of_row(self)
    }

    fn clear_screen(&mut self) -> Result<(), LcdError> {
        Controller::clear_screen(self)
    }

    fn close_draw_session(&mut self) -> Result<(), LcdError> {
        Controller::close_draw_session(self)
    }
}
