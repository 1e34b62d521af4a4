//! Display configuration
//!
//! Panel geometry and bus address. The defaults describe the
//! NHD-C160100DiZ as wired on the reflow oven board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LcdError;

/// 7-bit bus address of the panel
pub const LCD_ADDRESS: u8 = 0x3F;

/// Logical columns per row (one draw unit each)
pub const DISPLAY_WIDTH: u8 = 160;

/// 8-pixel rows (100 pixel rows, last one partial)
pub const ROW_COUNT: u8 = 13;

/// Character cell width: 5 glyph columns plus 1 blank
pub const GLYPH_WIDTH: u8 = 6;

/// Tab stops every `TAB_SIZE` character cells
pub const TAB_SIZE: u8 = 4;

/// Rows addressable by the row-select command (low nibble)
pub const MAX_ROWS: u8 = 16;

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Logical columns per row
    pub width: u8,
    /// Number of 8-pixel rows
    pub rows: u8,
    /// Tab stop spacing in character cells
    pub tab_size: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: LCD_ADDRESS,
            width: DISPLAY_WIDTH,
            rows: ROW_COUNT,
            tab_size: TAB_SIZE,
        }
    }
}

impl DisplayConfig {
    /// Check the geometry can be addressed by the panel's commands
    pub fn validate(&self) -> Result<(), LcdError> {
        if self.width == 0 || self.rows == 0 || self.rows > MAX_ROWS || self.tab_size == 0 {
            return Err(LcdError::InvalidConfig);
        }
        if self.address > 0x7F {
            return Err(LcdError::InvalidConfig);
        }
        Ok(())
    }

    /// Distance between tab stops in logical columns
    pub fn tab_span(&self) -> u16 {
        u16::from(GLYPH_WIDTH) * u16::from(self.tab_size)
    }

    /// Whole character cells per row
    pub fn text_columns(&self) -> u8 {
        self.width / GLYPH_WIDTH
    }
}
