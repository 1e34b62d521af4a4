//! Display driver errors

use reflow_hal::BusFault;

/// Errors from the LCD driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Bus transport failed
    Bus(BusFault),
    /// Reset or chip-select pin failed
    Pin(embedded_hal::digital::ErrorKind),
    /// Row or column outside the panel
    OutOfRangeCursor { row: u8, column: u8 },
    /// Character not present in the font
    UnsupportedCharacter(u8),
    /// Geometry the panel's commands cannot address
    InvalidConfig,
}

impl From<BusFault> for LcdError {
    fn from(fault: BusFault) -> Self {
        LcdError::Bus(fault)
    }
}

impl embedded_io::Error for LcdError {
    fn kind(&self) -> embedded_io::ErrorKind {
        use embedded_io::ErrorKind;

        match self {
            LcdError::Bus(BusFault::Timeout) => ErrorKind::TimedOut,
            LcdError::Bus(_) | LcdError::Pin(_) => ErrorKind::Other,
            LcdError::OutOfRangeCursor { .. } | LcdError::InvalidConfig => ErrorKind::InvalidInput,
            LcdError::UnsupportedCharacter(_) => ErrorKind::InvalidData,
        }
    }
}
