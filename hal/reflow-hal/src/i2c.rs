//! Two-wire bus abstractions
//!
//! Provides the streaming transaction primitives the LCD driver is built
//! on. A transaction is opened with a (repeated) start, fed one byte at a
//! time, and closed with a stop condition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transfer direction, packed into the low bit of the address byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Write,
    Read,
}

impl Direction {
    /// Pack a 7-bit device address with this direction bit
    pub const fn pack(self, address: u8) -> u8 {
        let bit = match self {
            Direction::Write => 0,
            Direction::Read => 1,
        };
        (address << 1) | bit
    }
}

/// Errors from two-wire bus operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Hardware never signalled ready within the poll bound
    Timeout,
    /// Requested bus frequency cannot be reached from the system clock
    InvalidTiming,
    /// Byte written outside of a transaction
    NoTransaction,
    /// Transaction exceeded the transport's buffer
    Overflow,
    /// Operation not supported by this transport
    Unsupported,
    /// NACK received
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Bus error
    Bus,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<embedded_hal::i2c::ErrorKind> for BusFault {
    fn from(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;

        match kind {
            ErrorKind::Bus => BusFault::Bus,
            ErrorKind::ArbitrationLoss => BusFault::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => BusFault::Nack,
            ErrorKind::Overrun => BusFault::Overrun,
            _ => BusFault::Other,
        }
    }
}

/// Streaming two-wire bus master
///
/// All operations block until the hardware condition they wait on is met.
/// Implementations bound every wait and report [`BusFault::Timeout`]
/// instead of spinning forever.
pub trait BusTransport {
    /// Configure bus timing and enable the master
    fn open(&mut self) -> Result<(), BusFault>;

    /// Emit a (repeated) start condition and the packed address byte
    ///
    /// May be called while a previous transaction has not been stopped.
    /// Returning does not mean the address byte has left the wire yet:
    /// an implementation may defer that wait to the following
    /// [`write_byte`](Self::write_byte) or
    /// [`end_transaction`](Self::end_transaction), both of which finish any
    /// in-flight byte first.
    fn begin_transaction(&mut self, address: u8, direction: Direction) -> Result<(), BusFault>;

    /// Transmit one byte of the open transaction
    fn write_byte(&mut self, data: u8) -> Result<(), BusFault>;

    /// Finish any in-flight byte and emit a stop condition
    fn end_transaction(&mut self) -> Result<(), BusFault>;

    /// Transmit a run of bytes of the open transaction
    fn write_all(&mut self, data: &[u8]) -> Result<(), BusFault> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    fn open(&mut self) -> Result<(), BusFault> {
        T::open(self)
    }

    fn begin_transaction(&mut self, address: u8, direction: Direction) -> Result<(), BusFault> {
        T::begin_transaction(self, address, direction)
    }

    fn write_byte(&mut self, data: u8) -> Result<(), BusFault> {
        T::write_byte(self, data)
    }

    fn end_transaction(&mut self) -> Result<(), BusFault> {
        T::end_transaction(self)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // The NHD-C160100DiZ only runs at 100 kHz even though its
        // datasheet claims 400 kHz.
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };

    /// Bit-rate divisor for a master clocked at `cpu_hz` with prescaler 1
    ///
    /// SCL = cpu_hz / (16 + 2 * divisor)
    pub fn divisor(&self, cpu_hz: u32) -> Result<u8, BusFault> {
        if self.frequency == 0 {
            return Err(BusFault::InvalidTiming);
        }

        let ratio = cpu_hz / self.frequency;
        let divisor = ratio.checked_sub(16).ok_or(BusFault::InvalidTiming)? / 2;
        u8::try_from(divisor).map_err(|_| BusFault::InvalidTiming)
    }
}
