//! Streaming transport on top of an `embedded-hal` I2C master
//!
//! `embedded_hal::i2c::I2c` only accepts whole transfers, while the LCD
//! driver streams bytes between start and stop. [`BufferedI2c`] collects
//! the bytes of the open transaction and issues them as a single write
//! when the transaction ends or a repeated start begins a new one.
//!
//! Nothing reaches the wire before that write, so delays a caller inserts
//! between bytes of one transaction all elapse before the panel sees any
//! of them. The LCD power-on sequence pauses between command groups
//! inside a single transaction; boards that need those pauses honored on
//! the bus should use [`PolledTwi`](crate::twi::PolledTwi) instead.

use embedded_hal::i2c::{Error as _, I2c};
use heapless::Vec;

use crate::i2c::{BusFault, BusTransport, Direction};

/// Default transaction buffer size
///
/// Large enough for a full row of draw units plus the mode byte.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Buffered streaming transport over an `embedded-hal` I2C master
pub struct BufferedI2c<I2C, const N: usize = DEFAULT_BUFFER_SIZE> {
    i2c: I2C,
    /// Address of the open transaction, if any
    address: Option<u8>,
    buffer: Vec<u8, N>,
}

impl<I2C: I2c, const N: usize> BufferedI2c<I2C, N> {
    /// Wrap an I2C master
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: None,
            buffer: Vec::new(),
        }
    }

    /// Release the I2C master, dropping any unsent bytes
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Bytes queued for the open transaction
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    fn flush(&mut self) -> Result<(), BusFault> {
        let Some(address) = self.address.take() else {
            return Ok(());
        };

        let result = self
            .i2c
            .write(address, &self.buffer)
            .map_err(|e| BusFault::from(e.kind()));
        self.buffer.clear();
        result
    }
}

impl<I2C: I2c, const N: usize> BusTransport for BufferedI2c<I2C, N> {
    fn open(&mut self) -> Result<(), BusFault> {
        // Timing is owned by the underlying master
        Ok(())
    }

    fn begin_transaction(&mut self, address: u8, direction: Direction) -> Result<(), BusFault> {
        if direction == Direction::Read {
            return Err(BusFault::Unsupported);
        }

        self.flush()?;
        self.address = Some(address);
        Ok(())
    }

    fn write_byte(&mut self, data: u8) -> Result<(), BusFault> {
        if self.address.is_none() {
            return Err(BusFault::NoTransaction);
        }
        self.buffer.push(data).map_err(|_| BusFault::Overflow)
    }

    fn end_transaction(&mut self) -> Result<(), BusFault> {
        self.flush()
    }
}
