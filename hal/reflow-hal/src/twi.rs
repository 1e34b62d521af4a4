//! Busy-polling two-wire master
//!
//! Drives a TWI peripheral through a [`TwiRegisters`] port. Each operation
//! waits for the peripheral's "ready" flag before touching the data
//! register, so callers see fully blocking semantics.

use crate::i2c::{BusFault, BusTransport, Direction, I2cConfig};

/// Polls allowed before a ready-wait reports [`BusFault::Timeout`]
pub const DEFAULT_POLL_LIMIT: u32 = 100_000;

/// Polls spent waiting for the stop condition to clear
///
/// Matches a 16-bit wraparound counter. The wait gives up silently since
/// the hardware has no distinguishable stop-timeout signal.
pub const STOP_POLL_LIMIT: u32 = u16::MAX as u32;

/// Register-level access to a TWI peripheral
///
/// Chip HALs implement this over the actual control/status/data
/// registers. Every method is a single register access; the polling
/// policy lives in [`PolledTwi`].
pub trait TwiRegisters {
    /// Enable the internal pull-ups on SDA/SCL
    fn enable_pullups(&mut self);

    /// Program the bit-rate divisor (prescaler 1)
    fn set_bit_rate(&mut self, divisor: u8);

    /// Enable the TWI module without interrupts
    fn enable(&mut self);

    /// Request a (repeated) start condition
    fn send_start(&mut self);

    /// Load the data register and start shifting it out
    fn transmit(&mut self, byte: u8);

    /// Request a stop condition
    fn send_stop(&mut self);

    /// Hardware finished the current bus operation (TWINT)
    fn is_ready(&self) -> bool;

    /// Stop condition still being executed (TWSTO)
    fn stop_pending(&self) -> bool;
}

/// Busy-polling bus master over a register port
pub struct PolledTwi<R> {
    regs: R,
    /// System clock feeding the peripheral
    cpu_hz: u32,
    config: I2cConfig,
    /// Upper bound on ready-wait iterations
    poll_limit: u32,
}

impl<R: TwiRegisters> PolledTwi<R> {
    /// Create a new master; call [`BusTransport::open`] before use
    pub fn new(regs: R, cpu_hz: u32, config: I2cConfig) -> Self {
        Self {
            regs,
            cpu_hz,
            config,
            poll_limit: DEFAULT_POLL_LIMIT,
        }
    }

    /// Override the ready-wait bound
    pub fn with_poll_limit(mut self, poll_limit: u32) -> Self {
        self.poll_limit = poll_limit.max(1);
        self
    }

    /// Release the register port
    pub fn release(self) -> R {
        self.regs
    }

    fn wait_ready(&mut self) -> Result<(), BusFault> {
        for _ in 0..self.poll_limit {
            if self.regs.is_ready() {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("TWI not ready after {} polls", self.poll_limit);

        Err(BusFault::Timeout)
    }
}

impl<R: TwiRegisters> BusTransport for PolledTwi<R> {
    fn open(&mut self) -> Result<(), BusFault> {
        let divisor = self.config.divisor(self.cpu_hz)?;

        self.regs.enable_pullups();
        self.regs.set_bit_rate(divisor);
        self.regs.enable();
        Ok(())
    }

    fn begin_transaction(&mut self, address: u8, direction: Direction) -> Result<(), BusFault> {
        self.regs.send_start();
        self.wait_ready()?;
        // Address goes out in the background; the next write or stop
        // waits for it.
        self.regs.transmit(direction.pack(address));
        Ok(())
    }

    fn write_byte(&mut self, data: u8) -> Result<(), BusFault> {
        self.wait_ready()?;
        self.regs.transmit(data);
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), BusFault> {
        self.wait_ready()?;
        self.regs.send_stop();

        let mut polls = 0;
        while self.regs.stop_pending() && polls < STOP_POLL_LIMIT {
            polls += 1;
        }

        #[cfg(feature = "defmt")]
        if polls == STOP_POLL_LIMIT {
            defmt::debug!("TWI stop condition still pending, continuing");
        }

        Ok(())
    }
}
