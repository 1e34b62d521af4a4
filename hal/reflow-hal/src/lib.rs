//! Reflow Hardware Abstraction Layer
//!
//! This crate defines the two-wire bus transport used by the LCD driver,
//! together with the transports that implement it. The display code only
//! ever talks to [`BusTransport`], so it runs unchanged on a bare register
//! block or on top of any `embedded-hal` I2C master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  reflow-display (controller, renderer)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  reflow-hal (this crate - BusTransport) │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   PolledTwi   │       │  BufferedI2c  │
//! │ (registers)   │       │ (embedded-hal)│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`i2c`] - [`BusTransport`] contract, [`BusFault`] and bus configuration
//! - [`twi`] - busy-polling master over a [`twi::TwiRegisters`] port
//! - [`buffered`] - adapter onto `embedded_hal::i2c::I2c`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffered;
pub mod i2c;
pub mod twi;

// Re-export key types at crate root for convenience
pub use buffered::BufferedI2c;
pub use i2c::{BusFault, BusTransport, Direction, I2cConfig};
pub use twi::{PolledTwi, TwiRegisters};
