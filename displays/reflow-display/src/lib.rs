//! NHD-C160100DiZ LCD driver for the reflow oven controller
//!
//! This crate provides:
//! - `Controller` - row/column addressing and the streaming draw session
//! - `font` - the 5x8 glyph table for printable ASCII
//! - `TextRenderer` - character rendering with newline and tab handling
//! - `LcdWriter` - `core::fmt::Write` / `embedded_io::Write` adapter
//! - `TextDisplay` trait for placing text at character-cell positions
//!
//! # Architecture
//!
//! ```text
//! application ──▶ LcdWriter ──▶ TextRenderer ──▶ Controller ──▶ BusTransport
//! ```
//!
//! The controller talks to the panel through `reflow_hal::BusTransport`, so
//! the same code drives a register-level TWI master or any `embedded-hal`
//! I2C implementation.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod font;
pub mod renderer;
pub mod stream;

#[cfg(test)]
mod testing;

// Re-export key types
pub use backend::TextDisplay;
pub use config::{DisplayConfig, DISPLAY_WIDTH, GLYPH_WIDTH, ROW_COUNT, TAB_SIZE};
pub use controller::{Controller, Cursor, DrawSession, UnitCanvas};
pub use error::LcdError;
pub use font::Glyph;
pub use renderer::{CharSink, TextRenderer};
pub use stream::LcdWriter;
