//! Recording doubles for host tests
//!
//! The bus, pins and delay share one event log so a test can assert the
//! exact order of everything the driver did.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use reflow_hal::{BusFault, BusTransport, Direction};

use crate::command::{COMMAND_MODE, DATA_MODE};
use crate::config::{DisplayConfig, LCD_ADDRESS};
use crate::controller::Controller;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Open,
    Start(u8, Direction),
    Byte(u8),
    Stop,
    ResetLow,
    ResetHigh,
    ChipSelectHigh,
    ChipSelectLow,
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Bus recording every primitive; can be told to fail after N bytes
pub struct RecordingBus {
    pub log: Log,
    pub fail_after: Option<usize>,
    written: usize,
}

impl RecordingBus {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            fail_after: None,
            written: 0,
        }
    }
}

impl BusTransport for RecordingBus {
    fn open(&mut self) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Open);
        Ok(())
    }

    fn begin_transaction(&mut self, address: u8, direction: Direction) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Start(address, direction));
        Ok(())
    }

    fn write_byte(&mut self, data: u8) -> Result<(), BusFault> {
        if self.fail_after == Some(self.written) {
            return Err(BusFault::Timeout);
        }
        self.written += 1;
        self.log.borrow_mut().push(Event::Byte(data));
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Stop);
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub enum PinRole {
    Reset,
    ChipSelect,
}

pub struct RecordingPin {
    log: Log,
    role: PinRole,
}

impl RecordingPin {
    pub fn new(log: Log, role: PinRole) -> Self {
        Self { log, role }
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let event = match self.role {
            PinRole::Reset => Event::ResetLow,
            PinRole::ChipSelect => Event::ChipSelectLow,
        };
        self.log.borrow_mut().push(event);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let event = match self.role {
            PinRole::Reset => Event::ResetHigh,
            PinRole::ChipSelect => Event::ChipSelectHigh,
        };
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl RecordingDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub type TestController = Controller<RecordingBus, RecordingPin, RecordingPin>;

/// Controller wired to recording doubles, with an empty log
pub fn controller(config: DisplayConfig) -> (TestController, Log) {
    let log = new_log();
    let controller = Controller::new(
        RecordingBus::new(log.clone()),
        RecordingPin::new(log.clone(), PinRole::Reset),
        RecordingPin::new(log.clone(), PinRole::ChipSelect),
        config,
    );
    (controller, log)
}

/// Take and clear the recorded events
pub fn drain(log: &Log) -> Vec<Event> {
    std::mem::take(&mut *log.borrow_mut())
}

/// Events for a command-mode transaction
pub fn command(address: u8, bytes: &[u8]) -> Vec<Event> {
    let mut events = vec![
        Event::Start(address, Direction::Write),
        Event::Byte(COMMAND_MODE),
    ];
    events.extend(bytes.iter().map(|&b| Event::Byte(b)));
    events.push(Event::Stop);
    events
}

/// Events for a data-mode transaction of whole draw units
pub fn data(address: u8, units: &[[u8; 4]]) -> Vec<Event> {
    let mut events = vec![
        Event::Start(address, Direction::Write),
        Event::Byte(DATA_MODE),
    ];
    for unit in units {
        events.extend(unit.iter().map(|&b| Event::Byte(b)));
    }
    events.push(Event::Stop);
    events
}

/// Replicate a glyph column across a draw unit
pub fn unit(column: u8) -> [u8; 4] {
    [column; 4]
}

/// Power-on trace written out independently of the command tables
pub fn expected_init() -> Vec<Event> {
    let mut events = vec![
        Event::ChipSelectHigh,
        Event::Open,
        Event::ResetLow,
        Event::DelayMs(10),
        Event::ResetHigh,
        Event::DelayMs(10),
        Event::Start(LCD_ADDRESS, Direction::Write),
    ];
    let bytes = |events: &mut Vec<Event>, bytes: &[u8]| {
        events.extend(bytes.iter().map(|&b| Event::Byte(b)));
    };

    bytes(
        &mut events,
        &[
            0x00, 0x48, 0x64, 0xA0, 0xC8, 0x44, 0x00, 0xAB, 0x26, 0x81, 0x15, 0x56, 0x64,
        ],
    );
    events.push(Event::DelayMs(4));
    bytes(&mut events, &[0x2C, 0x66]);
    events.push(Event::DelayMs(4));
    bytes(&mut events, &[0x2E]);
    events.push(Event::DelayMs(4));
    bytes(&mut events, &[0x2F, 0xF3, 0x00, 0x96, 0x38, 0x75, 0x97]);

    let mut register = 0x80u8;
    for level in 0..16u8 {
        for offset in 0..4u8 {
            bytes(&mut events, &[register + offset, level * 4]);
        }
        register += 4;
    }

    bytes(&mut events, &[0x38, 0x74, 0xAF]);
    events.push(Event::Stop);
    events.push(Event::DelayMs(4));
    events
}
