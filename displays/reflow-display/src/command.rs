//! NHD-C160100DiZ command encoding
//!
//! Every transaction starts with a control byte selecting command or data
//! mode. Row and column addressing are plain command bytes; the power-on
//! sequence is a fixed vendor byte stream reproduced verbatim from the
//! panel's example code.

/// Control byte: following bytes are commands
pub const COMMAND_MODE: u8 = 0x00;

/// Control byte: following bytes are pixel data
pub const DATA_MODE: u8 = 0x40;

/// Row (page) select, row in the low nibble
pub const SET_ROW: u8 = 0xB0;

/// Column address high nibble
pub const SET_COLUMN_HIGH: u8 = 0x10;

/// Column address low nibble
pub const SET_COLUMN_LOW: u8 = 0x00;

/// Display on
pub const DISPLAY_ON: u8 = 0xAF;

/// Greyscale levels programmed at start-up
pub const GREYSCALE_LEVELS: usize = 16;

/// Registers per greyscale level
pub const GREYSCALE_REGISTERS: usize = 4;

/// First greyscale register address
const GREYSCALE_BASE: u8 = 0x80;

/// Pause between init groups, in milliseconds
pub const INIT_STEP_DELAY_MS: u32 = 4;

/// Reset pulse low and recovery time, in milliseconds
pub const RESET_DELAY_MS: u32 = 10;

/// Power-on commands, split where the panel needs a pause.
///
/// The meaning of most of these bytes is not documented; they are sent
/// exactly as the vendor's example does.
pub const INIT_GROUPS: [&[u8]; 4] = [
    &[
        0x48, 0x64, 0xA0, 0xC8, 0x44, 0x00, 0xAB, 0x26, 0x81, 0x15, 0x56, 0x64,
    ],
    &[0x2C, 0x66],
    &[0x2E],
    &[0x2F, 0xF3, 0x00, 0x96, 0x38, 0x75, 0x97],
];

/// Commands following the greyscale ramp, ending with display on
pub const INIT_TRAILER: [u8; 3] = [0x38, 0x74, DISPLAY_ON];

/// Greyscale ramp as (register, value) byte pairs
///
/// Level `n` programs registers `0x80 + 4n .. 0x80 + 4n + 3`, each with
/// the value `4n`.
pub const GREYSCALE_RAMP: [u8; GREYSCALE_LEVELS * GREYSCALE_REGISTERS * 2] = greyscale_ramp();

const fn greyscale_ramp() -> [u8; GREYSCALE_LEVELS * GREYSCALE_REGISTERS * 2] {
    let mut ramp = [0u8; GREYSCALE_LEVELS * GREYSCALE_REGISTERS * 2];
    let mut level = 0;
    while level < GREYSCALE_LEVELS {
        let mut offset = 0;
        while offset < GREYSCALE_REGISTERS {
            let i = (level * GREYSCALE_REGISTERS + offset) * 2;
            ramp[i] = GREYSCALE_BASE + (level * GREYSCALE_REGISTERS + offset) as u8;
            ramp[i + 1] = (level * 4) as u8;
            offset += 1;
        }
        level += 1;
    }
    ramp
}

/// Row-select command byte
pub const fn row_select(row: u8) -> u8 {
    row | SET_ROW
}

/// Column-select command bytes (high nibble, low nibble)
pub const fn column_select(column: u8) -> [u8; 2] {
    [
        ((column & 0xF0) >> 4) | SET_COLUMN_HIGH,
        (column & 0x0F) | SET_COLUMN_LOW,
    ]
}
