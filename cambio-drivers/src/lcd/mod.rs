//! Character LCD drivers
//!
//! HD44780-compatible 16x2 panels. The only supported wiring is the
//! common PCF8574 backpack running the controller in 4-bit mode.

pub mod pcf8574;

pub use pcf8574::Lcd1602;

/// HD44780 instruction bytes used by the driver
pub mod command {
    /// Clear display and home the cursor
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: increment, no shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Function set: 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
    /// Function set nibble selecting 8-bit mode (wake-up)
    pub const WAKE_8BIT: u8 = 0x30;
    /// Function set nibble selecting 4-bit mode
    pub const SELECT_4BIT: u8 = 0x20;
    /// Set DDRAM address to the start of row 0
    pub const ROW_0: u8 = 0x80;
    /// Set DDRAM address to the start of row 1
    pub const ROW_1: u8 = 0xC0;
}
