//! HD44780 over a PCF8574 I2C backpack
//!
//! The backpack maps its eight output pins onto the panel:
//!
//! ```text
//!   bit  7   6   5   4   3    2   1   0
//!        D7  D6  D5  D4  BL   EN  RW  RS
//! ```
//!
//! The controller runs in 4-bit mode. Every byte goes out as two nibbles,
//! high first, and each nibble is latched by pulsing EN: one write with EN
//! low, one with EN high, a hold delay, then EN low again.

use cambio_core::traits::DisplayDriver;
use cambio_hal::I2cBus;
use embedded_hal::delay::DelayNs;

use super::command;

/// Register select: character data rather than an instruction
const RS: u8 = 1 << 0;
// Bit 1 (RW) stays low: the panel is never read
/// Enable strobe
const EN: u8 = 1 << 2;
/// Backlight
const BACKLIGHT: u8 = 1 << 3;

/// EN high hold time
const STROBE_HOLD_MS: u32 = 2;
/// Settle after wake-up nibbles, init and clear
const SETTLE_MS: u32 = 5;
/// Wait for the panel's own power-on reset
const POWER_ON_MS: u32 = 50;

/// Last addressable row
const LAST_ROW: u8 = 1;

/// Whether a byte is an instruction or character data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Mode {
    Command,
    Data,
}

impl Mode {
    fn bits(self) -> u8 {
        match self {
            Mode::Command => 0,
            Mode::Data => RS,
        }
    }
}

/// 16x2 character LCD
///
/// The only constructor, [`Lcd1602::init`], runs the panel's wake-up
/// sequence, so an `Lcd1602` value is always an initialized display.
pub struct Lcd1602<B, D> {
    bus: B,
    delay: D,
    address: u8,
}

impl<B: I2cBus, D: DelayNs> Lcd1602<B, D> {
    /// Bring up the panel at `address` and return the ready driver
    pub fn init(bus: B, delay: D, address: u8) -> Result<Self, B::Error> {
        let mut lcd = Self {
            bus,
            delay,
            address,
        };

        lcd.delay.delay_ms(POWER_ON_MS);

        for _ in 0..3 {
            lcd.write_nibble(command::WAKE_8BIT, Mode::Command)?;
            lcd.delay.delay_ms(SETTLE_MS);
        }
        lcd.write_nibble(command::SELECT_4BIT, Mode::Command)?;

        lcd.write_byte(command::FUNCTION_SET_4BIT_2LINE, Mode::Command)?;
        lcd.write_byte(command::DISPLAY_ON, Mode::Command)?;
        lcd.write_byte(command::ENTRY_MODE_INCREMENT, Mode::Command)?;
        lcd.write_byte(command::CLEAR, Mode::Command)?;
        lcd.delay.delay_ms(SETTLE_MS);

        Ok(lcd)
    }

    /// Latch the upper four bits of `nibble`
    fn write_nibble(&mut self, nibble: u8, mode: Mode) -> Result<(), B::Error> {
        let data = (nibble & 0xF0) | BACKLIGHT | mode.bits();
        self.bus.write(self.address, &[data])?;
        self.bus.write(self.address, &[data | EN])?;
        self.delay.delay_ms(STROBE_HOLD_MS);
        self.bus.write(self.address, &[data])
    }

    fn write_byte(&mut self, byte: u8, mode: Mode) -> Result<(), B::Error> {
        self.write_nibble(byte & 0xF0, mode)?;
        self.write_nibble(byte << 4, mode)
    }
}

impl<B: I2cBus, D: DelayNs> DisplayDriver for Lcd1602<B, D> {
    type Error = B::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.write_byte(command, Mode::Command)
    }

    fn write_char(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_byte(byte, Mode::Data)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.write_command(command::CLEAR)?;
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    fn move_cursor_to_row(&mut self, row: u8) -> Result<(), Self::Error> {
        let address = match row.min(LAST_ROW) {
            0 => command::ROW_0,
            _ => command::ROW_1,
        };
        self.write_command(address)
    }
}
