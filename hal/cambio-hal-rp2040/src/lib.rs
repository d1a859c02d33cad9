//! RP2040-specific HAL for the currency converter firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `cambio-hal` traits on top of `embassy-rp` blocking drivers:
//!
//! - I2C bus writes for the display backpack
//! - ADC channel management and 12-bit to 8-bit sampling for the stick
//! - GPIO input for the push button

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;

pub use adc::{AdcChannel, RpAnalog};
pub use gpio::RpInputPin;
pub use i2c::RpI2cBus;

// Re-export shared traits from cambio-hal for convenience
pub use cambio_hal::{AnalogInput, I2cBus, InputPin};
