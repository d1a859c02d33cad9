//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in cambio-core on top of the cambio-hal port traits:
//!
//! - HD44780 character LCD behind a PCF8574 I2C backpack
//! - Two-axis analog joystick with push button

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod joystick;
pub mod lcd;

pub use joystick::{Joystick, JoystickChannels};
pub use lcd::Lcd1602;
