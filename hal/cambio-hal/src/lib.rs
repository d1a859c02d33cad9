//! Cambio Hardware Abstraction Layer
//!
//! This crate defines the port-layer primitives the converter needs from
//! the board. Chip-specific HALs implement them so the drivers and core
//! logic stay portable and host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (cambio-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cambio-drivers (LCD, joystick)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cambio-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  cambio-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - Blocking two-wire byte transactions
//! - [`adc::AnalogInput`] - Blocking single-sample analog reads
//! - [`gpio::InputPin`] - Digital input levels
//!
//! Every blocking primitive can be wrapped in [`retry::Retrying`] so a
//! peripheral that never answers becomes a reported [`retry::PortFault`]
//! instead of a hung loop.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod retry;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::InputPin;
pub use i2c::I2cBus;
pub use retry::{PortFault, RetryBudget, Retrying};
