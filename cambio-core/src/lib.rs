//! Board-agnostic core logic for the currency converter
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Currency table and fixed-point conversion engine
//! - Amount entry (digits and cursor)
//! - Axis and button latches that turn samples into edge events
//! - Wizard state machine for the select/select/enter/show cycle
//! - Two-row screen composition
//! - Controller tick loop tying input, wizard and display together
//! - Device configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod amount;
pub mod config;
pub mod controller;
pub mod conversion;
pub mod currency;
pub mod display;
pub mod input;
pub mod state;
pub mod traits;

pub use controller::{Controller, ControllerError, Stage};
pub use currency::Currency;
pub use state::{InputEvents, Wizard, WizardPhase};
