//! Input interpretation
//!
//! Turns raw 8-bit axis samples and button levels into edge events, and
//! rate-limits sampling after an event.

pub mod latch;
pub mod settle;

pub use latch::{classify, AxisLatch, AxisZone, ButtonLatch, Direction};
pub use settle::SettleGate;
