//! Configuration types
//!
//! Board-agnostic configuration structures, baked into the firmware at
//! build time.

pub mod types;

pub use types::*;
