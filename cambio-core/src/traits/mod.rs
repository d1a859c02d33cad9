//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the display and input drivers.

pub mod display;
pub mod input;

pub use display::{DisplayDriver, DisplayExt};
pub use input::InputSource;
