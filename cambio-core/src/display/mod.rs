//! Screen composition
//!
//! Every screen the device shows is built here as a two-row [`Screen`]
//! value. Drivers only ever see finished rows of text.

pub mod screen;
pub mod views;

pub use screen::{Screen, DISPLAY_COLS, DISPLAY_ROWS};
