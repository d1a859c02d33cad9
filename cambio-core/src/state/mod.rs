//! Wizard state machine
//!
//! Sequences the four input phases. The machine is explicit, finite and
//! deterministic: every change is a function of the current state and the
//! events sampled this tick.

pub mod events;
pub mod machine;

pub use events::{AxisEvent, ButtonEvent, InputEvents};
pub use machine::{Wizard, WizardPhase};
