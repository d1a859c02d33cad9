//! Axis and button latches
//!
//! Each stick axis is classified into zones:
//!
//! ```text
//!   0 ........ 50 | 51 .... 110 | 111 .... 139 | 140 .... 179 | 180 ...... 255
//!   negative      | dead band    | neutral      | dead band    | positive
//! ```
//!
//! A move fires once when the stick first crosses a trigger threshold and
//! does not fire again until the stick has passed back through neutral.
//! The dead bands hold the latch so a stick hovering near a threshold
//! cannot chatter.

use crate::config::SamplerConfig;
use crate::state::{AxisEvent, ButtonEvent};

/// Zone an axis sample falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisZone {
    /// Centred; re-arms the latch
    Neutral,
    /// At or past the positive threshold
    Positive,
    /// At or past the negative threshold
    Negative,
    /// Between neutral and a threshold; holds the latch
    DeadBand,
}

/// Classify one sample
pub fn classify(sample: u8, config: &SamplerConfig) -> AxisZone {
    if (config.neutral_low..=config.neutral_high).contains(&sample) {
        AxisZone::Neutral
    } else if sample >= config.positive_threshold {
        AxisZone::Positive
    } else if sample <= config.negative_threshold {
        AxisZone::Negative
    } else {
        AxisZone::DeadBand
    }
}

/// Last direction an axis latch fired in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Armed for either direction
    #[default]
    Neutral,
    /// Fired positive, waiting for neutral or a negative crossing
    Positive,
    /// Fired negative, waiting for neutral or a positive crossing
    Negative,
}

/// Per-axis edge detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisLatch {
    last: Direction,
}

impl AxisLatch {
    /// Armed latch
    pub const fn new() -> Self {
        Self {
            last: Direction::Neutral,
        }
    }

    /// Direction the latch last fired in
    pub fn direction(&self) -> Direction {
        self.last
    }

    /// Feed one sample, returning the edge event it produces
    pub fn update(&mut self, sample: u8, config: &SamplerConfig) -> AxisEvent {
        match classify(sample, config) {
            AxisZone::Neutral => {
                self.last = Direction::Neutral;
                AxisEvent::None
            }
            AxisZone::Positive if self.last != Direction::Positive => {
                self.last = Direction::Positive;
                AxisEvent::MovedPositive
            }
            AxisZone::Negative if self.last != Direction::Negative => {
                self.last = Direction::Negative;
                AxisEvent::MovedNegative
            }
            _ => AxisEvent::None,
        }
    }
}

/// Falling-edge detector for the active-low push button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLatch {
    last_high: bool,
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonLatch {
    /// Latch assuming the button starts released (pulled high)
    pub const fn new() -> Self {
        Self { last_high: true }
    }

    /// Feed one level, returning a press on a high to low transition
    pub fn update(&mut self, is_high: bool) -> ButtonEvent {
        let pressed = self.last_high && !is_high;
        self.last_high = is_high;
        if pressed {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::None
        }
    }
}
