//! Events that drive the wizard

/// Edge event from one stick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisEvent {
    /// No threshold crossed this tick
    #[default]
    None,
    /// Axis pushed past the high threshold
    MovedPositive,
    /// Axis pushed past the low threshold
    MovedNegative,
}

impl AxisEvent {
    /// True for either movement
    pub fn is_move(&self) -> bool {
        !matches!(self, AxisEvent::None)
    }
}

/// Edge event from the push button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// No press this tick
    #[default]
    None,
    /// High to low transition
    Pressed,
}

impl ButtonEvent {
    /// True for a press
    pub fn is_pressed(&self) -> bool {
        matches!(self, ButtonEvent::Pressed)
    }
}

/// Everything sampled in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvents {
    /// Horizontal axis
    pub x: AxisEvent,
    /// Vertical axis
    pub y: AxisEvent,
    /// Push button
    pub button: ButtonEvent,
}

impl InputEvents {
    /// No events
    pub const NONE: Self = Self {
        x: AxisEvent::None,
        y: AxisEvent::None,
        button: ButtonEvent::None,
    };

    /// Only a button press
    pub const PRESS: Self = Self {
        x: AxisEvent::None,
        y: AxisEvent::None,
        button: ButtonEvent::Pressed,
    };

    /// Only an X-axis event
    pub const fn x(event: AxisEvent) -> Self {
        Self {
            x: event,
            y: AxisEvent::None,
            button: ButtonEvent::None,
        }
    }

    /// Only a Y-axis event
    pub const fn y(event: AxisEvent) -> Self {
        Self {
            x: AxisEvent::None,
            y: event,
            button: ButtonEvent::None,
        }
    }

    /// True when nothing happened
    pub fn is_empty(&self) -> bool {
        !self.has_axis_move() && !self.button.is_pressed()
    }

    /// True when either axis moved
    pub fn has_axis_move(&self) -> bool {
        self.x.is_move() || self.y.is_move()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(InputEvents::NONE.is_empty());
        assert!(InputEvents::default().is_empty());
        assert!(!InputEvents::PRESS.is_empty());
        assert!(!InputEvents::y(AxisEvent::MovedNegative).is_empty());
    }

    #[test]
    fn test_axis_move() {
        assert!(InputEvents::x(AxisEvent::MovedPositive).has_axis_move());
        assert!(!InputEvents::PRESS.has_axis_move());
    }
}
