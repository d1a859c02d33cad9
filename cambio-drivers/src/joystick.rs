//! Analog joystick with push button
//!
//! Two potentiometer axes on ADC channels and an active-low button with a
//! pull-up. Each call to `sample` reads both axes and the button once and
//! runs them through the edge latches, so only new movements and presses
//! come out.

use cambio_core::config::SamplerConfig;
use cambio_core::input::{AxisLatch, ButtonLatch};
use cambio_core::state::InputEvents;
use cambio_core::traits::InputSource;
use cambio_hal::{AnalogInput, InputPin};

/// ADC channel indices for the two axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickChannels {
    /// Horizontal axis
    pub x: u8,
    /// Vertical axis
    pub y: u8,
}

impl Default for JoystickChannels {
    fn default() -> Self {
        Self { x: 0, y: 1 }
    }
}

/// Joystick input source
pub struct Joystick<A, P> {
    adc: A,
    button: P,
    channels: JoystickChannels,
    config: SamplerConfig,
    x: AxisLatch,
    y: AxisLatch,
    press: ButtonLatch,
}

impl<A: AnalogInput, P: InputPin> Joystick<A, P> {
    /// Create a joystick with all latches armed
    pub fn new(adc: A, button: P, channels: JoystickChannels, config: SamplerConfig) -> Self {
        Self {
            adc,
            button,
            channels,
            config,
            x: AxisLatch::new(),
            y: AxisLatch::new(),
            press: ButtonLatch::new(),
        }
    }

    /// Zone thresholds in use
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Read both axes without touching the latches
    pub fn raw(&mut self) -> Result<(u8, u8), A::Error> {
        let x = self.adc.sample(self.channels.x)?;
        let y = self.adc.sample(self.channels.y)?;
        Ok((x, y))
    }
}

impl<A: AnalogInput, P: InputPin> InputSource for Joystick<A, P> {
    type Error = A::Error;

    fn sample(&mut self) -> Result<InputEvents, Self::Error> {
        let (x, y) = self.raw()?;
        let level = self.button.is_high();

        Ok(InputEvents {
            x: self.x.update(x, &self.config),
            y: self.y.update(y, &self.config),
            button: self.press.update(level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cambio_core::state::{AxisEvent, ButtonEvent};
    use core::cell::Cell;
    use std::collections::VecDeque;

    /// ADC replaying scripted samples per channel
    #[derive(Default)]
    struct ScriptedAdc {
        x: VecDeque<u8>,
        y: VecDeque<u8>,
        fail: bool,
    }

    impl AnalogInput for ScriptedAdc {
        type Error = ();

        fn sample(&mut self, channel: u8) -> Result<u8, ()> {
            if self.fail {
                return Err(());
            }
            let queue = match channel {
                0 => &mut self.x,
                1 => &mut self.y,
                _ => return Err(()),
            };
            Ok(queue.pop_front().unwrap_or(128))
        }
    }

    struct Button<'a>(&'a Cell<bool>);

    impl InputPin for Button<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    fn adc(x: &[u8], y: &[u8]) -> ScriptedAdc {
        ScriptedAdc {
            x: x.iter().copied().collect(),
            y: y.iter().copied().collect(),
            fail: false,
        }
    }

    #[test]
    fn test_axis_edges() {
        let level = Cell::new(true);
        let mut stick = Joystick::new(
            adc(&[128, 200, 200, 128, 200], &[]),
            Button(&level),
            JoystickChannels::default(),
            SamplerConfig::DEFAULT,
        );
        let xs: Vec<AxisEvent> = (0..5).map(|_| stick.sample().unwrap().x).collect();
        assert_eq!(
            xs,
            [
                AxisEvent::None,
                AxisEvent::MovedPositive,
                AxisEvent::None,
                AxisEvent::None,
                AxisEvent::MovedPositive,
            ]
        );
    }

    #[test]
    fn test_axes_latched_independently() {
        let level = Cell::new(true);
        let mut stick = Joystick::new(
            adc(&[200, 200], &[20, 128]),
            Button(&level),
            JoystickChannels::default(),
            SamplerConfig::DEFAULT,
        );
        let first = stick.sample().unwrap();
        assert_eq!(first.x, AxisEvent::MovedPositive);
        assert_eq!(first.y, AxisEvent::MovedNegative);
        assert_eq!(stick.sample().unwrap(), InputEvents::NONE);
    }

    #[test]
    fn test_button_press_edge() {
        let level = Cell::new(true);
        let mut stick = Joystick::new(
            adc(&[], &[]),
            Button(&level),
            JoystickChannels::default(),
            SamplerConfig::DEFAULT,
        );
        assert_eq!(stick.sample().unwrap().button, ButtonEvent::None);
        level.set(false);
        assert_eq!(stick.sample().unwrap(), InputEvents::PRESS);
        assert_eq!(stick.sample().unwrap().button, ButtonEvent::None);
        level.set(true);
        stick.sample().unwrap();
        level.set(false);
        assert_eq!(stick.sample().unwrap().button, ButtonEvent::Pressed);
    }

    #[test]
    fn test_swapped_channels() {
        let level = Cell::new(true);
        let mut stick = Joystick::new(
            adc(&[10], &[250]),
            Button(&level),
            JoystickChannels { x: 1, y: 0 },
            SamplerConfig::DEFAULT,
        );
        let events = stick.sample().unwrap();
        assert_eq!(events.x, AxisEvent::MovedPositive);
        assert_eq!(events.y, AxisEvent::MovedNegative);
    }

    #[test]
    fn test_adc_error_propagates() {
        let level = Cell::new(true);
        let mut stick = Joystick::new(
            ScriptedAdc {
                fail: true,
                ..Default::default()
            },
            Button(&level),
            JoystickChannels::default(),
            SamplerConfig::DEFAULT,
        );
        assert_eq!(stick.sample(), Err(()));
    }
}
