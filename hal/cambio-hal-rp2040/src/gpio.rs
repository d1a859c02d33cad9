//! GPIO input wrapper

use embassy_rp::gpio::Input;

/// Digital input backed by an `embassy-rp` GPIO
///
/// Pull configuration is chosen by the caller when building the
/// [`Input`]; the push button uses the internal pull-up.
pub struct RpInputPin<'d> {
    pin: Input<'d>,
}

impl<'d> RpInputPin<'d> {
    /// Wrap a configured input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl cambio_hal::InputPin for RpInputPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
