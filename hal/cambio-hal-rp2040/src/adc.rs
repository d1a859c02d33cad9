//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! The stick axes are wired to ADC0 (X) and ADC1 (Y).

use embassy_rp::adc::{Adc, Blocking, Channel};

use cambio_hal::adc::{to_u8, AdcError};

/// Native resolution of the RP2040 converter
pub const ADC_BITS: u8 = 12;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> u8 {
        match self {
            AdcChannel::Adc0 => 26,
            AdcChannel::Adc1 => 27,
            AdcChannel::Adc2 => 28,
            AdcChannel::Adc3 => 29,
        }
    }

    /// Channel index as used by [`cambio_hal::AnalogInput::sample`]
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// Blocking analog front end over a fixed set of wired channels
///
/// Channel `i` passed to `sample` selects the `i`-th channel given to
/// [`RpAnalog::new`].
pub struct RpAnalog<'d, const N: usize> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; N],
}

impl<'d, const N: usize> RpAnalog<'d, N> {
    /// Wrap a blocking ADC and the channels wired to it
    pub fn new(adc: Adc<'d, Blocking>, channels: [Channel<'d>; N]) -> Self {
        Self { adc, channels }
    }
}

impl<const N: usize> cambio_hal::AnalogInput for RpAnalog<'_, N> {
    type Error = AdcError;

    fn sample(&mut self, channel: u8) -> Result<u8, Self::Error> {
        let ch = self
            .channels
            .get_mut(channel as usize)
            .ok_or(AdcError::UnknownChannel(channel))?;
        let raw = self
            .adc
            .blocking_read(ch)
            .map_err(|_| AdcError::ConversionFailed)?;
        Ok(to_u8(raw, ADC_BITS))
    }
}
