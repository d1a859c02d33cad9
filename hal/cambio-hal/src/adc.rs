//! Analog input abstractions

/// Single-conversion analog front end
///
/// The converter only needs 8 bits of resolution; implementations on
/// wider converters drop the low bits.
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Run one blocking conversion on `channel` and return the 8-bit result
    fn sample(&mut self, channel: u8) -> Result<u8, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    fn sample(&mut self, channel: u8) -> Result<u8, Self::Error> {
        (**self).sample(channel)
    }
}

/// Error from analog conversions, common across chip HALs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Channel index not wired on this board
    UnknownChannel(u8),
    /// Conversion did not complete or reported an error
    ConversionFailed,
}

/// Reduce a wide conversion result to the 8-bit range used by the input logic
///
/// `bits` is the native resolution of the converter (e.g. 12 on RP2040).
pub const fn to_u8(raw: u16, bits: u8) -> u8 {
    if bits <= 8 {
        raw as u8
    } else {
        (raw >> (bits - 8)) as u8
    }
}
