//! I2C bus abstractions
//!
//! The display backpack only ever receives single-byte writes, so the
//! bus trait is write-only.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// Blocks until the transaction (start, address, data, stop) has
    /// completed or the controller reports a failure.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };
}

/// Error from I2C operations, common across chip HALs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge its address or a data byte
    Nack,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Address outside the 7-bit range or reserved
    InvalidAddress,
    /// Controller reported a failure that does not map onto the above
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bus counting the bytes it is handed
    #[derive(Default)]
    struct CountingBus {
        bytes: usize,
    }

    impl I2cBus for CountingBus {
        type Error = I2cBusError;

        fn write(&mut self, _address: u8, data: &[u8]) -> Result<(), I2cBusError> {
            self.bytes += data.len();
            Ok(())
        }
    }

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default(), I2cConfig::STANDARD);
        assert_eq!(I2cConfig::STANDARD.frequency, 100_000);
    }

    fn send<B: I2cBus>(mut bus: B) -> Result<(), B::Error> {
        bus.write(0x27, &[0x08, 0x0C])
    }

    #[test]
    fn test_write_through_reference() {
        let mut bus = CountingBus::default();
        send(&mut bus).unwrap();
        send(&mut bus).unwrap();
        assert_eq!(bus.bytes, 4);
    }
}
