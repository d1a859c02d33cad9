//! I2C bus wrapper for the RP2040 controller

use embassy_rp::i2c::{AbortReason, Blocking, Error as RpI2cError, I2c, Instance};

use cambio_hal::i2c::I2cBusError;

/// Blocking I2C master implementing [`cambio_hal::I2cBus`]
pub struct RpI2cBus<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2cBus<'d, T> {
    /// Wrap a blocking I2C controller
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<T: Instance> cambio_hal::I2cBus for RpI2cBus<'_, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::write(&mut self.i2c, address, data).map_err(map_error)
    }
}

fn map_error(e: RpI2cError) -> I2cBusError {
    match e {
        RpI2cError::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
        RpI2cError::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
        RpI2cError::AddressOutOfRange(_) | RpI2cError::AddressReserved(_) => {
            I2cBusError::InvalidAddress
        }
        _ => I2cBusError::Other,
    }
}
