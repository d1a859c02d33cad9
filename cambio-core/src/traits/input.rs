//! Input source trait

use crate::state::InputEvents;

/// Something that yields one tick's worth of input events
///
/// Implementations sample the hardware and run the edge latches, so each
/// call returns only new events.
pub trait InputSource {
    /// Error reported by the underlying port
    type Error;

    /// Sample every input once
    fn sample(&mut self) -> Result<InputEvents, Self::Error>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    type Error = T::Error;

    fn sample(&mut self) -> Result<InputEvents, Self::Error> {
        (**self).sample()
    }
}
