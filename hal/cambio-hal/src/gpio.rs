//! GPIO pin abstractions

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Reads are instantaneous and cannot fail.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
