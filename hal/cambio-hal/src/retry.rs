//! Retry budget for blocking port primitives
//!
//! A bare blocking primitive either completes or stalls the control loop
//! forever. Wrapping it in [`Retrying`] bounds the number of attempts and
//! turns a peripheral that keeps failing into a [`PortFault`] the caller
//! can log and recover from.

use crate::adc::AnalogInput;
use crate::i2c::I2cBus;

/// How many times a primitive is attempted before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryBudget {
    /// Total attempts, including the first one (at least 1)
    pub attempts: u8,
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RetryBudget {
    /// Three attempts
    pub const DEFAULT: Self = Self { attempts: 3 };

    /// A single attempt, no retries
    pub const ONCE: Self = Self { attempts: 1 };

    /// Create a budget, clamping zero up to a single attempt
    pub const fn new(attempts: u8) -> Self {
        Self {
            attempts: if attempts == 0 { 1 } else { attempts },
        }
    }

    /// Run `op` until it succeeds or the budget is spent
    pub fn run<T, E>(&self, mut op: impl FnMut() -> Result<T, E>) -> Result<T, PortFault<E>> {
        let attempts = self.attempts.max(1);
        let mut tries = 0;
        loop {
            tries += 1;
            match op() {
                Ok(value) => return Ok(value),
                Err(last) if tries >= attempts => {
                    return Err(PortFault::Exhausted {
                        attempts: tries,
                        last,
                    })
                }
                Err(_) => {}
            }
        }
    }
}

/// A port primitive that failed on every attempt of its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortFault<E> {
    /// Budget exhausted; carries the error from the final attempt
    Exhausted {
        /// Number of attempts made
        attempts: u8,
        /// Error reported by the last attempt
        last: E,
    },
}

impl<E> PortFault<E> {
    /// The error reported by the final attempt
    pub fn last_error(&self) -> &E {
        match self {
            PortFault::Exhausted { last, .. } => last,
        }
    }
}

/// Wraps a port primitive so every call is retried within a budget
#[derive(Debug)]
pub struct Retrying<P> {
    inner: P,
    budget: RetryBudget,
}

impl<P> Retrying<P> {
    /// Wrap `inner` with the given budget
    pub fn new(inner: P, budget: RetryBudget) -> Self {
        Self { inner, budget }
    }

    /// Get access to the wrapped primitive
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<B: I2cBus> I2cBus for Retrying<B> {
    type Error = PortFault<B::Error>;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        let inner = &mut self.inner;
        self.budget.run(|| inner.write(address, data))
    }
}

impl<A: AnalogInput> AnalogInput for Retrying<A> {
    type Error = PortFault<A::Error>;

    fn sample(&mut self, channel: u8) -> Result<u8, Self::Error> {
        let inner = &mut self.inner;
        self.budget.run(|| inner.sample(channel))
    }
}
