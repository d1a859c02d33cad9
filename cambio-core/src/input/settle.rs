//! Settle gate
//!
//! After an input event the sampler is held off for a settle interval so a
//! bouncing contact or a wobbling stick cannot produce a second event. The
//! gate compares against a millisecond tick clock instead of blocking, so
//! the hold-off does not depend on how long each loop iteration takes.

/// Hold-off deadline on a millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettleGate {
    open_at_ms: Option<u64>,
}

impl SettleGate {
    /// Open gate
    pub const fn new() -> Self {
        Self { open_at_ms: None }
    }

    /// True once the hold-off has elapsed
    pub fn is_open(&self, now_ms: u64) -> bool {
        match self.open_at_ms {
            Some(deadline) => now_ms >= deadline,
            None => true,
        }
    }

    /// Close the gate for `duration_ms` from `now_ms`
    ///
    /// An existing later deadline is kept.
    pub fn hold(&mut self, now_ms: u64, duration_ms: u32) {
        let deadline = now_ms.saturating_add(duration_ms as u64);
        self.open_at_ms = Some(match self.open_at_ms {
            Some(existing) if existing > deadline => existing,
            _ => deadline,
        });
    }
}
