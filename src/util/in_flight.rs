//! Single-flight guard for submit-style actions.
//!
//! A second submission while the first is unresolved is refused rather than
//! queued. The guard clears the flag on drop, so early returns and errors
//! never leave a control stuck disabled.

#[cfg(test)]
#[path = "in_flight_test.rs"]
mod in_flight_test;

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct InFlight {
    busy: Cell<bool>,
}

impl InFlight {
    /// Claim the slot, or `None` if a request is already pending.
    #[must_use]
    pub fn begin(&self) -> Option<InFlightGuard<'_>> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlightGuard { busy: &self.busy })
    }
}

/// Releases the [`InFlight`] slot when dropped.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    busy: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
