// ABOUTME: Idle/Requesting gate allowing a single outstanding request per adapter instance
// ABOUTME: The permit returns the gate to idle on drop, including on cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;
use you360_core::errors::AdapterError;

/// Per-adapter in-flight guard
#[derive(Debug, Default)]
pub struct RequestGate {
    requesting: AtomicBool,
}

impl RequestGate {
    /// Create an idle gate
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requesting: AtomicBool::new(false),
        }
    }

    /// Move from Idle to Requesting
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Busy` when a request is already outstanding
    pub fn try_acquire(&self, feature: &'static str) -> Result<GatePermit<'_>, AdapterError> {
        self.requesting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                debug!(feature, "Rejected request while another is in flight");
                AdapterError::Busy { feature }
            })?;
        Ok(GatePermit { gate: self })
    }

    /// Whether a request is outstanding
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        self.requesting.load(Ordering::Acquire)
    }
}

/// Proof of the Requesting state; dropping it returns the gate to Idle
#[derive(Debug)]
pub struct GatePermit<'a> {
    gate: &'a RequestGate,
}

impl GatePermit<'_> {
    /// Whether this permit holds `gate`
    #[must_use]
    pub fn guards(&self, gate: &RequestGate) -> bool {
        std::ptr::eq(self.gate, gate)
    }
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        self.gate.requesting.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected_until_release() {
        let gate = RequestGate::new();
        let permit = gate.try_acquire("mood").unwrap();
        assert!(gate.is_requesting());
        assert_eq!(
            gate.try_acquire("mood").unwrap_err(),
            AdapterError::Busy { feature: "mood" }
        );
        drop(permit);
        assert!(!gate.is_requesting());
        assert!(gate.try_acquire("mood").is_ok());
    }

    #[test]
    fn test_permit_only_guards_its_own_gate() {
        let gate = RequestGate::new();
        let other = RequestGate::new();
        let permit = gate.try_acquire("chat").unwrap();
        assert!(permit.guards(&gate));
        assert!(!permit.guards(&other));
    }
}
