// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled-action dispatch.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ControlProbeCall, FakeControlProbe};

use vet_core::ScheduledAction;

pub trait ControlProbe: Send + Sync {
    fn control_service(&self, service: &str, action: &ScheduledAction) -> bool;
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
