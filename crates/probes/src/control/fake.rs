// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake control probe for testing.

use super::ControlProbe;
use parking_lot::Mutex;
use std::sync::Arc;
use vet_core::ScheduledAction;

#[derive(Debug, Clone)]
pub struct ControlProbeCall {
    pub service: String,
    pub action: ScheduledAction,
}

struct FakeControlProbeState {
    /// Overrides the return value for the next `n` calls to `control_service`.
    next_result: Option<bool>,
    calls: Vec<ControlProbeCall>,
}

#[derive(Clone)]
pub struct FakeControlProbe {
    inner: Arc<Mutex<FakeControlProbeState>>,
}

impl Default for FakeControlProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeControlProbeState {
                next_result: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeControlProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ControlProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_next_result(&self, result: bool) {
        self.inner.lock().next_result = Some(result);
    }
}

impl ControlProbe for FakeControlProbe {
    fn control_service(&self, service: &str, action: &ScheduledAction) -> bool {
        let mut inner = self.inner.lock();
        inner.calls.push(ControlProbeCall {
            service: service.to_string(),
            action: action.clone(),
        });
        inner.next_result.take().unwrap_or(true)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
