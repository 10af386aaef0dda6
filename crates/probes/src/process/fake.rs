// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process probe for testing.

use super::{ProcessProbe, ProcessSample};
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum ProcessProbeCall {
    IsProcessRunning { service: String },
    UpdateProcessData { service: String, pid: i64 },
}

struct FakeProcessProbeState {
    pids: HashMap<String, i64>,
    samples: HashMap<i64, ProcessSample>,
    calls: Vec<ProcessProbeCall>,
}

/// Fake process probe for testing.
#[derive(Clone)]
pub struct FakeProcessProbe {
    inner: Arc<Mutex<FakeProcessProbeState>>,
}

impl Default for FakeProcessProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeProcessProbeState {
                pids: HashMap::new(),
                samples: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeProcessProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ProcessProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_pid(&self, service: &str, pid: i64) {
        self.inner.lock().pids.insert(service.to_string(), pid);
    }

    pub fn set_sample(&self, pid: i64, sample: ProcessSample) {
        self.inner.lock().samples.insert(pid, sample);
    }
}

impl ProcessProbe for FakeProcessProbe {
    fn is_process_running(&self, service: &str) -> i64 {
        let mut inner = self.inner.lock();
        inner.calls.push(ProcessProbeCall::IsProcessRunning {
            service: service.to_string(),
        });
        *inner.pids.get(service).unwrap_or(&0)
    }

    fn update_process_data(&self, service: &str, pid: i64) -> Result<ProcessSample, ProbeError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ProcessProbeCall::UpdateProcessData {
            service: service.to_string(),
            pid,
        });
        Ok(inner.samples.get(&pid).copied().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
