// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake ICMP probe for testing.

use super::IcmpProbe;
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use vet_core::IcmpResult;

#[derive(Debug, Clone)]
pub enum IcmpProbeCall {
    IcmpEcho { host: String, count: u32 },
}

struct FakeIcmpProbeState {
    results: HashMap<String, IcmpResult>,
    calls: Vec<IcmpProbeCall>,
}

#[derive(Clone)]
pub struct FakeIcmpProbe {
    inner: Arc<Mutex<FakeIcmpProbeState>>,
}

impl Default for FakeIcmpProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeIcmpProbeState {
                results: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeIcmpProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<IcmpProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_result(&self, host: &str, result: IcmpResult) {
        self.inner.lock().results.insert(host.to_string(), result);
    }
}

impl IcmpProbe for FakeIcmpProbe {
    fn icmp_echo(&self, host: &str, _timeout: Duration, count: u32) -> Result<IcmpResult, ProbeError> {
        let mut inner = self.inner.lock();
        inner.calls.push(IcmpProbeCall::IcmpEcho {
            host: host.to_string(),
            count,
        });
        Ok(inner.results.get(host).copied().unwrap_or(IcmpResult::Unavailable))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
