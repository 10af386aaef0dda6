// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake checksum probe for testing.

use super::ChecksumProbe;
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use vet_core::ChecksumAlgorithm;

#[derive(Debug, Clone)]
pub enum ChecksumProbeCall {
    Checksum { path: PathBuf, algorithm: ChecksumAlgorithm },
}

struct FakeChecksumProbeState {
    digests: HashMap<PathBuf, String>,
    calls: Vec<ChecksumProbeCall>,
}

#[derive(Clone)]
pub struct FakeChecksumProbe {
    inner: Arc<Mutex<FakeChecksumProbeState>>,
}

impl Default for FakeChecksumProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeChecksumProbeState {
                digests: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeChecksumProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ChecksumProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_digest(&self, path: impl Into<PathBuf>, digest: impl Into<String>) {
        self.inner.lock().digests.insert(path.into(), digest.into());
    }
}

impl ChecksumProbe for FakeChecksumProbe {
    fn checksum(&self, path: &std::path::Path, algorithm: ChecksumAlgorithm) -> Result<String, ProbeError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ChecksumProbeCall::Checksum {
            path: path.to_path_buf(),
            algorithm,
        });
        Ok(inner
            .digests
            .get(path)
            .cloned()
            .unwrap_or_else(|| "0".repeat(algorithm.hex_len())))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
