// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake stat probe for testing.

use super::{StatProbe, StatResult};
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum StatProbeCall {
    Lstat { path: PathBuf },
    Stat { path: PathBuf },
    Realpath { path: PathBuf },
}

struct FakeStatProbeState {
    entries: HashMap<PathBuf, StatResult>,
    calls: Vec<StatProbeCall>,
}

#[derive(Clone)]
pub struct FakeStatProbe {
    inner: Arc<Mutex<FakeStatProbeState>>,
}

impl Default for FakeStatProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeStatProbeState {
                entries: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeStatProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<StatProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_entry(&self, path: impl Into<PathBuf>, result: StatResult) {
        self.inner.lock().entries.insert(path.into(), result);
    }

    fn lookup(&self, path: &Path) -> Result<StatResult, ProbeError> {
        self.inner.lock().entries.get(path).copied().ok_or_else(|| ProbeError::Stat {
            path: path.display().to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

impl StatProbe for FakeStatProbe {
    fn lstat(&self, path: &Path) -> Result<StatResult, ProbeError> {
        self.inner.lock().calls.push(StatProbeCall::Lstat { path: path.to_path_buf() });
        self.lookup(path)
    }

    fn stat(&self, path: &Path) -> Result<StatResult, ProbeError> {
        self.inner.lock().calls.push(StatProbeCall::Stat { path: path.to_path_buf() });
        self.lookup(path)
    }

    fn realpath(&self, path: &Path) -> Result<PathBuf, ProbeError> {
        self.inner.lock().calls.push(StatProbeCall::Realpath { path: path.to_path_buf() });
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
