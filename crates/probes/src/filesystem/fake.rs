// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake filesystem probe for testing.

use super::{FilesystemProbe, FilesystemSample};
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum FilesystemProbeCall {
    FilesystemUsage { path: PathBuf },
}

struct FakeFilesystemProbeState {
    samples: HashMap<PathBuf, Result<FilesystemSample, String>>,
    calls: Vec<FilesystemProbeCall>,
}

#[derive(Clone)]
pub struct FakeFilesystemProbe {
    inner: Arc<Mutex<FakeFilesystemProbeState>>,
}

impl Default for FakeFilesystemProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeFilesystemProbeState {
                samples: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeFilesystemProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<FilesystemProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn set_sample(&self, path: impl Into<PathBuf>, sample: FilesystemSample) {
        self.inner.lock().samples.insert(path.into(), Ok(sample));
    }

    pub fn set_error(&self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.inner.lock().samples.insert(path.into(), Err(reason.into()));
    }
}

impl FilesystemProbe for FakeFilesystemProbe {
    fn filesystem_usage(&self, path: &Path) -> Result<FilesystemSample, ProbeError> {
        let mut inner = self.inner.lock();
        inner.calls.push(FilesystemProbeCall::FilesystemUsage {
            path: path.to_path_buf(),
        });
        match inner.samples.get(path) {
            Some(Ok(sample)) => Ok(*sample),
            Some(Err(reason)) => Err(ProbeError::Filesystem {
                path: path.display().to_string(),
                source: std::io::Error::other(reason.clone()),
            }),
            None => Ok(FilesystemSample::default()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
