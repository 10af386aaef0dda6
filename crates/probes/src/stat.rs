// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem metadata probing.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStatProbe, StatProbeCall};

use crate::error::ProbeError;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind a stat result resolved to, used by `check_file_like` to verify the
/// configured kind still matches reality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Regular,
    Directory,
    Fifo,
    Symlink,
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct StatResult {
    pub kind: StatKind,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub inode: u64,
    /// `max(mtime, ctime)`.
    pub timestamp: SystemTime,
}

pub trait StatProbe: Send + Sync {
    /// Does not follow a trailing symlink.
    fn lstat(&self, path: &Path) -> Result<StatResult, ProbeError>;
    /// Follows symlinks.
    fn stat(&self, path: &Path) -> Result<StatResult, ProbeError>;
    fn realpath(&self, path: &Path) -> Result<PathBuf, ProbeError>;
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
