// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process existence and resource sampling.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessProbe, ProcessProbeCall};

use crate::error::ProbeError;

/// A sample of one process's resource usage, filled in by
/// `ProcessProbe::update_process_data` and copied into the service's
/// `ProcessInfo` by the Process validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSample {
    pub ppid: i64,
    /// Scaled ×10.
    pub cpu_percent: i32,
    /// Scaled ×10.
    pub total_cpu_percent: i32,
    /// Scaled ×10.
    pub mem_percent: i32,
    pub mem_kbyte: i64,
    pub children: i32,
    pub uptime_secs: u64,
}

/// Resolve and sample process state. Mirrors the original's
/// `isProcessRunning`/`update_process_data` collaborators.
pub trait ProcessProbe: Send + Sync {
    /// Resolve the pid for `service`. `0` means not running, matching the
    /// original's sentinel rather than `Option`.
    fn is_process_running(&self, service: &str) -> i64;

    /// Populate a fresh sample for `pid`. Errors only on a collaborator
    /// fault (e.g. the process tree could not be read at all), never on
    /// "process not found" — that case is handled by `is_process_running`.
    fn update_process_data(&self, service: &str, pid: i64) -> Result<ProcessSample, ProbeError>;
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
