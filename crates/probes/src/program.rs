// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process lifecycle for `Program` services.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProgramProbe, ProgramProbeCall};

use crate::error::ProbeError;

/// Opaque handle to a spawned child, released via `kill_and_wait` once its
/// exit status has been consumed.
pub type ChildHandle = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Running,
    Exited(i32),
}

pub trait ProgramProbe: Send + Sync {
    fn spawn(&self, command: &str, args: &[String], working_directory: Option<&std::path::Path>) -> Result<ChildHandle, ProbeError>;
    fn poll(&self, child: ChildHandle) -> ChildStatus;
    fn kill_and_wait(&self, child: ChildHandle) -> i32;
    /// Up to `cap` bytes from stderr, falling back to stdin if empty.
    fn read_stderr_or_stdin(&self, child: ChildHandle, cap: usize) -> String;
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
