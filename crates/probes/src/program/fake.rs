// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake program probe for testing.

use super::{ChildHandle, ChildStatus, ProgramProbe};
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum ProgramProbeCall {
    Spawn { command: String, args: Vec<String> },
    Poll { child: ChildHandle },
    KillAndWait { child: ChildHandle },
    ReadStderrOrStdin { child: ChildHandle },
}

#[derive(Debug, Clone)]
struct FakeChild {
    status: ChildStatus,
    stderr: String,
    stdin: String,
}

struct FakeProgramProbeState {
    next_handle: ChildHandle,
    children: HashMap<ChildHandle, FakeChild>,
    /// `None` means the next spawn should fail.
    spawn_ok: bool,
    calls: Vec<ProgramProbeCall>,
}

#[derive(Clone)]
pub struct FakeProgramProbe {
    inner: Arc<Mutex<FakeProgramProbeState>>,
}

impl Default for FakeProgramProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeProgramProbeState {
                next_handle: 1,
                children: HashMap::new(),
                spawn_ok: true,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeProgramProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ProgramProbeCall> {
        self.inner.lock().calls.clone()
    }

    pub fn fail_next_spawn(&self) {
        self.inner.lock().spawn_ok = false;
    }

    pub fn set_status(&self, child: ChildHandle, status: ChildStatus) {
        if let Some(c) = self.inner.lock().children.get_mut(&child) {
            c.status = status;
        }
    }

    pub fn set_stderr(&self, child: ChildHandle, text: impl Into<String>) {
        if let Some(c) = self.inner.lock().children.get_mut(&child) {
            c.stderr = text.into();
        }
    }
}

impl ProgramProbe for FakeProgramProbe {
    fn spawn(&self, command: &str, args: &[String], _working_directory: Option<&Path>) -> Result<ChildHandle, ProbeError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ProgramProbeCall::Spawn {
            command: command.to_string(),
            args: args.to_vec(),
        });
        if !inner.spawn_ok {
            return Err(ProbeError::Spawn(format!("failed to exec {command}")));
        }
        let handle = inner.next_handle;
        inner.next_handle += 1;
        inner.children.insert(
            handle,
            FakeChild {
                status: ChildStatus::Running,
                stderr: String::new(),
                stdin: String::new(),
            },
        );
        Ok(handle)
    }

    fn poll(&self, child: ChildHandle) -> ChildStatus {
        let mut inner = self.inner.lock();
        inner.calls.push(ProgramProbeCall::Poll { child });
        inner.children.get(&child).map(|c| c.status).unwrap_or(ChildStatus::Exited(-1))
    }

    fn kill_and_wait(&self, child: ChildHandle) -> i32 {
        let mut inner = self.inner.lock();
        inner.calls.push(ProgramProbeCall::KillAndWait { child });
        match inner.children.remove(&child) {
            Some(FakeChild { status: ChildStatus::Exited(code), .. }) => code,
            _ => -1,
        }
    }

    fn read_stderr_or_stdin(&self, child: ChildHandle, cap: usize) -> String {
        let mut inner = self.inner.lock();
        inner.calls.push(ProgramProbeCall::ReadStderrOrStdin { child });
        match inner.children.get(&child) {
            Some(c) if !c.stderr.is_empty() => c.stderr.chars().take(cap).collect(),
            Some(c) => c.stdin.chars().take(cap).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
