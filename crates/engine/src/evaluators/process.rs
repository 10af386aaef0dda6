// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process state/pid/ppid and filesystem-flags change evaluators.

use vet_core::{EventKind, EventSink, EventState, ProcessStatusBits};

/// Zombie bit set ⇒ `Data` FAILED; else SUCCEEDED.
pub fn check_process_state(status: ProcessStatusBits, sink: &dyn EventSink, service: &str) -> bool {
    if status.has(ProcessStatusBits::ZOMBIE) {
        sink.post(service, EventKind::Data, EventState::Failed, None, "process is a zombie");
        false
    } else {
        sink.post(service, EventKind::Data, EventState::Succeeded, None, "process state check succeeded");
        true
    }
}

/// If `pid_prev == -1`, skip (no prior sample); else post `Pid`
/// CHANGED/CHANGEDNOT.
pub fn check_process_pid(pid: i64, pid_prev: i64, sink: &dyn EventSink, service: &str) -> bool {
    if pid_prev == -1 {
        return true;
    }
    if pid != pid_prev {
        sink.post(service, EventKind::Pid, EventState::Changed, None, "pid changed");
    } else {
        sink.post(service, EventKind::Pid, EventState::ChangedNot, None, "pid check succeeded");
    }
    true
}

/// Same as [`check_process_pid`] for the parent pid.
pub fn check_process_ppid(ppid: i64, ppid_prev: i64, sink: &dyn EventSink, service: &str) -> bool {
    if ppid_prev == -1 {
        return true;
    }
    if ppid != ppid_prev {
        sink.post(service, EventKind::PPid, EventState::Changed, None, "ppid changed");
    } else {
        sink.post(service, EventKind::PPid, EventState::ChangedNot, None, "ppid check succeeded");
    }
    true
}

/// If `flags_prev != -1` and differs from `flags`, post `Fsflag` CHANGED.
pub fn check_filesystem_flags(flags: i64, flags_prev: i64, sink: &dyn EventSink, service: &str) -> bool {
    if flags_prev != -1 && flags_prev != flags {
        sink.post(service, EventKind::Fsflag, EventState::Changed, None, "filesystem flags changed");
    }
    true
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
