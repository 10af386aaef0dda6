// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program validator: spawn, poll, timeout, status evaluation, respawn.

use std::time::Instant;
use vet_core::{EventKind, EventSink, EventState, Service};
use vet_probes::{ChildStatus, ProbeSet};

/// Length of the stderr/stdin capture used for a failing status message.
pub const STATUS_MESSAGE_CAP: usize = 2048;

/// `check_program`: query the prior child's exit status (killing it first if
/// it's still running past its declared timeout), post a `Status` event per
/// configured status rule once a status is known, release the handle, and
/// finally (re)spawn the command for the next cycle.
pub fn check_program(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink, now: Instant) -> bool {
    let service = s.id.as_str().to_string();
    let Some(mut program) = s.program.clone() else {
        sink.post(&service, EventKind::Status, EventState::Failed, None, "no program configured");
        return false;
    };

    let exit_status = match (program.started, program.child) {
        (Some(started), Some(handle)) => match probes.program().poll(handle) {
            ChildStatus::Running => {
                if now.saturating_duration_since(started) > program.timeout {
                    let status = probes.program().kill_and_wait(handle);
                    program.started = None;
                    program.child = None;
                    Some((status, Some(handle)))
                } else {
                    s.program = Some(program);
                    return true;
                }
            }
            ChildStatus::Exited(status) => {
                program.started = None;
                Some((status, Some(handle)))
            }
        },
        _ => None,
    };

    if let Some((status, handle)) = exit_status {
        program.last_exit_status = Some(status);

        for test in s.statuses.iter() {
            if test.matches(status) {
                let message = handle
                    .map(|h| probes.program().read_stderr_or_stdin(h, STATUS_MESSAGE_CAP))
                    .unwrap_or_default();
                sink.post(&service, EventKind::Status, EventState::Failed, Some(&test.action), &message);
            } else {
                sink.post(&service, EventKind::Status, EventState::Succeeded, None, "status check succeeded");
            }
        }

        program.child = None;
    }

    let exec_action = s.action_bindings.get(&EventKind::Exec).copied();

    match probes.program().spawn(&program.command, &program.args, program.working_directory.as_deref()) {
        Ok(handle) => {
            program.started = Some(now);
            program.child = Some(handle);
            s.program = Some(program);
            sink.post(
                &service,
                EventKind::Status,
                EventState::Succeeded,
                exec_action.as_ref(),
                &format!("'{service}' program started"),
            );
            true
        }
        Err(err) => {
            program.child = None;
            s.program = Some(program);
            sink.post(
                &service,
                EventKind::Status,
                EventState::Failed,
                exec_action.as_ref(),
                &format!("cannot spawn program: {err}"),
            );
            false
        }
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
