// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process validator: existence, resource sampling, and port checks.

use crate::evaluators::{check_connection, check_process_pid, check_process_ppid, check_process_state, check_resource, check_uptime};
use vet_core::{EventKind, EventSink, EventState, InfoSnapshot, ProcessInfo, Service, SystemInfo};
use vet_probes::ProbeSet;

/// `check_process(s, doprocess)`: resolve the pid, post existence, clear
/// stale Exec/Timeout failures, then (if sampling is enabled) run
/// process-state, pid/ppid-change, uptime, and resource evaluators, and
/// finally probe every configured port.
pub fn check_process(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink, system: &SystemInfo, doprocess: bool) -> bool {
    let service = s.id.as_str().to_string();
    let pid = probes.process().is_process_running(&service);

    if pid == 0 {
        sink.post(&service, EventKind::Nonexist, EventState::Failed, None, "process not running");
        return false;
    }
    sink.post(&service, EventKind::Nonexist, EventState::Succeeded, None, "process is running");

    if s.failed.is_set(EventKind::Exec) {
        sink.post(&service, EventKind::Exec, EventState::Succeeded, None, "process checks are now succeeding");
        s.failed.clear(EventKind::Exec);
    }
    if s.failed.is_set(EventKind::Timeout) {
        for _ in &s.timeout_rules {
            sink.post(&service, EventKind::Timeout, EventState::Succeeded, None, "process checks are now succeeding");
        }
        s.failed.clear(EventKind::Timeout);
    }

    if doprocess {
        match probes.process().update_process_data(&service, pid) {
            Ok(sample) => {
                let prev_pid = match &s.info {
                    InfoSnapshot::Process(p) => p.pid,
                    _ => -1,
                };
                let prev_ppid = match &s.info {
                    InfoSnapshot::Process(p) => p.ppid,
                    _ => -1,
                };
                let mut status = vet_core::ProcessStatusBits::default();
                status.set(vet_core::ProcessStatusBits::RUNNING);

                let info = ProcessInfo {
                    common: Default::default(),
                    pid,
                    pid_prev: prev_pid,
                    ppid: sample.ppid,
                    ppid_prev: prev_ppid,
                    status,
                    cpu_percent: sample.cpu_percent,
                    total_cpu_percent: sample.total_cpu_percent,
                    mem_percent: sample.mem_percent,
                    mem_kbyte: sample.mem_kbyte,
                    total_mem_kbyte: 0,
                    total_mem_percent: 0,
                    children: sample.children,
                    uptime: std::time::Duration::from_secs(sample.uptime_secs),
                };
                s.info = InfoSnapshot::Process(info.clone());

                check_process_state(status, sink, &service);
                check_process_pid(pid, prev_pid, sink, &service);
                check_process_ppid(info.ppid, prev_ppid, sink, &service);
                check_uptime(&s.uptimes, info.uptime.as_secs() as i64, sink, &service);
                check_resource(&s.resources, s.monitor, Some(&info), system, sink, &service);
            }
            Err(err) => {
                sink.post(&service, EventKind::Data, EventState::Failed, None, &format!("cannot read process data: {err}"));
            }
        }
    }

    for port in s.ports.iter_mut() {
        check_connection(port, probes.socket(), probes.protocol(), sink, &service);
    }

    true
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
