// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::cell::RefCell;
use vet_core::{ActionRate, ServiceKind};
use vet_probes::{FakeProbeSet, ProcessSample};

struct RecordingSink {
    posts: RefCell<Vec<(EventKind, EventState)>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            posts: RefCell::new(Vec::new()),
        }
    }
}

impl EventSink for RecordingSink {
    fn post(&self, _service: &str, kind: EventKind, state: EventState, _action: Option<&ActionRate>, _message: &str) {
        self.posts.borrow_mut().push((kind, state));
    }
}

#[test]
fn pid_zero_posts_nonexist_failed() {
    let mut s = Service::new("svc", ServiceKind::Process);
    let probes = FakeProbeSet::new();
    let sink = RecordingSink::new();
    assert!(!check_process(&mut s, &probes, &sink, &SystemInfo::default(), false));
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Nonexist, EventState::Failed)]);
}

#[test]
fn running_process_without_sampling_posts_existence_only() {
    let mut s = Service::new("svc", ServiceKind::Process);
    let probes = FakeProbeSet::new();
    probes.process.set_pid("svc", 123);
    let sink = RecordingSink::new();
    assert!(check_process(&mut s, &probes, &sink, &SystemInfo::default(), false));
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Nonexist, EventState::Succeeded)]);
}

#[test]
fn sampling_runs_state_and_pid_evaluators() {
    let mut s = Service::new("svc", ServiceKind::Process);
    let probes = FakeProbeSet::new();
    probes.process.set_pid("svc", 123);
    probes.process.set_sample(123, ProcessSample {
        ppid: 1,
        cpu_percent: 10,
        total_cpu_percent: 10,
        mem_percent: 20,
        mem_kbyte: 1024,
        children: 0,
        uptime_secs: 60,
    });
    let sink = RecordingSink::new();
    assert!(check_process(&mut s, &probes, &sink, &SystemInfo::default(), true));
    let kinds: Vec<_> = sink.posts.borrow().iter().map(|(k, _)| *k).collect();
    assert!(kinds.contains(&EventKind::Data));
}

#[test]
fn stale_exec_failure_clears_on_recovery() {
    let mut s = Service::new("svc", ServiceKind::Process);
    s.failed.set(EventKind::Exec);
    let probes = FakeProbeSet::new();
    probes.process.set_pid("svc", 123);
    let sink = RecordingSink::new();
    check_process(&mut s, &probes, &sink, &SystemInfo::default(), false);
    assert!(!s.failed.is_set(EventKind::Exec));
    assert!(sink.posts.borrow().iter().any(|(k, st)| *k == EventKind::Exec && *st == EventState::Succeeded));
}