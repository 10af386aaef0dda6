// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::cell::RefCell;
use vet_core::{ActionKind, ActionRate, EverySchedule, EventState, NullEventSink, ScheduledAction, Service, ServiceKind};
use vet_probes::FakeControlProbe;

fn restart_rate(count: u32, cycle: u32) -> ActionRate {
    ActionRate {
        count,
        cycle,
        action: ActionKind::Restart,
    }
}

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
fn check_skip_returns_true_when_already_visited() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.visited = true;
    assert!(check_skip(&mut s, Instant::now()));
}

#[test]
fn check_skip_every_cycle_never_skips() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.every = EverySchedule::Cycle;
    assert!(!check_skip(&mut s, Instant::now()));
    assert!(!s.monitor.is_waiting());
}

#[test]
fn check_skip_skipcycles_waits_until_counter_reaches_n() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.every = EverySchedule::SkipCycles { n: 3, counter: 0 };
    assert!(check_skip(&mut s, Instant::now()));
    assert!(s.monitor.is_waiting());
    assert!(check_skip(&mut s, Instant::now()));
    assert!(!check_skip(&mut s, Instant::now()));
}

#[test]
fn check_timeout_posts_failed_when_restart_count_exceeds_threshold() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.nstart = 5;
    s.ncycle = 0;
    s.timeout_rules.push(restart_rate(3, 10));
    let sink = RecordingSink::new();
    check_timeout(&mut s, &sink);
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Timeout, EventState::Failed)]);
}

#[test]
fn check_timeout_posts_once_per_independent_rule() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.nstart = 5;
    s.ncycle = 0;
    s.timeout_rules.push(restart_rate(3, 10));
    s.timeout_rules.push(restart_rate(4, 10));
    let sink = RecordingSink::new();
    check_timeout(&mut s, &sink);
    assert_eq!(
        sink.posts.borrow().as_slice(),
        &[(EventKind::Timeout, EventState::Failed), (EventKind::Timeout, EventState::Failed)]
    );
}

#[test]
fn check_timeout_resets_counters_once_cycle_window_exceeded() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.nstart = 1;
    s.ncycle = 10;
    s.timeout_rules.push(restart_rate(3, 9));
    let sink = RecordingSink::new();
    check_timeout(&mut s, &sink);
    assert_eq!(s.nstart, 0);
    assert_eq!(s.ncycle, 0);
}

#[test]
fn do_scheduled_action_ignores_when_no_action_pending() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    let control = FakeControlProbe::new();
    let sink = RecordingSink::new();
    assert!(!do_scheduled_action(&mut s, &control, &sink));
    assert!(sink.posts.borrow().is_empty());
}

#[test]
fn do_scheduled_action_posts_changed_and_clears_pending_action_regardless_of_result() {
    let mut s = Service::new("nginx", ServiceKind::Process);
    s.pending_action = Some(ScheduledAction::Restart);
    let control = FakeControlProbe::new();
    control.set_next_result(false);
    let sink = RecordingSink::new();
    let result = do_scheduled_action(&mut s, &control, &sink);
    assert!(!result);
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Action, EventState::Changed)]);
    assert!(s.pending_action.is_none());
}