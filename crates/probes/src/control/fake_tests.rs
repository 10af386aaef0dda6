// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_to_success() {
    let probe = FakeControlProbe::new();
    assert!(probe.control_service("nginx", &ScheduledAction::Restart));
}

#[test]
fn set_next_result_overrides_once() {
    let probe = FakeControlProbe::new();
    probe.set_next_result(false);
    assert!(!probe.control_service("nginx", &ScheduledAction::Restart));
    assert!(probe.control_service("nginx", &ScheduledAction::Restart));
}

#[test]
fn calls_record_service_and_action() {
    let probe = FakeControlProbe::new();
    probe.control_service("nginx", &ScheduledAction::Stop);
    let calls = probe.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].service, "nginx");
    assert_eq!(calls[0].action, ScheduledAction::Stop);
}