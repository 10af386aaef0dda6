// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[test]
fn connect_succeeds_by_default() {
    let probe = FakeSocketProbe::new();
    let handle = probe.connect("localhost", 80, Duration::from_secs(1)).unwrap();
    assert!(probe.is_ready(handle));
    assert_eq!(probe.socket_error(handle), None);
}

#[test]
fn fail_next_exhausts_then_succeeds() {
    let probe = FakeSocketProbe::new();
    probe.fail_next("localhost", 80, 2);
    assert!(probe.connect("localhost", 80, Duration::from_secs(1)).is_err());
    assert!(probe.connect("localhost", 80, Duration::from_secs(1)).is_err());
    assert!(probe.connect("localhost", 80, Duration::from_secs(1)).is_ok());
}

#[test]
fn scripted_error_is_surfaced_on_the_handle() {
    let probe = FakeSocketProbe::new();
    let handle = probe.connect("localhost", 80, Duration::from_secs(1)).unwrap();
    probe.set_error(handle, "connection reset");
    assert_eq!(probe.socket_error(handle), Some("connection reset".to_string()));
}