// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Permission, uid, gid, timestamp, size, and uptime evaluators.

use vet_core::{EventKind, EventSink, EventState, GidTest, PermTest, SizeTest, TimestampTest, UidTest, UptimeTest};

/// `check_perm(descriptor, mode)` — compare `mode & 07777` against the
/// configured octal.
pub fn check_perm(test: &PermTest, mode: u32, sink: &dyn EventSink, service: &str) -> bool {
    let actual = mode & 0o7777;
    if actual != test.mode {
        sink.post(
            service,
            EventKind::Permission,
            EventState::Failed,
            Some(&test.action),
            &format!("permission test failed [current permission={actual:04o}, expected={:04o}]", test.mode),
        );
        false
    } else {
        sink.post(
            service,
            EventKind::Permission,
            EventState::Succeeded,
            None,
            "permission check succeeded",
        );
        true
    }
}

/// `check_uid(descriptor, uid)` — equality.
pub fn check_uid(test: &UidTest, uid: u32, sink: &dyn EventSink, service: &str) -> bool {
    if uid != test.uid {
        sink.post(
            service,
            EventKind::Uid,
            EventState::Failed,
            Some(&test.action),
            &format!("uid test failed [current uid={uid}, expected={}]", test.uid),
        );
        false
    } else {
        sink.post(service, EventKind::Uid, EventState::Succeeded, None, "uid check succeeded");
        true
    }
}

/// `check_gid(descriptor, gid)` — equality.
pub fn check_gid(test: &GidTest, gid: u32, sink: &dyn EventSink, service: &str) -> bool {
    if gid != test.gid {
        sink.post(
            service,
            EventKind::Gid,
            EventState::Failed,
            Some(&test.action),
            &format!("gid test failed [current gid={gid}, expected={}]", test.gid),
        );
        false
    } else {
        sink.post(service, EventKind::Gid, EventState::Succeeded, None, "gid check succeeded");
        true
    }
}

/// `check_size(sizes, sample)`: either limit-comparison or `test_changes`
/// mode, breaking after the first `test_changes` descriptor per list.
pub fn check_size(sizes: &mut [SizeTest], sample: u64, sink: &dyn EventSink, service: &str) -> bool {
    let mut ok = true;
    for test in sizes.iter_mut() {
        if test.test_changes {
            let changed = test.initialized && test.sample != Some(sample);
            test.sample = Some(sample);
            test.initialized = true;
            if changed {
                sink.post(
                    service,
                    EventKind::Size,
                    EventState::Changed,
                    Some(&test.action),
                    &format!("size changed [current size={sample}]"),
                );
            } else {
                sink.post(service, EventKind::Size, EventState::ChangedNot, None, "size check succeeded");
            }
            return ok;
        }

        if test.operator.eval(sample as i64, test.limit) {
            sink.post(
                service,
                EventKind::Size,
                EventState::Failed,
                Some(&test.action),
                &format!("size test failed [current size={sample}]"),
            );
            ok = false;
        } else {
            sink.post(service, EventKind::Size, EventState::Succeeded, None, "size check succeeded");
        }
    }
    ok
}

/// `check_timestamp(timestamps, sample)`, same break-after-first-
/// `test_changes` rule as `check_size`.
pub fn check_timestamp(timestamps: &mut [TimestampTest], sample: i64, sink: &dyn EventSink, service: &str) -> bool {
    let mut ok = true;
    for test in timestamps.iter_mut() {
        if test.test_changes {
            let changed = test.initialized && test.sample != Some(sample);
            test.sample = Some(sample);
            test.initialized = true;
            if changed {
                sink.post(
                    service,
                    EventKind::Timestamp,
                    EventState::Changed,
                    Some(&test.action),
                    "timestamp changed",
                );
            } else {
                sink.post(service, EventKind::Timestamp, EventState::ChangedNot, None, "timestamp check succeeded");
            }
            return ok;
        }

        if test.operator.eval(sample, test.limit) {
            sink.post(
                service,
                EventKind::Timestamp,
                EventState::Failed,
                Some(&test.action),
                "timestamp test failed",
            );
            ok = false;
        } else {
            sink.post(service, EventKind::Timestamp, EventState::Succeeded, None, "timestamp check succeeded");
        }
    }
    ok
}

/// `check_uptime(uptimes, sample)`. Not gated on `MONITOR_INIT`: a zero
/// uptime on cycle one is still compared like any other sample.
pub fn check_uptime(uptimes: &[UptimeTest], sample_secs: i64, sink: &dyn EventSink, service: &str) -> bool {
    let mut ok = true;
    for test in uptimes {
        if test.operator.eval(sample_secs, test.limit) {
            sink.post(
                service,
                EventKind::Uptime,
                EventState::Failed,
                Some(&test.action),
                &format!("uptime test failed [current uptime={sample_secs}s]"),
            );
            ok = false;
        } else {
            sink.post(service, EventKind::Uptime, EventState::Succeeded, None, "uptime check succeeded");
        }
    }
    ok
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
