// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::cell::RefCell;
use vet_core::{ActionKind, ActionRate, Operator};

fn action() -> ActionRate {
    ActionRate {
        count: 1,
        cycle: 1,
        action: ActionKind::Alert,
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
fn cpu_percent_over_limit_fails() {
    let mut process = ProcessInfo::default();
    process.cpu_percent = 900;
    let resources = vec![ResourceTest {
        id: ResourceId::CpuPercent,
        operator: Operator::Gt,
        limit: 500,
        action: action(),
    }];
    let sink = RecordingSink::new();
    let ok = check_resource(&resources, MonitorState::monitored(), Some(&process), &SystemInfo::default(), &sink, "svc");
    assert!(!ok);
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Resource, EventState::Failed)]);
}

#[test]
fn negative_sample_skips_silently() {
    let mut process = ProcessInfo::default();
    process.cpu_percent = -1;
    let resources = vec![ResourceTest {
        id: ResourceId::CpuPercent,
        operator: Operator::Gt,
        limit: 500,
        action: action(),
    }];
    let sink = RecordingSink::new();
    let ok = check_resource(&resources, MonitorState::monitored(), Some(&process), &SystemInfo::default(), &sink, "svc");
    assert!(ok);
    assert!(sink.posts.borrow().is_empty());
}

#[test]
fn monitor_init_skips_silently() {
    let mut process = ProcessInfo::default();
    process.cpu_percent = 900;
    let resources = vec![ResourceTest {
        id: ResourceId::CpuPercent,
        operator: Operator::Gt,
        limit: 500,
        action: action(),
    }];
    let sink = RecordingSink::new();
    let ok = check_resource(&resources, MonitorState::initializing(), Some(&process), &SystemInfo::default(), &sink, "svc");
    assert!(ok);
    assert!(sink.posts.borrow().is_empty());
}

#[test]
fn system_resource_ignores_missing_process_sample() {
    let system = SystemInfo {
        loadavg1: 50,
        ..Default::default()
    };
    let resources = vec![ResourceTest {
        id: ResourceId::LoadAvg1,
        operator: Operator::Gt,
        limit: 10,
        action: action(),
    }];
    let sink = RecordingSink::new();
    let ok = check_resource(&resources, MonitorState::monitored(), None, &system, &sink, "svc");
    assert!(!ok);
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Resource, EventState::Failed)]);
}

#[test]
fn filesystem_inode_check_skipped_when_no_inode_support() {
    let fs = FilesystemInfo {
        files: 0,
        inode_percent: 999,
        ..Default::default()
    };
    let limits = vec![FilesystemLimitTest {
        resource: FilesystemResource::Inode,
        unit: FilesystemLimitUnit::Percent,
        operator: Operator::Gt,
        limit: 900,
        action: action(),
    }];
    let sink = RecordingSink::new();
    let ok = check_filesystem_resource(&limits, &fs, &sink, "svc");
    assert!(ok);
    assert!(sink.posts.borrow().is_empty());
}

#[test]
fn filesystem_space_percent_over_limit_fails() {
    let fs = FilesystemInfo {
        files: 100,
        space_percent: 950,
        ..Default::default()
    };
    let limits = vec![FilesystemLimitTest {
        resource: FilesystemResource::Space,
        unit: FilesystemLimitUnit::Percent,
        operator: Operator::Gt,
        limit: 900,
        action: action(),
    }];
    let sink = RecordingSink::new();
    let ok = check_filesystem_resource(&limits, &fs, &sink, "svc");
    assert!(!ok);
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Resource, EventState::Failed)]);
}