// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::cell::RefCell;
use std::time::SystemTime;
use vet_core::{ActionRate, ServiceKind};
use vet_probes::{FakeProbeSet, FilesystemSample, StatResult};

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

fn stat_result(kind: StatKind) -> StatResult {
    StatResult {
        kind,
        mode: 0o755,
        uid: 0,
        gid: 0,
        size: 0,
        inode: 1,
        timestamp: SystemTime::now(),
    }
}

#[test]
fn missing_mount_posts_nonexist_failed() {
    let mut s = Service::new("fs", ServiceKind::Filesystem);
    s.path = Some("/mnt/missing".into());
    let probes = FakeProbeSet::new();
    let sink = RecordingSink::new();
    assert!(!check_filesystem(&mut s, &probes, &sink));
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Nonexist, EventState::Failed)]);
}

#[test]
fn successful_usage_posts_data_succeeded_and_computes_percents() {
    let mut s = Service::new("fs", ServiceKind::Filesystem);
    s.path = Some("/mnt/data".into());
    let probes = FakeProbeSet::new();
    probes.stat.set_entry("/mnt/data", stat_result(StatKind::Directory));
    probes.filesystem.set_sample(
        "/mnt/data",
        FilesystemSample {
            blocks: 1000,
            blocksfree: 100,
            blocksfreetotal: 100,
            block_size: 4096,
            files: 500,
            filesfree: 50,
            flags: 1,
        },
    );
    let sink = RecordingSink::new();
    assert!(check_filesystem(&mut s, &probes, &sink));
    match &s.info {
        vet_core::InfoSnapshot::Filesystem(fs) => {
            assert_eq!(fs.space_percent, 900);
            assert_eq!(fs.inode_percent, 900);
            assert_eq!(fs.space_total, 900);
            assert_eq!(fs.inode_total, 450);
        }
        _ => panic!("expected filesystem info"),
    }
    assert!(sink.posts.borrow().iter().any(|(k, st)| *k == EventKind::Data && *st == EventState::Succeeded));
}

#[test]
fn usage_probe_failure_posts_data_failed() {
    let mut s = Service::new("fs", ServiceKind::Filesystem);
    s.path = Some("/mnt/data".into());
    let probes = FakeProbeSet::new();
    probes.stat.set_entry("/mnt/data", stat_result(StatKind::Directory));
    probes.filesystem.set_error("/mnt/data", "permission denied");
    let sink = RecordingSink::new();
    assert!(!check_filesystem(&mut s, &probes, &sink));
    assert_eq!(sink.posts.borrow().as_slice(), &[(EventKind::Data, EventState::Failed)]);
}