// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::SystemTime;

fn sample() -> StatResult {
    StatResult {
        kind: StatKind::Regular,
        mode: 0o644,
        uid: 0,
        gid: 0,
        size: 10,
        inode: 1,
        timestamp: SystemTime::UNIX_EPOCH,
    }
}

#[test]
fn lookup_on_unknown_path_errors() {
    let probe = FakeStatProbe::new();
    assert!(probe.lstat(Path::new("/missing")).is_err());
}

#[test]
fn scripted_entry_is_returned_by_both_lstat_and_stat() {
    let probe = FakeStatProbe::new();
    probe.set_entry("/etc/passwd", sample());
    assert_eq!(probe.lstat(Path::new("/etc/passwd")).unwrap().inode, 1);
    assert_eq!(probe.stat(Path::new("/etc/passwd")).unwrap().inode, 1);
}

#[test]
fn realpath_defaults_to_identity() {
    let probe = FakeStatProbe::new();
    assert_eq!(probe.realpath(Path::new("/a/b")).unwrap(), Path::new("/a/b"));
}