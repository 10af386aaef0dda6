// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared control flow for File, Directory, and FIFO services. The three
//! kinds share one
//! "stat -> type check -> mode/uid/gid -> timestamp -> kind-specific extras"
//! flow; File alone adds checksum, content-match, size, and inode bookkeeping.

use crate::evaluators::{
    check_content_match, check_gid, check_perm, check_size, check_timestamp, check_uid, evaluate_checksum,
};
use std::time::SystemTime;
use vet_core::{CommonInfo, EventKind, EventSink, EventState, FileInfo, InfoSnapshot, Service};
use vet_probes::{ProbeSet, StatKind};

/// Which `S_IS*`-equivalent kind this service is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLikeKind {
    Regular,
    Directory,
    Fifo,
}

impl FileLikeKind {
    fn matches(&self, kind: StatKind) -> bool {
        matches!(
            (self, kind),
            (FileLikeKind::Regular, StatKind::Regular)
                | (FileLikeKind::Directory, StatKind::Directory)
                | (FileLikeKind::Fifo, StatKind::Fifo)
        )
    }
}

pub fn check_file_like(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink, kind: FileLikeKind) -> bool {
    let Some(path) = s.path.clone() else {
        sink.post(s.id.as_str(), EventKind::Nonexist, EventState::Failed, None, "no path configured");
        return false;
    };

    let stat = match probes.stat().stat(&path) {
        Ok(stat) => stat,
        Err(err) => {
            sink.post(
                s.id.as_str(),
                EventKind::Nonexist,
                EventState::Failed,
                None,
                &format!("'{}' does not exist: {err}", path.display()),
            );
            return false;
        }
    };

    if !kind.matches(stat.kind) {
        sink.post(
            s.id.as_str(),
            EventKind::Invalid,
            EventState::Failed,
            None,
            &format!("'{}' is not the expected type", path.display()),
        );
        return false;
    }

    let common = CommonInfo {
        mode: stat.mode,
        uid: stat.uid,
        gid: stat.gid,
        timestamp: Some(stat.timestamp),
    };

    if kind == FileLikeKind::Regular {
        let prev_inode = match &s.info {
            InfoSnapshot::File(f) => f.inode as i64,
            _ => -1,
        };
        s.info = InfoSnapshot::File(FileInfo {
            common,
            size: stat.size,
            inode: stat.inode,
            inode_prev: prev_inode,
            checksum: None,
            readpos: 0,
        });
    } else {
        s.info = InfoSnapshot::Common(common);
    }

    run_shared_tests(s, probes, sink, &path, stat.mode, stat.uid, stat.gid, stat.timestamp);

    if kind == FileLikeKind::Regular {
        run_file_only_tests(s, probes, sink, &path);
    }

    true
}

fn run_shared_tests(
    s: &mut Service,
    _probes: &dyn ProbeSet,
    sink: &dyn EventSink,
    _path: &std::path::Path,
    mode: u32,
    uid: u32,
    gid: u32,
    timestamp: SystemTime,
) {
    let service = s.id.as_str().to_string();
    if let Some(perm) = &s.perm {
        check_perm(perm, mode, sink, &service);
    }
    if let Some(uid_test) = &s.uid_test {
        check_uid(uid_test, uid, sink, &service);
    }
    if let Some(gid_test) = &s.gid_test {
        check_gid(gid_test, gid, sink, &service);
    }
    let ts = timestamp
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    check_timestamp(&mut s.timestamps, ts, sink, &service);
}

fn run_file_only_tests(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink, path: &std::path::Path) {
    let service = s.id.as_str().to_string();
    let size = match &s.info {
        InfoSnapshot::File(f) => f.size,
        _ => return,
    };

    if let Some(checksum) = &mut s.checksum {
        evaluate_checksum(checksum, path, probes.checksum(), sink, &service);
    }

    check_size(&mut s.sizes, size, sink, &service);

    let readpos = match &s.info {
        InfoSnapshot::File(f) => f.readpos,
        _ => 0,
    };
    let inode_change_detected = match &s.info {
        InfoSnapshot::File(f) => f.inode_prev != -1 && f.inode_prev != f.inode as i64,
        _ => false,
    };
    let new_readpos = check_content_match(path, readpos, size, inode_change_detected, &s.matches, &s.match_ignores, sink, &service);
    if let InfoSnapshot::File(f) = &mut s.info {
        f.readpos = new_readpos.min(f.size);
    }
}

#[cfg(test)]
#[path = "file_like_tests.rs"]
mod tests;
