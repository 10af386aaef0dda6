// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem validator: existence, mode/uid/gid, data, flags, and limits.

use crate::evaluators::{check_filesystem_flags, check_filesystem_resource, check_gid, check_perm, check_uid};
use vet_core::{CommonInfo, EventKind, EventSink, EventState, FilesystemInfo, InfoSnapshot, Service};
use vet_probes::{ProbeSet, StatKind};

pub fn check_filesystem(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink) -> bool {
    let Some(path) = s.path.clone() else {
        sink.post(s.id.as_str(), EventKind::Nonexist, EventState::Failed, None, "no path configured");
        return false;
    };
    let service = s.id.as_str().to_string();

    let mut stat = match probes.stat().lstat(&path) {
        Ok(stat) => stat,
        Err(err) => {
            sink.post(&service, EventKind::Nonexist, EventState::Failed, None, &format!("'{}' does not exist: {err}", path.display()));
            return false;
        }
    };

    if stat.kind == StatKind::Symlink {
        let target = match probes.stat().realpath(&path) {
            Ok(target) => target,
            Err(err) => {
                sink.post(&service, EventKind::Nonexist, EventState::Failed, None, &format!("cannot resolve symlink: {err}"));
                return false;
            }
        };
        stat = match probes.stat().stat(&target) {
            Ok(stat) => stat,
            Err(err) => {
                sink.post(&service, EventKind::Nonexist, EventState::Failed, None, &format!("'{}' does not exist: {err}", target.display()));
                return false;
            }
        };
    }

    let sample = match probes.filesystem().filesystem_usage(&path) {
        Ok(sample) => sample,
        Err(err) => {
            sink.post(&service, EventKind::Data, EventState::Failed, None, &format!("cannot read filesystem usage: {err}"));
            return false;
        }
    };

    let inode_percent = if sample.files > 0 {
        1000 * (sample.files - sample.filesfree) / sample.files
    } else {
        0
    };
    let space_percent = if sample.blocks > 0 {
        1000 * (sample.blocks - sample.blocksfree) / sample.blocks
    } else {
        0
    };

    let prev_flags = match &s.info {
        InfoSnapshot::Filesystem(f) => f.flags,
        _ => -1,
    };

    s.info = InfoSnapshot::Filesystem(FilesystemInfo {
        common: CommonInfo {
            mode: stat.mode,
            uid: stat.uid,
            gid: stat.gid,
            timestamp: Some(stat.timestamp),
        },
        blocks: sample.blocks,
        blocksfree: sample.blocksfree,
        blocksfreetotal: sample.blocksfreetotal,
        files: sample.files,
        filesfree: sample.filesfree,
        flags: sample.flags,
        flags_prev: prev_flags,
        space_percent: space_percent as i32,
        inode_percent: inode_percent as i32,
        space_total: sample.blocks - sample.blocksfreetotal,
        inode_total: sample.files - sample.filesfree,
    });

    sink.post(&service, EventKind::Data, EventState::Succeeded, None, "filesystem usage check succeeded");

    if let Some(perm) = &s.perm {
        check_perm(perm, stat.mode, sink, &service);
    }
    if let Some(uid_test) = &s.uid_test {
        check_uid(uid_test, stat.uid, sink, &service);
    }
    if let Some(gid_test) = &s.gid_test {
        check_gid(gid_test, stat.gid, sink, &service);
    }

    check_filesystem_flags(sample.flags, prev_flags, sink, &service);

    if let InfoSnapshot::Filesystem(fs) = &s.info {
        check_filesystem_resource(&s.filesystem_limits, fs, sink, &service);
    }

    true
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
