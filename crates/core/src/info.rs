// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-service info snapshot.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Process status bits reported by `update_process_data`. Hand-rolled rather than pulled from a flags crate, matching
/// the bitset style already used for [`crate::monitor_state::MonitorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessStatusBits(pub u32);

impl ProcessStatusBits {
    pub const RUNNING: u32 = 0b0001;
    pub const ZOMBIE: u32 = 0b0010;
    pub const STOPPED: u32 = 0b0100;

    pub fn has(&self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    pub fn set(&mut self, bit: u32) {
        self.0 |= bit;
    }
}

/// Fields common to every `InfoSnapshot` kind.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommonInfo {
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    /// `max(mtime, ctime)`.
    pub timestamp: Option<SystemTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileInfo {
    pub common: CommonInfo,
    pub size: u64,
    pub inode: u64,
    /// `-1` sentinel for "no prior sample".
    pub inode_prev: i64,
    pub checksum: Option<String>,
    pub readpos: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesystemInfo {
    pub common: CommonInfo,
    pub blocks: i64,
    pub blocksfree: i64,
    pub blocksfreetotal: i64,
    pub files: i64,
    pub filesfree: i64,
    pub flags: i64,
    pub flags_prev: i64,
    /// Scaled ×10.
    pub space_percent: i32,
    /// Scaled ×10.
    pub inode_percent: i32,
    pub space_total: i64,
    pub inode_total: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub common: CommonInfo,
    pub pid: i64,
    pub pid_prev: i64,
    pub ppid: i64,
    pub ppid_prev: i64,
    pub status: ProcessStatusBits,
    pub cpu_percent: i32,
    pub total_cpu_percent: i32,
    pub mem_percent: i32,
    pub mem_kbyte: i64,
    pub total_mem_kbyte: i64,
    pub total_mem_percent: i32,
    pub children: i32,
    pub uptime: Duration,
}

/// Tagged union discriminated by `ServiceKind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum InfoSnapshot {
    File(FileInfo),
    Filesystem(FilesystemInfo),
    Process(ProcessInfo),
    /// Directory/Fifo/Host/System/Program carry only the common fields.
    Common(CommonInfo),
}

impl Default for InfoSnapshot {
    fn default() -> Self {
        InfoSnapshot::Common(CommonInfo::default())
    }
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
