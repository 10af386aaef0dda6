// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The service record and its program configuration.

use crate::action::{ActionRate, ActionToken, ScheduledAction};
use crate::checksum_test::ChecksumTest;
use crate::event::EventKind;
use crate::filesystem_test::FilesystemLimitTest;
use crate::id::ServiceId;
use crate::info::InfoSnapshot;
use crate::match_test::MatchTest;
use crate::monitor_state::MonitorState;
use crate::resource::ResourceTest;
use crate::scalar_test::{GidTest, IcmpTest, PermTest, PortTest, SizeTest, StatusTest, TimestampTest, UidTest, UptimeTest};
use crate::schedule::EverySchedule;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Process,
    File,
    Directory,
    Fifo,
    Filesystem,
    Program,
    Host,
    System,
}

/// Bitmap of currently-failed `EventKind`s for one service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventKindBitmap(u32);

impl EventKindBitmap {
    fn bit(kind: EventKind) -> u32 {
        1 << (kind as u32)
    }

    pub fn is_set(&self, kind: EventKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    pub fn set(&mut self, kind: EventKind) {
        self.0 |= Self::bit(kind);
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.0 &= !Self::bit(kind);
    }
}

/// Command, arguments, working directory, and declared timeout for a
/// `Program` service.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    pub command: String,
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
    pub timeout: std::time::Duration,
    /// Set once the child is spawned; cleared once its exit status has been
    /// consumed.
    pub started: Option<Instant>,
    pub last_exit_status: Option<i32>,
    /// Opaque probe handle for the currently-running child, if any.
    pub child: Option<u64>,
}

/// A uniquely named monitored entity.
#[derive(Debug, Clone)]
pub struct Service {
    pub id: ServiceId,
    pub kind: ServiceKind,
    pub monitor: MonitorState,
    pub visited: bool,
    pub every: EverySchedule,
    pub pending_action: Option<ScheduledAction>,
    pub token: Option<ActionToken>,
    pub action_bindings: HashMap<EventKind, ActionRate>,
    /// Independent restart-rate rules bound to `EventKind::Timeout`; each is
    /// evaluated and cleared on its own cycle window.
    pub timeout_rules: Vec<ActionRate>,

    pub ports: Vec<PortTest>,
    pub icmp: Vec<IcmpTest>,
    pub resources: Vec<ResourceTest>,
    pub sizes: Vec<SizeTest>,
    pub timestamps: Vec<TimestampTest>,
    pub uptimes: Vec<UptimeTest>,
    pub matches: Vec<MatchTest>,
    pub match_ignores: Vec<MatchTest>,
    pub statuses: Vec<StatusTest>,
    pub filesystem_limits: Vec<FilesystemLimitTest>,
    pub checksum: Option<ChecksumTest>,
    pub perm: Option<PermTest>,
    pub uid_test: Option<UidTest>,
    pub gid_test: Option<GidTest>,

    pub failed: EventKindBitmap,
    pub nstart: u32,
    pub ncycle: u32,

    pub info: InfoSnapshot,
    pub collected: Option<Instant>,

    /// Path backing File/Directory/Fifo/Filesystem kinds.
    pub path: Option<PathBuf>,
    pub program: Option<ProgramConfig>,
}

impl Service {
    pub fn new(id: impl Into<ServiceId>, kind: ServiceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            monitor: MonitorState::default(),
            visited: false,
            every: EverySchedule::default(),
            pending_action: None,
            token: None,
            action_bindings: HashMap::new(),
            timeout_rules: Vec::new(),
            ports: Vec::new(),
            icmp: Vec::new(),
            resources: Vec::new(),
            sizes: Vec::new(),
            timestamps: Vec::new(),
            uptimes: Vec::new(),
            matches: Vec::new(),
            match_ignores: Vec::new(),
            statuses: Vec::new(),
            filesystem_limits: Vec::new(),
            checksum: None,
            perm: None,
            uid_test: None,
            gid_test: None,
            failed: EventKindBitmap::default(),
            nstart: 0,
            ncycle: 0,
            info: InfoSnapshot::default(),
            collected: None,
            path: None,
            program: None,
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
