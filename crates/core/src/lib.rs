// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain types shared by every other crate: services, test descriptors,
//! info snapshots, events, and ids.

pub mod action;
pub mod event;
pub mod format;
pub mod id;
pub mod info;
pub mod monitor_state;
pub mod operator;
pub mod resource;
pub mod run_state;
pub mod scalar_test;
pub mod schedule;
pub mod service;

pub use action::{ActionKind, ActionRate, ActionToken, ScheduledAction};
pub use checksum_test::{ChecksumAlgorithm, ChecksumTest};
pub use event::{EventKind, EventSink, EventState, NullEventSink};
pub use filesystem_test::{FilesystemLimitTest, FilesystemLimitUnit, FilesystemResource};
pub use id::{ServiceId, ShortId};
pub use info::{CommonInfo, FileInfo, FilesystemInfo, InfoSnapshot, ProcessInfo, ProcessStatusBits};
pub use match_test::{CompiledPattern, MatchTest};
pub use monitor_state::MonitorState;
pub use operator::Operator;
pub use resource::{ResourceId, ResourceTest};
pub use run_state::{HandlerFlag, RunState, SystemInfo};
pub use scalar_test::{
    GidTest, IcmpResult, IcmpTest, PermTest, PortTest, SizeTest, StatusTest, TimestampTest, UidTest, UptimeTest,
};
pub use schedule::{AlwaysMatches, CronMatcher, EverySchedule, NeverMatches};
pub use service::{EventKindBitmap, ProgramConfig, Service, ServiceKind};
