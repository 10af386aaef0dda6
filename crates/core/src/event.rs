// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event kinds, states, and the sink interface validators post through.
//!
//! Serializes with `{"kind": "...", "state": "...", ...}` shape, following the
//! same tagged-enum convention as the rest of the crate's wire types.

use crate::action::ActionRate;
use serde::{Deserialize, Serialize};

/// Categorical tag on a test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Nonexist,
    Invalid,
    Data,
    Exec,
    Timeout,
    Pid,
    PPid,
    Fsflag,
    Icmp,
    Connection,
    Status,
    Action,
    Content,
    Checksum,
    Permission,
    Uid,
    Gid,
    Size,
    Timestamp,
    Uptime,
    Resource,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Nonexist => "nonexist",
            EventKind::Invalid => "invalid",
            EventKind::Data => "data",
            EventKind::Exec => "exec",
            EventKind::Timeout => "timeout",
            EventKind::Pid => "pid",
            EventKind::PPid => "ppid",
            EventKind::Fsflag => "fsflag",
            EventKind::Icmp => "icmp",
            EventKind::Connection => "connection",
            EventKind::Status => "status",
            EventKind::Action => "action",
            EventKind::Content => "content",
            EventKind::Checksum => "checksum",
            EventKind::Permission => "permission",
            EventKind::Uid => "uid",
            EventKind::Gid => "gid",
            EventKind::Size => "size",
            EventKind::Timestamp => "timestamp",
            EventKind::Uptime => "uptime",
            EventKind::Resource => "resource",
        }
    }
}

/// Outcome state of a posted event.
///
/// The CHANGED family is used only by evaluators in `test_changes` mode or by
/// transitional evaluators (pid, ppid, filesystem flags, content match, action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventState {
    Succeeded,
    Failed,
    Changed,
    ChangedNot,
}

impl EventState {
    /// Whether this state represents a currently-failed condition for the
    /// per-service bitmap.
    pub fn is_failed(&self) -> bool {
        matches!(self, EventState::Failed)
    }
}

/// `post(service, kind, state, action, message)` — the single interface every
/// validator and evaluator posts outcomes through.
///
/// Implementations own per-service failed-kind dedup; the core never
/// deduplicates on its own.
pub trait EventSink {
    fn post(
        &self,
        service: &str,
        kind: EventKind,
        state: EventState,
        action: Option<&ActionRate>,
        message: &str,
    );
}

/// A sink that drops every event. Useful for benchmarking evaluators in
/// isolation or in tests where a posted event's specifics do not matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn post(
        &self,
        _service: &str,
        _kind: EventKind,
        _state: EventState,
        _action: Option<&ActionRate>,
        _message: &str,
    ) {
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
