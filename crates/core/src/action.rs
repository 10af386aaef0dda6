// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery actions bound to event kinds, and the action-rate quench rule.

use serde::{Deserialize, Serialize};

/// A recovery directive dispatched by the event sink when an event transitions state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Alert,
    Restart,
    Stop,
    Start,
    Exec,
    Ignore,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Alert => "alert",
            ActionKind::Restart => "restart",
            ActionKind::Stop => "stop",
            ActionKind::Start => "start",
            ActionKind::Exec => "exec",
            ActionKind::Ignore => "ignore",
        }
    }
}

/// `(count, cycle, action)` — fire `action` if the service restarted at least
/// `count` times within the last `cycle` cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRate {
    pub count: u32,
    pub cycle: u32,
    pub action: ActionKind,
}

/// An action scheduled for a service by an external command, awaiting dispatch
/// by `do_scheduled_action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledAction {
    Ignore,
    Start,
    Stop,
    Restart,
    Monitor,
    Unmonitor,
}

impl ScheduledAction {
    pub fn name(&self) -> &'static str {
        match self {
            ScheduledAction::Ignore => "ignore",
            ScheduledAction::Start => "start",
            ScheduledAction::Stop => "stop",
            ScheduledAction::Restart => "restart",
            ScheduledAction::Monitor => "monitor",
            ScheduledAction::Unmonitor => "unmonitor",
        }
    }
}

/// Opaque handle released once a scheduled action has been dispatched,
/// without exposing whatever bookkeeping the config/command layer used to
/// create it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionToken(pub Option<String>);

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
