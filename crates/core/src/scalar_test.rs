// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size/timestamp/uptime/status/port/icmp descriptors.

use crate::action::ActionRate;
use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A permission-bits descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermTest {
    pub mode: u32,
    pub action: ActionRate,
}

/// A uid-equality descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UidTest {
    pub uid: u32,
    pub action: ActionRate,
}

/// A gid-equality descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GidTest {
    pub gid: u32,
    pub action: ActionRate,
}

/// A file/directory size-change descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeTest {
    pub operator: Operator,
    pub limit: i64,
    pub initialized: bool,
    pub test_changes: bool,
    /// Last-observed size, in bytes; `None` until the first sample.
    pub sample: Option<u64>,
    pub action: ActionRate,
}

/// A file timestamp-change descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampTest {
    pub operator: Operator,
    pub limit: i64,
    pub initialized: bool,
    pub test_changes: bool,
    /// Last-observed max(mtime, ctime), as seconds since the epoch.
    pub sample: Option<i64>,
    pub action: ActionRate,
}

/// A process uptime descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UptimeTest {
    pub operator: Operator,
    /// Scaled in seconds (not ×10 — uptime is not a percent-bearing field).
    pub limit: i64,
    pub action: ActionRate,
}

/// A Program child exit-status descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTest {
    pub operator: Operator,
    pub expected_return_value: i32,
    pub action: ActionRate,
}

impl StatusTest {
    /// `operator(exit_status, expected_return_value)`.
    pub fn matches(&self, exit_status: i32) -> bool {
        self.operator
            .eval(exit_status as i64, self.expected_return_value as i64)
    }
}

/// A single port/socket probe descriptor, checked by `check_connection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortTest {
    pub hostname: String,
    pub port: u16,
    pub protocol: Option<String>,
    pub retry: u32,
    pub timeout: Duration,
    /// Response time of the last successful probe.
    pub response: Option<Duration>,
    pub is_available: bool,
    pub action: ActionRate,
}

/// An ICMP echo descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcmpTest {
    pub timeout: Duration,
    pub count: u32,
    pub response: Option<Duration>,
    pub is_available: bool,
    pub action: ActionRate,
}

/// Outcome of one `IcmpProbe::icmp_echo` call — the sentinel-free translation
/// of the original's `seconds | -1 | -2` return convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcmpResult {
    Available(Duration),
    Unavailable,
    /// Echo succeeded but the probe lacked privilege to measure timing
    /// (original's `-2`): logged at debug level only, no event posted.
    NoPrivilege,
}

#[cfg(test)]
#[path = "scalar_test_tests.rs"]
mod tests;
