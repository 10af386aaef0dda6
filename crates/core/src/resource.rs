// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process/system resource test descriptor.

use crate::action::ActionRate;
use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// Which measured quantity a resource test compares.
///
/// `*Service` variants read from the owning service's [`crate::info::ProcessInfo`];
/// `*System` variants read from the shared [`crate::run_state::SystemInfo`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceId {
    CpuPercent,
    TotalCpuPercent,
    CpuUserPercent,
    CpuSystemPercent,
    CpuWaitPercent,
    MemPercentService,
    MemPercentSystem,
    MemKbyteService,
    MemKbyteSystem,
    SwapPercentSystem,
    SwapKbyteSystem,
    LoadAvg1,
    LoadAvg5,
    LoadAvg15,
    Children,
    TotalMemKbyte,
    TotalMemPercent,
}

impl ResourceId {
    /// Short label used in resource-limit messages, e.g. `"cpu usage"`.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceId::CpuPercent | ResourceId::TotalCpuPercent => "cpu usage",
            ResourceId::CpuUserPercent => "cpu user usage",
            ResourceId::CpuSystemPercent => "cpu system usage",
            ResourceId::CpuWaitPercent => "cpu wait usage",
            ResourceId::MemPercentService | ResourceId::MemPercentSystem => "mem usage",
            ResourceId::MemKbyteService | ResourceId::MemKbyteSystem => "mem amount",
            ResourceId::SwapPercentSystem => "swap usage",
            ResourceId::SwapKbyteSystem => "swap amount",
            ResourceId::LoadAvg1 => "loadavg(1min)",
            ResourceId::LoadAvg5 => "loadavg(5min)",
            ResourceId::LoadAvg15 => "loadavg(15min)",
            ResourceId::Children => "children",
            ResourceId::TotalMemKbyte => "total mem amount",
            ResourceId::TotalMemPercent => "total mem usage",
        }
    }
}

/// A process/system resource limit test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceTest {
    pub id: ResourceId,
    pub operator: Operator,
    /// Scaled ×10 for percent-bearing ids; absolute otherwise (kbyte, count, loadavg×10).
    pub limit: i64,
    pub action: ActionRate,
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
