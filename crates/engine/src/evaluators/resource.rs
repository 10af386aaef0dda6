// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process/system resource limits and filesystem inode/space limits.

use vet_core::format::resource_limit_message;
use vet_core::{
    EventKind, EventSink, EventState, FilesystemInfo, FilesystemLimitTest, FilesystemLimitUnit, FilesystemResource,
    MonitorState, ProcessInfo, ResourceId, ResourceTest, SystemInfo,
};

/// Read the measured value for `id` from the service's process sample and
/// the shared system snapshot. `None` means "no such reading for this
/// resource id in this context" (e.g. a `*System` id with no process sample
/// needed, or the reverse) and is distinguished from a present-but-negative
/// sample, which the caller skips.
fn sample_for(id: ResourceId, process: Option<&ProcessInfo>, system: &SystemInfo) -> Option<i64> {
    match id {
        ResourceId::CpuPercent => process.map(|p| p.cpu_percent as i64),
        ResourceId::TotalCpuPercent => process.map(|p| p.total_cpu_percent as i64),
        ResourceId::CpuUserPercent => Some(system.cpu_user_percent as i64),
        ResourceId::CpuSystemPercent => Some(system.cpu_system_percent as i64),
        ResourceId::CpuWaitPercent => Some(system.cpu_wait_percent as i64),
        ResourceId::MemPercentService => process.map(|p| p.mem_percent as i64),
        ResourceId::MemPercentSystem => Some(system.total_mem_percent as i64),
        ResourceId::MemKbyteService => process.map(|p| p.mem_kbyte),
        ResourceId::MemKbyteSystem => Some(system.total_mem_kbyte),
        ResourceId::SwapPercentSystem => Some(system.swap_percent as i64),
        ResourceId::SwapKbyteSystem => Some(system.swap_kbyte),
        ResourceId::LoadAvg1 => Some(system.loadavg1),
        ResourceId::LoadAvg5 => Some(system.loadavg5),
        ResourceId::LoadAvg15 => Some(system.loadavg15),
        ResourceId::Children => process.map(|p| p.children as i64),
        ResourceId::TotalMemKbyte => process.map(|p| p.total_mem_kbyte),
        ResourceId::TotalMemPercent => process.map(|p| p.total_mem_percent as i64),
    }
}

/// `check_resource(resources, ...)`: during `MONITOR_INIT`, or when the
/// sample is negative, skip with debug logging only. Otherwise evaluate
/// `operator(value, limit)`.
pub fn check_resource(
    resources: &[ResourceTest],
    monitor: MonitorState,
    process: Option<&ProcessInfo>,
    system: &SystemInfo,
    sink: &dyn EventSink,
    service: &str,
) -> bool {
    let mut ok = true;
    for test in resources {
        let Some(value) = sample_for(test.id, process, system) else {
            tracing::debug!(service, resource = test.id.label(), "no sample available for resource, skipping");
            continue;
        };
        if monitor.is_init() || value < 0 {
            tracing::debug!(service, resource = test.id.label(), value, "skipping resource check during init or negative sample");
            continue;
        }

        if test.operator.eval(value, test.limit) {
            sink.post(
                service,
                EventKind::Resource,
                EventState::Failed,
                Some(&test.action),
                &resource_limit_message(test.id.label(), test.operator, test.limit, value),
            );
            ok = false;
        } else {
            sink.post(
                service,
                EventKind::Resource,
                EventState::Succeeded,
                None,
                &vet_core::format::resource_succeeded_message(test.id.label(), value),
            );
        }
    }
    ok
}

/// `check_filesystem_resource(filesystem_limits, fs)`: missing inode
/// support (`files <= 0`) skips silently.
pub fn check_filesystem_resource(
    limits: &[FilesystemLimitTest],
    fs: &FilesystemInfo,
    sink: &dyn EventSink,
    service: &str,
) -> bool {
    let mut ok = true;
    for test in limits {
        let (label, value) = match (test.resource, test.unit) {
            (FilesystemResource::Inode, _) if fs.files <= 0 => continue,
            (FilesystemResource::Inode, FilesystemLimitUnit::Percent) => ("inode usage", fs.inode_percent as i64),
            (FilesystemResource::Inode, FilesystemLimitUnit::Absolute) => ("inode usage", fs.inode_total),
            (FilesystemResource::Space, FilesystemLimitUnit::Percent) => ("space usage", fs.space_percent as i64),
            (FilesystemResource::Space, FilesystemLimitUnit::Absolute) => ("space usage", fs.space_total),
        };

        if test.operator.eval(value, test.limit) {
            sink.post(
                service,
                EventKind::Resource,
                EventState::Failed,
                Some(&test.action),
                &resource_limit_message(label, test.operator, test.limit, value),
            );
            ok = false;
        } else {
            sink.post(
                service,
                EventKind::Resource,
                EventState::Succeeded,
                None,
                &vet_core::format::resource_succeeded_message(label, value),
            );
        }
    }
    ok
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
