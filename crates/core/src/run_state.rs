// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global run flags and the shared system snapshot.
//!
//! Both structs are explicit context passed by `&mut`/`&` into the cycle
//! driver, never a `static`/`OnceLock`.

use std::time::SystemTime;

/// Whether `validate()`'s handler flag reflects the last cycle's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerFlag {
    #[default]
    Succeeded,
    Failed,
}

/// Process-wide configuration/control flags.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Drain every service's queued action unconditionally at cycle start.
    pub doaction: bool,
    /// Whether process sampling (`update_process_data`) runs this cycle.
    pub doprocess: bool,
    /// Checked between services; never interrupts a validator mid-execution.
    pub stopped: bool,
    pub handler_flag: HandlerFlag,
}

/// System-wide snapshot refreshed once at cycle start, read-only for the
/// rest of the cycle.
#[derive(Debug, Clone, Default)]
pub struct SystemInfo {
    /// Scaled ×10.
    pub loadavg1: i64,
    /// Scaled ×10.
    pub loadavg5: i64,
    /// Scaled ×10.
    pub loadavg15: i64,
    /// Scaled ×10.
    pub cpu_user_percent: i32,
    /// Scaled ×10.
    pub cpu_system_percent: i32,
    /// Scaled ×10.
    pub cpu_wait_percent: i32,
    pub total_mem_kbyte: i64,
    /// Scaled ×10.
    pub total_mem_percent: i32,
    pub swap_kbyte: i64,
    /// Scaled ×10.
    pub swap_percent: i32,
    pub collected: Option<SystemTime>,
}

#[cfg(test)]
#[path = "run_state_tests.rs"]
mod tests;
