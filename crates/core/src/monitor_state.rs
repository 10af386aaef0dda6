// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitoring state flags for a service.
//!
//! The original daemon stores these as OR'd bits on a single field (`YES` and
//! `INIT` can be set together — "initializing" is a qualifier on "monitored",
//! not a separate state). `MonitorState` reproduces that as a small bitset
//! rather than an enum, because `validate()` needs to clear exactly one bit
//! (`INIT`) while leaving others untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorState(u8);

const NOT: u8 = 0b0001;
const YES: u8 = 0b0010;
const INIT: u8 = 0b0100;
const WAITING: u8 = 0b1000;

impl MonitorState {
    pub fn not_monitored() -> Self {
        Self(NOT)
    }

    pub fn initializing() -> Self {
        Self(YES | INIT)
    }

    pub fn monitored() -> Self {
        Self(YES)
    }

    pub fn is_not(&self) -> bool {
        self.0 & NOT != 0
    }

    pub fn is_yes(&self) -> bool {
        self.0 & YES != 0
    }

    pub fn is_init(&self) -> bool {
        self.0 & INIT != 0
    }

    pub fn is_waiting(&self) -> bool {
        self.0 & WAITING != 0
    }

    pub fn set_waiting(&mut self) {
        self.0 |= WAITING;
    }

    pub fn clear_waiting(&mut self) {
        self.0 &= !WAITING;
    }

    /// Force-set `YES`, clearing `INIT` — called by the cycle driver once a
    /// service has completed its first cycle.
    pub fn force_yes(&mut self) {
        self.0 = (self.0 & !INIT) | YES;
    }

    pub fn set_not(&mut self) {
        self.0 = NOT;
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::initializing()
    }
}

#[cfg(test)]
#[path = "monitor_state_tests.rs"]
mod tests;
