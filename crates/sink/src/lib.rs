// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A minimal in-process `EventSink`: a per-service
//! failed-kind bitmap for alert dedup, plus `tracing` emission.
//!
//! The bitmap dedupes so that a condition already FAILED doesn't re-alert
//! every cycle; `vet-core::Service` never dedupes on its own.

use parking_lot::Mutex;
use std::collections::HashMap;
use vet_core::{ActionRate, EventKind, EventSink, EventState};

/// `(service, kind)` → the state last posted for that pair, used to suppress
/// repeat FAILED/Changed alerts while the condition persists.
#[derive(Default)]
pub struct BitmapEventSink {
    last_state: Mutex<HashMap<(String, EventKind), EventState>>,
}

impl BitmapEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state last recorded for `(service, kind)`, if any have been posted yet.
    pub fn last_state(&self, service: &str, kind: EventKind) -> Option<EventState> {
        self.last_state.lock().get(&(service.to_string(), kind)).copied()
    }
}

impl EventSink for BitmapEventSink {
    fn post(&self, service: &str, kind: EventKind, state: EventState, action: Option<&ActionRate>, message: &str) {
        let key = (service.to_string(), kind);
        let mut table = self.last_state.lock();
        let repeat = table.get(&key) == Some(&state);
        table.insert(key, state);
        drop(table);

        match (state, repeat) {
            (EventState::Failed, true) => {
                tracing::debug!(service, kind = kind.name(), "repeat failure, alert suppressed");
            }
            (EventState::Failed, false) => {
                let action_name = action.map(|a| a.action.name()).unwrap_or("none");
                tracing::warn!(service, kind = kind.name(), action = action_name, message, "event failed");
            }
            (EventState::Succeeded, _) => {
                tracing::info!(service, kind = kind.name(), message, "event succeeded");
            }
            (EventState::Changed, _) => {
                tracing::info!(service, kind = kind.name(), message, "event changed");
            }
            (EventState::ChangedNot, _) => {
                tracing::debug!(service, kind = kind.name(), message, "event unchanged");
            }
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
