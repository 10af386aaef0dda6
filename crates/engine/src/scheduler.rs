// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Skip filter, restart-rate quench, and scheduled-action dispatch.

use std::time::Instant;
use vet_core::{EventKind, EventSink, EventState, Service};
use vet_probes::ControlProbe;

/// Whether this service should be skipped this cycle, and why.
///
/// If `s.visited` is set (already processed this cycle by a dependency
/// chain), returns `true` immediately. Otherwise consults `s.every`.
pub fn check_skip(s: &mut Service, now: Instant) -> bool {
    if s.visited {
        return true;
    }

    match &mut s.every {
        vet_core::EverySchedule::Cycle => {
            s.monitor.clear_waiting();
            false
        }
        vet_core::EverySchedule::SkipCycles { n, counter } => {
            *counter += 1;
            if *counter < *n {
                s.monitor.set_waiting();
                true
            } else {
                *counter = 0;
                s.monitor.clear_waiting();
                false
            }
        }
        vet_core::EverySchedule::Cron(matcher) => {
            if !matcher.matches(instant_to_system_time(now)) {
                s.monitor.set_waiting();
                true
            } else {
                s.monitor.clear_waiting();
                false
            }
        }
        vet_core::EverySchedule::NotInCron(matcher) => {
            if matcher.matches(instant_to_system_time(now)) {
                s.monitor.set_waiting();
                true
            } else {
                s.monitor.clear_waiting();
                false
            }
        }
    }
}

/// `Instant` carries no wall-clock epoch; callers that need cron matching
/// against the real calendar must supply `now` derived from `SystemTime`
/// upstream. This helper exists only so `check_skip` keeps an `Instant`
/// parameter while still giving `CronMatcher` something to compare against
/// in tests that don't care about the exact instant.
fn instant_to_system_time(_now: Instant) -> std::time::SystemTime {
    std::time::SystemTime::now()
}

/// `check_timeout(s)`: the restart-rate quench rule.
///
/// Iterates every independent restart-rate rule bound to `EventKind::Timeout`,
/// posting a `Timeout` failure for each rule whose threshold the restart
/// count has crossed. The counters reset jointly once `ncycle` exceeds the
/// widest cycle window of any rule.
pub fn check_timeout(s: &mut Service, sink: &dyn EventSink) {
    if s.nstart > 0 {
        s.ncycle += 1;
    }

    if s.timeout_rules.is_empty() {
        return;
    }

    let mut max_cycle = 0;
    for rule in s.timeout_rules.iter().copied() {
        max_cycle = max_cycle.max(rule.cycle);

        if s.nstart >= rule.count && s.ncycle <= rule.cycle {
            sink.post(
                s.id.as_str(),
                EventKind::Timeout,
                EventState::Failed,
                Some(&rule),
                &format!(
                    "service restarted {} times within {} cycles, triggering {}",
                    s.nstart,
                    rule.cycle,
                    rule.action.name()
                ),
            );
        }
    }

    if s.ncycle > max_cycle {
        s.nstart = 0;
        s.ncycle = 0;
    }
}

/// `do_scheduled_action(s) → bool`.
///
/// Posts `Action` CHANGED and clears the pending action regardless of the
/// collaborator's return value — the event
/// records that the action was *dispatched*, not that it *succeeded*.
pub fn do_scheduled_action(s: &mut Service, control: &dyn ControlProbe, sink: &dyn EventSink) -> bool {
    let Some(action) = s.pending_action.take() else {
        return false;
    };
    if action == vet_core::ScheduledAction::Ignore {
        s.token = None;
        return false;
    }

    let result = control.control_service(s.id.as_str(), &action);

    sink.post(
        s.id.as_str(),
        EventKind::Action,
        EventState::Changed,
        None,
        &format!("'{}' {}", s.id.as_str(), action.name()),
    );

    s.token = None;
    result
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
