// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-cycle driver.
//!
//! `Cycle::run` is synchronous and single-threaded by contract: no service's
//! validator may run concurrently with another's within one cycle, no
//! validator may observe a `SystemInfo` snapshot refreshed partway through
//! the loop, and `reset_depend` must not run until every service has been
//! visited. An implementor that parallelizes the per-service loop must
//! preserve exactly these three barriers.

use crate::scheduler::{check_skip, check_timeout, do_scheduled_action};
use crate::validators::{check_file_like, check_filesystem, check_process, check_program, check_remote_host, check_system, FileLikeKind};
use std::time::Instant;
use vet_core::{EventSink, RunState, Service, ServiceKind, SystemInfo};
use vet_probes::ProbeSet;

pub struct Cycle<'a> {
    pub services: &'a mut [Service],
    pub run: &'a mut RunState,
    pub system: &'a mut SystemInfo,
    pub sink: &'a dyn EventSink,
    pub probes: &'a dyn ProbeSet,
}

impl<'a> Cycle<'a> {
    /// Run one full validation cycle and return the number of services whose
    /// validator reported failure.
    ///
    /// Snapshot refresh (load average, process tree) and event-sink flushing
    /// are owned by the embedder before constructing `Cycle` — `system` and
    /// `sink` arrive already current. The collaborator that refreshes
    /// `SystemInfo` lives outside this crate's probe set, same as the
    /// config/service-list layer.
    pub fn run(&mut self, now: Instant) -> usize {
        self.run.handler_flag = vet_core::HandlerFlag::Succeeded;
        self.system.collected = Some(std::time::SystemTime::now());

        if self.run.doaction {
            self.run.doaction = false;
            for s in self.services.iter_mut() {
                do_scheduled_action(s, self.probes.control(), self.sink);
            }
        }

        let mut error_count = 0;

        for s in self.services.iter_mut() {
            if self.run.stopped {
                break;
            }

            let acted = do_scheduled_action(s, self.probes.control(), self.sink);
            if !acted && !s.monitor.is_not() && !check_skip(s, now) {
                check_timeout(s, self.sink);
                if !s.monitor.is_not() {
                    let ok = dispatch(s, self.probes, self.sink, self.system, now, self.run.doprocess);
                    if !ok {
                        error_count += 1;
                    }
                }

                if !s.monitor.is_not() {
                    s.monitor.force_yes();
                }
                s.collected = Some(now);
            }
        }

        reset_depend(self.services);
        error_count
    }
}

fn dispatch(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink, system: &SystemInfo, now: Instant, doprocess: bool) -> bool {
    match s.kind {
        ServiceKind::Process => check_process(s, probes, sink, system, doprocess),
        ServiceKind::File => check_file_like(s, probes, sink, FileLikeKind::Regular),
        ServiceKind::Directory => check_file_like(s, probes, sink, FileLikeKind::Directory),
        ServiceKind::Fifo => check_file_like(s, probes, sink, FileLikeKind::Fifo),
        ServiceKind::Filesystem => check_filesystem(s, probes, sink),
        ServiceKind::Program => check_program(s, probes, sink, now),
        ServiceKind::Host => check_remote_host(s, probes, sink),
        ServiceKind::System => check_system(s, probes, sink, system),
    }
}

/// Clear every service's per-cycle visit mark.
fn reset_depend(services: &mut [Service]) {
    for s in services.iter_mut() {
        s.visited = false;
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
