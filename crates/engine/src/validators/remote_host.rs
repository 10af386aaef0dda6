// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote host validator: ICMP echo, then (if reachable) every configured
//! port.

use crate::evaluators::check_connection;
use vet_core::{EventKind, EventSink, EventState, IcmpResult, Service};
use vet_probes::ProbeSet;

/// Ping every configured ICMP descriptor; if the last one pinged was
/// unavailable, skip all port probes for this cycle.
pub fn check_remote_host(s: &mut Service, probes: &dyn ProbeSet, sink: &dyn EventSink) -> bool {
    let service = s.id.as_str().to_string();
    let Some(hostname) = s.path.as_ref().map(|p| p.display().to_string()) else {
        sink.post(&service, EventKind::Icmp, EventState::Failed, None, "no hostname configured");
        return false;
    };

    let mut host_reachable = true;

    for icmp in s.icmp.iter_mut() {
        match probes.icmp().icmp_echo(&hostname, icmp.timeout, icmp.count) {
            Ok(IcmpResult::Available(response)) => {
                icmp.response = Some(response);
                icmp.is_available = true;
                host_reachable = true;
                sink.post(&service, EventKind::Icmp, EventState::Succeeded, None, "ping succeeded");
            }
            Ok(IcmpResult::Unavailable) => {
                icmp.response = None;
                icmp.is_available = false;
                host_reachable = false;
                sink.post(&service, EventKind::Icmp, EventState::Failed, Some(&icmp.action), "ping failed");
            }
            Ok(IcmpResult::NoPrivilege) => {
                tracing::debug!(service, "icmp echo skipped: insufficient privilege");
            }
            Err(err) => {
                icmp.response = None;
                icmp.is_available = false;
                host_reachable = false;
                sink.post(&service, EventKind::Icmp, EventState::Failed, Some(&icmp.action), &format!("ping failed: {err}"));
            }
        }
    }

    if !host_reachable {
        return false;
    }

    let mut all_ok = true;
    for port in s.ports.iter_mut() {
        if !check_connection(port, probes.socket(), probes.protocol(), sink, &service) {
            all_ok = false;
        }
    }
    all_ok
}

#[cfg(test)]
#[path = "remote_host_tests.rs"]
mod tests;
