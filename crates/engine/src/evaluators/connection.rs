// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `check_connection`: resolve, connect (with retry), verify protocol.

use std::time::Instant;
use vet_core::{EventKind, EventSink, EventState, PortTest};
use vet_probes::{ProtocolProbe, SocketProbe, SocketType};

/// Probe one port, retrying up to `test.retry` times on failure — total
/// attempts across a call equal `test.retry`. On
/// exhaustion sets `response = None`/`is_available = false` and posts
/// `Connection` FAILED; on success records the response time and posts
/// `Connection` SUCCEEDED.
pub fn check_connection(
    test: &mut PortTest,
    socket_probe: &dyn SocketProbe,
    protocol_probe: &dyn ProtocolProbe,
    sink: &dyn EventSink,
    service: &str,
) -> bool {
    let total_attempts = test.retry.max(1);
    let mut last_error = String::new();

    for attempt in 1..=total_attempts {
        let desc = format!("{}:{}", test.hostname, test.port);
        let t1 = Instant::now();

        let handle = match socket_probe.connect(&test.hostname, test.port, test.timeout) {
            Ok(handle) => handle,
            Err(err) => {
                last_error = format!("cannot open connection to {desc} -- {err}");
                tracing::debug!(service, attempt, total_attempts, "connection attempt failed");
                continue;
            }
        };

        let is_udp_with_protocol = socket_probe.socket_type(handle) == SocketType::Udp && test.protocol.is_some();
        if !is_udp_with_protocol && !socket_probe.is_ready(handle) {
            let socket_err = socket_probe.socket_error(handle).unwrap_or_default();
            last_error = format!("cannot open connection to {desc} -- {socket_err}");
            tracing::debug!(service, attempt, total_attempts, "connection not ready");
            continue;
        }

        let protocol_name = test.protocol.as_deref().unwrap_or("default");
        if !protocol_probe.check(protocol_name, handle) {
            let socket_err = socket_probe.socket_error(handle).unwrap_or_default();
            last_error = format!("failed protocol test [{protocol_name}] at {desc} -- {socket_err}");
            tracing::debug!(service, attempt, total_attempts, "protocol check failed");
            continue;
        }

        let t2 = Instant::now();
        test.response = Some(t2.saturating_duration_since(t1));
        test.is_available = true;
        sink.post(
            service,
            EventKind::Connection,
            EventState::Succeeded,
            None,
            &format!("connection succeeded to {desc}"),
        );
        return true;
    }

    test.response = None;
    test.is_available = false;
    sink.post(service, EventKind::Connection, EventState::Failed, Some(&test.action), &last_error);
    false
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
