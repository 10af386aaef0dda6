// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake socket probe for testing.

use super::{SocketHandle, SocketProbe, SocketType};
use crate::error::ProbeError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum SocketProbeCall {
    Connect { hostname: String, port: u16 },
}

#[derive(Debug, Clone)]
struct FakeSocket {
    ready: bool,
    kind: SocketType,
    error: Option<String>,
}

struct FakeSocketProbeState {
    next_handle: SocketHandle,
    sockets: HashMap<SocketHandle, FakeSocket>,
    /// `(hostname, port) -> connect outcome`; remaining attempts fail until
    /// exhausted, modeling a flaky port that recovers after a few retries.
    scripted_failures: HashMap<(String, u16), u32>,
    calls: Vec<SocketProbeCall>,
}

#[derive(Clone)]
pub struct FakeSocketProbe {
    inner: Arc<Mutex<FakeSocketProbeState>>,
}

impl Default for FakeSocketProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSocketProbeState {
                next_handle: 1,
                sockets: HashMap::new(),
                scripted_failures: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeSocketProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SocketProbeCall> {
        self.inner.lock().calls.clone()
    }

    /// Script the next `n` connect attempts to `hostname:port` to fail
    /// before succeeding.
    pub fn fail_next(&self, hostname: &str, port: u16, n: u32) {
        self.inner
            .lock()
            .scripted_failures
            .insert((hostname.to_string(), port), n);
    }

    pub fn set_error(&self, socket: SocketHandle, error: impl Into<String>) {
        if let Some(s) = self.inner.lock().sockets.get_mut(&socket) {
            s.error = Some(error.into());
        }
    }
}

impl SocketProbe for FakeSocketProbe {
    fn connect(&self, hostname: &str, port: u16, _timeout: Duration) -> Result<SocketHandle, ProbeError> {
        let mut inner = self.inner.lock();
        inner.calls.push(SocketProbeCall::Connect {
            hostname: hostname.to_string(),
            port,
        });

        let key = (hostname.to_string(), port);
        if let Some(remaining) = inner.scripted_failures.get_mut(&key) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(ProbeError::Connect {
                    host: hostname.to_string(),
                    port,
                    source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
                });
            }
        }

        let handle = inner.next_handle;
        inner.next_handle += 1;
        inner.sockets.insert(
            handle,
            FakeSocket {
                ready: true,
                kind: SocketType::Tcp,
                error: None,
            },
        );
        Ok(handle)
    }

    fn is_ready(&self, socket: SocketHandle) -> bool {
        self.inner.lock().sockets.get(&socket).map(|s| s.ready).unwrap_or(false)
    }

    fn socket_type(&self, socket: SocketHandle) -> SocketType {
        self.inner
            .lock()
            .sockets
            .get(&socket)
            .map(|s| s.kind)
            .unwrap_or(SocketType::Tcp)
    }

    fn socket_error(&self, socket: SocketHandle) -> Option<String> {
        self.inner.lock().sockets.get(&socket).and_then(|s| s.error.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
