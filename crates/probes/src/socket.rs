// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Socket connect/protocol-check probes.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSocketProbe, SocketProbeCall};

use crate::error::ProbeError;
use std::collections::HashMap;
use std::time::Duration;

/// Opaque handle to a probed socket, scoped to one `check_connection` call.
pub type SocketHandle = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketType {
    Tcp,
    Udp,
    Unix,
}

pub trait SocketProbe: Send + Sync {
    fn connect(&self, hostname: &str, port: u16, timeout: Duration) -> Result<SocketHandle, ProbeError>;
    fn is_ready(&self, socket: SocketHandle) -> bool;
    fn socket_type(&self, socket: SocketHandle) -> SocketType;
    /// `None` when the socket carries no pending error.
    fn socket_error(&self, socket: SocketHandle) -> Option<String>;
}

/// Per-protocol check registry.
/// `check` looks up the named protocol handler; an unregistered name falls
/// back to `default`'s "connect succeeded" behavior.
pub trait ProtocolProbe: Send + Sync {
    fn check(&self, protocol: &str, socket: SocketHandle) -> bool;
}

/// A `ProtocolProbe` backed by a closure table, one entry per named protocol.
pub struct ProtocolRegistry {
    handlers: HashMap<String, Box<dyn Fn(SocketHandle) -> bool + Send + Sync>>,
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl ProtocolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, protocol: impl Into<String>, handler: impl Fn(SocketHandle) -> bool + Send + Sync + 'static) {
        self.handlers.insert(protocol.into(), Box::new(handler));
    }
}

impl ProtocolProbe for ProtocolRegistry {
    fn check(&self, protocol: &str, socket: SocketHandle) -> bool {
        match self.handlers.get(protocol) {
            Some(handler) => handler(socket),
            // default: a successful connect already proved reachability.
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "socket_tests.rs"]
mod tests;
