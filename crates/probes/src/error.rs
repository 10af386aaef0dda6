// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by probe implementations to their own callers.
//!
//! Evaluators in `vet-engine` catch these at the boundary and translate them
//! into a FAILED event with the probe's error text folded into the message
//! — `ProbeError` never bubbles out of a validator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("stat failed for {path}: {source}")]
    Stat {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("checksum read failed for {path}: {source}")]
    Checksum {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("filesystem usage query failed for {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("socket connect to {host}:{port} failed: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("program spawn failed: {0}")]
    Spawn(String),
    #[error("control command {action} failed for {service}: {reason}")]
    Control {
        service: String,
        action: String,
        reason: String,
    },
}
