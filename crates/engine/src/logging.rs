// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for embedders: an env-filter over an `info`
//! default, installed once at process startup.

use crate::error::EngineError;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber reading `RUST_LOG`, defaulting to
/// `info` when unset or malformed. Safe to call at most once per process;
/// a second call returns `Err` rather than panicking.
pub fn init() -> Result<(), EngineError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| EngineError::LoggingInit(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
