// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the engine to its own embedders.
//!
//! Validators themselves return `bool` — this
//! enum exists only for the small set of engine-level operations that are
//! not part of a validator's per-service contract (e.g. `logging::init`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to install the tracing subscriber: {0}")]
    LoggingInit(String),
}
