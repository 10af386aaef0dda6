// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One function per test evaluator kind.

pub mod checksum;
pub mod connection;
pub mod content;
pub mod process;
pub mod resource;
pub mod scalar;

pub use checksum::evaluate_checksum;
pub use connection::check_connection;
pub use content::check_content_match;
pub use process::{check_filesystem_flags, check_process_pid, check_process_ppid, check_process_state};
pub use resource::{check_filesystem_resource, check_resource};
pub use scalar::{check_gid, check_perm, check_size, check_timestamp, check_uid, check_uptime};
