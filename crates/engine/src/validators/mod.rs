// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One function per service kind, each composing evaluators into the
//! full per-cycle check for that kind.

pub mod file_like;
pub mod filesystem;
pub mod process;
pub mod program;
pub mod remote_host;
pub mod system;

pub use file_like::{check_file_like, FileLikeKind};
pub use filesystem::check_filesystem;
pub use process::check_process;
pub use program::check_program;
pub use remote_host::check_remote_host;
pub use system::check_system;
