// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trait interfaces to the OS, one per external collaborator the engine
//! depends on, plus `Fake*` test doubles behind `test-support`.

pub mod checksum;
pub mod control;
pub mod error;
pub mod filesystem;
pub mod icmp;
pub mod probe_set;
pub mod process;
pub mod program;
pub mod socket;
pub mod stat;

pub use checksum::{ChecksumProbe, RealChecksumProbe};
pub use control::ControlProbe;
pub use error::ProbeError;
pub use filesystem::{FilesystemProbe, FilesystemSample};
pub use icmp::IcmpProbe;
pub use probe_set::ProbeSet;
pub use process::{ProcessProbe, ProcessSample};
pub use program::{ChildHandle, ChildStatus, ProgramProbe};
pub use socket::{ProtocolProbe, ProtocolRegistry, SocketHandle, SocketProbe, SocketType};
pub use stat::{StatKind, StatProbe, StatResult};

#[cfg(any(test, feature = "test-support"))]
pub use {
    checksum::FakeChecksumProbe, control::FakeControlProbe, filesystem::FakeFilesystemProbe,
    icmp::FakeIcmpProbe, probe_set::FakeProbeSet, process::FakeProcessProbe, program::FakeProgramProbe,
    socket::FakeSocketProbe, stat::FakeStatProbe,
};
