// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bundle of every probe a `Cycle` needs.

use crate::checksum::ChecksumProbe;
use crate::control::ControlProbe;
use crate::filesystem::FilesystemProbe;
use crate::icmp::IcmpProbe;
use crate::process::ProcessProbe;
use crate::program::ProgramProbe;
use crate::socket::{ProtocolProbe, SocketProbe};
use crate::stat::StatProbe;

/// A validator reaches `probes.process()`, `probes.stat()`, etc. rather than
/// taking nine separate trait-object parameters.
pub trait ProbeSet: Send + Sync {
    fn process(&self) -> &dyn ProcessProbe;
    fn filesystem(&self) -> &dyn FilesystemProbe;
    fn checksum(&self) -> &dyn ChecksumProbe;
    fn stat(&self) -> &dyn StatProbe;
    fn socket(&self) -> &dyn SocketProbe;
    fn protocol(&self) -> &dyn ProtocolProbe;
    fn icmp(&self) -> &dyn IcmpProbe;
    fn program(&self) -> &dyn ProgramProbe;
    fn control(&self) -> &dyn ControlProbe;
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProbeSet;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::ProbeSet;
    use crate::checksum::{ChecksumProbe, FakeChecksumProbe};
    use crate::control::{ControlProbe, FakeControlProbe};
    use crate::filesystem::{FakeFilesystemProbe, FilesystemProbe};
    use crate::icmp::{FakeIcmpProbe, IcmpProbe};
    use crate::process::{FakeProcessProbe, ProcessProbe};
    use crate::program::{FakeProgramProbe, ProgramProbe};
    use crate::socket::{FakeSocketProbe, ProtocolProbe, ProtocolRegistry, SocketProbe};
    use crate::stat::{FakeStatProbe, StatProbe};

    /// A `ProbeSet` wired entirely from `Fake*` probes, for engine-level tests.
    #[derive(Clone, Default)]
    pub struct FakeProbeSet {
        pub process: FakeProcessProbe,
        pub filesystem: FakeFilesystemProbe,
        pub checksum: FakeChecksumProbe,
        pub stat: FakeStatProbe,
        pub socket: FakeSocketProbe,
        pub protocol: ProtocolRegistry,
        pub icmp: FakeIcmpProbe,
        pub program: FakeProgramProbe,
        pub control: FakeControlProbe,
    }

    impl FakeProbeSet {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl ProbeSet for FakeProbeSet {
        fn process(&self) -> &dyn ProcessProbe {
            &self.process
        }
        fn filesystem(&self) -> &dyn FilesystemProbe {
            &self.filesystem
        }
        fn checksum(&self) -> &dyn ChecksumProbe {
            &self.checksum
        }
        fn stat(&self) -> &dyn StatProbe {
            &self.stat
        }
        fn socket(&self) -> &dyn SocketProbe {
            &self.socket
        }
        fn protocol(&self) -> &dyn ProtocolProbe {
            &self.protocol
        }
        fn icmp(&self) -> &dyn IcmpProbe {
            &self.icmp
        }
        fn program(&self) -> &dyn ProgramProbe {
            &self.program
        }
        fn control(&self) -> &dyn ControlProbe {
            &self.control
        }
    }

    #[cfg(test)]
    #[path = "probe_set_fake_tests.rs"]
    mod tests;
}

#[cfg(test)]
#[path = "probe_set_tests.rs"]
mod tests;
