// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File checksumming.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ChecksumProbeCall, FakeChecksumProbe};

use crate::error::ProbeError;
use md5::{Digest, Md5};
use sha1::Sha1;
use std::fmt::Write as _;
use std::path::Path;
use vet_core::ChecksumAlgorithm;

pub trait ChecksumProbe: Send + Sync {
    /// Compute the hex digest of `path`'s contents under `algorithm`.
    fn checksum(&self, path: &Path, algorithm: ChecksumAlgorithm) -> Result<String, ProbeError>;
}

/// Reads the whole file and hashes it with the real `md-5`/`sha1` crates.
pub struct RealChecksumProbe;

impl ChecksumProbe for RealChecksumProbe {
    fn checksum(&self, path: &Path, algorithm: ChecksumAlgorithm) -> Result<String, ProbeError> {
        let bytes = std::fs::read(path).map_err(|source| ProbeError::Checksum {
            path: path.display().to_string(),
            source,
        })?;
        let digest = match algorithm {
            ChecksumAlgorithm::Md5 => {
                let mut hasher = Md5::new();
                hasher.update(&bytes);
                hasher.finalize().to_vec()
            }
            ChecksumAlgorithm::Sha1 => {
                let mut hasher = Sha1::new();
                hasher.update(&bytes);
                hasher.finalize().to_vec()
            }
        };
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        Ok(hex)
    }
}

#[cfg(test)]
#[path = "checksum_tests.rs"]
mod tests;
