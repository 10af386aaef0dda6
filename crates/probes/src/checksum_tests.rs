// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::NamedTempFile;

#[test]
fn real_probe_computes_md5_of_known_content() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"").unwrap();
    let digest = RealChecksumProbe.checksum(file.path(), ChecksumAlgorithm::Md5).unwrap();
    assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn real_probe_computes_sha1_of_known_content() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"").unwrap();
    let digest = RealChecksumProbe.checksum(file.path(), ChecksumAlgorithm::Sha1).unwrap();
    assert_eq!(digest, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn real_probe_errors_on_missing_file() {
    let err = RealChecksumProbe
        .checksum(std::path::Path::new("/nonexistent/path"), ChecksumAlgorithm::Md5)
        .unwrap_err();
    assert!(matches!(err, ProbeError::Checksum { .. }));
}