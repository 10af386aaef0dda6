// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checksum evaluator.

use std::path::Path;
use vet_core::{ChecksumTest, EventKind, EventSink, EventState};
use vet_probes::ChecksumProbe;

/// Compute the file's digest and compare against the descriptor: in
/// `test_changes` mode, posts CHANGED/CHANGEDNOT against the
/// previously stored digest; otherwise posts FAILED/SUCCEEDED against the
/// configured expected digest. A probe failure to read/hash the file posts
/// `Data` FAILED rather than `Checksum`, since the test itself could not run.
pub fn evaluate_checksum(
    test: &mut ChecksumTest,
    path: &Path,
    probe: &dyn ChecksumProbe,
    sink: &dyn EventSink,
    service: &str,
) -> bool {
    let actual = match probe.checksum(path, test.algorithm) {
        Ok(digest) => digest,
        Err(err) => {
            sink.post(
                service,
                EventKind::Data,
                EventState::Failed,
                None,
                &format!("cannot compute checksum: {err}"),
            );
            return false;
        }
    };

    if test.test_changes {
        let changed = test.initialized && test.expected != actual;
        test.expected = actual;
        test.initialized = true;
        if changed {
            sink.post(
                service,
                EventKind::Checksum,
                EventState::Changed,
                Some(&test.action),
                &format!("{} checksum changed", test.algorithm.name()),
            );
        } else {
            sink.post(
                service,
                EventKind::Checksum,
                EventState::ChangedNot,
                None,
                &format!("{} checksum check succeeded", test.algorithm.name()),
            );
        }
        return true;
    }

    if test.matches(&actual) {
        sink.post(
            service,
            EventKind::Checksum,
            EventState::Succeeded,
            None,
            &format!("{} checksum check succeeded", test.algorithm.name()),
        );
        true
    } else {
        sink.post(
            service,
            EventKind::Checksum,
            EventState::Failed,
            Some(&test.action),
            &format!("{} checksum test failed for {}", test.algorithm.name(), path.display()),
        );
        false
    }
}

#[cfg(test)]
#[path = "checksum_tests.rs"]
mod tests;
