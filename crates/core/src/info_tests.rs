// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn default_info_snapshot_is_common() {
    let info = InfoSnapshot::default();
    assert!(matches!(info, InfoSnapshot::Common(_)));
}

#[test]
fn process_status_bits_set_and_has() {
    let mut bits = ProcessStatusBits::default();
    assert!(!bits.has(ProcessStatusBits::ZOMBIE));
    bits.set(ProcessStatusBits::ZOMBIE);
    assert!(bits.has(ProcessStatusBits::ZOMBIE));
    assert!(!bits.has(ProcessStatusBits::RUNNING));
}

#[test]
fn file_info_inode_prev_sentinel_defaults_to_zero_not_negative_one() {
    // FileInfo::default() zero-initializes; callers must explicitly set the
    // -1 "no prior sample" sentinel on first use.
    let info = FileInfo::default();
    assert_eq!(info.inode_prev, 0);
}
