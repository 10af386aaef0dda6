// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_service_starts_initializing_and_unvisited() {
    let s = Service::new("nginx", ServiceKind::Process);
    assert!(s.monitor.is_init());
    assert!(!s.visited);
    assert_eq!(s.id, "nginx");
}

#[test]
fn event_kind_bitmap_tracks_independent_bits() {
    let mut bitmap = EventKindBitmap::default();
    assert!(!bitmap.is_set(EventKind::Exec));
    bitmap.set(EventKind::Exec);
    bitmap.set(EventKind::Timeout);
    assert!(bitmap.is_set(EventKind::Exec));
    assert!(bitmap.is_set(EventKind::Timeout));
    assert!(!bitmap.is_set(EventKind::Nonexist));

    bitmap.clear(EventKind::Exec);
    assert!(!bitmap.is_set(EventKind::Exec));
    assert!(bitmap.is_set(EventKind::Timeout));
}

#[test]
fn every_kind_of_test_list_starts_empty() {
    let s = Service::new("disk0", ServiceKind::Filesystem);
    assert!(s.ports.is_empty());
    assert!(s.filesystem_limits.is_empty());
    assert!(s.checksum.is_none());
}
