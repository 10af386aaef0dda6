// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::action::{ActionKind, ActionRate};

fn noop_action() -> ActionRate {
    ActionRate {
        count: 1,
        cycle: 1,
        action: ActionKind::Alert,
    }
}

#[test]
fn status_test_matches_uses_operator_eval() {
    let t = StatusTest {
        operator: Operator::Ne,
        expected_return_value: 0,
        action: noop_action(),
    };
    assert!(t.matches(1));
    assert!(!t.matches(0));
}

#[test]
fn size_test_sample_starts_unset() {
    let t = SizeTest {
        operator: Operator::Gt,
        limit: 1024,
        initialized: false,
        test_changes: false,
        sample: None,
        action: noop_action(),
    };
    assert_eq!(t.sample, None);
    assert!(!t.initialized);
}

#[test]
fn icmp_result_variants_are_distinct() {
    assert_ne!(IcmpResult::Unavailable, IcmpResult::NoPrivilege);
    assert_eq!(
        IcmpResult::Available(Duration::from_millis(5)),
        IcmpResult::Available(Duration::from_millis(5))
    );
}

#[test]
fn port_test_defaults_to_unavailable_until_probed() {
    let t = PortTest {
        hostname: "localhost".to_string(),
        port: 80,
        protocol: None,
        retry: 3,
        timeout: Duration::from_secs(5),
        response: None,
        is_available: false,
        action: noop_action(),
    };
    assert!(!t.is_available);
    assert_eq!(t.response, None);
}
