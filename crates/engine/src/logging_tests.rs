// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn second_init_call_errors_instead_of_panicking() {
    let _ = init();
    assert!(init().is_err());
}