// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn format_percent_renders_one_decimal() {
    assert_eq!(format_percent(123), "12.3");
    assert_eq!(format_percent(100), "10.0");
    assert_eq!(format_percent(5), "0.5");
}

#[test]
fn resource_limit_message_includes_label_and_symbol() {
    let msg = resource_limit_message("cpu usage", Operator::Ge, 100, 123);
    assert_eq!(msg, "cpu usage of 12.3% matches resource limit [cpu usage >= 10.0%]");
}

#[test]
fn resource_succeeded_message_reports_current_value() {
    let msg = resource_succeeded_message("mem usage", 45);
    assert_eq!(msg, "mem usage check succeeded [current mem usage=4.5%]");
}
