// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message-formatting helpers shared by evaluators.
//!
//! Every posted event carries a human-readable message in the original's
//! register, e.g. `"cpu usage of 12.3% matches resource limit [cpu usage >= 10.0%]"`.

use crate::operator::Operator;

/// Render a ×10-scaled tenths-of-a-percent value as `"12.3"`.
pub fn format_percent(scaled: i64) -> String {
    format!("{}.{}", scaled / 10, (scaled % 10).abs())
}

/// `"<limit> matches resource limit [<label> <symbol> <formatted limit>%]"`
/// style message body for a percent-bearing resource/limit check.
pub fn resource_limit_message(label: &str, operator: Operator, limit_scaled: i64, value_scaled: i64) -> String {
    format!(
        "{label} of {value}% matches resource limit [{label}{op}{limit}%]",
        label = label,
        value = format_percent(value_scaled),
        op = operator.symbol(),
        limit = format_percent(limit_scaled),
    )
}

/// `"'<service>' <label> check succeeded [current <label>=<value>%]"`.
pub fn resource_succeeded_message(label: &str, value_scaled: i64) -> String {
    format!(
        "{label} check succeeded [current {label}={value}%]",
        label = label,
        value = format_percent(value_scaled),
    )
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
