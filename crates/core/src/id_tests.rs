// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::borrow::Borrow;
use std::collections::HashMap;

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId;
}

#[test]
fn define_id_new_and_as_str() {
    let id = TestId::new("abc");
    assert_eq!(id.as_str(), "abc");
}

#[test]
fn define_id_display() {
    let id = TestId::new("hello");
    assert_eq!(id.to_string(), "hello");
}

#[test]
fn define_id_from_str_and_string() {
    let a: TestId = "borrowed".into();
    let b: TestId = String::from("owned").into();
    assert_eq!(a.as_str(), "borrowed");
    assert_eq!(b.as_str(), "owned");
}

#[test]
fn define_id_partial_eq_str() {
    let id = TestId::new("test");
    assert_eq!(id, *"test");
    assert_eq!(id, "test");
}

#[test]
fn define_id_borrow_str() {
    let id = TestId::new("key");
    let borrowed: &str = id.borrow();
    assert_eq!(borrowed, "key");
}

#[test]
fn define_id_hash_map_lookup() {
    let mut map = HashMap::new();
    map.insert(TestId::new("k"), 42);
    assert_eq!(map.get("k"), Some(&42));
}

#[test]
fn short_truncates_long_strings() {
    let id = ServiceId::new("a-very-long-service-name");
    assert_eq!(id.short(6), "a-very");
}

#[test]
fn short_keeps_shorter_strings_whole() {
    let id = ServiceId::new("db");
    assert_eq!(id.short(6), "db");
}
