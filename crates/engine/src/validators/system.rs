// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! System validator: resource checks against the host-wide snapshot only,
//! no per-process sampling.

use crate::evaluators::check_resource;
use vet_core::{EventSink, Service, SystemInfo};
use vet_probes::ProbeSet;

pub fn check_system(s: &mut Service, _probes: &dyn ProbeSet, sink: &dyn EventSink, system: &SystemInfo) -> bool {
    let service = s.id.as_str().to_string();
    check_resource(&s.resources, s.monitor, None, system, sink, &service)
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
