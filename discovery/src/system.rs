// SPDX-FileCopyrightText: Copyright (c) 2025 Cray-HPE. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `ComputerSystem` → fleet `Node` (§3 "System").

use crate::action::SystemActions;
use crate::collection::EpCollection;
use crate::component::ComponentBase;
use crate::leaf::Drive;
use crate::leaf::EthernetInterface;
use crate::leaf::Memory;
use crate::leaf::Processor;
use crate::power::PowerControl;
use redfish_discovery_core::ODataId;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorSummary {
    pub count: Option<u64>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySummary {
    pub total_system_memory_gib: Option<f64>,
}

/// A `Storage` resource: a collection of `Drive`s.
#[derive(Debug, Clone)]
pub struct Storage {
    pub base: ComponentBase,
    pub drives: EpCollection<Drive>,
}

/// A `ComputerSystem`, classified as fleet HMS type `Node` (§4.5 "System
/// classification").
#[derive(Debug, Clone)]
pub struct System {
    pub base: ComponentBase,
    pub processors: EpCollection<Processor>,
    pub memory: EpCollection<Memory>,
    pub ethernet_interfaces: EpCollection<EthernetInterface>,
    pub storage: EpCollection<Storage>,
    pub processor_summary: ProcessorSummary,
    pub memory_summary: MemorySummary,
    pub boot_source_override_allowable_values: Vec<String>,
    pub actions: SystemActions,
    pub power_ctl: Vec<PowerControl>,
    pub power_url: Option<ODataId>,
    pub raw: Value,
}

impl System {
    #[must_use]
    pub fn new(base: ComponentBase, raw: Value) -> Self {
        Self {
            base,
            processors: EpCollection::new(None),
            memory: EpCollection::new(None),
            ethernet_interfaces: EpCollection::new(None),
            storage: EpCollection::new(None),
            processor_summary: ProcessorSummary::default(),
            memory_summary: MemorySummary::default(),
            boot_source_override_allowable_values: Vec::new(),
            actions: SystemActions::default(),
            power_ctl: Vec::new(),
            power_url: None,
            raw,
        }
    }
}
