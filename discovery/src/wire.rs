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

//! Tolerant wire-shape structs deserialized straight off the JSON body.
//!
//! These mirror the DMTF Redfish field names (`PascalCase`) rather than
//! Rust naming conventions, and every field the spec doesn't guarantee is
//! `Option` with `#[serde(default)]`: vendors omit fields, send nulls, and
//! add their own OEM keys freely, and none of that should fail a decode.

use redfish_discovery_core::ODataId;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawStatus {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub health_rollup: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRef {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCollection {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: Option<ODataId>,
    #[serde(rename = "Members@odata.count", default)]
    pub members_count: Option<u64>,
    #[serde(rename = "Members", default)]
    pub members: Vec<RawRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServiceRoot {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: Option<ODataId>,
    #[serde(rename = "Managers", default)]
    pub managers: Option<RawRef>,
    #[serde(rename = "Chassis", default)]
    pub chassis: Option<RawRef>,
    #[serde(rename = "Systems", default)]
    pub systems: Option<RawRef>,
    #[serde(rename = "Systems@odata.count", default)]
    pub num_systems: Option<u64>,
    #[serde(rename = "PowerEquipment", default)]
    pub power_equipment: Option<RawPowerEquipment>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPowerEquipment {
    #[serde(rename = "RackPDUs", default)]
    pub rack_pdus: Option<RawRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawManager {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager_type: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub ethernet_interfaces: Option<RawRef>,
    #[serde(default)]
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawChassisLinks {
    #[serde(default)]
    pub computer_systems: Vec<RawRef>,
    #[serde(default)]
    pub managed_by: Vec<RawRef>,
    #[serde(default)]
    pub contained_by: Option<RawRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawChassis {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub chassis_type: Option<String>,
    #[serde(default)]
    pub power_state: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub power: Option<RawRef>,
    #[serde(default)]
    pub network_adapters: Option<RawRef>,
    #[serde(default)]
    pub assembly: Option<RawRef>,
    #[serde(default)]
    pub links: RawChassisLinks,
    #[serde(default)]
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawComputerSystemLinks {
    #[serde(default)]
    pub chassis: Vec<RawRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawProcessorSummary {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawMemorySummary {
    #[serde(default)]
    pub total_system_memory_gi_b: Option<f64>,
    #[serde(default)]
    pub status: Option<RawStatus>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBoot {
    #[serde(rename = "BootSourceOverrideTarget", default)]
    pub boot_source_override_target: Option<String>,
    #[serde(rename = "BootSourceOverrideTarget@Redfish.AllowableValues", default)]
    pub boot_source_override_target_allowable_values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawComputerSystem {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub processor_summary: Option<RawProcessorSummary>,
    #[serde(default)]
    pub memory_summary: Option<RawMemorySummary>,
    #[serde(default)]
    pub processors: Option<RawRef>,
    #[serde(default)]
    pub memory: Option<RawRef>,
    #[serde(default)]
    pub ethernet_interfaces: Option<RawRef>,
    #[serde(default)]
    pub storage: Option<RawRef>,
    #[serde(default)]
    pub boot: Option<RawBoot>,
    #[serde(default)]
    pub links: RawComputerSystemLinks,
    #[serde(default)]
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawPowerDistribution {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub equipment_type: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub outlets: Option<RawRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawOutlet {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawStorage {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub drives: Vec<RawRef>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawLeafResource {
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPowerLimit {
    #[serde(rename = "LimitInWatts", default)]
    pub limit_in_watts: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCrayPowerLimit {
    #[serde(rename = "Min", default)]
    pub min: Option<f64>,
    #[serde(rename = "Max", default)]
    pub max: Option<f64>,
    #[serde(rename = "Factor", default)]
    pub factor: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCrayOem {
    #[serde(rename = "PowerIdleWatts", default)]
    pub power_idle_watts: Option<f64>,
    #[serde(rename = "PowerResetWatts", default)]
    pub power_reset_watts: Option<f64>,
    #[serde(rename = "PowerLimit", default)]
    pub power_limit: Option<RawCrayPowerLimit>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawPowerControlEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub power_capacity_watts: Option<f64>,
    #[serde(default)]
    pub power_limit: Option<RawPowerLimit>,
    #[serde(default)]
    pub related_item: Vec<RawRef>,
    /// Kept as raw JSON since OEM shapes vary by vendor; only the `Cray`
    /// sub-object is additionally materialized into typed fields (§4.8).
    #[serde(default)]
    pub oem: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RawPower {
    #[serde(default)]
    pub power_control: Vec<RawPowerControlEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawActionInfoParameter {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "AllowableValues", default)]
    pub allowable_values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawActionInfo {
    #[serde(rename = "Parameters", default)]
    pub parameters: Vec<RawActionInfoParameter>,
}
