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

//! Power-control and OEM power-limit modeling (§3 `PowerControl`, §4.8).

use crate::wire::RawCrayOem;
use crate::wire::RawPower;
use crate::wire::RawPowerControlEntry;
use redfish_discovery_core::ODataId;
use serde_json::Value;

/// `PowerLimit{Min,Max,Factor}` from the Cray OEM block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrayPowerLimit {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub factor: Option<f64>,
}

/// The Cray OEM power extension, materialized into strongly-typed fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrayPowerOem {
    pub power_idle_watts: Option<f64>,
    pub power_reset_watts: Option<f64>,
    pub power_limit: Option<CrayPowerLimit>,
}

/// A sum type over known vendors with a raw-JSON fallback: only the Cray
/// power schema is normalized into strong types (§4.8's explicit scope
/// limit); every other vendor's `Oem` block is kept verbatim for
/// downstream tooling rather than guessed at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OemBlock {
    pub cray: Option<CrayPowerOem>,
    pub raw: Value,
}

impl From<RawCrayOem> for CrayPowerOem {
    fn from(raw: RawCrayOem) -> Self {
        Self {
            power_idle_watts: raw.power_idle_watts,
            power_reset_watts: raw.power_reset_watts,
            power_limit: raw.power_limit.map(|l| CrayPowerLimit {
                min: l.min,
                max: l.max,
                factor: l.factor,
            }),
        }
    }
}

impl From<Option<Value>> for OemBlock {
    fn from(raw: Option<Value>) -> Self {
        let raw = raw.unwrap_or(Value::Null);
        let cray = raw
            .get("Cray")
            .and_then(|cray| serde_json::from_value::<RawCrayOem>(cray.clone()).ok())
            .map(CrayPowerOem::from);
        Self { cray, raw }
    }
}

/// One entry of a `Power` resource's `PowerControl` array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerControl {
    pub name: Option<String>,
    pub power_capacity_watts: Option<f64>,
    pub power_limit_in_watts: Option<f64>,
    /// `RelatedItem` entries, retained as OData-ID strings only (§3
    /// Ownership: these are back references, never owning pointers).
    pub related_item: Vec<ODataId>,
    pub oem: OemBlock,
}

impl From<RawPowerControlEntry> for PowerControl {
    fn from(raw: RawPowerControlEntry) -> Self {
        Self {
            name: raw.name,
            power_capacity_watts: raw.power_capacity_watts,
            power_limit_in_watts: raw.power_limit.and_then(|l| l.limit_in_watts),
            related_item: raw.related_item.into_iter().map(|r| r.odata_id).collect(),
            oem: OemBlock::from(raw.oem),
        }
    }
}

/// Parses a decoded `Power` resource into its `PowerControl` entries.
#[must_use]
pub fn parse_power_controls(raw: RawPower) -> Vec<PowerControl> {
    raw.power_control.into_iter().map(PowerControl::from).collect()
}
