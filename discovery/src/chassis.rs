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

//! `Chassis` and its PDU-class specialization (§3 "Chassis", "RackPDU",
//! "Outlet").

use crate::action::ChassisActions;
use crate::action::OutletActions;
use crate::collection::EpCollection;
use crate::component::ComponentBase;
use crate::leaf::Assembly;
use crate::leaf::NetworkAdapter;
use crate::power::PowerControl;
use redfish_discovery_core::ODataId;
use serde_json::Value;

/// A `Chassis`, classified into one of `NodeEnclosure`, `Chassis`,
/// `ComputeModule`, `RouterModule`, or `HSNBoard` (§4.5).
#[derive(Debug, Clone)]
pub struct Chassis {
    pub base: ComponentBase,
    pub chassis_type: Option<String>,
    pub power_state: Option<String>,
    pub present: bool,
    pub power_url: Option<ODataId>,
    pub power_ctl: Vec<PowerControl>,
    pub network_adapters: EpCollection<NetworkAdapter>,
    pub assembly: EpCollection<Assembly>,
    pub actions: ChassisActions,
    pub raw: Value,
}

impl Chassis {
    #[must_use]
    pub fn new(base: ComponentBase, raw: Value) -> Self {
        Self {
            base,
            chassis_type: None,
            power_state: None,
            present: true,
            power_url: None,
            power_ctl: Vec::new(),
            network_adapters: EpCollection::new(None),
            assembly: EpCollection::new(None),
            actions: ChassisActions::default(),
            raw,
        }
    }
}

/// A `CabinetPDUPowerConnector`.
#[derive(Debug, Clone)]
pub struct Outlet {
    pub base: ComponentBase,
    pub actions: OutletActions,
}

impl Outlet {
    #[must_use]
    pub fn new(base: ComponentBase) -> Self {
        Self {
            base,
            actions: OutletActions::default(),
        }
    }
}

/// A `PowerDistribution` resource with `EquipmentType == "RackPDU"`.
#[derive(Debug, Clone)]
pub struct RackPdu {
    pub base: ComponentBase,
    pub equipment_type: Option<String>,
    pub outlets: EpCollection<Outlet>,
}

impl RackPdu {
    #[must_use]
    pub fn new(base: ComponentBase) -> Self {
        Self {
            base,
            equipment_type: None,
            outlets: EpCollection::new(None),
        }
    }
}
