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

//! Component Classifier (§4.5): maps a raw Redfish resource onto a fleet
//! HMS type, given the endpoint's declared type, the resource's raw
//! `ChassisType`, its `Id`, and its sibling relationships.
//!
//! Rules are evaluated in the order listed in §4.5; first match wins. A
//! resource the table doesn't cover classifies to `None` rather than
//! erroring (§4.5 "Classification ambiguity") — it stays in its raw
//! collection with no xname, and its absence does not affect its parent's
//! status.

use crate::hms_type::EndpointType;
use crate::hms_type::HmsType;
use crate::wire::RawChassis;

/// Chassis classification (the non-trivial case). Blade-type chassis under
/// a `ChassisBMC` endpoint are distinguished by `Id` prefix into compute
/// vs. router modules; everything else that reports an enclosure-shaped
/// `ChassisType` and has no `Links.ContainedBy` parent is the endpoint's own
/// enclosure, typed per the endpoint's declared role.
#[must_use]
pub fn classify_chassis(endpoint_type: EndpointType, chassis: &RawChassis) -> Option<HmsType> {
    let id = chassis.id.as_deref().unwrap_or("");
    match chassis.chassis_type.as_deref() {
        Some("Blade") if endpoint_type == EndpointType::ChassisBmc => {
            if id.starts_with("Blade") {
                Some(HmsType::ComputeModule)
            } else if id.starts_with("Perif") {
                Some(HmsType::RouterModule)
            } else {
                None
            }
        }
        Some("Enclosure" | "RackMount" | "Card") => {
            if chassis.links.contained_by.is_some() {
                return None;
            }
            match endpoint_type {
                EndpointType::NodeBmc => Some(HmsType::NodeEnclosure),
                EndpointType::ChassisBmc => Some(HmsType::Chassis),
                EndpointType::RouterBmc => Some(HmsType::HsnBoard),
                EndpointType::CabinetPduController => None,
            }
        }
        _ => None,
    }
}

/// A chassis with `PowerState: "Off"` and `Status.State: "Absent"` is kept
/// in the tree (it still receives an ordinal and an xname) but marked
/// not-present.
#[must_use]
pub fn chassis_is_present(power_state: Option<&str>, status_state: Option<&str>) -> bool {
    !(power_state == Some("Off") && status_state == Some("Absent"))
}

/// A `Manager` always inherits the endpoint's declared type.
#[must_use]
pub fn classify_manager(endpoint_type: EndpointType) -> HmsType {
    match endpoint_type {
        EndpointType::NodeBmc => HmsType::NodeBmc,
        EndpointType::ChassisBmc => HmsType::ChassisBmc,
        EndpointType::RouterBmc => HmsType::RouterBmc,
        EndpointType::CabinetPduController => HmsType::CabinetPduController,
    }
}

/// Any `ComputerSystem` under a `NodeBMC` endpoint becomes `Node`. Other
/// endpoint types never expose a `Systems` collection in this fleet's
/// topology, so a system encountered there is left unclassified.
#[must_use]
pub fn classify_system(endpoint_type: EndpointType) -> Option<HmsType> {
    match endpoint_type {
        EndpointType::NodeBmc => Some(HmsType::Node),
        _ => None,
    }
}

/// Every `Outlet` of every `RackPDU` under a `CabinetPDUController`
/// endpoint becomes a `CabinetPDUPowerConnector`.
#[must_use]
pub fn classify_outlet() -> HmsType {
    HmsType::CabinetPduPowerConnector
}

/// A `PowerDistribution` with `EquipmentType == "RackPDU"`.
#[must_use]
pub fn classify_rack_pdu() -> HmsType {
    HmsType::CabinetPdu
}
