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

//! Attributes shared by every classified component (§3 "Component
//! (generic)").

use crate::hms_type::HmsType;
use crate::status::LastStatus;
use crate::wire::RawStatus;
use redfish_discovery_core::ODataId;

/// Redfish `{State, Health, HealthRollup}`, carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStatus {
    pub state: Option<String>,
    pub health: Option<String>,
    pub health_rollup: Option<String>,
}

impl From<Option<RawStatus>> for ResourceStatus {
    fn from(raw: Option<RawStatus>) -> Self {
        match raw {
            Some(raw) => Self {
                state: raw.state,
                health: raw.health,
                health_rollup: raw.health_rollup,
            },
            None => Self::default(),
        }
    }
}

/// Fields every classified component carries, regardless of kind.
///
/// `parent_odata_id`/`parent_type` are back references only (§3 Ownership):
/// resolving them means looking the id up in the owning `EpCollection`, not
/// following an owning pointer.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    /// The xname assigned by the ordinal/xname assigner, or empty when
    /// classification could not determine an HMS type (§4.5 "Classification
    /// ambiguity").
    pub id: String,
    pub hms_type: Option<HmsType>,
    pub ordinal: Option<u32>,
    pub redfish_subtype: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub odata_id: ODataId,
    pub status: ResourceStatus,
    pub last_status: LastStatus,
    pub parent_odata_id: Option<ODataId>,
    pub parent_type: Option<HmsType>,
}

impl ComponentBase {
    #[must_use]
    pub fn new(odata_id: ODataId) -> Self {
        Self {
            id: String::new(),
            hms_type: None,
            ordinal: None,
            redfish_subtype: None,
            name: None,
            description: None,
            odata_id,
            status: ResourceStatus::default(),
            last_status: LastStatus::NotYetQueried,
            parent_odata_id: None,
            parent_type: None,
        }
    }
}
