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

//! `Endpoint` — one managed controller and everything discovered under it
//! (§3 "Endpoint").

use crate::chassis::Chassis;
use crate::chassis::RackPdu;
use crate::collection::EpCollection;
use crate::hms_type::EndpointType;
use crate::manager::Manager;
use crate::status::LastStatus;
use crate::system::System;
use redfish_discovery_core::Credentials;
use redfish_discovery_core::ODataId;
use time::OffsetDateTime;

/// `{LastStatus, LastDiscoveryAttempt}` (§3 "DiscoveryInfo").
#[derive(Debug, Clone)]
pub struct DiscoveryInfo {
    pub last_status: LastStatus,
    pub last_discovery_attempt: Option<OffsetDateTime>,
}

impl Default for DiscoveryInfo {
    fn default() -> Self {
        Self {
            last_status: LastStatus::NotYetQueried,
            last_discovery_attempt: None,
        }
    }
}

/// One managed BMC and the object graph populated by discovering it.
///
/// Constructed by the caller, populated by exactly one call to
/// [`crate::engine::discover`], read thereafter. Concurrent mutation during
/// discovery is the caller's responsibility to avoid (§5 "Shared resource
/// policy").
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// The endpoint's own xname, e.g. `x0c0s16b0`. Component xnames are
    /// derived by appending an HMS-type-specific suffix to this base.
    pub id: String,
    pub endpoint_type: EndpointType,
    pub hostname: String,
    pub domain: String,
    pub fqdn: String,
    pub enabled: bool,
    pub credentials: Credentials,
    pub use_ssdp: bool,
    pub mac_required: bool,
    pub redisc_on_update: bool,

    pub disc_info: DiscoveryInfo,

    pub service_root_odata_id: Option<ODataId>,
    pub num_systems: Option<u64>,

    pub managers: EpCollection<Manager>,
    pub chassis: EpCollection<Chassis>,
    pub systems: EpCollection<System>,
    pub rack_pdus: EpCollection<RackPdu>,
}

impl Endpoint {
    #[must_use]
    pub fn new(id: String, endpoint_type: EndpointType, fqdn: String, credentials: Credentials) -> Self {
        let domain = fqdn.splitn(2, '.').nth(1).unwrap_or_default().to_string();
        let hostname = fqdn.splitn(2, '.').next().unwrap_or(&fqdn).to_string();
        Self {
            id,
            endpoint_type,
            hostname,
            domain,
            fqdn,
            enabled: true,
            credentials,
            use_ssdp: false,
            mac_required: false,
            redisc_on_update: false,
            disc_info: DiscoveryInfo::default(),
            service_root_odata_id: None,
            num_systems: None,
            managers: EpCollection::new(None),
            chassis: EpCollection::new(None),
            systems: EpCollection::new(None),
            rack_pdus: EpCollection::new(None),
        }
    }
}
