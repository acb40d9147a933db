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

//! Validated input for constructing an [`Endpoint`] (§3 "EndpointConfig").
//!
//! Callers build fleet inventory from whatever external source they use
//! (a database row, an SSDP announcement, a static YAML file) and funnel it
//! through [`EndpointConfig::build`] rather than populating an [`Endpoint`]
//! directly, so construction-time mistakes surface as a [`DiscoveryError`]
//! instead of silently producing an endpoint discovery can never succeed
//! against.

use crate::endpoint::Endpoint;
use crate::error::DiscoveryError;
use crate::hms_type::EndpointType;
use redfish_discovery_core::Credentials;

/// Everything needed to construct an [`Endpoint`], before any network I/O.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub id: String,
    pub endpoint_type: EndpointType,
    pub fqdn: String,
    pub username: String,
    pub password: String,
    pub enabled: bool,
    pub use_ssdp: bool,
    pub mac_required: bool,
    pub redisc_on_update: bool,
}

impl EndpointConfig {
    #[must_use]
    pub fn new(id: String, endpoint_type: EndpointType, fqdn: String, username: String, password: String) -> Self {
        Self {
            id,
            endpoint_type,
            fqdn,
            username,
            password,
            enabled: true,
            use_ssdp: false,
            mac_required: false,
            redisc_on_update: false,
        }
    }

    /// Validates the config and builds the [`Endpoint`] it describes.
    ///
    /// Validation is limited to what can be checked without a network round
    /// trip (§4.1): non-empty identity fields. Whether the FQDN actually
    /// resolves, or the credentials actually authenticate, is discovered by
    /// running [`crate::engine::discover`], not by this constructor.
    pub fn build(self) -> Result<Endpoint, DiscoveryError> {
        if self.id.trim().is_empty() {
            return Err(DiscoveryError::EmptyId);
        }
        if self.fqdn.trim().is_empty() {
            return Err(DiscoveryError::EmptyFqdn);
        }
        if self.username.trim().is_empty() {
            return Err(DiscoveryError::EmptyUsername);
        }

        let credentials = Credentials::new(self.username, self.password);
        let mut endpoint = Endpoint::new(self.id, self.endpoint_type, self.fqdn, credentials);
        endpoint.enabled = self.enabled;
        endpoint.use_ssdp = self.use_ssdp;
        endpoint.mac_required = self.mac_required;
        endpoint.redisc_on_update = self.redisc_on_update;
        Ok(endpoint)
    }
}
