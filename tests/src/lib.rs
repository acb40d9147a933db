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

//! Shared scaffolding for the end-to-end scenario tests under `tests/`
//! (§8's S1–S6), mirroring the role `nv_redfish_tests` plays for the
//! teacher's own integration suite.

use redfish_discovery::config::EndpointConfig;
use redfish_discovery::endpoint::Endpoint;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery_mock::MockTransport;
use std::path::Path;
use std::path::PathBuf;

/// Reads a fixture JSON file under `tests/fixtures/<relative>` and parses it.
///
/// # Panics
/// Panics if the file is missing or not valid JSON — a missing fixture is a
/// test-authoring bug, not a condition under test.
#[must_use]
pub fn fixture(relative: &str) -> serde_json::Value {
    let path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(relative);
    let body = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading fixture {}: {e}", path.display()));
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("parsing fixture {}: {e}", path.display()))
}

/// Queues a fixture file as the 200 response for `path` on `mock`.
pub fn serve_fixture(mock: &MockTransport, path: &str, relative: &str) {
    mock.set_json(path, 200, &fixture(relative));
}

/// Builds an [`Endpoint`] with fixed test credentials, the way fleet
/// inventory would hand one to the engine after loading it from wherever
/// that caller keeps its config.
#[must_use]
pub fn endpoint(id: &str, endpoint_type: EndpointType, fqdn: &str) -> Endpoint {
    EndpointConfig::new(id.to_string(), endpoint_type, fqdn.to_string(), "root".to_string(), "hunter2".to_string())
        .build()
        .expect("valid test endpoint config")
}
