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
//! §8 property 8: an unreachable ServiceRoot fails the whole discovery
//! attempt without populating any collection.

use redfish_discovery::engine::discover;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;

#[tokio::test]
async fn service_root_404_leaves_every_collection_empty() {
    let mock = MockTransport::new();
    mock.set_not_found("/redfish/v1");
    let mut ep = endpoint("x0c0s16b0", EndpointType::NodeBmc, "x0c0s16b0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::HttpsGetFailed);
    assert!(ep.managers.is_empty());
    assert!(ep.chassis.is_empty());
    assert!(ep.systems.is_empty());
    assert!(ep.rack_pdus.is_empty());
    assert!(ep.disc_info.last_discovery_attempt.is_some(), "attempt timestamp still recorded");
}
