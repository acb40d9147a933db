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
//! S1: HPE ProLiant (NodeBMC) — §8 scenario 1.

use redfish_discovery::engine::discover;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;
use redfish_discovery_tests::serve_fixture;

fn seed(mock: &MockTransport) {
    serve_fixture(mock, "/redfish/v1", "s1_hpe_proliant/service_root.json");
    serve_fixture(mock, "/redfish/v1/Managers", "s1_hpe_proliant/managers.json");
    serve_fixture(mock, "/redfish/v1/Managers/1", "s1_hpe_proliant/manager_ilo.json");
    serve_fixture(mock, "/redfish/v1/Chassis", "s1_hpe_proliant/chassis.json");
    serve_fixture(mock, "/redfish/v1/Chassis/1", "s1_hpe_proliant/chassis_rackmount.json");
    serve_fixture(mock, "/redfish/v1/Systems", "s1_hpe_proliant/systems.json");
    serve_fixture(mock, "/redfish/v1/Systems/1", "s1_hpe_proliant/system_1.json");
}

#[tokio::test]
async fn discovers_node_manager_and_enclosure() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x0c0s16b0", EndpointType::NodeBmc, "x0c0s16b0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);

    let system = ep.systems.get("1").expect("system 1 discovered");
    assert_eq!(system.base.id, "x0c0s16b0n0");
    let reset = system.actions.reset.as_ref().expect("reset action present");
    assert_eq!(reset.target.as_str(), "/redfish/v1/Systems/1/Actions/ComputerSystem.Reset");
    assert_eq!(
        reset.allowable_values,
        vec!["On", "ForceOff", "GracefulShutdown", "ForceRestart", "Nmi", "PushPowerButton"]
    );

    let manager = ep.managers.get("iLO.Embedded.1").expect("manager discovered");
    assert_eq!(manager.actions.action_count(), 1);

    let enclosure = ep.chassis.get("1").expect("chassis discovered");
    assert_eq!(enclosure.base.hms_type, Some(redfish_discovery::hms_type::HmsType::NodeEnclosure));
}
