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
//! S5: Cray Mountain Node Card v2 (NodeBMC) — §8 scenario 5, exercising
//! `@Redfish.ActionInfo` indirection and the §9 dedupe policy decision.

use redfish_discovery::action::DedupeForceRestart;
use redfish_discovery::engine::discover;
use redfish_discovery::engine::discover_with_policy;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;
use redfish_discovery_tests::serve_fixture;

fn seed(mock: &MockTransport) {
    serve_fixture(mock, "/redfish/v1", "s5_cray_node_card_v2/service_root.json");
    serve_fixture(mock, "/redfish/v1/Managers", "s5_cray_node_card_v2/managers.json");
    serve_fixture(mock, "/redfish/v1/Managers/BMC", "s5_cray_node_card_v2/manager_bmc.json");
    serve_fixture(mock, "/redfish/v1/Chassis", "s5_cray_node_card_v2/chassis.json");
    serve_fixture(mock, "/redfish/v1/Chassis/Enclosure", "s5_cray_node_card_v2/chassis_enclosure.json");
    serve_fixture(mock, "/redfish/v1/Systems", "s5_cray_node_card_v2/systems.json");
    serve_fixture(mock, "/redfish/v1/Systems/Node0", "s5_cray_node_card_v2/system_node0.json");
    serve_fixture(mock, "/redfish/v1/Systems/Node1", "s5_cray_node_card_v2/system_node1.json");
    serve_fixture(
        mock,
        "/redfish/v1/Systems/Node0/ResetActionInfo",
        "s5_cray_node_card_v2/reset_action_info_node0.json",
    );
    serve_fixture(
        mock,
        "/redfish/v1/Systems/Node1/ResetActionInfo",
        "s5_cray_node_card_v2/reset_action_info_node1.json",
    );
}

#[tokio::test]
async fn action_info_values_win_over_inline_values_under_the_default_policy() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x1000c7s1b0", EndpointType::NodeBmc, "x1000c7s1b0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);
    assert_eq!(ep.systems.len(), 2);

    let node0 = ep.systems.get("Node0").expect("node0 discovered");
    assert_eq!(node0.base.id, "x1000c7s1b0n0");
    assert_eq!(
        node0.actions.reset.as_ref().unwrap().allowable_values,
        vec!["ForceRestart", "On", "ForceOff", "GracefulShutdown"]
    );

    let node1 = ep.systems.get("Node1").expect("node1 discovered");
    assert_eq!(node1.base.id, "x1000c7s1b0n1");
    assert_eq!(
        node1.actions.reset.as_ref().unwrap().allowable_values,
        vec!["ForceRestart", "On", "ForceOff", "GracefulShutdown"]
    );
}

#[tokio::test]
async fn dedupe_force_restart_policy_collapses_the_action_info_values_to_three() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x1000c7s1b0", EndpointType::NodeBmc, "x1000c7s1b0.example");

    discover_with_policy(&mut ep, &mock, &DedupeForceRestart).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);

    for id in ["Node0", "Node1"] {
        let node = ep.systems.get(id).unwrap_or_else(|| panic!("{id} discovered"));
        assert_eq!(
            node.actions.reset.as_ref().unwrap().allowable_values,
            vec!["On", "ForceOff", "GracefulShutdown"]
        );
    }
}
