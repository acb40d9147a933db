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
//! S3: Dell PowerEdge (NodeBMC) — §8 scenario 3.

use redfish_discovery::engine::discover;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::hms_type::HmsType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;
use redfish_discovery_tests::serve_fixture;

fn seed(mock: &MockTransport) {
    serve_fixture(mock, "/redfish/v1", "s3_dell_poweredge/service_root.json");
    serve_fixture(mock, "/redfish/v1/Managers", "s3_dell_poweredge/managers.json");
    serve_fixture(mock, "/redfish/v1/Managers/iDRAC.Embedded.1", "s3_dell_poweredge/manager_idrac.json");
    serve_fixture(mock, "/redfish/v1/Chassis", "s3_dell_poweredge/chassis.json");
    serve_fixture(
        mock,
        "/redfish/v1/Chassis/System.Embedded.1",
        "s3_dell_poweredge/chassis_system_embedded.json",
    );
    serve_fixture(mock, "/redfish/v1/Systems", "s3_dell_poweredge/systems.json");
    serve_fixture(mock, "/redfish/v1/Systems/System.Embedded.1", "s3_dell_poweredge/system_embedded.json");
}

#[tokio::test]
async fn idrac_manager_and_node_enclosure_are_classified() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x0c0s16b0", EndpointType::NodeBmc, "x0c0s16b0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);

    let manager = ep.managers.get("iDRAC.Embedded.1").expect("idrac manager discovered");
    assert_eq!(manager.actions.action_count(), 1);
    assert_eq!(
        manager.actions.reset.as_ref().unwrap().target.as_str(),
        "/redfish/v1/Managers/iDRAC.Embedded.1/Actions/Manager.Reset"
    );

    let enclosure = ep.chassis.get("System.Embedded.1").expect("node enclosure discovered");
    assert_eq!(enclosure.base.hms_type, Some(HmsType::NodeEnclosure));
    assert_eq!(enclosure.actions.reset.as_ref().unwrap().allowable_values, vec!["On", "ForceOff"]);
}
