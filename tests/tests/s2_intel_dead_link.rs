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
//! S2: Intel s2600BPB (NodeBMC) with a deliberately dead Chassis link —
//! §8 scenario 2, exercising property 5 (dead links don't abort discovery).

use redfish_discovery::engine::discover;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::hms_type::HmsType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;
use redfish_discovery_tests::serve_fixture;
use serde_json::json;

fn seed(mock: &MockTransport) {
    serve_fixture(mock, "/redfish/v1", "s2_intel_s2600bpb/service_root.json");
    serve_fixture(mock, "/redfish/v1/Managers", "s2_intel_s2600bpb/managers.json");
    serve_fixture(mock, "/redfish/v1/Managers/BMC", "s2_intel_s2600bpb/manager_bmc.json");
    serve_fixture(mock, "/redfish/v1/Chassis", "s2_intel_s2600bpb/chassis.json");
    mock.set_not_found("/redfish/v1/Chassis/DeadLink404Test");
    serve_fixture(mock, "/redfish/v1/Chassis/RackMount", "s2_intel_s2600bpb/chassis_rackmount.json");
    serve_fixture(mock, "/redfish/v1/Systems", "s2_intel_s2600bpb/systems.json");
    serve_fixture(mock, "/redfish/v1/Systems/QSBP74304715", "s2_intel_s2600bpb/system_qsbp.json");
    serve_fixture(
        mock,
        "/redfish/v1/Systems/QSBP74304715/Storage",
        "s2_intel_s2600bpb/storage_collection.json",
    );
    serve_fixture(mock, "/redfish/v1/Systems/QSBP74304715/Storage/1", "s2_intel_s2600bpb/storage_1.json");
    serve_fixture(mock, "/redfish/v1/Systems/QSBP74304715/Storage/2", "s2_intel_s2600bpb/storage_2.json");

    for storage in 1..=2 {
        for drive in 0..8 {
            let path = format!("/redfish/v1/Systems/QSBP74304715/Storage/{storage}/Drives/{drive}");
            mock.set_json(
                &path,
                200,
                &json!({
                    "@odata.id": path,
                    "Id": format!("{drive}"),
                    "Name": "Drive",
                    "Status": { "State": "Enabled", "Health": "OK" }
                }),
            );
        }
    }
}

#[tokio::test]
async fn dead_link_is_skipped_and_live_chassis_still_classified() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x0c0s16b0", EndpointType::NodeBmc, "x0c0s16b0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);
    assert_eq!(ep.chassis.len(), 1, "the dead-link member must not be materialized");

    let enclosure = ep.chassis.get("RackMount").expect("live chassis discovered");
    assert_eq!(enclosure.base.hms_type, Some(HmsType::NodeEnclosure));
    let reset = enclosure.actions.reset.as_ref().expect("chassis reset present");
    assert_eq!(reset.allowable_values, vec!["On", "ForceOff"]);

    let system = ep.systems.get("QSBP74304715").expect("system discovered");
    assert_eq!(
        system.actions.reset.as_ref().unwrap().allowable_values.len(),
        6,
        "six reset actions"
    );

    let total_drives: usize = system.storage.values().map(|s| s.drives.len()).sum();
    assert_eq!(total_drives, 16);
    assert_eq!(system.storage.len(), 2);
}
