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
//! S4: Cray Mountain CMM (ChassisBMC) — §8 scenario 4.

use redfish_discovery::engine::discover;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::hms_type::HmsType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;
use redfish_discovery_tests::serve_fixture;
use serde_json::json;

const RESET_VALUES: [&str; 3] = ["On", "ForceOff", "GracefulRestart"];

fn seed(mock: &MockTransport) {
    serve_fixture(mock, "/redfish/v1", "s4_cray_cmm/service_root.json");
    serve_fixture(mock, "/redfish/v1/Managers", "s4_cray_cmm/managers.json");
    serve_fixture(mock, "/redfish/v1/Managers/BMC", "s4_cray_cmm/manager_bmc.json");
    serve_fixture(mock, "/redfish/v1/Chassis", "s4_cray_cmm/chassis_collection.json");
    serve_fixture(mock, "/redfish/v1/Chassis/Enclosure", "s4_cray_cmm/chassis_enclosure.json");

    for prefix in ["Blade", "Perif"] {
        for i in 0..8 {
            let id = format!("{prefix}{i}");
            let path = format!("/redfish/v1/Chassis/{id}");
            mock.set_json(
                &path,
                200,
                &json!({
                    "@odata.id": path,
                    "Id": id,
                    "Name": "Blade Chassis",
                    "ChassisType": "Blade",
                    "PowerState": "On",
                    "Status": { "State": "Enabled", "Health": "OK" },
                    "Actions": {
                        "#Chassis.Reset": {
                            "target": format!("{path}/Actions/Chassis.Reset"),
                            "ResetType@Redfish.AllowableValues": RESET_VALUES,
                        }
                    }
                }),
            );
        }
    }
}

#[tokio::test]
async fn chassis_bmc_reports_zero_systems_and_sixteen_blades() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x1c2b0", EndpointType::ChassisBmc, "x1c2b0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);
    assert!(ep.systems.is_empty(), "a ChassisBMC endpoint never exposes Systems");

    let enclosure = ep.chassis.get("Enclosure").expect("enclosure discovered");
    assert_eq!(enclosure.base.hms_type, Some(HmsType::Chassis));
    assert_eq!(enclosure.base.id, "x1c2b0");
    assert_eq!(
        enclosure.actions.reset.as_ref().unwrap().allowable_values,
        RESET_VALUES.to_vec()
    );

    for i in 0..8u32 {
        let blade = ep.chassis.get(&format!("Blade{i}")).unwrap_or_else(|| panic!("blade {i} discovered"));
        assert_eq!(blade.base.hms_type, Some(HmsType::ComputeModule));
        assert_eq!(blade.base.ordinal, Some(i));
        assert_eq!(blade.base.id, format!("x1c2b0s{i}"));
        assert_eq!(blade.actions.reset.as_ref().unwrap().allowable_values, RESET_VALUES.to_vec());

        let perif = ep.chassis.get(&format!("Perif{i}")).unwrap_or_else(|| panic!("perif {i} discovered"));
        assert_eq!(perif.base.hms_type, Some(HmsType::RouterModule));
        assert_eq!(perif.base.ordinal, Some(i));
        assert_eq!(perif.base.id, format!("x1c2b0r{i}"));
        assert_eq!(perif.actions.reset.as_ref().unwrap().allowable_values, RESET_VALUES.to_vec());
    }

    assert_eq!(ep.chassis.len(), 17);
}
