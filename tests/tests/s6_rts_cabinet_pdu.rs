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
//! S6: RTS Cabinet PDU (CabinetPDUController) — §8 scenario 6, exercising
//! `OutletActions::action_count`'s three-way present/power-only/absent split.

use redfish_discovery::engine::discover;
use redfish_discovery::hms_type::EndpointType;
use redfish_discovery::hms_type::HmsType;
use redfish_discovery::status::LastStatus;
use redfish_discovery_mock::MockTransport;
use redfish_discovery_tests::endpoint;
use redfish_discovery_tests::serve_fixture;
use serde_json::json;

const OUTLET_IDS: [&str; 11] = ["A1", "A2", "A3", "A4", "A5", "B1", "B2", "B3", "C1", "C2", "C3"];

fn seed(mock: &MockTransport) {
    serve_fixture(mock, "/redfish/v1", "s6_rts_cabinet_pdu/service_root.json");
    serve_fixture(mock, "/redfish/v1/Managers", "s6_rts_cabinet_pdu/managers.json");
    serve_fixture(mock, "/redfish/v1/Managers/BMC", "s6_rts_cabinet_pdu/manager_bmc.json");
    serve_fixture(mock, "/redfish/v1/Chassis", "s6_rts_cabinet_pdu/chassis.json");
    serve_fixture(mock, "/redfish/v1/PowerEquipment/RackPDUs", "s6_rts_cabinet_pdu/rack_pdus.json");
    serve_fixture(mock, "/redfish/v1/PowerEquipment/RackPDUs/1", "s6_rts_cabinet_pdu/rack_pdu_1.json");
    serve_fixture(
        mock,
        "/redfish/v1/PowerEquipment/RackPDUs/1/Outlets",
        "s6_rts_cabinet_pdu/outlets.json",
    );

    for id in OUTLET_IDS {
        let path = format!("/redfish/v1/PowerEquipment/RackPDUs/1/Outlets/{id}");
        let mut actions = json!({});
        if id != "A5" {
            actions["#Outlet.PowerControl"] = json!({ "target": format!("{path}/Actions/Outlet.PowerControl") });
        }
        if id != "A4" && id != "A5" {
            actions["#Outlet.ResetStatistics"] =
                json!({ "target": format!("{path}/Actions/Outlet.ResetStatistics") });
        }
        mock.set_json(
            &path,
            200,
            &json!({
                "@odata.id": path,
                "Id": id,
                "Name": "Outlet",
                "Status": { "State": "Enabled", "Health": "OK" },
                "Actions": actions,
            }),
        );
    }
}

#[tokio::test]
async fn outlet_action_counts_distinguish_present_power_only_and_absent() {
    let mock = MockTransport::new();
    seed(&mock);
    let mut ep = endpoint("x0m0", EndpointType::CabinetPduController, "x0m0.example");

    discover(&mut ep, &mock).await;

    assert_eq!(ep.disc_info.last_status, LastStatus::DiscoverOk);

    let pdu = ep.rack_pdus.get("1").expect("rack pdu discovered");
    assert_eq!(pdu.base.hms_type, Some(HmsType::CabinetPdu));
    assert_eq!(pdu.outlets.len(), 11);

    for (ordinal, id) in OUTLET_IDS.iter().enumerate() {
        let outlet = pdu.outlets.get(id).unwrap_or_else(|| panic!("outlet {id} discovered"));
        assert_eq!(outlet.base.hms_type, Some(HmsType::CabinetPduPowerConnector));
        assert_eq!(outlet.base.id, format!("x0m0v{ordinal}"));

        match *id {
            "A4" => assert_eq!(outlet.actions.action_count(), 1),
            "A5" => assert_eq!(outlet.actions.action_count(), -1),
            _ => assert_eq!(outlet.actions.action_count(), 2),
        }
    }
}
