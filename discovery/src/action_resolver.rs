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

//! Ties inline action extraction ([`crate::action`]) to `@Redfish.ActionInfo`
//! indirection, per component kind (§4.7).

use crate::action::action_info_allowable_values;
use crate::action::extract_inline_action;
use crate::action::Action;
use crate::action::ActionPolicy;
use crate::action::ChassisActions;
use crate::action::ManagerActions;
use crate::action::OutletActions;
use crate::action::SystemActions;
use crate::fetcher::fetch;
use crate::status::LastStatus;
use crate::wire::RawActionInfo;
use redfish_discovery_core::Credentials;
use redfish_discovery_core::Transport;
use redfish_discovery_core::UrlResolver;
use serde_json::Value;

const RESET_TYPE_ALLOWABLE_VALUES: &str = "ResetType@Redfish.AllowableValues";
const POWER_STATE_ALLOWABLE_VALUES: &str = "PowerState@Redfish.AllowableValues";

/// Resolves a single action: reads it inline, then — if it carries an
/// `@Redfish.ActionInfo` pointer — fetches that resource and lets its
/// values win over the inline ones (§4.7 step 3).
async fn resolve_action<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    actions: Option<&Value>,
    action_key: &str,
    parameter_name: &str,
    allowable_values_key: &str,
    policy: &dyn ActionPolicy,
) -> Option<Action> {
    let inline = extract_inline_action(actions, action_key, allowable_values_key)?;
    let mut allowable_values = inline.allowable_values;

    if let Some(action_info_ref) = &inline.action_info_ref {
        let (status, info) = fetch::<RawActionInfo, _>(transport, resolver, credentials, action_info_ref).await;
        match (status, info) {
            (LastStatus::DiscoverOk, Some(info)) => {
                if let Some(values) = action_info_allowable_values(&info, parameter_name) {
                    allowable_values = values;
                }
            }
            (status, _) => {
                tracing::warn!(%action_info_ref, %status, "ActionInfo resolution failed, keeping inline values");
            }
        }
    }

    Some(Action {
        target: inline.target,
        allowable_values: policy.apply(allowable_values),
    })
}

pub async fn resolve_system_actions<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    actions: Option<&Value>,
    policy: &dyn ActionPolicy,
) -> SystemActions {
    let reset = resolve_action(
        transport,
        resolver,
        credentials,
        actions,
        "#ComputerSystem.Reset",
        "ResetType",
        RESET_TYPE_ALLOWABLE_VALUES,
        policy,
    )
    .await;
    SystemActions { reset }
}

pub async fn resolve_manager_actions<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    actions: Option<&Value>,
    policy: &dyn ActionPolicy,
) -> ManagerActions {
    let reset = resolve_action(
        transport,
        resolver,
        credentials,
        actions,
        "#Manager.Reset",
        "ResetType",
        RESET_TYPE_ALLOWABLE_VALUES,
        policy,
    )
    .await;
    ManagerActions { reset }
}

pub async fn resolve_chassis_actions<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    actions: Option<&Value>,
    policy: &dyn ActionPolicy,
) -> ChassisActions {
    let reset = resolve_action(
        transport,
        resolver,
        credentials,
        actions,
        "#Chassis.Reset",
        "ResetType",
        RESET_TYPE_ALLOWABLE_VALUES,
        policy,
    )
    .await;
    ChassisActions { reset }
}

pub async fn resolve_outlet_actions<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    actions: Option<&Value>,
    policy: &dyn ActionPolicy,
) -> OutletActions {
    let power_control = resolve_action(
        transport,
        resolver,
        credentials,
        actions,
        "#Outlet.PowerControl",
        "PowerState",
        POWER_STATE_ALLOWABLE_VALUES,
        policy,
    )
    .await;
    let reset_statistics = resolve_action(
        transport,
        resolver,
        credentials,
        actions,
        "#Outlet.ResetStatistics",
        "",
        "",
        policy,
    )
    .await;
    OutletActions {
        power_control,
        reset_statistics,
    }
}
