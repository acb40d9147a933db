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

//! Discovery Engine entry point (§4.9): fetches a `ServiceRoot`, walks
//! `Managers`, `Chassis`, `Systems`, and `PowerEquipment/RackPDUs`, and runs
//! classification, ordinal/xname assignment, and action resolution over
//! whatever it finds.
//!
//! Traversal is strictly sequential — one endpoint, one discovery call, no
//! fan-out inside it (§5). Callers get parallelism by invoking [`discover`]
//! concurrently across independent [`Endpoint`] objects sharing only the
//! HTTP client pair.

use crate::action::ActionPolicy;
use crate::action::PassthroughPolicy;
use crate::action_resolver::resolve_chassis_actions;
use crate::action_resolver::resolve_manager_actions;
use crate::action_resolver::resolve_outlet_actions;
use crate::action_resolver::resolve_system_actions;
use crate::chassis::Chassis;
use crate::chassis::Outlet;
use crate::chassis::RackPdu;
use crate::classifier::chassis_is_present;
use crate::classifier::classify_chassis;
use crate::classifier::classify_manager;
use crate::classifier::classify_outlet;
use crate::classifier::classify_rack_pdu;
use crate::classifier::classify_system;
use crate::collection::EpCollection;
use crate::component::ComponentBase;
use crate::endpoint::Endpoint;
use crate::fetcher::fetch;
use crate::hms_type::HmsType;
use crate::leaf::Drive;
use crate::leaf::EthernetInterface;
use crate::leaf::LeafComponent;
use crate::leaf::Memory;
use crate::leaf::NetworkAdapter;
use crate::leaf::Processor;
use crate::manager::Manager;
use crate::power::parse_power_controls;
use crate::status::LastStatus;
use crate::system::MemorySummary;
use crate::system::ProcessorSummary;
use crate::system::Storage;
use crate::system::System;
use crate::walker::walk_collection;
use crate::walker::WalkedMember;
use crate::wire::RawChassis;
use crate::wire::RawComputerSystem;
use crate::wire::RawManager;
use crate::wire::RawOutlet;
use crate::wire::RawPower;
use crate::wire::RawPowerDistribution;
use crate::wire::RawServiceRoot;
use crate::wire::RawStorage;
use crate::xname::assign_ordinals;
use crate::xname::assign_xname;
use redfish_discovery_core::Credentials;
use redfish_discovery_core::ODataId;
use redfish_discovery_core::Transport;
use redfish_discovery_core::UrlResolver;
use std::collections::HashMap;
use time::OffsetDateTime;
use url::Url;

/// Runs discovery against `endpoint` using `transport`, with the default
/// passthrough action policy. See [`discover_with_policy`] to opt into a
/// fleet-specific policy such as [`crate::action::DedupeForceRestart`].
pub async fn discover<Tr: Transport>(endpoint: &mut Endpoint, transport: &Tr) {
    discover_with_policy(endpoint, transport, &PassthroughPolicy).await;
}

/// Runs discovery against `endpoint`, applying `action_policy` to every
/// resolved action's allowable values.
pub async fn discover_with_policy<Tr: Transport>(
    endpoint: &mut Endpoint,
    transport: &Tr,
    action_policy: &dyn ActionPolicy,
) {
    endpoint.disc_info.last_discovery_attempt = Some(OffsetDateTime::now_utc());

    let service_root_url = match Url::parse(&format!("https://{}", endpoint.fqdn)) {
        Ok(url) => url,
        Err(error) => {
            tracing::warn!(fqdn = %endpoint.fqdn, %error, "endpoint FQDN is not a valid URL host");
            endpoint.disc_info.last_status = LastStatus::UnexpectedErrorPreQuery;
            return;
        }
    };
    let resolver = UrlResolver::new(service_root_url);
    let credentials = endpoint.credentials.clone();

    let (root_status, root) =
        fetch::<RawServiceRoot, _>(transport, &resolver, &credentials, &ODataId::service_root()).await;
    let Some(root) = root else {
        tracing::warn!(endpoint = %endpoint.id, %root_status, "ServiceRoot fetch failed");
        endpoint.disc_info.last_status = root_status;
        return;
    };
    endpoint.service_root_odata_id = root.odata_id.clone();
    endpoint.num_systems = root.num_systems;

    let mut overall = LastStatus::DiscoverOk;

    match &root.managers {
        Some(managers_ref) => {
            let status = discover_managers(
                endpoint,
                transport,
                &resolver,
                &credentials,
                &managers_ref.odata_id,
                action_policy,
            )
            .await;
            note_mandatory(&mut overall, status);
        }
        None => note_mandatory(&mut overall, LastStatus::UnexpectedErrorPreQuery),
    }

    match &root.chassis {
        Some(chassis_ref) => {
            let status = discover_chassis(
                endpoint,
                transport,
                &resolver,
                &credentials,
                &chassis_ref.odata_id,
                action_policy,
            )
            .await;
            note_mandatory(&mut overall, status);
        }
        None => note_mandatory(&mut overall, LastStatus::UnexpectedErrorPreQuery),
    }

    if matches!(endpoint.endpoint_type, crate::hms_type::EndpointType::NodeBmc) {
        match &root.systems {
            Some(systems_ref) => {
                let status = discover_systems(
                    endpoint,
                    transport,
                    &resolver,
                    &credentials,
                    &systems_ref.odata_id,
                    action_policy,
                )
                .await;
                note_mandatory(&mut overall, status);
            }
            None => note_mandatory(&mut overall, LastStatus::UnexpectedErrorPreQuery),
        }
    }

    if matches!(endpoint.endpoint_type, crate::hms_type::EndpointType::CabinetPduController) {
        match root.power_equipment.as_ref().and_then(|pe| pe.rack_pdus.as_ref()) {
            Some(rack_pdus_ref) => {
                let status = discover_rack_pdus(
                    endpoint,
                    transport,
                    &resolver,
                    &credentials,
                    &rack_pdus_ref.odata_id,
                    action_policy,
                )
                .await;
                note_mandatory(&mut overall, status);
            }
            None => note_mandatory(&mut overall, LastStatus::UnexpectedErrorPreQuery),
        }
    }

    endpoint.disc_info.last_status = overall;
}

fn note_mandatory(overall: &mut LastStatus, status: LastStatus) {
    if *overall == LastStatus::DiscoverOk && status != LastStatus::DiscoverOk {
        *overall = status;
    }
}

fn next_ordinal(counters: &mut HashMap<HmsType, u32>, hms_type: HmsType) -> u32 {
    let counter = counters.entry(hms_type).or_insert(0);
    let ordinal = *counter;
    *counter += 1;
    ordinal
}

async fn discover_managers<Tr: Transport>(
    endpoint: &mut Endpoint,
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    managers_id: &ODataId,
    action_policy: &dyn ActionPolicy,
) -> LastStatus {
    let (status, members) = walk_collection(transport, resolver, credentials, managers_id).await;
    let hms_type = classify_manager(endpoint.endpoint_type);
    let mut ordinal = 0u32;

    for member in members.into_iter().filter(|m| m.status == LastStatus::DiscoverOk) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<RawManager>(value.clone()) else {
            continue;
        };

        let mut base = ComponentBase::new(member.odata_id.clone());
        base.name = raw.name.clone();
        base.description = raw.description.clone();
        base.status = raw.status.clone().into();
        base.last_status = LastStatus::DiscoverOk;
        base.redfish_subtype = raw.manager_type.clone();
        base.hms_type = Some(hms_type);
        base.ordinal = Some(ordinal);
        base.id = assign_xname(&endpoint.id, hms_type, ordinal);
        ordinal += 1;

        let mut manager = Manager::new(base, value);
        manager.manager_type = raw.manager_type.clone();
        manager.actions =
            resolve_manager_actions(transport, resolver, credentials, raw.actions.as_ref(), action_policy).await;

        if let Some(eth_ref) = &raw.ethernet_interfaces {
            manager.ethernet_interfaces = build_leaf_collection::<_, EthernetInterface>(
                transport,
                resolver,
                credentials,
                &eth_ref.odata_id,
                HmsType::EthernetInterface,
                &endpoint.id,
                &member.odata_id,
                hms_type,
            )
            .await;
        }

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        endpoint.managers.insert(key, manager);
    }

    status
}

async fn discover_chassis<Tr: Transport>(
    endpoint: &mut Endpoint,
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    chassis_id: &ODataId,
    action_policy: &dyn ActionPolicy,
) -> LastStatus {
    let (status, members) = walk_collection(transport, resolver, credentials, chassis_id).await;
    let mut counters: HashMap<HmsType, u32> = HashMap::new();
    let is_pdu_endpoint = matches!(endpoint.endpoint_type, crate::hms_type::EndpointType::CabinetPduController);

    for member in members.into_iter().filter(|m| m.status == LastStatus::DiscoverOk) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<RawChassis>(value.clone()) else {
            continue;
        };
        let Some(hms_type) = classify_chassis(endpoint.endpoint_type, &raw) else {
            continue;
        };
        let ordinal = next_ordinal(&mut counters, hms_type);

        let mut base = ComponentBase::new(member.odata_id.clone());
        base.name = raw.name.clone();
        base.description = raw.description.clone();
        base.status = raw.status.clone().into();
        base.last_status = LastStatus::DiscoverOk;
        base.redfish_subtype = raw.chassis_type.clone();
        base.hms_type = Some(hms_type);
        base.ordinal = Some(ordinal);
        base.id = assign_xname(&endpoint.id, hms_type, ordinal);

        let mut chassis = Chassis::new(base, value);
        chassis.chassis_type = raw.chassis_type.clone();
        chassis.power_state = raw.power_state.clone();
        chassis.present = chassis_is_present(raw.power_state.as_deref(), raw.status.as_ref().and_then(|s| s.state.as_deref()));
        chassis.actions =
            resolve_chassis_actions(transport, resolver, credentials, raw.actions.as_ref(), action_policy).await;

        if !is_pdu_endpoint {
            if let Some(power_ref) = &raw.power {
                chassis.power_url = Some(power_ref.odata_id.clone());
                let (power_status, power) =
                    fetch::<RawPower, _>(transport, resolver, credentials, &power_ref.odata_id).await;
                if power_status == LastStatus::DiscoverOk {
                    if let Some(power) = power {
                        chassis.power_ctl = parse_power_controls(power);
                    }
                }
            }
            if let Some(na_ref) = &raw.network_adapters {
                chassis.network_adapters = build_leaf_collection::<_, NetworkAdapter>(
                    transport,
                    resolver,
                    credentials,
                    &na_ref.odata_id,
                    HmsType::NetworkAdapter,
                    &endpoint.id,
                    &member.odata_id,
                    hms_type,
                )
                .await;
            }
            if let Some(assembly_ref) = &raw.assembly {
                chassis.assembly = build_leaf_collection::<_, crate::leaf::Assembly>(
                    transport,
                    resolver,
                    credentials,
                    &assembly_ref.odata_id,
                    HmsType::Assembly,
                    &endpoint.id,
                    &member.odata_id,
                    hms_type,
                )
                .await;
            }
        }

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        endpoint.chassis.insert(key, chassis);
    }

    status
}

async fn discover_systems<Tr: Transport>(
    endpoint: &mut Endpoint,
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    systems_id: &ODataId,
    action_policy: &dyn ActionPolicy,
) -> LastStatus {
    let (status, members) = walk_collection(transport, resolver, credentials, systems_id).await;
    let Some(hms_type) = classify_system(endpoint.endpoint_type) else {
        return status;
    };
    let mut ordinal = 0u32;

    for member in members.into_iter().filter(|m| m.status == LastStatus::DiscoverOk) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<RawComputerSystem>(value.clone()) else {
            continue;
        };

        let mut base = ComponentBase::new(member.odata_id.clone());
        base.name = raw.name.clone();
        base.description = raw.description.clone();
        base.status = raw.status.clone().into();
        base.last_status = LastStatus::DiscoverOk;
        base.hms_type = Some(hms_type);
        base.ordinal = Some(ordinal);
        base.id = assign_xname(&endpoint.id, hms_type, ordinal);
        ordinal += 1;

        let mut system = System::new(base, value);
        system.processor_summary = ProcessorSummary {
            count: raw.processor_summary.as_ref().and_then(|p| p.count),
            model: raw.processor_summary.as_ref().and_then(|p| p.model.clone()),
        };
        system.memory_summary = MemorySummary {
            total_system_memory_gib: raw.memory_summary.as_ref().and_then(|m| m.total_system_memory_gi_b),
        };
        if let Some(boot) = &raw.boot {
            system.boot_source_override_allowable_values = boot.boot_source_override_target_allowable_values.clone();
        }
        system.actions =
            resolve_system_actions(transport, resolver, credentials, raw.actions.as_ref(), action_policy).await;

        if let Some(processors_ref) = &raw.processors {
            system.processors = build_leaf_collection::<_, Processor>(
                transport,
                resolver,
                credentials,
                &processors_ref.odata_id,
                HmsType::Processor,
                &endpoint.id,
                &system.base.odata_id,
                hms_type,
            )
            .await;
        }
        if let Some(memory_ref) = &raw.memory {
            system.memory = build_leaf_collection::<_, Memory>(
                transport,
                resolver,
                credentials,
                &memory_ref.odata_id,
                HmsType::Memory,
                &endpoint.id,
                &system.base.odata_id,
                hms_type,
            )
            .await;
        }
        if let Some(eth_ref) = &raw.ethernet_interfaces {
            system.ethernet_interfaces = build_leaf_collection::<_, EthernetInterface>(
                transport,
                resolver,
                credentials,
                &eth_ref.odata_id,
                HmsType::EthernetInterface,
                &endpoint.id,
                &system.base.odata_id,
                hms_type,
            )
            .await;
        }
        if let Some(storage_ref) = &raw.storage {
            system.storage = build_storage_collection(
                transport,
                resolver,
                credentials,
                &storage_ref.odata_id,
                &endpoint.id,
                &system.base.odata_id,
                hms_type,
            )
            .await;
        }

        if let Some(chassis_link) = raw.links.chassis.first() {
            if let Some(owning) = endpoint.chassis.values().find(|c| c.base.odata_id == chassis_link.odata_id) {
                system.power_ctl = owning.power_ctl.clone();
                system.power_url = owning.power_url.clone();
            }
        }

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        endpoint.systems.insert(key, system);
    }

    status
}

async fn discover_rack_pdus<Tr: Transport>(
    endpoint: &mut Endpoint,
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    rack_pdus_id: &ODataId,
    action_policy: &dyn ActionPolicy,
) -> LastStatus {
    let (status, members) = walk_collection(transport, resolver, credentials, rack_pdus_id).await;
    let hms_type = classify_rack_pdu();
    let mut ordinal = 0u32;

    for member in members.into_iter().filter(|m| m.status == LastStatus::DiscoverOk) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<RawPowerDistribution>(value) else {
            continue;
        };

        let mut base = ComponentBase::new(member.odata_id.clone());
        base.name = raw.name.clone();
        base.status = raw.status.clone().into();
        base.last_status = LastStatus::DiscoverOk;
        base.hms_type = Some(hms_type);
        base.ordinal = Some(ordinal);
        base.id = assign_xname(&endpoint.id, hms_type, ordinal);
        ordinal += 1;

        let mut rack_pdu = RackPdu::new(base);
        rack_pdu.equipment_type = raw.equipment_type.clone();

        if let Some(outlets_ref) = &raw.outlets {
            rack_pdu.outlets = discover_outlets(
                transport,
                resolver,
                credentials,
                &outlets_ref.odata_id,
                &endpoint.id,
                &member.odata_id,
                action_policy,
            )
            .await;
        }

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        endpoint.rack_pdus.insert(key, rack_pdu);
    }

    status
}

async fn discover_outlets<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    outlets_id: &ODataId,
    endpoint_base: &str,
    parent_odata_id: &ODataId,
    action_policy: &dyn ActionPolicy,
) -> EpCollection<Outlet> {
    let (_, members) = walk_collection(transport, resolver, credentials, outlets_id).await;
    let hms_type = classify_outlet();
    let mut collection = EpCollection::new(Some(outlets_id.clone()));

    for (ordinal, member) in assign_ordinals(members.into_iter().filter(|m: &WalkedMember| m.status == LastStatus::DiscoverOk)) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<RawOutlet>(value) else {
            continue;
        };

        let mut base = ComponentBase::new(member.odata_id.clone());
        base.name = raw.name.clone();
        base.status = raw.status.clone().into();
        base.last_status = LastStatus::DiscoverOk;
        base.hms_type = Some(hms_type);
        base.ordinal = Some(ordinal);
        base.id = assign_xname(endpoint_base, hms_type, ordinal);
        base.parent_odata_id = Some(parent_odata_id.clone());

        let mut outlet = Outlet::new(base);
        outlet.actions =
            resolve_outlet_actions(transport, resolver, credentials, raw.actions.as_ref(), action_policy).await;

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        collection.insert(key, outlet);
    }

    collection
}

#[allow(clippy::too_many_arguments)]
async fn build_leaf_collection<Tr: Transport, T: LeafComponent>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    collection_id: &ODataId,
    hms_type: HmsType,
    endpoint_base: &str,
    parent_odata_id: &ODataId,
    parent_type: HmsType,
) -> EpCollection<T> {
    let (_, members) = walk_collection(transport, resolver, credentials, collection_id).await;
    let mut collection = EpCollection::new(Some(collection_id.clone()));

    for (ordinal, member) in assign_ordinals(members.into_iter().filter(|m: &WalkedMember| m.status == LastStatus::DiscoverOk)) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<crate::wire::RawLeafResource>(value) else {
            continue;
        };

        let mut base = ComponentBase::new(member.odata_id.clone());
        base.name = raw.name.clone();
        base.description = raw.description.clone();
        base.status = raw.status.clone().into();
        base.last_status = LastStatus::DiscoverOk;
        base.hms_type = Some(hms_type);
        base.ordinal = Some(ordinal);
        base.id = assign_xname(endpoint_base, hms_type, ordinal);
        base.parent_odata_id = Some(parent_odata_id.clone());
        base.parent_type = Some(parent_type);

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        collection.insert(key, T::from_base(base));
    }

    collection
}

#[allow(clippy::too_many_arguments)]
async fn build_storage_collection<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    storage_id: &ODataId,
    endpoint_base: &str,
    parent_odata_id: &ODataId,
    parent_type: HmsType,
) -> EpCollection<Storage> {
    let (_, members) = walk_collection(transport, resolver, credentials, storage_id).await;
    let mut collection = EpCollection::new(Some(storage_id.clone()));

    for member in members.into_iter().filter(|m| m.status == LastStatus::DiscoverOk) {
        let Some(value) = member.value.clone() else { continue };
        let Ok(raw) = serde_json::from_value::<RawStorage>(value) else {
            continue;
        };

        let base = ComponentBase::new(member.odata_id.clone());
        let mut storage = Storage {
            base,
            drives: EpCollection::new(None),
        };

        for (ordinal, drive_ref) in assign_ordinals(raw.drives) {
            let (drive_status, drive_value) =
                fetch::<crate::wire::RawLeafResource, _>(transport, resolver, credentials, &drive_ref.odata_id).await;
            if drive_status != LastStatus::DiscoverOk {
                continue;
            }
            let Some(drive_raw) = drive_value else { continue };

            let mut drive_base = ComponentBase::new(drive_ref.odata_id.clone());
            drive_base.name = drive_raw.name.clone();
            drive_base.description = drive_raw.description.clone();
            drive_base.status = drive_raw.status.clone().into();
            drive_base.last_status = LastStatus::DiscoverOk;
            drive_base.hms_type = Some(HmsType::Drive);
            drive_base.ordinal = Some(ordinal);
            drive_base.id = assign_xname(endpoint_base, HmsType::Drive, ordinal);
            drive_base.parent_odata_id = Some(member.odata_id.clone());
            drive_base.parent_type = Some(parent_type);

            let key = drive_raw.id.clone().unwrap_or_else(|| drive_ref.odata_id.as_str().to_string());
            storage.drives.insert(key, Drive::from_base(drive_base));
        }

        let key = raw.id.clone().unwrap_or_else(|| member.odata_id.as_str().to_string());
        collection.insert(key, storage);
    }

    collection
}
