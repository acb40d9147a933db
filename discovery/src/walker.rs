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

//! Collection Walker (§4.4): fetches a collection, then each of its
//! members in declared order, tolerating dead links along the way.

use crate::fetcher::fetch;
use crate::status::LastStatus;
use crate::wire::RawCollection;
use redfish_discovery_core::Credentials;
use redfish_discovery_core::ODataId;
use redfish_discovery_core::Transport;
use redfish_discovery_core::UrlResolver;
use serde_json::Value;

/// One member of a walked collection, with its own fetch outcome. A dead
/// link (`status != DiscoverOk`) does not abort the walk and does not
/// affect any sibling's status (§8 property 5).
pub struct WalkedMember {
    pub odata_id: ODataId,
    pub status: LastStatus,
    pub value: Option<Value>,
}

/// Fetches the collection at `collection_id`, then fetches every member
/// listed in its `Members` array, in order. The returned `LastStatus` is
/// the collection fetch's own outcome; a non-`DiscoverOk` collection fetch
/// yields no members at all, since there is nothing to iterate.
pub async fn walk_collection<Tr: Transport>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    collection_id: &ODataId,
) -> (LastStatus, Vec<WalkedMember>) {
    let (status, collection) = fetch::<RawCollection, _>(transport, resolver, credentials, collection_id).await;
    let Some(collection) = collection else {
        return (status, Vec::new());
    };

    let mut members = Vec::with_capacity(collection.members.len());
    for member_ref in collection.members {
        let (member_status, value) = fetch::<Value, _>(transport, resolver, credentials, &member_ref.odata_id).await;
        if member_status != LastStatus::DiscoverOk {
            tracing::warn!(odata_id = %member_ref.odata_id, %member_status, "dead link in collection Members, skipping");
        }
        members.push(WalkedMember {
            odata_id: member_ref.odata_id,
            status: member_status,
            value,
        });
    }

    (status, members)
}
