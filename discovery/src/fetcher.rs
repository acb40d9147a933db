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

//! Resource Fetcher (§4.2): issues one GET through a [`Transport`], and
//! classifies the outcome into a [`LastStatus`] rather than a `Result`,
//! since a failed fetch is recorded on the resource, not propagated as an
//! error that would abort a sibling's traversal (§4.4).

use crate::status::LastStatus;
use redfish_discovery_core::Credentials;
use redfish_discovery_core::ODataId;
use redfish_discovery_core::Transport;
use redfish_discovery_core::UrlResolver;
use serde::de::DeserializeOwned;

/// Resolves `id`, issues a GET, and decodes the body as `T`.
///
/// Whether a non-`DiscoverOk` status here is fatal (as it is for a
/// `ServiceRoot` or a mandatory top-level collection) or merely recorded on
/// a leaf resource is a policy decision left to the caller (§4.2, §4.4) —
/// this function only classifies the outcome.
pub async fn fetch<T, Tr>(
    transport: &Tr,
    resolver: &UrlResolver,
    credentials: &Credentials,
    id: &ODataId,
) -> (LastStatus, Option<T>)
where
    T: DeserializeOwned,
    Tr: Transport,
{
    let url = resolver.resolve(id);

    let response = match transport.get(&url, credentials).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(%url, %error, "transport error fetching resource");
            return (LastStatus::HttpsGetFailed, None);
        }
    };

    if response.status >= 400 {
        tracing::warn!(%url, status = response.status, "GET returned failure status");
        return (LastStatus::HttpsGetFailed, None);
    }

    if response.is_empty_body() {
        tracing::warn!(%url, "GET returned an empty body");
        return (LastStatus::HttpsGetNoResponse, None);
    }

    match serde_json::from_slice::<T>(&response.body) {
        Ok(value) => (LastStatus::DiscoverOk, Some(value)),
        Err(error) => {
            tracing::warn!(%url, %error, "failed to decode response body");
            (LastStatus::UnexpectedErrorPreQuery, None)
        }
    }
}
