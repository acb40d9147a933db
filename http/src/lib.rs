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

//! reqwest-backed implementation of [`redfish_discovery_core::Transport`].
//!
//! BMC certificates are routinely self-signed, so [`HttpClientPair::insecure`]
//! is the variant this workspace's discovery engine actually talks to; the
//! [`HttpClientPair::verified`] client is kept for callers that terminate TLS
//! at a proxy with a real certificate chain. Both clients read the shared
//! per-request timeout from `redfish_discovery_core::timeout` on every call,
//! so updating it takes effect on the next request without rebuilding the
//! client.

use redfish_discovery_core::timeout::get_http_client_timeout;
use redfish_discovery_core::Credentials;
use redfish_discovery_core::RawResponse;
use redfish_discovery_core::Transport;
use std::time::Duration;
use url::Url;

/// Errors a [`ReqwestTransport`] can produce.
#[derive(Debug, thiserror::Error)]
pub enum ReqwestTransportError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// A single GET-only HTTP client backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    fn build(accept_invalid_certs: bool) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .user_agent(concat!("redfish-discovery/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    type Error = ReqwestTransportError;

    async fn get(&self, url: &Url, credentials: &Credentials) -> Result<RawResponse, Self::Error> {
        let timeout = Duration::from_secs(get_http_client_timeout());
        let request = self
            .client
            .get(url.clone())
            .basic_auth(&credentials.username, Some(credentials.password()));

        let response = tokio::time::timeout(timeout, request.send())
            .await
            .map_err(|_elapsed| ReqwestTransportError::Timeout)??;

        let status = response.status().as_u16();
        tracing::debug!(%url, status, "GET complete");
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

/// The `{Insecure, Verified}` client pair consumed by the discovery engine.
///
/// `insecure` skips certificate verification (the common case for BMC
/// traffic); `verified` performs normal certificate-chain validation.
pub struct HttpClientPair {
    pub insecure: ReqwestTransport,
    pub verified: ReqwestTransport,
}

impl HttpClientPair {
    /// Build a fresh client pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest::Client` fails to build
    /// (e.g. the platform's TLS backend cannot be initialized).
    pub fn new() -> reqwest::Result<Self> {
        Ok(Self {
            insecure: ReqwestTransport::build(true)?,
            verified: ReqwestTransport::build(false)?,
        })
    }
}
