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

//! Transport trait implemented by the HTTP client pair (§4.1) and by the
//! test-double mock transport.
//!
//! The discovery engine only ever needs one operation from a transport: GET
//! a URL and get back a status code and a raw body. Everything above that —
//! mapping to `LastStatus`, JSON decoding — is the Resource Fetcher's job
//! (`redfish-discovery::fetch`), not the transport's.

use std::error::Error as StdError;
use std::future::Future;
use url::Url;

use crate::Credentials;

/// Raw result of an HTTP GET: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn is_empty_body(&self) -> bool {
        self.body.is_empty()
    }
}

/// Minimal GET-only transport used by the discovery engine.
///
/// Implementors must never panic on a closed or empty body, and must fully
/// drain the response body on every path (success, non-2xx, and decode
/// failure) so connections are returned to any pool cleanly.
pub trait Transport: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    /// Issue an HTTP GET with HTTP Basic authentication.
    ///
    /// Returns `Err` only for transport-level failures (DNS, connect,
    /// timeout, TLS). A non-2xx HTTP response is a normal `Ok(RawResponse)`
    /// — the caller classifies it.
    fn get(
        &self,
        url: &Url,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;
}
