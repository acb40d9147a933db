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

//! URL-keyed canned-response transport double.
//!
//! Grounded on `bmc-mock`'s queue-of-expectations `Bmc<E>` double, but
//! simplified to match §6's test-double protocol: a request URL maps to a
//! canned `{status, body}` pair, and an unmapped URL yields a 404 with an
//! empty body rather than panicking the test. Responses are keyed by the
//! request's path (the mock is always addressed at one fixed fake host), and
//! each path holds a FIFO queue so a test can script a sequence of
//! responses to the same URL (e.g. an initial GET followed by a refresh).
//!
//! GET requests carry no body, so there is nothing to drain on this side;
//! the draining requirement in the wire protocol's test-double contract
//! applies to the transport's handling of the *response* body, which
//! [`MockTransport::get`] always fully consumes into a `Vec<u8>`.

use redfish_discovery_core::Credentials;
use redfish_discovery_core::RawResponse;
use redfish_discovery_core::Transport;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::Mutex;
use url::Url;

/// Canned-response transport double, keyed by request path.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<RawResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response for `path`. Multiple calls for the same path
    /// queue multiple responses, served in call order.
    pub fn set_json(&self, path: &str, status: u16, body: &serde_json::Value) {
        self.set_raw(path, status, serde_json::to_vec(body).expect("json serializable"));
    }

    /// Queue a raw-body response for `path`.
    pub fn set_raw(&self, path: &str, status: u16, body: Vec<u8>) {
        self.responses
            .lock()
            .expect("not poisoned")
            .entry(path.to_string())
            .or_default()
            .push_back(RawResponse { status, body });
    }

    /// Queue a 404-with-empty-body response for `path` (a deliberately dead
    /// link inside a `Members` array, for example).
    pub fn set_not_found(&self, path: &str) {
        self.set_raw(path, 404, Vec::new());
    }

    /// Every path this mock was asked to GET, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("not poisoned").clone()
    }
}

impl Transport for MockTransport {
    type Error = Infallible;

    async fn get(&self, url: &Url, _credentials: &Credentials) -> Result<RawResponse, Self::Error> {
        let path = url.path().to_string();
        self.calls.lock().expect("not poisoned").push(path.clone());

        let mut responses = self.responses.lock().expect("not poisoned");
        let queued = responses.get_mut(&path).and_then(VecDeque::pop_front);
        Ok(queued.unwrap_or(RawResponse {
            status: 404,
            body: Vec::new(),
        }))
    }
}
