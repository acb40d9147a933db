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

//! Process-wide HTTP request timeout.
//!
//! Every discovery-bound HTTP client in this workspace reads its per-request
//! timeout from here rather than owning its own. This is legitimate
//! module-level state: the setter ignores non-positive input so readers
//! always observe a positive value, and updates are serialized by normal
//! atomic semantics.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

static TIMEOUT_SECS: AtomicU64 = AtomicU64::new(DEFAULT_TIMEOUT_SECS);

/// Set the shared HTTP client timeout, in seconds.
///
/// Values `<= 0` are silently ignored and the previous value is retained.
pub fn set_http_client_timeout(seconds: i64) {
    if seconds <= 0 {
        tracing::warn!(seconds, "ignoring non-positive HTTP client timeout");
        return;
    }
    TIMEOUT_SECS.store(seconds as u64, Ordering::SeqCst);
}

/// Read the shared HTTP client timeout, in seconds.
#[must_use]
pub fn get_http_client_timeout() -> u64 {
    TIMEOUT_SECS.load(Ordering::SeqCst)
}
