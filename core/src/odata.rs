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

//! OData identifiers and the URL resolver that turns them into requests.
//!
//! [`ODataId`] wraps the raw `@odata.id` string exactly as it appeared on the
//! wire. Two `ODataId`s compare and hash equal when they differ only by a
//! trailing slash, but [`ODataId::as_str`] and `Display` always return the
//! original string — the wire form is never rewritten.
//!
//! [`UrlResolver`] is the only place that concatenates an endpoint's
//! `ServiceRootURL` with a sub-path; everything else in this crate goes
//! through it rather than building URLs by hand.

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use core::hash::Hash;
use core::hash::Hasher;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

/// Value of a Redfish `@odata.id` field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// The conventional Redfish service root path.
    #[must_use]
    pub fn service_root() -> Self {
        Self("/redfish/v1".into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form used for equality and hashing: trailing slash stripped.
    fn normalized(&self) -> &str {
        self.0.strip_suffix('/').unwrap_or(&self.0)
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ODataId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl PartialEq for ODataId {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for ODataId {}

impl PartialOrd for ODataId {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ODataId {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.normalized().cmp(other.normalized())
    }
}

impl Hash for ODataId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

/// Extracts an `@odata.id` string from any of the shapes Redfish uses to
/// reference a resource: a bare `ODataId`, a `{"@odata.id": "..."}` object,
/// or a plain string.
#[must_use]
pub fn odata_id_from_value(v: &serde_json::Value) -> Option<ODataId> {
    if let Some(s) = v.as_str() {
        return Some(ODataId::from(s));
    }
    v.get("@odata.id")
        .and_then(serde_json::Value::as_str)
        .map(ODataId::from)
}

/// Resolves `@odata.id` references against an endpoint's service root URL.
///
/// Accepts absolute URLs, root-relative paths (`/redfish/v1/...`), or bare
/// `ODataId`s produced by [`odata_id_from_value`]. The only thing this type
/// does is string/URL concatenation — it never issues requests.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    service_root_url: Url,
}

impl UrlResolver {
    #[must_use]
    pub const fn new(service_root_url: Url) -> Self {
        Self { service_root_url }
    }

    #[must_use]
    pub fn service_root_url(&self) -> &Url {
        &self.service_root_url
    }

    /// Resolve an [`ODataId`] into a fetchable [`Url`].
    ///
    /// If `id` parses as an absolute URL on its own, it is used as-is
    /// (handles vendors that return fully-qualified `@odata.id` values).
    /// Otherwise it is treated as a path relative to the service root's
    /// scheme+host and joined onto it.
    #[must_use]
    pub fn resolve(&self, id: &ODataId) -> Url {
        if let Ok(absolute) = Url::parse(id.as_str()) {
            return absolute;
        }
        let mut url = self.service_root_url.clone();
        url.set_path(id.as_str());
        url.set_query(None);
        url
    }
}
