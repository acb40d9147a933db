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

//! Per-resource and per-endpoint discovery outcome (§4.2, §6, §7).

use std::fmt;

/// The outcome of fetching and decoding one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LastStatus {
    #[default]
    NotYetQueried,
    DiscoverOk,
    HttpsGetFailed,
    HttpsGetNoResponse,
    UnexpectedErrorPreQuery,
}

impl LastStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotYetQueried => "NotYetQueried",
            Self::DiscoverOk => "DiscoverOK",
            Self::HttpsGetFailed => "HTTPsGetFailed",
            Self::HttpsGetNoResponse => "HTTPsGetNoResponse",
            Self::UnexpectedErrorPreQuery => "UnexpectedErrorPreQuery",
        }
    }
}

impl fmt::Display for LastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
