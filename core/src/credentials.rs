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

//! BMC credentials, with the password redacted from `Debug`/`Display`.

use core::fmt;

/// Wrapper that always prints as `***` regardless of the contained value.
#[derive(Clone)]
struct Redacted<T>(T);

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// HTTP Basic auth credentials for a BMC.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    password: Redacted<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: Redacted(password),
        }
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password.0
    }
}
