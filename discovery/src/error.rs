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

//! Errors raised while building an [`crate::endpoint::Endpoint`] from an
//! [`crate::config::EndpointConfig`].
//!
//! The discovery walk itself never returns `Result`: a failed fetch is
//! recorded as a [`crate::status::LastStatus`] on the endpoint rather than
//! aborting the caller's task (§4.2, §5). This error type covers only the
//! constructor-time validation that happens before any network I/O.

use crate::hms_type::UnknownEndpointType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("endpoint id must not be empty")]
    EmptyId,

    #[error("endpoint fqdn must not be empty")]
    EmptyFqdn,

    #[error("endpoint username must not be empty")]
    EmptyUsername,

    #[error("unrecognized endpoint type: {0}")]
    UnknownEndpointType(#[from] UnknownEndpointType),
}
