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

//! Transport-agnostic primitives shared by the Redfish discovery core.
//!
//! This crate has no opinion about how a GET is actually performed — see
//! `redfish-discovery-http` for the reqwest-backed implementation and
//! `redfish-discovery-mock` for the test double. It only defines the shapes
//! everything else agrees on: [`ODataId`], [`UrlResolver`], [`Credentials`],
//! the process-wide [`timeout`], and the [`Transport`] trait.

pub mod credentials;
pub mod odata;
pub mod timeout;
pub mod transport;

#[doc(inline)]
pub use credentials::Credentials;
#[doc(inline)]
pub use odata::odata_id_from_value;
#[doc(inline)]
pub use odata::ODataId;
#[doc(inline)]
pub use odata::UrlResolver;
#[doc(inline)]
pub use transport::RawResponse;
#[doc(inline)]
pub use transport::Transport;
