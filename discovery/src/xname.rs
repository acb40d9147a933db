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

//! Ordinal & Xname Assigner (§4.6).
//!
//! Ordinals are assigned purely from a collection's already-fetched
//! `Members` order; an unstable vendor ordering across discoveries is the
//! vendor's bug, not something this layer repairs (§4.6 "Tie-breaks").

use crate::hms_type::HmsType;

/// Appends the HMS-type-specific suffix, parameterized by `ordinal`, to the
/// endpoint's own xname base. E.g. `x0c0s16b0` + `Node` ordinal `0` →
/// `x0c0s16b0n0`.
#[must_use]
pub fn assign_xname(endpoint_base: &str, hms_type: HmsType, ordinal: u32) -> String {
    format!("{endpoint_base}{}", hms_type.xname_suffix(ordinal))
}

/// Assigns zero-based ordinals to items in iteration order. The input
/// iterator's order must already reproduce the collection's declared
/// `Members` order — this function only numbers it.
pub fn assign_ordinals<T>(items: impl IntoIterator<Item = T>) -> impl Iterator<Item = (u32, T)> {
    items.into_iter().enumerate().map(|(i, item)| (i as u32, item))
}
