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

//! Ordered mapping from a Redfish collection's member `Id` to a classified
//! component, preserving the vendor's `Members` order (§3 `EpCollection<T>`).

use redfish_discovery_core::ODataId;
use std::collections::HashMap;

/// An ordered collection of components, keyed by their Redfish member `Id`.
///
/// Iteration order reproduces the collection's `Members` order, which is
/// what ordinal assignment (§4.6) depends on. Lookup by key is still O(1)
/// for consumers that need to resolve a `RelatedItem`/`Links.*` back
/// reference against a sibling collection.
#[derive(Debug, Clone, Default)]
pub struct EpCollection<T> {
    odata_id: Option<ODataId>,
    order: Vec<String>,
    members: HashMap<String, T>,
}

impl<T> EpCollection<T> {
    #[must_use]
    pub fn new(odata_id: Option<ODataId>) -> Self {
        Self {
            odata_id,
            order: Vec::new(),
            members: HashMap::new(),
        }
    }

    #[must_use]
    pub fn odata_id(&self) -> Option<&ODataId> {
        self.odata_id.as_ref()
    }

    pub fn insert(&mut self, id: String, value: T) {
        if !self.members.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.members.insert(id, value);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.members.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in declared `Members` order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order.iter().map(|id| (id.as_str(), &self.members[id]))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.order.iter().map(|id| &self.members[id])
    }
}
