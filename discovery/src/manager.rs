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

//! `Manager` — always inherits the endpoint's declared type (§4.5 "Manager
//! classification").

use crate::action::ManagerActions;
use crate::collection::EpCollection;
use crate::component::ComponentBase;
use crate::leaf::EthernetInterface;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Manager {
    pub base: ComponentBase,
    pub manager_type: Option<String>,
    pub ethernet_interfaces: EpCollection<EthernetInterface>,
    pub actions: ManagerActions,
    pub raw: Value,
}

impl Manager {
    #[must_use]
    pub fn new(base: ComponentBase, raw: Value) -> Self {
        Self {
            base,
            manager_type: None,
            ethernet_interfaces: EpCollection::new(None),
            actions: ManagerActions::default(),
            raw,
        }
    }
}
