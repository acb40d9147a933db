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

//! Leaf component kinds that map 1:1 onto an HMS child type and carry no
//! further structure beyond the common [`ComponentBase`] (§4.5 "Drive,
//! Processor, Memory, EthernetInterface, NetworkAdapter, Assembly").

use crate::component::ComponentBase;

/// Built from nothing but a [`ComponentBase`] — implemented by every leaf
/// kind so the engine can walk a collection generically regardless of
/// which leaf type it's populating.
pub trait LeafComponent {
    fn from_base(base: ComponentBase) -> Self;
}

macro_rules! leaf_component {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone)]
        pub struct $name {
            pub base: ComponentBase,
        }

        impl $name {
            #[must_use]
            pub fn new(base: ComponentBase) -> Self {
                Self { base }
            }
        }

        impl LeafComponent for $name {
            fn from_base(base: ComponentBase) -> Self {
                Self::new(base)
            }
        }
    };
}

leaf_component!(Processor, "A `Processor` under a `ComputerSystem`.");
leaf_component!(Memory, "A `Memory` (DIMM) module under a `ComputerSystem`.");
leaf_component!(
    EthernetInterface,
    "An `EthernetInterface` under a `Manager` or `ComputerSystem`."
);
leaf_component!(Drive, "A `Drive` under a `Storage` collection.");
leaf_component!(NetworkAdapter, "A `NetworkAdapter` under a `Chassis`.");
leaf_component!(Assembly, "An `Assembly` under a `Chassis`.");
