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

//! The fleet's component-type enumeration and the xname suffix each type
//! contributes relative to its endpoint's own xname base.

use std::fmt;
use std::str::FromStr;

/// The declared role of a managed controller, set by the caller at endpoint
/// construction and used as the primary hint by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointType {
    NodeBmc,
    ChassisBmc,
    RouterBmc,
    CabinetPduController,
}

impl EndpointType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NodeBmc => "NodeBMC",
            Self::ChassisBmc => "ChassisBMC",
            Self::RouterBmc => "RouterBMC",
            Self::CabinetPduController => "CabinetPDUController",
        }
    }
}

impl fmt::Display for EndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointType {
    type Err = UnknownEndpointType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NodeBMC" => Ok(Self::NodeBmc),
            "ChassisBMC" => Ok(Self::ChassisBmc),
            "RouterBMC" => Ok(Self::RouterBmc),
            "CabinetPDUController" => Ok(Self::CabinetPduController),
            other => Err(UnknownEndpointType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized endpoint type: {0}")]
pub struct UnknownEndpointType(pub String);

/// Fleet HMS component type, assigned by the classifier (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmsType {
    Node,
    NodeBmc,
    ChassisBmc,
    RouterBmc,
    CabinetPduController,
    NodeEnclosure,
    Chassis,
    ComputeModule,
    RouterModule,
    CabinetPdu,
    CabinetPduPowerConnector,
    HsnBoard,
    Processor,
    Memory,
    EthernetInterface,
    Drive,
    NetworkAdapter,
    Assembly,
}

impl HmsType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::NodeBmc => "NodeBMC",
            Self::ChassisBmc => "ChassisBMC",
            Self::RouterBmc => "RouterBMC",
            Self::CabinetPduController => "CabinetPDUController",
            Self::NodeEnclosure => "NodeEnclosure",
            Self::Chassis => "Chassis",
            Self::ComputeModule => "ComputeModule",
            Self::RouterModule => "RouterModule",
            Self::CabinetPdu => "CabinetPDU",
            Self::CabinetPduPowerConnector => "CabinetPDUPowerConnector",
            Self::HsnBoard => "HSNBoard",
            Self::Processor => "Processor",
            Self::Memory => "Memory",
            Self::EthernetInterface => "EthernetInterface",
            Self::Drive => "Drive",
            Self::NetworkAdapter => "NetworkAdapter",
            Self::Assembly => "Assembly",
        }
    }

    /// The suffix this type contributes to an xname, given its ordinal
    /// within its parent collection. Types that occur exactly once per
    /// endpoint (the enclosure types, the PDU itself) contribute no suffix:
    /// their xname is the endpoint's own base.
    #[must_use]
    pub fn xname_suffix(self, ordinal: u32) -> String {
        match self {
            Self::Node => format!("n{ordinal}"),
            Self::ComputeModule => format!("s{ordinal}"),
            Self::RouterModule => format!("r{ordinal}"),
            Self::CabinetPduPowerConnector => format!("v{ordinal}"),
            Self::Processor => format!("p{ordinal}"),
            Self::Memory => format!("d{ordinal}"),
            Self::Drive => format!("g{ordinal}"),
            Self::NetworkAdapter => format!("i{ordinal}"),
            Self::EthernetInterface => format!("i{ordinal}n{ordinal}"),
            Self::Assembly => format!("a{ordinal}"),
            Self::NodeBmc
            | Self::ChassisBmc
            | Self::RouterBmc
            | Self::CabinetPduController
            | Self::NodeEnclosure
            | Self::Chassis
            | Self::CabinetPdu
            | Self::HsnBoard => String::new(),
        }
    }
}

impl fmt::Display for HmsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
