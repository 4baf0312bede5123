//! Calculation results handed to the presentation layer.

use super::Network;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Boundaries of a single network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    pub network_address: Ipv4Addr,
    /// None for /31 and /32, which have no host range.
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub broadcast_address: Ipv4Addr,
    pub usable_host_count: u64,
}

/// Full answer to one `calculate` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The normalized network the report describes.
    pub network: Network,
    pub network_address: Ipv4Addr,
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub broadcast_address: Ipv4Addr,
    pub usable_host_count: u64,
    /// Prefix length of every entry in `subpartitions`.
    pub subnet_prefix: u8,
    pub subpartitions: Vec<Network>,
}

impl SubnetReport {
    pub fn new(
        network: Network,
        info: SubnetInfo,
        subnet_prefix: u8,
        subpartitions: Vec<Network>,
    ) -> Self {
        SubnetReport {
            network,
            network_address: info.network_address,
            first_host: info.first_host,
            last_host: info.last_host,
            broadcast_address: info.broadcast_address,
            usable_host_count: info.usable_host_count,
            subnet_prefix,
            subpartitions,
        }
    }

    /// The boundary part of the report.
    pub fn info(&self) -> SubnetInfo {
        SubnetInfo {
            network_address: self.network_address,
            first_host: self.first_host,
            last_host: self.last_host,
            broadcast_address: self.broadcast_address,
            usable_host_count: self.usable_host_count,
        }
    }
}
