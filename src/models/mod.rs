//! Domain models for the subnet calculator.
//!
//! This module contains the value types used throughout the crate:
//! - [`Network`] - IPv4 network with CIDR notation support
//! - [`SubnetInfo`] and [`SubnetReport`] - calculation results

mod ipv4;
mod report;

// Re-export public types
pub use ipv4::{cut_addr, get_cidr_mask, host_mask, ip_after_subnet, Network, MAX_LENGTH};
pub use report::{SubnetInfo, SubnetReport};
