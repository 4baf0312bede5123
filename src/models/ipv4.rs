//! IPv4 network and CIDR mask utilities.
//!
//! Provides [`Network`] for an address/prefix pair normalized to its network
//! address, along with the bit helpers the calculations are built on.

use crate::error::{CalculationError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(CalculationError::invalid("prefix", &len.to_string()))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Bits that address hosts inside a network of the given length.
///
/// # Examples
/// ```
/// use subnet_calculator::models::host_mask;
/// assert_eq!(host_mask(24).unwrap(), 0x000000FF);
/// assert_eq!(host_mask(32).unwrap(), 0);
/// ```
pub fn host_mask(len: u8) -> Result<u32> {
    Ok(!get_cidr_mask(len)?)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Returns the first address after the subnet containing `addr`.
///
/// `None` when the subnet ends at 255.255.255.255.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Option<Ipv4Addr>> {
    let subnet_size = 1u64 << (MAX_LENGTH - len.min(MAX_LENGTH));
    let network_bits = u32::from(cut_addr(addr, len)?) as u64;
    Ok(u32::try_from(network_bits + subnet_size)
        .ok()
        .map(Ipv4Addr::from))
}

/// IPv4 network: a base address with all host bits cleared, plus its prefix.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Build a network from any address inside it; host bits are zeroed.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Network> {
        let network = cut_addr(addr, prefix)?;
        if network != addr {
            log::debug!("Host bits of {addr} cleared for /{prefix}: {network}");
        }
        Ok(Network {
            addr: network,
            prefix,
        })
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.host_bits())
    }

    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.host_bits())
    }

    /// Get the broadcast address for this network.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | self.host_bits())
    }

    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Number of assignable hosts: everything but network and broadcast.
    ///
    /// /31 and /32 have no addresses between network and broadcast.
    pub fn num_usable_hosts(&self) -> u64 {
        if self.prefix >= MAX_LENGTH - 1 {
            0
        } else {
            self.num_addresses() - 2
        }
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        u32::from(addr) & !self.host_bits() == u32::from(self.addr)
    }

    /// True when `other` lies entirely inside this network.
    pub fn covers(&self, other: &Network) -> bool {
        other.prefix >= self.prefix && self.contains(other.addr)
    }

    fn host_bits(&self) -> u32 {
        // prefix is validated on construction
        (u32::MAX as u64 >> self.prefix) as u32
    }
}

impl FromStr for Network {
    type Err = CalculationError;

    /// Parse a CIDR string such as "10.0.0.0/24".
    fn from_str(addr_cidr: &str) -> Result<Network> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CalculationError::invalid("network", addr_cidr))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| CalculationError::invalid("address", addr))?;
        let prefix: u8 = mask
            .parse()
            .map_err(|_| CalculationError::invalid("prefix", mask))?;
        Network::new(addr, prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
