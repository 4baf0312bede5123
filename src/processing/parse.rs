//! Parsing of the raw address and mask fields.

use crate::error::{CalculationError, Result};
use crate::models::{get_cidr_mask, Network};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref PREFIX_RE: Regex = Regex::new(r"^[0-9]{1,2}$").expect("Invalid Regex?");
}

/// Parse user input into a normalized [`Network`].
///
/// Host bits set in `address_text` are silently cleared, so "192.168.10.5"
/// with "/24" yields 192.168.10.0/24.
pub fn parse(address_text: &str, mask_text: &str) -> Result<Network> {
    let address_text = address_text.trim();
    if address_text.is_empty() {
        return Err(CalculationError::EmptyInput);
    }
    let addr: Ipv4Addr = address_text
        .parse()
        .map_err(|_| CalculationError::invalid("address", address_text))?;
    let prefix = parse_mask(mask_text)?;

    log::trace!("parse({address_text}, {mask_text}) -> {addr}/{prefix}");
    Network::new(addr, prefix)
}

/// Resolve the raw address and mask fields from command line style input.
///
/// Without an explicit mask, "a.b.c.d/len" is split at its first '/', and a
/// bare address falls back to `default_mask`. An explicit mask is used as is.
pub fn split_cidr_arg(
    address: &str,
    mask: Option<&str>,
    default_mask: &str,
) -> (String, String) {
    match (mask, address.split_once('/')) {
        (Some(mask), _) => (address.to_string(), mask.to_string()),
        (None, Some((address, prefix))) => (address.to_string(), prefix.to_string()),
        (None, None) => (address.to_string(), default_mask.to_string()),
    }
}

/// Parse a mask field into a prefix length.
///
/// Accepts an optional leading '/', then a prefix length (0-32), a dotted
/// netmask such as 255.255.255.0 or a dotted hostmask such as 0.0.0.255.
pub fn parse_mask(mask_text: &str) -> Result<u8> {
    let trimmed = mask_text.trim();
    let mask = trimmed.strip_prefix('/').unwrap_or(trimmed).trim();

    if PREFIX_RE.is_match(mask) {
        return match mask.parse::<u8>() {
            Ok(prefix) if get_cidr_mask(prefix).is_ok() => Ok(prefix),
            _ => Err(CalculationError::invalid("mask", mask_text)),
        };
    }

    let bits = mask
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| CalculationError::invalid("mask", mask_text))?;
    prefix_from_netmask(bits)
        .or_else(|| prefix_from_netmask(!bits))
        .ok_or_else(|| CalculationError::invalid("mask", mask_text))
}

/// Prefix length of a netmask with contiguous leading ones.
fn prefix_from_netmask(bits: u32) -> Option<u8> {
    let prefix = bits.leading_ones() as u8;
    match get_cidr_mask(prefix) {
        Ok(mask) if mask == bits => Some(prefix),
        _ => None,
    }
}
