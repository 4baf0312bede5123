//! Splitting a network into equal, smaller subnets.

use crate::config::CalcConfig;
use crate::error::{CalculationError, Result};
use crate::models::{ip_after_subnet, Network, MAX_LENGTH};
use std::iter::FusedIterator;

/// Prefix length used when splitting a network of length `prefix`.
///
/// Adds `split_bits`, capped at `max_split_prefix`, and never goes below the
/// parent itself: a parent at or past the cap splits into just itself.
pub fn split_prefix(prefix: u8, config: &CalcConfig) -> u8 {
    prefix
        .saturating_add(config.split_bits)
        .min(config.max_split_prefix)
        .max(prefix)
}

/// Lazy, ascending sequence of the subnets of a parent network.
#[derive(Debug, Clone)]
pub struct Subnets {
    next: Option<Network>,
    prefix: u8,
    remaining: u64,
}

impl Subnets {
    /// Prefix length of every yielded subnet.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl Iterator for Subnets {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        let current = self.next.take()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            // every remaining subnet lies inside the parent, so a successor exists
            self.next = match ip_after_subnet(current.addr(), self.prefix) {
                Ok(Some(addr)) => Network::new(addr, self.prefix).ok(),
                _ => None,
            };
            debug_assert!(
                self.next.is_some(),
                "no subnet after {current} with {} still expected",
                self.remaining
            );
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Subnets {}

impl FusedIterator for Subnets {}

/// Every subnet of length `new_prefix` inside `parent`.
///
/// Fails with [`CalculationError::TooManySubnets`] before any work is done
/// when the split would yield more than `limit` subnets.
pub fn subnets(parent: &Network, new_prefix: u8, limit: u64) -> Result<Subnets> {
    if new_prefix < parent.prefix() || new_prefix > MAX_LENGTH {
        return Err(CalculationError::invalid("prefix", &new_prefix.to_string()));
    }
    let count = 1u64 << (new_prefix - parent.prefix());
    if count > limit {
        log::warn!("Refusing to split {parent} into {count} /{new_prefix} subnets (limit {limit})");
        return Err(CalculationError::TooManySubnets { count, limit });
    }
    log::debug!("Splitting {parent} into {count} /{new_prefix} subnets");

    Ok(Subnets {
        next: Some(Network::new(parent.addr(), new_prefix)?),
        prefix: new_prefix,
        remaining: count,
    })
}

/// Split `parent` by the configured number of bits.
pub fn subdivide(parent: &Network, config: &CalcConfig) -> Result<Subnets> {
    subnets(
        parent,
        split_prefix(parent.prefix(), config),
        config.max_subnets,
    )
}
