//! IPv4 subnet calculator.
//!
//! Turns a raw address and mask into a [`SubnetReport`]: network address,
//! usable host range, broadcast address, host count and an equal split into
//! smaller subnets. Calculations are pure and keep no state between calls.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::CalcConfig;
pub use error::{CalculationError, Result};
pub use models::{Network, SubnetInfo, SubnetReport};
pub use output::format_summary;

/// Calculate a report with the default split (two bits, capped at /30).
///
/// # Examples
/// ```
/// let report = subnet_calculator::calculate("192.168.10.5", "/24").unwrap();
/// assert_eq!(report.network_address.to_string(), "192.168.10.0");
/// assert_eq!(report.usable_host_count, 254);
/// assert_eq!(report.subpartitions.len(), 4);
/// ```
pub fn calculate(address_text: &str, mask_text: &str) -> Result<SubnetReport> {
    calculate_with(address_text, mask_text, &CalcConfig::default())
}

/// Calculate a report using the given settings.
pub fn calculate_with(
    address_text: &str,
    mask_text: &str,
    config: &CalcConfig,
) -> Result<SubnetReport> {
    let network = processing::parse(address_text, mask_text)?;
    let info = processing::boundaries(&network);
    let subnets = processing::subdivide(&network, config)?;
    let subnet_prefix = subnets.prefix();

    log::info!(
        "{network}: {} usable hosts, {} /{subnet_prefix} subnets",
        info.usable_host_count,
        subnets.len()
    );
    Ok(SubnetReport::new(
        network,
        info,
        subnet_prefix,
        subnets.collect(),
    ))
}
