//! Plain text summary of a report, suitable for the clipboard.

use crate::models::SubnetReport;
use itertools::Itertools;
use std::net::Ipv4Addr;

pub const LABEL_NETWORK: &str = "Network Address";
pub const LABEL_FIRST_HOST: &str = "First Usable Address";
pub const LABEL_LAST_HOST: &str = "Last Usable Address";
pub const LABEL_BROADCAST: &str = "Broadcast Address";
pub const LABEL_HOST_COUNT: &str = "Usable Hosts";

/// Shown in place of a missing first/last host.
pub const NOT_APPLICABLE: &str = "n/a";

/// Labeled values in display order.
pub fn summary_fields(report: &SubnetReport) -> Vec<(&'static str, String)> {
    vec![
        (LABEL_NETWORK, report.network_address.to_string()),
        (LABEL_FIRST_HOST, optional_addr(report.first_host)),
        (LABEL_LAST_HOST, optional_addr(report.last_host)),
        (LABEL_BROADCAST, report.broadcast_address.to_string()),
        (LABEL_HOST_COUNT, report.usable_host_count.to_string()),
    ]
}

/// One "label: value" line per field.
pub fn format_summary(report: &SubnetReport) -> String {
    summary_fields(report)
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .join("\n")
}

fn optional_addr(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
