//! Terminal output of a report.

use super::summary::summary_fields;
use crate::models::SubnetReport;
use colored::Colorize;

/// Format a label as "label:" padded to `width`.
///
/// # Arguments
/// * `label` - The label text
/// * `width` - The minimum width, colon included
pub fn format_label(label: &str, width: usize) -> String {
    let with_colon = format!("{label}:");
    format!("{with_colon:<width$}")
}

/// Render the report with colored labels, followed by the subnet list.
pub fn render_report(report: &SubnetReport) -> String {
    let fields = summary_fields(report);
    let width = fields.iter().map(|(l, _)| l.len() + 2).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{}\n", report.network.to_string().bold()));
    for (label, value) in fields {
        out.push_str(&format!("{}{}\n", format_label(label, width).cyan(), value));
    }
    out.push_str(&format!(
        "\n{}\n",
        format!("Subnets /{}:", report.subnet_prefix).bold()
    ));
    for subnet in &report.subpartitions {
        out.push_str(&format!("  {subnet}\n"));
    }
    out
}
