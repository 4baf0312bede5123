//! Output formatting for calculation results.
//!
//! This module handles rendering a [`crate::models::SubnetReport`]:
//! - [`summary`] - Plain labeled text (clipboard friendly)
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - JSON output

mod json;
mod summary;
mod terminal;

pub use json::report_to_json;
pub use summary::{format_summary, summary_fields, NOT_APPLICABLE};
pub use terminal::{format_label, render_report};
