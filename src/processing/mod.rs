//! Subnet calculation logic.
//!
//! This module contains the calculation steps behind [`crate::calculate`]:
//! - [`parse`] - Address and mask parsing with host bit normalization,
//!   plus resolving "a.b.c.d/len" style input
//! - [`boundaries`] - Network, host range and broadcast computation
//! - [`subdivide`] - Lazy generation of equal sized subnets

mod boundaries;
mod parse;
mod subdivide;

// Re-export public functions
pub use boundaries::boundaries;
pub use parse::{parse, parse_mask, split_cidr_arg};
pub use subdivide::{split_prefix, subdivide, subnets, Subnets};
