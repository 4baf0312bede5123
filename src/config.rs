//! Calculator settings, read from the environment (and `.env` via dotenv).

use crate::error::{CalculationError, Result};
use crate::models::MAX_LENGTH;
use std::str::FromStr;

pub const ENV_DEFAULT_MASK: &str = "SUBNET_CALC_DEFAULT_MASK";
pub const ENV_SPLIT_BITS: &str = "SUBNET_CALC_SPLIT_BITS";
pub const ENV_MAX_SPLIT_PREFIX: &str = "SUBNET_CALC_MAX_SPLIT_PREFIX";
pub const ENV_MAX_SUBNETS: &str = "SUBNET_CALC_MAX_SUBNETS";

/// Settings for a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// Mask used when the user leaves the mask empty.
    pub default_mask: String,
    /// Number of prefix bits added when splitting a network.
    pub split_bits: u8,
    /// Longest prefix a split may produce.
    pub max_split_prefix: u8,
    /// Largest number of subnets a split may enumerate.
    pub max_subnets: u64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            default_mask: "/24".to_string(),
            split_bits: 2,
            max_split_prefix: 30,
            max_subnets: 4096,
        }
    }
}

impl CalcConfig {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<CalcConfig> {
        CalcConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<CalcConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CalcConfig::default();

        if let Some(mask) = lookup(ENV_DEFAULT_MASK) {
            config.default_mask = mask.trim().to_string();
        }
        if let Some(bits) = parse_var::<u8, _>(&lookup, ENV_SPLIT_BITS)? {
            config.split_bits = bits;
        }
        if let Some(prefix) = parse_var::<u8, _>(&lookup, ENV_MAX_SPLIT_PREFIX)? {
            if prefix > MAX_LENGTH {
                return Err(invalid_config(ENV_MAX_SPLIT_PREFIX, &prefix.to_string()));
            }
            config.max_split_prefix = prefix;
        }
        if let Some(limit) = parse_var::<u64, _>(&lookup, ENV_MAX_SUBNETS)? {
            if limit == 0 {
                return Err(invalid_config(ENV_MAX_SUBNETS, "0"));
            }
            config.max_subnets = limit;
        }

        log::debug!("Using {:?}", config);
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| invalid_config(key, &raw)),
    }
}

fn invalid_config(key: &str, value: &str) -> CalculationError {
    CalculationError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
