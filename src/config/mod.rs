#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_RESULT_COUNT: u32 = 10;
const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Carrier account and endpoint, passed explicitly into every directory call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub endpoint: String,
    pub merchant_id: String,
    pub result_count: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

impl DirectoryConfig {
    pub fn new(endpoint: impl Into<String>, merchant_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            merchant_id: merchant_id.into(),
            result_count: None,
            timeout_seconds: None,
        }
    }

    pub fn result_count(&self) -> u32 {
        self.result_count.unwrap_or(DEFAULT_RESULT_COUNT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_substituted("directory.endpoint", &self.endpoint)?;
        validation::validate_substituted("directory.merchant_id", &self.merchant_id)?;
        validation::validate_url("directory.endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("directory.merchant_id", &self.merchant_id)?;
        if let Some(count) = self.result_count {
            validation::validate_range("directory.result_count", count, 1, 30)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("directory.timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

/// Flat shipping price configured for the carrier method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    pub amount: f64,
}

impl Validate for ShippingConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_finite("shipping.amount", self.amount)
    }
}
