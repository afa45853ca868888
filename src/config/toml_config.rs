use crate::config::{DirectoryConfig, ShippingConfig};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Carrier method configuration as stored on disk.
///
/// ```toml
/// [directory]
/// endpoint = "https://relay.example.com/points"
/// merchant_id = "${MONDIAL_RELAY_MERCHANT_ID}"
/// result_count = 10
///
/// [shipping]
/// amount = 490
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    pub directory: DirectoryConfig,
    pub shipping: Option<ShippingConfig>,
}

impl RelayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn shipping(&self) -> Result<&ShippingConfig> {
        validation::validate_required_field("shipping", &self.shipping)
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables are left
/// as written so validation can report them.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelayError::InvalidConfigValueError {
        field: "env_substitution".to_string(),
        value: String::new(),
        reason: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        self.directory.validate()?;
        if let Some(shipping) = &self.shipping {
            shipping.validate()?;
        }
        Ok(())
    }
}
