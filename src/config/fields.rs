//! Field configuration source settings

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where tenant field schemas come from
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldSourceKind {
    #[default]
    Memory,
    File,
    Http,
}

/// Field configuration source settings
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsConfig {
    #[serde(default)]
    pub source: FieldSourceKind,

    /// Directory holding `<entity>.yaml` files (file source)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Configuration service base URL (http source)
    pub base_url: Option<String>,

    /// Bearer token for the configuration service
    pub api_token: Option<String>,

    /// Request timeout in seconds (http source)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl FieldsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate field source settings
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.source != FieldSourceKind::Http {
            return Ok(());
        }

        let url = self
            .base_url
            .as_deref()
            .ok_or(ValidationError::MissingRequired("fields.base_url"))?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidFieldConfigUrl);
        }
        if *environment == Environment::Production && !url.starts_with("https://") {
            return Err(ValidationError::FieldConfigUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            source: FieldSourceKind::default(),
            directory: default_directory(),
            base_url: None,
            api_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./config/fields")
}

fn default_timeout_secs() -> u64 {
    5
}
