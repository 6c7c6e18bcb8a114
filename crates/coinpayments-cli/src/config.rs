/*
[INPUT]:  YAML configuration file and COINPAYMENTS_* environment variables
[OUTPUT]: Parsed CLI configuration and a configured client
[POS]:    Configuration layer - credentials and endpoint setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use coinpayments_adapter::{ClientConfig, CoinPaymentsClient, Credentials};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PUBLIC_KEY: &str = "COINPAYMENTS_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "COINPAYMENTS_PRIVATE_KEY";
pub const ENV_IPN_URL: &str = "COINPAYMENTS_IPN_URL";

/// Merchant account configuration
#[derive(Clone, Deserialize)]
pub struct CliConfig {
    /// API public key
    #[serde(default)]
    pub public_key: String,
    /// API private key used as the HMAC secret
    #[serde(default)]
    pub private_key: String,
    /// IPN callback URL
    #[serde(default)]
    pub ipn_url: String,
    /// Override for the API endpoint
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Total request timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("ipn_url", &self.ipn_url)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {path}"))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse YAML config")?;
        Ok(config)
    }

    /// Apply COINPAYMENTS_* overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`; empty values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());
        if let Some(value) = non_empty(ENV_PUBLIC_KEY) {
            self.public_key = value;
        }
        if let Some(value) = non_empty(ENV_PRIVATE_KEY) {
            self.private_key = value;
        }
        if let Some(value) = non_empty(ENV_IPN_URL) {
            self.ipn_url = value;
        }
    }

    /// Check that the credentials needed for signing are present
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.public_key.is_empty(),
            "public_key is required (config file or {ENV_PUBLIC_KEY})"
        );
        anyhow::ensure!(
            !self.private_key.is_empty(),
            "private_key is required (config file or {ENV_PRIVATE_KEY})"
        );
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn build_client(&self) -> Result<CoinPaymentsClient> {
        self.validate()?;
        let credentials = Credentials::new(self.public_key.clone(), self.private_key.clone());
        CoinPaymentsClient::with_config(credentials, self.ipn_url.clone(), self.client_config())
            .context("build CoinPayments client")
    }
}
