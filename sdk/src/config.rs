//! Launch configuration

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, LaunchResult};

/// Configuration for a launch coordinator, loadable from TOML.
///
/// The commitment level is not configurable: preflight and confirmation both
/// run at "confirmed". Only the endpoint and the confirmation wait are
/// tunable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LaunchConfig {
    /// RPC endpoint of the target cluster.
    pub rpc_url: String,

    /// Hard deadline for the confirmation poll, in seconds. Past it the
    /// attempt ends with a timeout that still carries the signature.
    pub confirm_timeout_secs: u64,

    /// Interval between status lookups, in milliseconds.
    pub status_poll_ms: u64,
}

impl LaunchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> LaunchResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LaunchError::InvalidConfig(format!("failed to read config file {}: {}", path, e))
        })?;

        let config: LaunchConfig = toml::from_str(&content).map_err(|e| {
            LaunchError::InvalidConfig(format!("failed to parse config file {}: {}", path, e))
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> LaunchResult<()> {
        if self.rpc_url.is_empty() {
            return Err(LaunchError::InvalidConfig("rpc_url is empty".to_string()));
        }
        if self.confirm_timeout_secs == 0 {
            return Err(LaunchError::InvalidConfig(
                "confirm_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.status_poll_ms == 0 {
            return Err(LaunchError::InvalidConfig(
                "status_poll_ms must be greater than 0".to_string(),
            ));
        }
        if self.status_poll_ms / 1000 >= self.confirm_timeout_secs {
            return Err(LaunchError::InvalidConfig(format!(
                "status_poll_ms ({}) must be shorter than confirm_timeout_secs ({})",
                self.status_poll_ms, self.confirm_timeout_secs
            )));
        }
        Ok(())
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            confirm_timeout_secs: 45,
            status_poll_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LaunchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = LaunchConfig::default();
        config.confirm_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = LaunchConfig::default();
        config.status_poll_ms = 60_000;
        assert!(config.validate().is_err());

        let mut config = LaunchConfig::default();
        config.rpc_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parses_toml() {
        let parsed: LaunchConfig = toml::from_str(
            r#"
            rpc_url = "https://api.devnet.solana.com"
            confirm_timeout_secs = 30
            status_poll_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(parsed.rpc_url, "https://api.devnet.solana.com");
        assert!(parsed.validate().is_ok());
    }
}
