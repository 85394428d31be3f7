//! Manifest and result types shared with the launchpad frontends

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::error::{LaunchError, LaunchResult};

/// Maximum symbol length enforced by the launch form.
pub const MAX_SYMBOL_LEN: usize = 8;

/// Everything the user fills in to describe a token.
///
/// Field names follow the JSON payload the web UI and the mint relay
/// exchange, so a request body deserializes into this directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenManifest {
    pub name: String,
    pub symbol: String,
    /// Human-readable supply, decimal digits only. Converted to raw units
    /// at [`crate::supply::TOKEN_DECIMALS`] before minting.
    pub supply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub policy: LaunchPolicy,
}

impl TokenManifest {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, supply: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            supply: supply.into(),
            description: None,
            twitter: None,
            telegram: None,
            website: None,
            policy: LaunchPolicy::default(),
        }
    }

    /// Validate the form-level constraints.
    ///
    /// The UI enforces these too; re-checking here keeps library consumers
    /// that bypass the form on the same footing.
    pub fn validate(&self) -> LaunchResult<()> {
        if self.name.trim().is_empty() {
            return Err(LaunchError::InvalidManifest("token name is empty".to_string()));
        }
        if self.symbol.is_empty() || self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(LaunchError::InvalidManifest(format!(
                "symbol must be 1-{} characters",
                MAX_SYMBOL_LEN
            )));
        }
        if self.symbol.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(LaunchError::InvalidManifest(
                "symbol must be uppercase".to_string(),
            ));
        }
        if self.supply.is_empty() || !self.supply.chars().all(|c| c.is_ascii_digit()) {
            return Err(LaunchError::InvalidSupply(self.supply.clone()));
        }
        Ok(())
    }
}

/// Anti-rug bindings the user opted into.
///
/// These are advisory: the launch records and forwards them, it does not
/// enforce them on chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPolicy {
    pub lock_liquidity: bool,
    pub renounce_mint: bool,
    pub no_god_wallet: bool,
    pub open_source: bool,
}

impl Default for LaunchPolicy {
    fn default() -> Self {
        Self {
            lock_liquidity: true,
            renounce_mint: true,
            no_god_wallet: true,
            open_source: true,
        }
    }
}

/// What a confirmed launch hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    /// Address of the new mint account.
    pub mint: Pubkey,
    /// Owner's associated token account holding the full initial supply.
    pub holding: Pubkey,
    /// Signature of the launch transaction.
    pub signature: Signature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_validation() {
        let manifest = TokenManifest::new("Test Soul", "SOUL", "1000000000");
        assert!(manifest.validate().is_ok());

        let mut bad = manifest.clone();
        bad.name = "  ".to_string();
        assert!(matches!(bad.validate(), Err(LaunchError::InvalidManifest(_))));

        let mut bad = manifest.clone();
        bad.symbol = "TOOLONGSYM".to_string();
        assert!(matches!(bad.validate(), Err(LaunchError::InvalidManifest(_))));

        let mut bad = manifest.clone();
        bad.symbol = "soul".to_string();
        assert!(matches!(bad.validate(), Err(LaunchError::InvalidManifest(_))));

        let mut bad = manifest;
        bad.supply = "-5".to_string();
        assert!(matches!(bad.validate(), Err(LaunchError::InvalidSupply(_))));
    }

    #[test]
    fn test_manifest_deserializes_ui_payload() {
        // The exact body shape the web form posts.
        let body = r#"{
            "name": "Test Soul",
            "symbol": "SOUL",
            "supply": "1000000000",
            "description": "Born from the Twisted Soul launchpad.",
            "twitter": "",
            "telegram": "",
            "website": "",
            "policy": {
                "lockLiquidity": true,
                "renounceMint": true,
                "noGodWallet": true,
                "openSource": true
            }
        }"#;

        let manifest: TokenManifest = serde_json::from_str(body).unwrap();
        assert_eq!(manifest.symbol, "SOUL");
        assert!(manifest.policy.lock_liquidity);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_manifest_socials_optional() {
        let manifest: TokenManifest =
            serde_json::from_str(r#"{"name":"X","symbol":"X","supply":"1"}"#).unwrap();
        assert!(manifest.description.is_none());
        assert!(manifest.policy.renounce_mint);
    }
}
