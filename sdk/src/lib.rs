/// Twisted Soul launch SDK
///
/// Builds, signs, submits, and confirms the token-creation transaction
/// behind the Soul launchpad. Provides:
/// - Manifest and policy types matching the launchpad wire format
/// - Supply conversion at the fixed 9-decimal precision
/// - Mint keypair generation and holding-account derivation
/// - The four-instruction launch sequence
/// - A coordinator that collects both signatures and lands the transaction
/// - An observable operation status feed for frontends
pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod instructions;
pub mod signer;
pub mod status;
pub mod supply;
pub mod types;
pub mod utils;

pub use client::{LedgerClient, RpcLedger, TxStatus};
pub use config::LaunchConfig;
pub use coordinator::{LaunchCoordinator, LaunchPhase};
pub use error::{LaunchError, LaunchResult};
pub use signer::{LocalWallet, WalletError, WalletSigner};
pub use status::OperationStatus;
pub use supply::{raw_supply, TOKEN_DECIMALS};
pub use types::{LaunchPolicy, LaunchReceipt, TokenManifest};
