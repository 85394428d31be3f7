//! SDK error types

use solana_program::program_error::ProgramError;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

/// Errors produced while building, signing, or landing a launch transaction.
///
/// Every variant is terminal for the attempt. The SDK never retries on its
/// own; a caller that retries gets a fresh mint keypair on the next
/// `launch`, so two attempts can never collide on the same mint address.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid supply {0:?}: expected a positive integer of decimal digits")]
    InvalidSupply(String),

    #[error("supply {supply} exceeds the maximum mintable amount at {decimals} decimals")]
    SupplyOverflow { supply: String, decimals: u8 },

    #[error("associated token address derivation failed")]
    AddressDerivation,

    #[error("instruction assembly failed: {0}")]
    Assembly(#[from] ProgramError),

    #[error("rent exemption query failed: {0}")]
    RentUnavailable(String),

    #[error("blockhash expired before the transaction landed")]
    BlockhashExpired,

    #[error("signature request rejected by wallet")]
    UserRejected,

    #[error("fee payer has insufficient funds for rent and fees")]
    InsufficientFunds,

    #[error("preflight simulation failed: {0}")]
    SimulationFailed(String),

    /// The transaction was submitted but did not reach "confirmed" within
    /// the deadline. It may still land; re-check by signature, do not
    /// resubmit.
    #[error("confirmation timed out for transaction {signature}")]
    ConfirmationTimeout { signature: Signature },

    #[error("transaction failed on chain: {0}")]
    ExecutionFailed(TransactionError),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("signer error: {0}")]
    Signer(String),
}

impl LaunchError {
    /// Map a ledger-reported transaction error onto the launch taxonomy.
    ///
    /// Used both for preflight rejections and for execution results, so an
    /// expired blockhash looks the same to callers whichever side of
    /// submission it surfaces on.
    pub fn from_transaction_error(err: TransactionError) -> Self {
        match err {
            TransactionError::BlockhashNotFound => LaunchError::BlockhashExpired,
            TransactionError::InsufficientFundsForFee
            | TransactionError::InsufficientFundsForRent { .. } => LaunchError::InsufficientFunds,
            other => LaunchError::ExecutionFailed(other),
        }
    }
}

pub type LaunchResult<T> = Result<T, LaunchError>;
