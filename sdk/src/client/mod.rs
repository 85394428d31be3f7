//! Ledger access for launch operations

pub mod rpc;

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};

use crate::error::LaunchResult;

pub use rpc::RpcLedger;

/// Where a submitted transaction stands at the "confirmed" commitment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    /// Not yet confirmed; keep polling.
    Pending,
    Confirmed,
    /// Executed and failed with the decoded on-chain error.
    Failed(TransactionError),
}

/// The ledger operations a launch needs.
///
/// One implementation talks JSON-RPC ([`RpcLedger`]); tests substitute
/// counting mocks. Every method is a single round trip; retry policy
/// belongs to callers, not implementations.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Minimum balance for an account of `data_len` bytes to be exempt from
    /// rent collection. Queried fresh per launch; rent parameters can
    /// change between runs.
    async fn minimum_rent_exempt_balance(&self, data_len: usize) -> LaunchResult<u64>;

    /// A recent blockhash to anchor the transaction to.
    async fn latest_blockhash(&self) -> LaunchResult<Hash>;

    /// Submit a fully signed transaction. Returns its signature immediately;
    /// this does not imply finality.
    async fn submit(&self, transaction: &Transaction) -> LaunchResult<Signature>;

    /// Look up a submitted transaction at the "confirmed" commitment.
    async fn transaction_status(&self, signature: &Signature) -> LaunchResult<TxStatus>;
}
