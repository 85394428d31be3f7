//! JSON-RPC implementation of the ledger client

use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::client::{LedgerClient, TxStatus};
use crate::error::{LaunchError, LaunchResult};

/// Ledger client over the nonblocking Solana RPC client.
///
/// Commitment is pinned to "confirmed" for both preflight and status
/// lookups; "processed" is too weak to report success against.
pub struct RpcLedger {
    rpc: RpcClient,
}

impl RpcLedger {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url.into(), CommitmentConfig::confirmed()),
        }
    }

    pub fn url(&self) -> String {
        self.rpc.url()
    }
}

#[async_trait]
impl LedgerClient for RpcLedger {
    async fn minimum_rent_exempt_balance(&self, data_len: usize) -> LaunchResult<u64> {
        self.rpc
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(|e| LaunchError::RentUnavailable(e.to_string()))
    }

    async fn latest_blockhash(&self) -> LaunchResult<Hash> {
        self.rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| LaunchError::Rpc(e.to_string()))
    }

    async fn submit(&self, transaction: &Transaction) -> LaunchResult<Signature> {
        let config = RpcSendTransactionConfig {
            preflight_commitment: Some(CommitmentLevel::Confirmed),
            ..RpcSendTransactionConfig::default()
        };

        self.rpc
            .send_transaction_with_config(transaction, config)
            .await
            .map_err(map_send_error)
    }

    async fn transaction_status(&self, signature: &Signature) -> LaunchResult<TxStatus> {
        let status = self
            .rpc
            .get_signature_status_with_commitment(signature, CommitmentConfig::confirmed())
            .await
            .map_err(|e| LaunchError::Rpc(e.to_string()))?;

        Ok(match status {
            None => TxStatus::Pending,
            Some(Ok(())) => TxStatus::Confirmed,
            Some(Err(err)) => TxStatus::Failed(err),
        })
    }
}

/// Classify a send failure.
///
/// Preflight rejections carry the simulated transaction error, which keeps
/// expired blockhashes and underfunded payers distinguishable from a
/// genuine simulation failure; anything transport-level stays an opaque
/// `Rpc` error, meaning nothing reached the ledger.
fn map_send_error(err: ClientError) -> LaunchError {
    match err.kind() {
        ClientErrorKind::TransactionError(tx_err) => {
            LaunchError::from_transaction_error(tx_err.clone())
        }
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            data: RpcResponseErrorData::SendTransactionPreflightFailure(sim),
            ..
        }) => match &sim.err {
            Some(tx_err) => match LaunchError::from_transaction_error(tx_err.clone()) {
                LaunchError::ExecutionFailed(e) => LaunchError::SimulationFailed(e.to_string()),
                mapped => mapped,
            },
            None => LaunchError::SimulationFailed(err.to_string()),
        },
        _ => LaunchError::Rpc(err.to_string()),
    }
}
