//! Wallet signer capability

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use thiserror::Error;

/// Why a signature request did not produce a signature.
#[derive(Error, Debug)]
pub enum WalletError {
    /// The user declined in their wallet. Normal cancellation, not a fault.
    #[error("request rejected")]
    Rejected,

    #[error("{0}")]
    Other(String),
}

/// A wallet that can approve the launch transaction.
///
/// Implementations front whatever signer runtime the host application uses
/// (browser wallet bridge, hardware wallet, the relay's server key). The
/// coordinator only ever sees the public key and the signature; the wait in
/// `sign_message` may be human-timescale and the caller may cancel it by
/// dropping the future.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Public key the wallet signs with; used as fee payer and authority.
    fn pubkey(&self) -> Pubkey;

    /// Sign serialized message bytes.
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError>;
}

/// In-process signer backed by a keypair.
///
/// Used by tests and by server-side callers that hold their own key.
pub struct LocalWallet {
    keypair: Keypair,
}

impl LocalWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }
}

#[async_trait]
impl WalletSigner for LocalWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        Ok(self.keypair.sign_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_wallet_signs_verifiably() {
        let wallet = LocalWallet::new(Keypair::new());
        let message = b"launch manifest digest";

        let signature = wallet.sign_message(message).await.unwrap();
        assert!(signature.verify(wallet.pubkey().as_ref(), message));
    }
}
