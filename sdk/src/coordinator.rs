//! Launch coordinator: builds, signs, submits, and confirms one launch

use std::time::Duration;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::Signer;
use solana_sdk::program_pack::Pack;
use solana_sdk::transaction::Transaction;
use spl_token::state::Mint;
use tokio::sync::watch;
use tokio::time::{sleep, Instant};

use crate::client::{LedgerClient, TxStatus};
use crate::config::LaunchConfig;
use crate::error::{LaunchError, LaunchResult};
use crate::signer::{WalletError, WalletSigner};
use crate::status::OperationStatus;
use crate::types::{LaunchReceipt, TokenManifest};
use crate::{instructions, supply, utils};

/// Non-terminal stages of one launch attempt, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// Transaction assembled, blockhash attached, mint co-signature applied.
    Built,
    /// Handed to the wallet; waiting on human approval.
    AwaitingSignature,
    /// Sent to the ledger; waiting on confirmation.
    Submitted,
}

/// Drives a single token launch end to end.
///
/// One logical operation per `launch` call. The ledger and signer are
/// injected, so the coordinator never knows which wallet runtime or RPC
/// endpoint sits behind them. Nothing is retried here: every error ends the
/// attempt, and a caller that retries starts over with a fresh mint.
pub struct LaunchCoordinator<L, S> {
    ledger: L,
    signer: S,
    config: LaunchConfig,
    status: watch::Sender<OperationStatus>,
}

impl<L, S> LaunchCoordinator<L, S>
where
    L: LedgerClient,
    S: WalletSigner,
{
    pub fn new(ledger: L, signer: S, config: LaunchConfig) -> Self {
        let (status, _) = watch::channel(OperationStatus::Idle);
        Self {
            ledger,
            signer,
            config,
            status,
        }
    }

    /// Subscribe to the status feed the UI renders against.
    pub fn subscribe(&self) -> watch::Receiver<OperationStatus> {
        self.status.subscribe()
    }

    /// Launch the token described by `manifest`.
    ///
    /// On success the receipt carries the mint address, the holding account,
    /// and the transaction signature. On `ConfirmationTimeout` the
    /// transaction may still land later; re-check by its signature instead
    /// of launching again.
    pub async fn launch(&self, manifest: &TokenManifest) -> LaunchResult<LaunchReceipt> {
        let result = self.run(manifest).await;
        self.status.send_replace(OperationStatus::from_result(&result));
        result
    }

    async fn run(&self, manifest: &TokenManifest) -> LaunchResult<LaunchReceipt> {
        manifest.validate()?;
        let raw_amount = supply::raw_supply(&manifest.supply)?;
        let owner = self.signer.pubkey();

        log::info!(
            "Launching {} ({}) with supply {} for {}",
            manifest.name,
            manifest.symbol,
            manifest.supply,
            owner
        );

        // The mint keypair exists only for this attempt; only its pubkey
        // escapes this scope.
        let mint = utils::new_mint_keypair();
        let mint_address = mint.pubkey();
        let holding = utils::derive_holding_address(&mint_address, &owner)?;

        let rent_lamports = self.ledger.minimum_rent_exempt_balance(Mint::LEN).await?;
        let launch_instructions =
            instructions::token_launch(&owner, &mint_address, &holding, rent_lamports, raw_amount)?;
        let blockhash = self.ledger.latest_blockhash().await?;

        let mut transaction = Transaction::new_with_payer(&launch_instructions, Some(&owner));
        transaction.partial_sign(&[&mint], blockhash);
        self.enter(LaunchPhase::Built);
        log::debug!(
            "Built launch transaction: mint {}, holding {}, rent {} lamports",
            mint_address,
            holding,
            rent_lamports
        );

        self.enter(LaunchPhase::AwaitingSignature);
        let wallet_signature = self
            .signer
            .sign_message(&transaction.message_data())
            .await
            .map_err(|e| match e {
                WalletError::Rejected => LaunchError::UserRejected,
                WalletError::Other(msg) => LaunchError::Signer(msg),
            })?;
        place_signature(&mut transaction, &owner, wallet_signature)?;
        transaction
            .verify()
            .map_err(|e| LaunchError::Signer(e.to_string()))?;

        self.enter(LaunchPhase::Submitted);
        let signature = self.ledger.submit(&transaction).await?;
        log::info!("Submitted launch transaction {}", signature);

        self.await_confirmation(signature).await?;
        log::info!("Confirmed mint {} in transaction {}", mint_address, signature);

        Ok(LaunchReceipt {
            mint: mint_address,
            holding,
            signature,
        })
    }

    async fn await_confirmation(&self, signature: Signature) -> LaunchResult<()> {
        let deadline = Instant::now() + Duration::from_secs(self.config.confirm_timeout_secs);

        loop {
            match self.ledger.transaction_status(&signature).await? {
                TxStatus::Confirmed => return Ok(()),
                TxStatus::Failed(err) => {
                    log::warn!("Launch transaction {} failed: {}", signature, err);
                    return Err(LaunchError::from_transaction_error(err));
                }
                TxStatus::Pending => {}
            }

            if Instant::now() >= deadline {
                log::warn!("Confirmation deadline passed for {}", signature);
                return Err(LaunchError::ConfirmationTimeout { signature });
            }

            sleep(Duration::from_millis(self.config.status_poll_ms)).await;
        }
    }

    fn enter(&self, phase: LaunchPhase) {
        self.status.send_replace(OperationStatus::pending(&phase));
    }
}

/// Slot the wallet's signature into its position among the required signers.
fn place_signature(
    transaction: &mut Transaction,
    signer: &Pubkey,
    signature: Signature,
) -> LaunchResult<()> {
    let required = transaction.message.header.num_required_signatures as usize;
    let position = transaction.message.account_keys[..required]
        .iter()
        .position(|key| key == signer)
        .ok_or_else(|| LaunchError::Signer("wallet is not a required signer".to_string()))?;

    transaction.signatures[position] = signature;
    Ok(())
}
