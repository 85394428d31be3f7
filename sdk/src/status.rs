//! UI-facing projection of a launch in flight

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::coordinator::LaunchPhase;
use crate::error::LaunchResult;
use crate::types::LaunchReceipt;

/// What the status panel renders.
///
/// A pure projection of the coordinator's lifecycle: every coordinator
/// transition maps to exactly one of these, and nothing else feeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    /// No launch in progress.
    Idle,
    /// A launch is under way; the message names the current step.
    Pending(String),
    Success {
        mint: Pubkey,
        holding: Pubkey,
        signature: Signature,
    },
    Error(String),
}

impl OperationStatus {
    pub(crate) fn pending(phase: &LaunchPhase) -> Self {
        let message = match phase {
            LaunchPhase::Built => "building launch transaction",
            LaunchPhase::AwaitingSignature => "awaiting wallet approval",
            LaunchPhase::Submitted => "waiting for confirmation",
        };
        OperationStatus::Pending(message.to_string())
    }

    pub(crate) fn from_result(result: &LaunchResult<LaunchReceipt>) -> Self {
        match result {
            Ok(receipt) => OperationStatus::Success {
                mint: receipt.mint,
                holding: receipt.holding,
                signature: receipt.signature,
            },
            Err(err) => OperationStatus::Error(err.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Success { .. } | OperationStatus::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;

    #[test]
    fn test_phase_projection() {
        assert_eq!(
            OperationStatus::pending(&LaunchPhase::AwaitingSignature),
            OperationStatus::Pending("awaiting wallet approval".to_string())
        );
        assert!(!OperationStatus::pending(&LaunchPhase::Submitted).is_terminal());
    }

    #[test]
    fn test_result_projection() {
        let receipt = LaunchReceipt {
            mint: Pubkey::new_unique(),
            holding: Pubkey::new_unique(),
            signature: Signature::default(),
        };
        let ok = OperationStatus::from_result(&Ok(receipt.clone()));
        assert_eq!(
            ok,
            OperationStatus::Success {
                mint: receipt.mint,
                holding: receipt.holding,
                signature: receipt.signature,
            }
        );

        let err = OperationStatus::from_result(&Err(LaunchError::UserRejected));
        assert!(matches!(err, OperationStatus::Error(_)));
        assert!(err.is_terminal());
    }
}
