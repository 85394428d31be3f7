//! Keypair and address derivation helpers

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use crate::error::{LaunchError, LaunchResult};

/// Generate the keypair for a new mint account.
///
/// Fresh OS entropy on every call; never reused across launch attempts, so
/// concurrent launches cannot collide on a mint address.
pub fn new_mint_keypair() -> Keypair {
    Keypair::new()
}

/// Derive the owner's associated token account for a mint.
///
/// Pure function over the canonical ATA seeds; the same `(mint, owner)`
/// pair always yields the same address, matching what the token program
/// expects on chain.
pub fn derive_holding_address(mint: &Pubkey, owner: &Pubkey) -> LaunchResult<Pubkey> {
    Pubkey::try_find_program_address(
        &[owner.as_ref(), spl_token::id().as_ref(), mint.as_ref()],
        &spl_associated_token_account::id(),
    )
    .map(|(address, _bump)| address)
    .ok_or(LaunchError::AddressDerivation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    #[test]
    fn test_mint_keypairs_are_unique() {
        let a = new_mint_keypair();
        let b = new_mint_keypair();
        assert_ne!(a.pubkey(), b.pubkey());
    }

    #[test]
    fn test_holding_address_is_deterministic() {
        let mint = Pubkey::new_from_array([7u8; 32]);
        let owner = Pubkey::new_from_array([11u8; 32]);

        let first = derive_holding_address(&mint, &owner).unwrap();
        let second = derive_holding_address(&mint, &owner).unwrap();
        assert_eq!(first, second);

        // Bit-exact against the spl helper's independent derivation.
        assert_eq!(
            first,
            spl_associated_token_account::get_associated_token_address(&owner, &mint)
        );
    }

    #[test]
    fn test_holding_address_depends_on_both_inputs() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        let base = derive_holding_address(&mint, &owner).unwrap();
        assert_ne!(base, derive_holding_address(&other, &owner).unwrap());
        assert_ne!(base, derive_holding_address(&mint, &other).unwrap());
    }
}
