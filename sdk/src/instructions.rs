//! Instruction builders for the launch transaction

use solana_sdk::instruction::Instruction;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use spl_token::state::Mint;

use crate::error::LaunchResult;
use crate::supply::TOKEN_DECIMALS;

/// Build the four-instruction launch sequence.
///
/// The order is load-bearing: each instruction's preconditions are the
/// previous one's postconditions.
///   1. fund and allocate the mint account at the rent-exempt minimum
///   2. initialize it as a mint (9 decimals, owner as mint authority,
///      no freeze authority)
///   3. create the owner's associated token account
///   4. mint the full initial supply into it
///
/// Pure data construction; nothing here touches the network. A failure from
/// the SPL builders means the inputs violate an invariant upstream code is
/// responsible for.
pub fn token_launch(
    owner: &Pubkey,
    mint: &Pubkey,
    holding: &Pubkey,
    rent_lamports: u64,
    raw_amount: u64,
) -> LaunchResult<Vec<Instruction>> {
    let create_mint_account = system_instruction::create_account(
        owner,
        mint,
        rent_lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );

    let initialize_mint = spl_token::instruction::initialize_mint(
        &spl_token::id(),
        mint,
        owner,
        None,
        TOKEN_DECIMALS,
    )?;

    let create_holding = spl_associated_token_account::instruction::create_associated_token_account(
        owner,
        owner,
        mint,
        &spl_token::id(),
    );

    let issue_supply = spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        holding,
        owner,
        &[],
        raw_amount,
    )?;

    Ok(vec![
        create_mint_account,
        initialize_mint,
        create_holding,
        issue_supply,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::system_program;

    // SPL token instruction tags.
    const TAG_INITIALIZE_MINT: u8 = 0;
    const TAG_MINT_TO: u8 = 7;

    fn build() -> (Pubkey, Pubkey, Pubkey, Vec<Instruction>) {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let holding = crate::utils::derive_holding_address(&mint, &owner).unwrap();
        let ixs = token_launch(&owner, &mint, &holding, 1_461_600, 1_000_000_000_000_000_000)
            .unwrap();
        (owner, mint, holding, ixs)
    }

    #[test]
    fn test_instruction_order_is_fixed() {
        let (_, _, _, ixs) = build();
        assert_eq!(ixs.len(), 4);

        assert_eq!(ixs[0].program_id, system_program::id());
        assert_eq!(ixs[1].program_id, spl_token::id());
        assert_eq!(ixs[2].program_id, spl_associated_token_account::id());
        assert_eq!(ixs[3].program_id, spl_token::id());

        assert_eq!(ixs[1].data[0], TAG_INITIALIZE_MINT);
        assert_eq!(ixs[3].data[0], TAG_MINT_TO);
    }

    #[test]
    fn test_owner_pays_and_signs_creation() {
        let (owner, mint, _, ixs) = build();

        // create_account: owner is the funding signer, mint co-signs for
        // its own allocation.
        assert_eq!(ixs[0].accounts[0].pubkey, owner);
        assert!(ixs[0].accounts[0].is_signer);
        assert_eq!(ixs[0].accounts[1].pubkey, mint);
        assert!(ixs[0].accounts[1].is_signer);

        // ATA creation: owner funds it.
        assert_eq!(ixs[2].accounts[0].pubkey, owner);
        assert!(ixs[2].accounts[0].is_signer);
    }

    #[test]
    fn test_mint_initialized_without_freeze_authority() {
        let (_, _, _, ixs) = build();
        let data = &ixs[1].data;

        // initialize_mint layout: tag, decimals, authority, freeze COption.
        assert_eq!(data[1], TOKEN_DECIMALS);
        assert_eq!(*data.last().unwrap(), 0, "freeze authority must be None");
    }

    #[test]
    fn test_issue_targets_holding_account() {
        let (owner, mint, holding, ixs) = build();
        let issue = &ixs[3];

        assert_eq!(issue.accounts[0].pubkey, mint);
        assert_eq!(issue.accounts[1].pubkey, holding);
        assert_eq!(issue.accounts[2].pubkey, owner);
        assert!(issue.accounts[2].is_signer);

        let amount = u64::from_le_bytes(issue.data[1..9].try_into().unwrap());
        assert_eq!(amount, 1_000_000_000_000_000_000);
    }
}
