//! Supply conversion from human units to raw mint units

use std::num::IntErrorKind;

use crate::error::{LaunchError, LaunchResult};

/// Decimal precision every launched token is minted with.
pub const TOKEN_DECIMALS: u8 = 9;

/// Convert a human-readable supply string into raw units at
/// [`TOKEN_DECIMALS`] precision.
///
/// The multiplication runs in `u128` and the result must fit the `u64`
/// amount carried by the token program's mint instruction; anything wider
/// fails with `SupplyOverflow` before any network traffic happens.
/// Floating point is never involved.
pub fn raw_supply(human: &str) -> LaunchResult<u64> {
    if human.is_empty() || !human.chars().all(|c| c.is_ascii_digit()) {
        return Err(LaunchError::InvalidSupply(human.to_string()));
    }

    let value = match human.parse::<u128>() {
        Ok(v) => v,
        // More digits than u128 holds is still a well-formed number, just
        // one that can never be minted.
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            return Err(LaunchError::SupplyOverflow {
                supply: human.to_string(),
                decimals: TOKEN_DECIMALS,
            })
        }
        Err(_) => return Err(LaunchError::InvalidSupply(human.to_string())),
    };

    if value == 0 {
        return Err(LaunchError::InvalidSupply(human.to_string()));
    }

    let raw = value
        .checked_mul(10u128.pow(TOKEN_DECIMALS as u32))
        .ok_or_else(|| LaunchError::SupplyOverflow {
            supply: human.to_string(),
            decimals: TOKEN_DECIMALS,
        })?;

    u64::try_from(raw).map_err(|_| LaunchError::SupplyOverflow {
        supply: human.to_string(),
        decimals: TOKEN_DECIMALS,
    })
}
