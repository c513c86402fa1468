use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;
use ethnum::U256;

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::ErrorCode;

/// Sale-asset base units a creator must escrow before a launch activates:
/// the sale allocation plus the tokens that will pair with the liquidity
/// share of a full raise at the listing rate. Pure so callers can precompute
/// the required balance off-chain before the launch PDA exists.
pub fn total_tokens_needed(
    hard_cap: u64,
    amount_for_sale: u64,
    percentage_for_liquidity: u8,
    listing_rate: u64,
) -> Result<u64> {
    let liquidity_tokens = (hard_cap as u128)
        .checked_mul(percentage_for_liquidity as u128)
        .and_then(|v| v.checked_mul(listing_rate as u128))
        .ok_or(ErrorCode::NumericOverflow)?
        / PERCENT_DENOMINATOR as u128
        / LAMPORTS_PER_SOL as u128;

    (amount_for_sale as u128)
        .checked_add(liquidity_tokens)
        .and_then(|v| u64::try_from(v).ok())
        .ok_or_else(|| error!(ErrorCode::NumericOverflow))
}

/// Base units owed to a buyer for a lamport contribution, rounded down.
pub fn token_entitlement(contribution: u64, listing_rate: u64) -> Result<u64> {
    let tokens = (contribution as u128)
        .checked_mul(listing_rate as u128)
        .ok_or(ErrorCode::NumericOverflow)?
        / LAMPORTS_PER_SOL as u128;

    u64::try_from(tokens).map_err(|_| error!(ErrorCode::NumericOverflow))
}

/// `percentage`% of `total`, rounded down. The liquidity and team splits sum
/// to 100 so the two shares never overlap and never exceed the raise.
pub fn percentage_share(total: u64, percentage: u8) -> Result<u64> {
    let share = (total as u128)
        .checked_mul(percentage as u128)
        .ok_or(ErrorCode::NumericOverflow)?
        / PERCENT_DENOMINATOR as u128;

    u64::try_from(share).map_err(|_| error!(ErrorCode::NumericOverflow))
}

/// Encodes an initial pool price as `floor(sqrt(reserve_1 / reserve_0) * 2^96)`,
/// the fixed-point square-root ratio the pool-initialization interface expects.
pub fn encode_sqrt_price_x96(reserve_1: u64, reserve_0: u64) -> Result<u128> {
    require!(reserve_0 > 0 && reserve_1 > 0, ErrorCode::InvalidAmount);

    let ratio_x192 = (U256::from(reserve_1) << 192u32) / U256::from(reserve_0);
    Ok(u256_isqrt(ratio_x192).as_u128())
}

// Newton's method; converges in <= 255 iterations, in practice a handful.
fn u256_isqrt(n: U256) -> U256 {
    if n <= U256::ONE {
        return n;
    }

    let bits = 256 - n.leading_zeros();
    let mut x = U256::ONE << bits.div_ceil(2);
    loop {
        let y = (x + n / x) >> 1u32;
        if y >= x {
            return x;
        }
        x = y;
    }
}
