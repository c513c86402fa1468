use anchor_lang::prelude::*;

#[event]
pub struct LaunchCreated {
    pub launch: Pubkey,
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub index: u64,
    pub tokens_escrowed: u64,
}

#[event]
pub struct TokensPurchased {
    pub launch: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub total_raised: u64,
}

#[event]
pub struct TokensClaimed {
    pub launch: Pubkey,
    pub buyer: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RefundIssued {
    pub launch: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TeamFundsWithdrawn {
    pub launch: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LiquidityDeployed {
    pub launch: Pubkey,
    pub pool: Pubkey,
    pub token_mint_0: Pubkey,
    pub token_mint_1: Pubkey,
    pub fee_tier: u16,
    pub sqrt_price_x96: u128,
    pub currency_amount: u64,
    pub token_amount: u64,
}

/// Emitted on every emergency path so operator interventions stay auditable
/// and distinguishable from ordinary lifecycle flows.
#[event]
pub struct EmergencyWithdrawal {
    pub launch: Pubkey,
    pub creator: Pubkey,
    /// `None` for a currency withdrawal, the mint for a token withdrawal.
    pub mint: Option<Pubkey>,
    pub amount: u64,
}
