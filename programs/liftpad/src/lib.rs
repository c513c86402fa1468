pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

#[cfg(feature = "sdk")]
pub mod sdk;

pub use constants::{
    ALLOWED_FEE_TIERS, CONTRIBUTION_SEED_PREFIX, CREATION_FEE_LAMPORTS, LAUNCH_SEED_PREFIX,
    MAX_LAUNCHES_PER_CREATOR, POOL_SEED_PREFIX, POOL_VAULT_SEED_PREFIX, REGISTRY_SEED_PREFIX,
    TREASURY_SEED_PREFIX, VAULT_SEED_PREFIX,
};
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("7ew8JZNyywnZGPap22MbjnvRUZSQhamB3D3iX5AZfVci");

#[program]
pub mod liftpad {
    use super::instructions;
    use super::*;

    /// Factory entry point: validates the config, charges the flat creation
    /// fee, escrows the full token requirement and appends the new launch to
    /// the creator's registry — atomically.
    pub fn initialize_launch(
        ctx: Context<InitializeLaunch>,
        index: u64,
        config: LaunchConfig,
    ) -> Result<()> {
        instructions::handle_initialize_launch(ctx, index, config)
    }

    // buyer
    pub fn buy_tokens(ctx: Context<BuyTokens>, amount: u64) -> Result<()> {
        instructions::handle_buy_tokens(ctx, amount)
    }

    // buyer, successful sales only
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::handle_claim_tokens(ctx)
    }

    // buyer, failed sales only
    pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
        instructions::handle_claim_refund(ctx)
    }

    // creator, successful sales only
    pub fn withdraw_team_funds(ctx: Context<WithdrawTeamFunds>) -> Result<()> {
        instructions::handle_withdraw_team_funds(ctx)
    }

    /// Permissionless once the sale succeeded: seeds the price-setting pool
    /// from the escrowed liquidity share.
    pub fn deploy_liquidity(
        ctx: Context<DeployLiquidity>,
        fee_tier: u16,
        initial_sqrt_price_x96: u128,
    ) -> Result<()> {
        instructions::handle_deploy_liquidity(ctx, fee_tier, initial_sqrt_price_x96)
    }

    // creator-only escape hatch, bypasses the phase machine
    pub fn emergency_withdraw_currency(
        ctx: Context<EmergencyWithdrawCurrency>,
        amount: u64,
    ) -> Result<()> {
        instructions::handle_emergency_withdraw_currency(ctx, amount)
    }

    // creator-only escape hatch, bypasses the phase machine
    pub fn emergency_withdraw_tokens(
        ctx: Context<EmergencyWithdrawTokens>,
        amount: u64,
    ) -> Result<()> {
        instructions::handle_emergency_withdraw_tokens(ctx, amount)
    }
}
