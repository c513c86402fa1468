use anchor_lang::prelude::*;

use crate::constants::MAX_LAUNCHES_PER_CREATOR;

/// Creator-declared sale parameters. Immutable once the launch is initialized.
///
/// All currency amounts are lamports. `listing_rate` is expressed in sale-asset
/// base units granted per whole unit of currency (per SOL), so the asset's
/// decimal adjustment is folded into the rate itself.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LaunchConfig {
    /// Minimum viable raise; below this at end the sale fails and refunds open.
    pub soft_cap: u64,
    /// Maximum acceptable raise; purchases can never push past this.
    pub hard_cap: u64,
    /// Sale-asset base units sold at the declared rate.
    pub amount_for_sale: u64,
    /// Sale-asset base units per whole unit of currency, also seeds the pool price.
    pub listing_rate: u64,
    /// Per-call contribution floor, lamports.
    pub minimum_buy: u64,
    /// Per-call contribution ceiling, lamports. Not cumulative per buyer.
    pub maximum_buy: u64,
    /// Share of the raise escrowed for the liquidity bootstrap.
    pub percentage_for_liquidity: u8,
    /// Share of the raise the creator may withdraw after success.
    pub percentage_for_team: u8,
    /// Unix timestamp at which purchases open.
    pub start_date: i64,
    /// Unix timestamp at which purchases close and the outcome resolves.
    pub end_date: i64,
}

/// Lifecycle phase of a launch. Derived, never stored: every operation
/// recomputes it from the clock and the raise total so the state machine can
/// never desynchronize from the funds it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// Before `start_date`.
    Pending,
    /// Accepting purchases.
    Active,
    /// Ended with `total_raised >= soft_cap`: claims, team withdrawal and
    /// liquidity deployment are open.
    Successful,
    /// Ended under the soft cap: refunds are open.
    Failed,
}

/// Pure phase computation, evaluated against the wall clock at call time.
pub fn launch_phase(config: &LaunchConfig, now: i64, total_raised: u64) -> LaunchPhase {
    if now < config.start_date {
        LaunchPhase::Pending
    } else if now < config.end_date {
        LaunchPhase::Active
    } else if total_raised >= config.soft_cap {
        LaunchPhase::Successful
    } else {
        LaunchPhase::Failed
    }
}

#[account] // seed [LAUNCH_SEED_PREFIX, creator, index_le]
#[derive(InitSpace)]
pub struct Launch {
    /// Creator of the launch; holds team-withdrawal and emergency rights.
    pub creator: Pubkey,

    /// Mint of the asset being sold.
    pub mint: Pubkey,

    /// Token vault PDA escrowing the sale and liquidity allocations.
    pub vault: Pubkey,

    /// Position in the creator's registry at creation time; doubles as the
    /// deployment salt, so it is unique per creator and never reused.
    pub index: u64,

    /// Immutable sale parameters.
    pub config: LaunchConfig,

    /// Sum of all contributions, lamports. Never exceeds `config.hard_cap`.
    pub total_raised: u64,

    /// One-shot guard for `withdraw_team_funds`.
    pub team_withdrawn: bool,

    /// One-shot guard for `deploy_liquidity`.
    pub liquidity_deployed: bool,

    /// Bump seed for the Launch PDA.
    pub bump: u8,

    /// Bump seed for the token vault PDA.
    pub vault_bump: u8,
}

/// Per-creator, append-only history of deployed launches. The vector length is
/// the next deployment index, which keeps salts monotonic per creator.
#[account] // seed [REGISTRY_SEED_PREFIX, creator]
#[derive(InitSpace)]
pub struct CreatorRegistry {
    pub creator: Pubkey,

    #[max_len(MAX_LAUNCHES_PER_CREATOR)]
    pub launches: Vec<Pubkey>,

    /// Bump seed for the registry PDA.
    pub bump: u8,
}

#[account] // seed [CONTRIBUTION_SEED_PREFIX, launch, buyer]
#[derive(InitSpace)]
pub struct Contribution {
    /// The launch this contribution belongs to.
    pub launch: Pubkey,

    /// The contributing buyer.
    pub buyer: Pubkey,

    /// Cumulative lamports contributed. Zeroed on refund.
    pub amount: u64,

    /// Set permanently once tokens have been claimed.
    pub claimed: bool,

    /// Set permanently once the contribution has been refunded.
    pub refunded: bool,

    /// Bump seed for the Contribution PDA.
    pub bump: u8,
}

/// Price-setting pool seeded by the liquidity bootstrap. The currency side is
/// held as lamports on the pool PDA itself; the token side sits in the pool
/// vault. The pair is ordered by pubkey magnitude.
#[account] // seed [POOL_SEED_PREFIX, token_mint_0, token_mint_1, fee_tier_le]
#[derive(InitSpace)]
pub struct LiquidityPool {
    pub token_mint_0: Pubkey,
    pub token_mint_1: Pubkey,

    /// Vault holding the sale-asset side of the pair.
    pub token_vault: Pubkey,

    /// The launch that seeded this pool.
    pub launch: Pubkey,

    /// Fee tier in hundredths of a bip.
    pub fee_tier: u16,

    /// Initial price as sqrt(reserve_1 / reserve_0) in Q64.96.
    pub sqrt_price_x96: u128,

    /// Reserves at bootstrap, aligned with the mint ordering.
    pub reserve_0: u64,
    pub reserve_1: u64,

    /// Bump seed for the pool PDA.
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(start: i64, end: i64, soft_cap: u64) -> LaunchConfig {
        LaunchConfig {
            soft_cap,
            hard_cap: soft_cap * 4,
            amount_for_sale: 1,
            listing_rate: 1,
            minimum_buy: 1,
            maximum_buy: 1,
            percentage_for_liquidity: 60,
            percentage_for_team: 40,
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn phase_follows_the_clock() {
        let cfg = config(100, 200, 30);
        assert_eq!(launch_phase(&cfg, 99, 0), LaunchPhase::Pending);
        assert_eq!(launch_phase(&cfg, 100, 0), LaunchPhase::Active);
        assert_eq!(launch_phase(&cfg, 199, 0), LaunchPhase::Active);
        assert_eq!(launch_phase(&cfg, 200, 0), LaunchPhase::Failed);
    }

    #[test]
    fn outcome_resolves_on_soft_cap() {
        let cfg = config(100, 200, 30);
        assert_eq!(launch_phase(&cfg, 200, 29), LaunchPhase::Failed);
        assert_eq!(launch_phase(&cfg, 200, 30), LaunchPhase::Successful);
        assert_eq!(launch_phase(&cfg, i64::MAX, 30), LaunchPhase::Successful);
    }

    #[test]
    fn raise_total_is_irrelevant_while_active() {
        let cfg = config(100, 200, 30);
        // Hitting the soft cap early does not end the sale.
        assert_eq!(launch_phase(&cfg, 150, 120), LaunchPhase::Active);
    }
}
