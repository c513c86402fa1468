use anchor_lang::prelude::*;
use anchor_spl::token::{self, spl_token::native_mint, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    ALLOWED_FEE_TIERS, LAUNCH_SEED_PREFIX, POOL_SEED_PREFIX, POOL_VAULT_SEED_PREFIX,
    VAULT_SEED_PREFIX,
};
use crate::error::ErrorCode;
use crate::events::LiquidityDeployed;
use crate::math::{percentage_share, token_entitlement};
use crate::state::{launch_phase, Launch, LaunchPhase, LiquidityPool};

#[derive(Accounts)]
#[instruction(fee_tier: u16)]
pub struct DeployLiquidity<'info> {
    /// Permissionless: anyone may trigger the bootstrap once the outcome is
    /// fixed, since the split is deterministic and the funds are escrowed.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_SEED_PREFIX, launch.creator.as_ref(), &launch.index.to_le_bytes()],
        bump = launch.bump,
    )]
    pub launch: Account<'info, Launch>,

    #[account(
        mut,
        seeds = [VAULT_SEED_PREFIX, launch.key().as_ref()],
        bump = launch.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Mint of the asset being sold; backs the pool-side token vault.
    #[account(constraint = sale_mint.key() == launch.mint @ ErrorCode::WrongMint)]
    pub sale_mint: Account<'info, Mint>,

    /// Lower-ordered mint of the pair (ordered by pubkey magnitude).
    pub token_mint_0: Account<'info, Mint>,

    /// Higher-ordered mint of the pair.
    pub token_mint_1: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        space = 8 + LiquidityPool::INIT_SPACE,
        seeds = [
            POOL_SEED_PREFIX,
            token_mint_0.key().as_ref(),
            token_mint_1.key().as_ref(),
            &fee_tier.to_le_bytes(),
        ],
        bump
    )]
    pub pool: Account<'info, LiquidityPool>,

    /// Pool-side vault for the sale asset; the currency side is carried as
    /// lamports on the pool PDA.
    #[account(
        init,
        payer = payer,
        token::mint = sale_mint,
        token::authority = pool,
        seeds = [POOL_VAULT_SEED_PREFIX, pool.key().as_ref()],
        bump
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_deploy_liquidity(
    ctx: Context<DeployLiquidity>,
    fee_tier: u16,
    initial_sqrt_price_x96: u128,
) -> Result<()> {
    let launch = &ctx.accounts.launch;
    let now = Clock::get()?.unix_timestamp;

    match launch_phase(&launch.config, now, launch.total_raised) {
        LaunchPhase::Pending | LaunchPhase::Active => return err!(ErrorCode::SaleStillActive),
        LaunchPhase::Failed => return err!(ErrorCode::SaleNotSuccessful),
        LaunchPhase::Successful => {}
    }
    require!(!launch.liquidity_deployed, ErrorCode::LiquidityAlreadyDeployed);
    require!(
        ALLOWED_FEE_TIERS.contains(&fee_tier),
        ErrorCode::InvalidFeeTier
    );

    let mint_0 = ctx.accounts.token_mint_0.key();
    let mint_1 = ctx.accounts.token_mint_1.key();
    require!(mint_0 < mint_1, ErrorCode::InvalidTokenOrder);

    // The pair is always the sale asset against the native mint.
    let pair = (mint_0, mint_1);
    require!(
        pair == (native_mint::ID, launch.mint) || pair == (launch.mint, native_mint::ID),
        ErrorCode::InvalidPoolMint
    );

    let currency_amount =
        percentage_share(launch.total_raised, launch.config.percentage_for_liquidity)?;
    let token_amount = token_entitlement(currency_amount, launch.config.listing_rate)?;

    require!(
        token_amount <= ctx.accounts.vault.amount,
        ErrorCode::InsufficientLiquidityFunds
    );
    let launch_info = ctx.accounts.launch.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(launch_info.data_len());
    require!(
        launch_info.lamports() >= rent_floor + currency_amount,
        ErrorCode::InsufficientLiquidityFunds
    );

    // Token side: vault -> pool vault, signed by the launch PDA.
    let creator = launch.creator;
    let index_bytes = launch.index.to_le_bytes();
    let launch_seeds = &[
        LAUNCH_SEED_PREFIX,
        creator.as_ref(),
        index_bytes.as_ref(),
        &[launch.bump],
    ];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.launch.to_account_info(),
            },
            &[&launch_seeds[..]],
        ),
        token_amount,
    )?;

    // Currency side: launch PDA -> pool PDA, both program-owned.
    {
        let mut launch_lamports = launch_info.try_borrow_mut_lamports()?;
        **launch_lamports = launch_lamports
            .checked_sub(currency_amount)
            .ok_or(ErrorCode::InsufficientLiquidityFunds)?;
    }
    {
        let pool_info = ctx.accounts.pool.to_account_info();
        let mut pool_lamports = pool_info.try_borrow_mut_lamports()?;
        **pool_lamports = pool_lamports
            .checked_add(currency_amount)
            .ok_or(ErrorCode::NumericOverflow)?;
    }

    // Reserves align with the mint ordering: the native mint carries the
    // currency side, the sale mint the token side.
    let (reserve_0, reserve_1) = if mint_0 == native_mint::ID {
        (currency_amount, token_amount)
    } else {
        (token_amount, currency_amount)
    };

    let launch_key = ctx.accounts.launch.key();
    let pool_key = ctx.accounts.pool.key();

    let pool = &mut ctx.accounts.pool;
    pool.set_inner(LiquidityPool {
        token_mint_0: mint_0,
        token_mint_1: mint_1,
        token_vault: ctx.accounts.pool_vault.key(),
        launch: launch_key,
        fee_tier,
        sqrt_price_x96: initial_sqrt_price_x96,
        reserve_0,
        reserve_1,
        bump: ctx.bumps.pool,
    });

    ctx.accounts.launch.liquidity_deployed = true;

    emit!(LiquidityDeployed {
        launch: launch_key,
        pool: pool_key,
        token_mint_0: mint_0,
        token_mint_1: mint_1,
        fee_tier,
        sqrt_price_x96: initial_sqrt_price_x96,
        currency_amount,
        token_amount,
    });
    msg!(
        "Pool {} seeded with {} lamports and {} base units at sqrt price {}",
        pool_key,
        currency_amount,
        token_amount,
        initial_sqrt_price_x96
    );

    Ok(())
}
