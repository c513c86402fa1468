use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    CREATION_FEE_LAMPORTS, LAUNCH_SEED_PREFIX, MAX_LAUNCHES_PER_CREATOR, MIN_LIQUIDITY_PERCENTAGE,
    REGISTRY_SEED_PREFIX, TREASURY_SEED_PREFIX, VAULT_SEED_PREFIX,
};
use crate::error::ErrorCode;
use crate::events::LaunchCreated;
use crate::math::total_tokens_needed;
use crate::state::{CreatorRegistry, Launch, LaunchConfig};

#[derive(Accounts)]
#[instruction(index: u64, config: LaunchConfig)]
pub struct InitializeLaunch<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Mint of the asset being sold.
    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorRegistry::INIT_SPACE,
        seeds = [REGISTRY_SEED_PREFIX, creator.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, CreatorRegistry>,

    /// The launch instance. Its address is a pure function of the creator and
    /// the registry length, so it is predictable before this transaction runs.
    #[account(
        init,
        payer = creator,
        space = 8 + Launch::INIT_SPACE,
        seeds = [LAUNCH_SEED_PREFIX, creator.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub launch: Account<'info, Launch>,

    /// Escrow vault for the sale and liquidity token allocations.
    #[account(
        init,
        payer = creator,
        token::mint = mint,
        token::authority = launch,
        seeds = [VAULT_SEED_PREFIX, launch.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Creator's token account funding the escrow.
    #[account(
        mut,
        constraint = creator_token_account.mint == mint.key() @ ErrorCode::WrongMint,
        constraint = creator_token_account.owner == creator.key() @ ErrorCode::Unauthorized,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    /// Flat-fee sink shared by every launch.
    #[account(
        mut,
        seeds = [TREASURY_SEED_PREFIX],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

fn validate_config(config: &LaunchConfig) -> Result<()> {
    require!(
        config.soft_cap > 0 && config.soft_cap <= config.hard_cap,
        ErrorCode::InvalidCapConfiguration
    );
    require!(
        config
            .soft_cap
            .checked_mul(4)
            .is_some_and(|quadrupled| quadrupled >= config.hard_cap),
        ErrorCode::SoftCapTooLow
    );
    require!(config.amount_for_sale > 0, ErrorCode::InvalidAmount);
    require!(config.listing_rate > 0, ErrorCode::InvalidAmount);
    require!(
        config.minimum_buy > 0 && config.minimum_buy <= config.maximum_buy,
        ErrorCode::InvalidBuyLimits
    );
    require!(
        config.percentage_for_liquidity as u16 + config.percentage_for_team as u16 == 100,
        ErrorCode::InvalidPercentageSplit
    );
    require!(
        config.percentage_for_liquidity >= MIN_LIQUIDITY_PERCENTAGE,
        ErrorCode::LiquidityPercentageTooLow
    );
    require!(
        config.start_date < config.end_date,
        ErrorCode::InvalidSchedule
    );
    Ok(())
}

pub fn handle_initialize_launch(
    ctx: Context<InitializeLaunch>,
    index: u64,
    config: LaunchConfig,
) -> Result<()> {
    validate_config(&config)?;

    let registry = &mut ctx.accounts.registry;
    require!(
        index == registry.launches.len() as u64,
        ErrorCode::InvalidLaunchIndex
    );
    require!(
        registry.launches.len() < MAX_LAUNCHES_PER_CREATOR,
        ErrorCode::RegistryFull
    );

    // Flat creation fee, forwarded to the shared treasury before any escrow
    // moves. The whole instruction reverts if the creator cannot pay.
    require!(
        ctx.accounts.creator.lamports() >= CREATION_FEE_LAMPORTS,
        ErrorCode::InsufficientCreationFee
    );
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        CREATION_FEE_LAMPORTS,
    )?;

    // Pull the full escrow up front: the sale allocation plus the tokens that
    // will pair with the liquidity share of a maximal raise.
    let tokens_needed = total_tokens_needed(
        config.hard_cap,
        config.amount_for_sale,
        config.percentage_for_liquidity,
        config.listing_rate,
    )?;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        tokens_needed,
    )?;

    let launch_key = ctx.accounts.launch.key();
    let creator_key = ctx.accounts.creator.key();

    if registry.launches.is_empty() {
        registry.creator = creator_key;
        registry.bump = ctx.bumps.registry;
    }
    registry.launches.push(launch_key);

    let launch = &mut ctx.accounts.launch;
    launch.set_inner(Launch {
        creator: creator_key,
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
        index,
        config,
        total_raised: 0,
        team_withdrawn: false,
        liquidity_deployed: false,
        bump: ctx.bumps.launch,
        vault_bump: ctx.bumps.vault,
    });

    emit!(LaunchCreated {
        launch: launch_key,
        creator: creator_key,
        mint: ctx.accounts.mint.key(),
        index,
        tokens_escrowed: tokens_needed,
    });
    msg!(
        "Launch {} created at registry index {} with {} base units escrowed",
        launch_key,
        index,
        tokens_needed
    );

    Ok(())
}
