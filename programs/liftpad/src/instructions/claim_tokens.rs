use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONTRIBUTION_SEED_PREFIX, LAUNCH_SEED_PREFIX, VAULT_SEED_PREFIX};
use crate::error::ErrorCode;
use crate::events::TokensClaimed;
use crate::math::token_entitlement;
use crate::state::{launch_phase, Contribution, Launch, LaunchPhase};

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    pub buyer: Signer<'info>,

    #[account(
        seeds = [LAUNCH_SEED_PREFIX, launch.creator.as_ref(), &launch.index.to_le_bytes()],
        bump = launch.bump,
    )]
    pub launch: Account<'info, Launch>,

    #[account(
        mut,
        seeds = [CONTRIBUTION_SEED_PREFIX, launch.key().as_ref(), buyer.key().as_ref()],
        bump = contribution.bump,
        constraint = contribution.buyer == buyer.key() @ ErrorCode::Unauthorized,
    )]
    pub contribution: Account<'info, Contribution>,

    #[account(
        mut,
        seeds = [VAULT_SEED_PREFIX, launch.key().as_ref()],
        bump = launch.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Buyer's token account receiving the entitlement.
    #[account(
        mut,
        constraint = buyer_token_account.mint == launch.mint @ ErrorCode::WrongMint,
        constraint = buyer_token_account.owner == buyer.key() @ ErrorCode::Unauthorized,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let launch = &ctx.accounts.launch;
    let contribution = &ctx.accounts.contribution;
    let now = Clock::get()?.unix_timestamp;

    match launch_phase(&launch.config, now, launch.total_raised) {
        LaunchPhase::Pending | LaunchPhase::Active => return err!(ErrorCode::SaleStillActive),
        LaunchPhase::Failed => return err!(ErrorCode::SaleNotSuccessful),
        LaunchPhase::Successful => {}
    }

    require!(!contribution.claimed, ErrorCode::AlreadyClaimed);
    require!(contribution.amount > 0, ErrorCode::NothingContributed);

    let amount = token_entitlement(contribution.amount, launch.config.listing_rate)?;
    require!(
        amount <= ctx.accounts.vault.amount,
        ErrorCode::InsufficientEscrowBalance
    );

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
                to: ctx.accounts.buyer_token_account.to_account_info(),
                authority: ctx.accounts.launch.to_account_info(),
            },
            &[&launch_seeds[..]],
        ),
        amount,
    )?;

    ctx.accounts.contribution.claimed = true;

    emit!(TokensClaimed {
        launch: ctx.accounts.launch.key(),
        buyer: ctx.accounts.buyer.key(),
        mint: ctx.accounts.launch.mint,
        amount,
    });

    Ok(())
}
