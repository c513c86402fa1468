use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{CONTRIBUTION_SEED_PREFIX, LAUNCH_SEED_PREFIX};
use crate::error::ErrorCode;
use crate::events::TokensPurchased;
use crate::state::{launch_phase, Contribution, Launch, LaunchPhase};

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_SEED_PREFIX, launch.creator.as_ref(), &launch.index.to_le_bytes()],
        bump = launch.bump,
    )]
    pub launch: Account<'info, Launch>,

    /// Created lazily on the buyer's first purchase, accumulated afterwards.
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Contribution::INIT_SPACE,
        seeds = [CONTRIBUTION_SEED_PREFIX, launch.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub contribution: Account<'info, Contribution>,

    pub system_program: Program<'info, System>,
}

pub fn handle_buy_tokens(ctx: Context<BuyTokens>, amount: u64) -> Result<()> {
    let launch = &ctx.accounts.launch;
    let config = &launch.config;
    let now = Clock::get()?.unix_timestamp;

    match launch_phase(config, now, launch.total_raised) {
        LaunchPhase::Pending => return err!(ErrorCode::SaleNotStarted),
        LaunchPhase::Successful | LaunchPhase::Failed => return err!(ErrorCode::SaleEnded),
        LaunchPhase::Active => {}
    }

    // Bounds are enforced per call only; a buyer may exceed maximum_buy in
    // aggregate across calls. Matches the original product behavior.
    require!(amount >= config.minimum_buy, ErrorCode::BelowMinimumBuy);
    require!(amount <= config.maximum_buy, ErrorCode::AboveMaximumBuy);

    let new_total = launch
        .total_raised
        .checked_add(amount)
        .ok_or(ErrorCode::NumericOverflow)?;
    require!(new_total <= config.hard_cap, ErrorCode::HardCapExceeded);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.launch.to_account_info(),
            },
        ),
        amount,
    )?;

    let launch_key = ctx.accounts.launch.key();
    let buyer_key = ctx.accounts.buyer.key();

    let contribution = &mut ctx.accounts.contribution;
    contribution.launch = launch_key;
    contribution.buyer = buyer_key;
    contribution.bump = ctx.bumps.contribution;
    contribution.amount = contribution
        .amount
        .checked_add(amount)
        .ok_or(ErrorCode::NumericOverflow)?;

    let launch = &mut ctx.accounts.launch;
    launch.total_raised = new_total;

    emit!(TokensPurchased {
        launch: launch_key,
        buyer: buyer_key,
        amount,
        total_raised: new_total,
    });

    Ok(())
}
