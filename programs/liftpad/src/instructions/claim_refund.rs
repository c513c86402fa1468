use anchor_lang::prelude::*;

use crate::constants::{CONTRIBUTION_SEED_PREFIX, LAUNCH_SEED_PREFIX};
use crate::error::ErrorCode;
use crate::events::RefundIssued;
use crate::state::{launch_phase, Contribution, Launch, LaunchPhase};

#[derive(Accounts)]
pub struct ClaimRefund<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
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
}

pub fn handle_claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
    let launch = &ctx.accounts.launch;
    let contribution = &ctx.accounts.contribution;
    let now = Clock::get()?.unix_timestamp;

    match launch_phase(&launch.config, now, launch.total_raised) {
        LaunchPhase::Pending | LaunchPhase::Active => return err!(ErrorCode::SaleStillActive),
        LaunchPhase::Successful => return err!(ErrorCode::SaleNotFailed),
        LaunchPhase::Failed => {}
    }

    require!(!contribution.refunded, ErrorCode::AlreadyRefunded);
    let amount = contribution.amount;
    require!(amount > 0, ErrorCode::NothingContributed);

    // The launch PDA is program-owned, so lamports move by direct adjustment.
    // Refund liabilities never exceed what buyers paid in on top of rent.
    {
        let launch_info = ctx.accounts.launch.to_account_info();
        let mut launch_lamports = launch_info.try_borrow_mut_lamports()?;
        **launch_lamports = launch_lamports
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientEscrowBalance)?;
    }
    {
        let buyer_info = ctx.accounts.buyer.to_account_info();
        let mut buyer_lamports = buyer_info.try_borrow_mut_lamports()?;
        **buyer_lamports = buyer_lamports
            .checked_add(amount)
            .ok_or(ErrorCode::NumericOverflow)?;
    }

    let contribution = &mut ctx.accounts.contribution;
    contribution.amount = 0;
    contribution.refunded = true;

    emit!(RefundIssued {
        launch: ctx.accounts.launch.key(),
        buyer: ctx.accounts.buyer.key(),
        amount,
    });

    Ok(())
}
