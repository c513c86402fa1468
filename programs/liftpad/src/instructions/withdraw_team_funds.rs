use anchor_lang::prelude::*;

use crate::constants::LAUNCH_SEED_PREFIX;
use crate::error::ErrorCode;
use crate::events::TeamFundsWithdrawn;
use crate::math::percentage_share;
use crate::state::{launch_phase, Launch, LaunchPhase};

#[derive(Accounts)]
pub struct WithdrawTeamFunds<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [LAUNCH_SEED_PREFIX, launch.creator.as_ref(), &launch.index.to_le_bytes()],
        bump = launch.bump,
        has_one = creator @ ErrorCode::Unauthorized,
    )]
    pub launch: Account<'info, Launch>,
}

pub fn handle_withdraw_team_funds(ctx: Context<WithdrawTeamFunds>) -> Result<()> {
    let launch = &ctx.accounts.launch;
    let now = Clock::get()?.unix_timestamp;

    match launch_phase(&launch.config, now, launch.total_raised) {
        LaunchPhase::Pending | LaunchPhase::Active => return err!(ErrorCode::SaleStillActive),
        LaunchPhase::Failed => return err!(ErrorCode::SaleNotSuccessful),
        LaunchPhase::Successful => {}
    }
    require!(!launch.team_withdrawn, ErrorCode::TeamAlreadyWithdrawn);

    // The team share is disjoint from the liquidity share by construction:
    // the two percentages sum to exactly 100.
    let amount = percentage_share(launch.total_raised, launch.config.percentage_for_team)?;

    {
        let launch_info = ctx.accounts.launch.to_account_info();
        let mut launch_lamports = launch_info.try_borrow_mut_lamports()?;
        **launch_lamports = launch_lamports
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientEscrowBalance)?;
    }
    {
        let creator_info = ctx.accounts.creator.to_account_info();
        let mut creator_lamports = creator_info.try_borrow_mut_lamports()?;
        **creator_lamports = creator_lamports
            .checked_add(amount)
            .ok_or(ErrorCode::NumericOverflow)?;
    }

    ctx.accounts.launch.team_withdrawn = true;

    emit!(TeamFundsWithdrawn {
        launch: ctx.accounts.launch.key(),
        creator: ctx.accounts.creator.key(),
        amount,
    });

    Ok(())
}
