//! Owner-only escape hatches for stuck-fund recovery.
//!
//! These deliberately bypass the phase machine and its accounting invariants.
//! They are gated on the launch creator alone and emit a dedicated event so
//! every use is auditable apart from the ordinary lifecycle.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::LAUNCH_SEED_PREFIX;
use crate::error::ErrorCode;
use crate::events::EmergencyWithdrawal;
use crate::state::Launch;

#[derive(Accounts)]
pub struct EmergencyWithdrawCurrency<'info> {
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

pub fn handle_emergency_withdraw_currency(
    ctx: Context<EmergencyWithdrawCurrency>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    // The launch account must stay rent-exempt or the runtime reaps it.
    let launch_info = ctx.accounts.launch.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(launch_info.data_len());
    require!(
        launch_info.lamports() >= rent_floor + amount,
        ErrorCode::InsufficientEscrowBalance
    );

    {
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

    emit!(EmergencyWithdrawal {
        launch: ctx.accounts.launch.key(),
        creator: ctx.accounts.creator.key(),
        mint: None,
        amount,
    });
    msg!(
        "EMERGENCY: {} lamports withdrawn from launch {} by its creator",
        amount,
        ctx.accounts.launch.key()
    );

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdrawTokens<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [LAUNCH_SEED_PREFIX, launch.creator.as_ref(), &launch.index.to_le_bytes()],
        bump = launch.bump,
        has_one = creator @ ErrorCode::Unauthorized,
    )]
    pub launch: Account<'info, Launch>,

    /// Any token account under the launch PDA's authority, the escrow vault
    /// included; covers assets accidentally sent to the launch as well.
    #[account(
        mut,
        constraint = stuck_token_account.owner == launch.key() @ ErrorCode::Unauthorized,
    )]
    pub stuck_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination_token_account.mint == stuck_token_account.mint @ ErrorCode::WrongMint,
        constraint = destination_token_account.owner == creator.key() @ ErrorCode::Unauthorized,
    )]
    pub destination_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_emergency_withdraw_tokens(
    ctx: Context<EmergencyWithdrawTokens>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(
        amount <= ctx.accounts.stuck_token_account.amount,
        ErrorCode::InsufficientEscrowBalance
    );

    let launch = &ctx.accounts.launch;
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
                from: ctx.accounts.stuck_token_account.to_account_info(),
                to: ctx.accounts.destination_token_account.to_account_info(),
                authority: ctx.accounts.launch.to_account_info(),
            },
            &[&launch_seeds[..]],
        ),
        amount,
    )?;

    emit!(EmergencyWithdrawal {
        launch: ctx.accounts.launch.key(),
        creator: ctx.accounts.creator.key(),
        mint: Some(ctx.accounts.stuck_token_account.mint),
        amount,
    });
    msg!(
        "EMERGENCY: {} base units of {} withdrawn from launch {} by its creator",
        amount,
        ctx.accounts.stuck_token_account.mint,
        ctx.accounts.launch.key()
    );

    Ok(())
}
