use anchor_lang::solana_program::{
    instruction::Instruction, system_program::ID as SYSTEM_PROGRAM_ID,
};
use anchor_lang::{prelude::*, InstructionData as _};
use anchor_spl::token::ID as TOKEN_PROGRAM_ID;

use crate::state::LaunchConfig;
use crate::ID as LIFTPAD_PROGRAM_ID;

#[allow(clippy::too_many_arguments)]
pub fn build_initialize_launch_ix(
    creator: Pubkey,
    mint: Pubkey,
    registry: Pubkey,
    launch: Pubkey,
    vault: Pubkey,
    creator_token_account: Pubkey,
    treasury: Pubkey,
    index: u64,
    config: LaunchConfig,
) -> Result<(
    Instruction,
    crate::accounts::InitializeLaunch,
    crate::instruction::InitializeLaunch,
)> {
    let ix_accounts = crate::accounts::InitializeLaunch {
        creator,
        mint,
        registry,
        launch,
        vault,
        creator_token_account,
        treasury,
        token_program: TOKEN_PROGRAM_ID,
        system_program: SYSTEM_PROGRAM_ID,
    };

    let ix_data = crate::instruction::InitializeLaunch { index, config };

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_buy_tokens_ix(
    buyer: Pubkey,
    launch: Pubkey,
    contribution: Pubkey,
    amount: u64,
) -> Result<(
    Instruction,
    crate::accounts::BuyTokens,
    crate::instruction::BuyTokens,
)> {
    let ix_accounts = crate::accounts::BuyTokens {
        buyer,
        launch,
        contribution,
        system_program: SYSTEM_PROGRAM_ID,
    };

    let ix_data = crate::instruction::BuyTokens { amount };

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_claim_tokens_ix(
    buyer: Pubkey,
    launch: Pubkey,
    contribution: Pubkey,
    vault: Pubkey,
    buyer_token_account: Pubkey,
) -> Result<(
    Instruction,
    crate::accounts::ClaimTokens,
    crate::instruction::ClaimTokens,
)> {
    let ix_accounts = crate::accounts::ClaimTokens {
        buyer,
        launch,
        contribution,
        vault,
        buyer_token_account,
        token_program: TOKEN_PROGRAM_ID,
    };

    let ix_data = crate::instruction::ClaimTokens {};

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_claim_refund_ix(
    buyer: Pubkey,
    launch: Pubkey,
    contribution: Pubkey,
) -> Result<(
    Instruction,
    crate::accounts::ClaimRefund,
    crate::instruction::ClaimRefund,
)> {
    let ix_accounts = crate::accounts::ClaimRefund {
        buyer,
        launch,
        contribution,
    };

    let ix_data = crate::instruction::ClaimRefund {};

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_withdraw_team_funds_ix(
    creator: Pubkey,
    launch: Pubkey,
) -> Result<(
    Instruction,
    crate::accounts::WithdrawTeamFunds,
    crate::instruction::WithdrawTeamFunds,
)> {
    let ix_accounts = crate::accounts::WithdrawTeamFunds { creator, launch };

    let ix_data = crate::instruction::WithdrawTeamFunds {};

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

#[allow(clippy::too_many_arguments)]
pub fn build_deploy_liquidity_ix(
    payer: Pubkey,
    launch: Pubkey,
    vault: Pubkey,
    sale_mint: Pubkey,
    token_mint_0: Pubkey,
    token_mint_1: Pubkey,
    pool: Pubkey,
    pool_vault: Pubkey,
    fee_tier: u16,
    initial_sqrt_price_x96: u128,
) -> Result<(
    Instruction,
    crate::accounts::DeployLiquidity,
    crate::instruction::DeployLiquidity,
)> {
    let ix_accounts = crate::accounts::DeployLiquidity {
        payer,
        launch,
        vault,
        sale_mint,
        token_mint_0,
        token_mint_1,
        pool,
        pool_vault,
        token_program: TOKEN_PROGRAM_ID,
        system_program: SYSTEM_PROGRAM_ID,
    };

    let ix_data = crate::instruction::DeployLiquidity {
        fee_tier,
        initial_sqrt_price_x96,
    };

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_emergency_withdraw_currency_ix(
    creator: Pubkey,
    launch: Pubkey,
    amount: u64,
) -> Result<(
    Instruction,
    crate::accounts::EmergencyWithdrawCurrency,
    crate::instruction::EmergencyWithdrawCurrency,
)> {
    let ix_accounts = crate::accounts::EmergencyWithdrawCurrency { creator, launch };

    let ix_data = crate::instruction::EmergencyWithdrawCurrency { amount };

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_emergency_withdraw_tokens_ix(
    creator: Pubkey,
    launch: Pubkey,
    stuck_token_account: Pubkey,
    destination_token_account: Pubkey,
    amount: u64,
) -> Result<(
    Instruction,
    crate::accounts::EmergencyWithdrawTokens,
    crate::instruction::EmergencyWithdrawTokens,
)> {
    let ix_accounts = crate::accounts::EmergencyWithdrawTokens {
        creator,
        launch,
        stuck_token_account,
        destination_token_account,
        token_program: TOKEN_PROGRAM_ID,
    };

    let ix_data = crate::instruction::EmergencyWithdrawTokens { amount };

    let ix = Instruction {
        program_id: LIFTPAD_PROGRAM_ID,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}
