use anchor_lang::prelude::*;

use crate::{
    CONTRIBUTION_SEED_PREFIX, ID as LIFTPAD_PROGRAM_ID, LAUNCH_SEED_PREFIX, POOL_SEED_PREFIX,
    POOL_VAULT_SEED_PREFIX, REGISTRY_SEED_PREFIX, TREASURY_SEED_PREFIX, VAULT_SEED_PREFIX,
};

pub fn find_registry_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REGISTRY_SEED_PREFIX, creator.as_ref()],
        &LIFTPAD_PROGRAM_ID,
    )
}

/// The deterministic-deployment prediction: for a given creator and registry
/// index this equals the launch PDA `initialize_launch` will create, so a
/// creator can fund allowances against the address before it exists.
pub fn find_launch_address(creator: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LAUNCH_SEED_PREFIX, creator.as_ref(), &index.to_le_bytes()],
        &LIFTPAD_PROGRAM_ID,
    )
}

pub fn find_vault_address(launch: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED_PREFIX, launch.as_ref()], &LIFTPAD_PROGRAM_ID)
}

pub fn find_contribution_address(launch: &Pubkey, buyer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CONTRIBUTION_SEED_PREFIX, launch.as_ref(), buyer.as_ref()],
        &LIFTPAD_PROGRAM_ID,
    )
}

pub fn find_treasury_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED_PREFIX], &LIFTPAD_PROGRAM_ID)
}

pub fn find_pool_address(
    token_mint_0: &Pubkey,
    token_mint_1: &Pubkey,
    fee_tier: u16,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            POOL_SEED_PREFIX,
            token_mint_0.as_ref(),
            token_mint_1.as_ref(),
            &fee_tier.to_le_bytes(),
        ],
        &LIFTPAD_PROGRAM_ID,
    )
}

pub fn find_pool_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_VAULT_SEED_PREFIX, pool.as_ref()], &LIFTPAD_PROGRAM_ID)
}
