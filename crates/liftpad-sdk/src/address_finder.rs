use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
use anchor_spl::token::ID as TOKEN_PROGRAM_ID;

use liftpad::{
    CONTRIBUTION_SEED_PREFIX, ID as LIFTPAD_PROGRAM_ID, LAUNCH_SEED_PREFIX, POOL_SEED_PREFIX,
    POOL_VAULT_SEED_PREFIX, REGISTRY_SEED_PREFIX, TREASURY_SEED_PREFIX, VAULT_SEED_PREFIX,
};

/// Deterministic address derivation for every PDA the program owns.
///
/// `find_launch_address(creator, index)` computed here, before any
/// transaction is submitted, is byte-identical to the address
/// `initialize_launch` deploys to for the same creator and registry index.
pub struct AddressFinder {
    pub program_id: Pubkey,

    pub system_program_id: Pubkey,
    pub token_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey, system_program_id: Pubkey, token_program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id,
            token_program_id,
        }
    }

    pub fn find_registry_address(&self, creator: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[REGISTRY_SEED_PREFIX, creator.as_ref()],
            &self.program_id,
        )
    }

    pub fn find_launch_address(&self, creator: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[LAUNCH_SEED_PREFIX, creator.as_ref(), &index.to_le_bytes()],
            &self.program_id,
        )
    }

    pub fn find_vault_address(&self, launch: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED_PREFIX, launch.as_ref()], &self.program_id)
    }

    pub fn find_contribution_address(&self, launch: &Pubkey, buyer: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[CONTRIBUTION_SEED_PREFIX, launch.as_ref(), buyer.as_ref()],
            &self.program_id,
        )
    }

    pub fn find_treasury_address(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TREASURY_SEED_PREFIX], &self.program_id)
    }

    pub fn find_pool_address(
        &self,
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
            &self.program_id,
        )
    }

    pub fn find_pool_vault_address(&self, pool: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[POOL_VAULT_SEED_PREFIX, pool.as_ref()], &self.program_id)
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(LIFTPAD_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID)
    }
}
