use anchor_lang::AccountDeserialize;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use liftpad::state::CreatorRegistry;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry account data could not be deserialized: {0}")]
    Deserialize(#[from] anchor_lang::error::Error),
}

/// Decodes a `CreatorRegistry` account fetched from the chain.
pub fn read_registry(account_data: &[u8]) -> Result<CreatorRegistry, RegistryError> {
    Ok(CreatorRegistry::try_deserialize(&mut &*account_data)?)
}

/// Number of launches the creator has deployed; also the salt the next
/// `initialize_launch` must use.
pub fn deployed_count(registry: &CreatorRegistry) -> u64 {
    registry.launches.len() as u64
}

/// Append-only, ordered history of the creator's launch addresses.
pub fn deployed_launches(registry: &CreatorRegistry) -> &[Pubkey] {
    &registry.launches
}
