use anchor_lang::prelude::*;

/// Seed prefixes for PDA derivation
#[constant]
pub const REGISTRY_SEED_PREFIX: &[u8] = b"registry";

#[constant]
pub const LAUNCH_SEED_PREFIX: &[u8] = b"launch";

#[constant]
pub const VAULT_SEED_PREFIX: &[u8] = b"vault";

#[constant]
pub const CONTRIBUTION_SEED_PREFIX: &[u8] = b"contribution";

#[constant]
pub const TREASURY_SEED_PREFIX: &[u8] = b"treasury";

#[constant]
pub const POOL_SEED_PREFIX: &[u8] = b"pool";

#[constant]
pub const POOL_VAULT_SEED_PREFIX: &[u8] = b"pool_vault";

/// Maximum number of launches a single creator can deploy through the registry.
pub const MAX_LAUNCHES_PER_CREATOR: usize = 32;

/// Flat fee forwarded to the treasury PDA on every launch creation (0.001 SOL).
pub const CREATION_FEE_LAMPORTS: u64 = 1_000_000;

/// Liquidity/team percentages are expressed out of 100.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// The liquidity share of a raise can never be configured below this floor.
pub const MIN_LIQUIDITY_PERCENTAGE: u8 = 60;

/// Pool fee tiers accepted by `deploy_liquidity`, in hundredths of a bip.
pub const ALLOWED_FEE_TIERS: [u16; 4] = [100, 500, 3000, 10000];
