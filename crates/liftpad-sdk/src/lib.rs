mod address_finder;
mod registry;

pub use address_finder::AddressFinder;
pub use registry::*;

// Instruction builders and free-function address finders from the program's
// sdk feature.
pub use liftpad::sdk::*;

// Pure launch math, usable off-chain to precompute escrow requirements and
// pool prices before the launch PDA exists.
pub use liftpad::math::{
    encode_sqrt_price_x96, percentage_share, token_entitlement, total_tokens_needed,
};

pub use liftpad::state::*;

// Re-export the program ID
pub use liftpad::ID as PROGRAM_ID;
