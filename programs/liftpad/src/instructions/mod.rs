pub mod buy_tokens;
pub mod claim_refund;
pub mod claim_tokens;
pub mod deploy_liquidity;
pub mod emergency_withdraw;
pub mod initialize_launch;
pub mod withdraw_team_funds;

pub use buy_tokens::*;
pub use claim_refund::*;
pub use claim_tokens::*;
pub use deploy_liquidity::*;
pub use emergency_withdraw::*;
pub use initialize_launch::*;
pub use withdraw_team_funds::*;
