use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // --- timing ---
    #[msg("Sale has not started yet.")]
    SaleNotStarted,
    #[msg("Sale has already ended.")]
    SaleEnded,
    #[msg("Sale is still active.")]
    SaleStillActive,

    // --- per-call bounds ---
    #[msg("Amount is less than the minimum buy.")]
    BelowMinimumBuy,
    #[msg("Amount is more than the maximum buy.")]
    AboveMaximumBuy,
    #[msg("Purchase would push the raise past the hard cap.")]
    HardCapExceeded,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,

    // --- one-shot state guards ---
    #[msg("Tokens for this contribution have already been claimed.")]
    AlreadyClaimed,
    #[msg("This contribution has already been refunded.")]
    AlreadyRefunded,
    #[msg("Caller has no recorded contribution.")]
    NothingContributed,
    #[msg("Team funds have already been withdrawn.")]
    TeamAlreadyWithdrawn,
    #[msg("Liquidity has already been deployed for this launch.")]
    LiquidityAlreadyDeployed,

    // --- outcome mismatch ---
    #[msg("Sale did not reach its soft cap; token claims are unavailable.")]
    SaleNotSuccessful,
    #[msg("Sale reached its soft cap; refunds are unavailable.")]
    SaleNotFailed,

    // --- authorization ---
    #[msg("Caller is not authorized for this action.")]
    Unauthorized,

    // --- launch configuration ---
    #[msg("Soft cap must be positive and no greater than the hard cap.")]
    InvalidCapConfiguration,
    #[msg("Soft cap cannot be less than 25% of the hard cap.")]
    SoftCapTooLow,
    #[msg("Minimum buy must be positive and no greater than the maximum buy.")]
    InvalidBuyLimits,
    #[msg("Liquidity and team percentages must sum to exactly 100.")]
    InvalidPercentageSplit,
    #[msg("Liquidity percentage cannot be less than 60.")]
    LiquidityPercentageTooLow,
    #[msg("Start date must precede end date.")]
    InvalidSchedule,
    #[msg("Launch index does not match the creator's registry length.")]
    InvalidLaunchIndex,
    #[msg("Creator registry is full.")]
    RegistryFull,
    #[msg("Creator cannot cover the flat creation fee.")]
    InsufficientCreationFee,

    // --- escrow / liquidity bootstrap ---
    #[msg("Token account mint does not match the sale asset.")]
    WrongMint,
    #[msg("Escrowed balance is insufficient for this transfer.")]
    InsufficientEscrowBalance,
    #[msg("The liquidity share of the raise is no longer escrowed.")]
    InsufficientLiquidityFunds,
    #[msg("Fee tier is not one of the allowed values.")]
    InvalidFeeTier,
    #[msg("Token pair must be passed ordered by pubkey.")]
    InvalidTokenOrder,
    #[msg("Pool pair must be the sale asset and the native mint.")]
    InvalidPoolMint,

    // --- numeric ---
    #[msg("A calculation resulted in a numeric overflow.")]
    NumericOverflow,
}
