#![cfg(feature = "test-sbf")]

use {
    liftpad::error::ErrorCode,
    liftpad_testing::{TestFixture, DEFAULT_MAXIMUM_BUY, DEFAULT_MINIMUM_BUY, SOL},
    mollusk_svm::result::Check,
    solana_sdk::{program_error::ProgramError, pubkey::Pubkey},
};

#[test]
fn test_buy_tokens_happy_path() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);

    let buyer = Pubkey::new_unique();
    fixture.airdrop(&buyer, 20 * SOL);
    let launch_lamports_before = fixture.lamports(&setup.launch);

    fixture.buy(&setup, &buyer, 10 * SOL, &[Check::success()]);

    // Contributions are held as lamports on the launch PDA.
    assert_eq!(
        fixture.lamports(&setup.launch),
        launch_lamports_before + 10 * SOL
    );
    assert_eq!(fixture.launch_state(&setup.launch).total_raised, 10 * SOL);

    let (contribution, _) = fixture
        .address_finder
        .find_contribution_address(&setup.launch, &buyer);
    let contribution = fixture.contribution_state(&contribution);
    assert_eq!(contribution.launch, setup.launch);
    assert_eq!(contribution.buyer, buyer);
    assert_eq!(contribution.amount, 10 * SOL);
    assert!(!contribution.claimed);
    assert!(!contribution.refunded);
}

#[test]
fn test_buy_tokens_before_start_fails() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    // Clock stays before start_date.

    let buyer = Pubkey::new_unique();
    fixture.airdrop(&buyer, 20 * SOL);

    fixture.buy(
        &setup,
        &buyer,
        SOL,
        &[Check::err(ProgramError::Custom(
            ErrorCode::SaleNotStarted as u32,
        ))],
    );
}

#[test]
fn test_buy_tokens_after_end_fails() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_past_end(&setup);

    let buyer = Pubkey::new_unique();
    fixture.airdrop(&buyer, 20 * SOL);

    fixture.buy(
        &setup,
        &buyer,
        SOL,
        &[Check::err(ProgramError::Custom(ErrorCode::SaleEnded as u32))],
    );
}

#[test]
fn test_buy_tokens_enforces_per_call_bounds() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);

    let buyer = Pubkey::new_unique();
    fixture.airdrop(&buyer, 50 * SOL);

    fixture.buy(
        &setup,
        &buyer,
        DEFAULT_MINIMUM_BUY - 1,
        &[Check::err(ProgramError::Custom(
            ErrorCode::BelowMinimumBuy as u32,
        ))],
    );
    fixture.buy(
        &setup,
        &buyer,
        DEFAULT_MAXIMUM_BUY + 1,
        &[Check::err(ProgramError::Custom(
            ErrorCode::AboveMaximumBuy as u32,
        ))],
    );

    // Boundary values are accepted.
    fixture.buy(&setup, &buyer, DEFAULT_MINIMUM_BUY, &[Check::success()]);
    fixture.buy(&setup, &buyer, DEFAULT_MAXIMUM_BUY, &[Check::success()]);
}

/// The maximum is a per-purchase bound, not a cumulative one: repeat buyers
/// accumulate a single contribution that may exceed maximum_buy in aggregate.
#[test]
fn test_buy_tokens_accumulates_across_calls() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);

    let buyer = Pubkey::new_unique();
    fixture.airdrop(&buyer, 30 * SOL);

    fixture.buy(&setup, &buyer, 10 * SOL, &[Check::success()]);
    fixture.buy(&setup, &buyer, 10 * SOL, &[Check::success()]);

    let (contribution, _) = fixture
        .address_finder
        .find_contribution_address(&setup.launch, &buyer);
    assert_eq!(fixture.contribution_state(&contribution).amount, 20 * SOL);
    assert_eq!(fixture.launch_state(&setup.launch).total_raised, 20 * SOL);
}

#[test]
fn test_buy_tokens_respects_hard_cap_headroom() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);

    // Fill to 99 of the 100 SOL hard cap.
    for _ in 0..9 {
        let buyer = Pubkey::new_unique();
        fixture.airdrop(&buyer, 11 * SOL);
        fixture.buy(&setup, &buyer, 10 * SOL, &[Check::success()]);
    }
    let late_buyer = Pubkey::new_unique();
    fixture.airdrop(&late_buyer, 11 * SOL);
    fixture.buy(&setup, &late_buyer, 9 * SOL, &[Check::success()]);
    assert_eq!(fixture.launch_state(&setup.launch).total_raised, 99 * SOL);

    // A purchase that would push past the cap is rejected outright, even
    // though it is within the per-call bounds.
    let last_buyer = Pubkey::new_unique();
    fixture.airdrop(&last_buyer, 11 * SOL);
    fixture.buy(
        &setup,
        &last_buyer,
        2 * SOL,
        &[Check::err(ProgramError::Custom(
            ErrorCode::HardCapExceeded as u32,
        ))],
    );

    // Exactly filling the remaining headroom is fine.
    fixture.buy(&setup, &last_buyer, SOL, &[Check::success()]);
    assert_eq!(fixture.launch_state(&setup.launch).total_raised, 100 * SOL);

    // And the cap is then exhausted for everyone.
    fixture.buy(
        &setup,
        &last_buyer,
        SOL,
        &[Check::err(ProgramError::Custom(
            ErrorCode::HardCapExceeded as u32,
        ))],
    );
}
