#![cfg(feature = "test-sbf")]

use {
    liftpad::error::ErrorCode,
    liftpad_sdk::build_withdraw_team_funds_ix,
    liftpad_testing::{TestFixture, SOL},
    mollusk_svm::result::Check,
    solana_sdk::{program_error::ProgramError, pubkey::Pubkey},
};

fn successful_launch(fixture: &mut TestFixture) -> liftpad_testing::LaunchSetup {
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);
    for _ in 0..3 {
        let buyer = Pubkey::new_unique();
        fixture.airdrop(&buyer, 11 * SOL);
        fixture.buy(&setup, &buyer, 10 * SOL, &[Check::success()]);
    }
    fixture.warp_past_end(&setup);
    setup
}

/// 40% of a 30 SOL raise goes to the team; 12 SOL.
#[test]
fn test_withdraw_team_funds_pays_team_share() {
    let mut fixture = TestFixture::new();
    let setup = successful_launch(&mut fixture);

    let creator = fixture.creator;
    let creator_before = fixture.lamports(&creator);
    let launch_before = fixture.lamports(&setup.launch);

    fixture.withdraw_team_funds(&setup, &[Check::success()]);

    assert_eq!(fixture.lamports(&creator), creator_before + 12 * SOL);
    assert_eq!(fixture.lamports(&setup.launch), launch_before - 12 * SOL);
    assert!(fixture.launch_state(&setup.launch).team_withdrawn);
}

#[test]
fn test_withdraw_team_funds_twice_fails() {
    let mut fixture = TestFixture::new();
    let setup = successful_launch(&mut fixture);

    fixture.withdraw_team_funds(&setup, &[Check::success()]);

    let creator = fixture.creator;
    let balance_after_first = fixture.lamports(&creator);

    fixture.withdraw_team_funds(
        &setup,
        &[Check::err(ProgramError::Custom(
            ErrorCode::TeamAlreadyWithdrawn as u32,
        ))],
    );

    assert_eq!(fixture.lamports(&creator), balance_after_first);
}

#[test]
fn test_withdraw_team_funds_while_active_fails() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);

    fixture.withdraw_team_funds(
        &setup,
        &[Check::err(ProgramError::Custom(
            ErrorCode::SaleStillActive as u32,
        ))],
    );
}

#[test]
fn test_withdraw_team_funds_on_failed_sale_fails() {
    let mut fixture = TestFixture::new();
    let setup = fixture.initialize_launch(fixture.default_config());
    fixture.warp_into_sale(&setup);

    let buyer = Pubkey::new_unique();
    fixture.airdrop(&buyer, 10 * SOL);
    fixture.buy(&setup, &buyer, 5 * SOL, &[Check::success()]);

    fixture.warp_past_end(&setup);

    fixture.withdraw_team_funds(
        &setup,
        &[Check::err(ProgramError::Custom(
            ErrorCode::SaleNotSuccessful as u32,
        ))],
    );
}

#[test]
fn test_withdraw_team_funds_requires_creator() {
    let mut fixture = TestFixture::new();
    let setup = successful_launch(&mut fixture);

    let attacker = Pubkey::new_unique();
    fixture.airdrop(&attacker, SOL);

    // Correct launch account, wrong signer.
    let (ix, _, _) = build_withdraw_team_funds_ix(attacker, setup.launch).unwrap();
    fixture.process(
        &ix,
        &[Check::err(ProgramError::Custom(
            ErrorCode::Unauthorized as u32,
        ))],
    );
}
