#![cfg(feature = "test-sbf")]

use {
    anchor_lang::Space,
    anchor_spl::token::TokenAccount,
    liftpad::{
        error::ErrorCode,
        state::{CreatorRegistry, Launch},
        CREATION_FEE_LAMPORTS,
    },
    liftpad_sdk::{build_initialize_launch_ix, total_tokens_needed},
    liftpad_testing::{TestFixture, SOL},
    mollusk_svm::result::Check,
    solana_sdk::program_error::ProgramError,
};

#[test]
fn test_initialize_launch_happy_path() {
    let mut fixture = TestFixture::new();
    let config = fixture.default_config();
    let setup = fixture.initialize_launch(config);

    // 10_000 tokens for sale plus 100 SOL * 60% * 90 tokens/SOL = 5_400 for
    // the liquidity side.
    let expected_escrow = total_tokens_needed(
        config.hard_cap,
        config.amount_for_sale,
        config.percentage_for_liquidity,
        config.listing_rate,
    )
    .unwrap();
    assert_eq!(expected_escrow, 15_400_000_000_000);

    let launch = fixture.launch_state(&setup.launch);
    assert_eq!(launch.creator, fixture.creator);
    assert_eq!(launch.mint, setup.mint);
    assert_eq!(launch.vault, setup.vault);
    assert_eq!(launch.index, 0);
    assert_eq!(launch.config, config);
    assert_eq!(launch.total_raised, 0);
    assert!(!launch.team_withdrawn);
    assert!(!launch.liquidity_deployed);

    // The full escrow moved out of the creator's token account.
    assert_eq!(fixture.token_balance(&setup.vault), expected_escrow);
    assert_eq!(fixture.token_balance(&setup.creator_token_account), 0);

    // The flat creation fee landed in the shared treasury.
    assert_eq!(fixture.lamports(&setup.treasury), CREATION_FEE_LAMPORTS);

    // The registry recorded the launch at index 0.
    let registry = fixture.registry_state(&setup.registry);
    assert_eq!(registry.creator, fixture.creator);
    assert_eq!(registry.launches, vec![setup.launch]);
}

#[test]
fn test_initialize_launch_rejects_bad_configs() {
    let mut fixture = TestFixture::new();
    let base = fixture.default_config();

    let cases = [
        (
            {
                let mut c = base;
                c.soft_cap = 0;
                c
            },
            ErrorCode::InvalidCapConfiguration,
        ),
        (
            {
                let mut c = base;
                c.soft_cap = c.hard_cap + 1;
                c
            },
            ErrorCode::InvalidCapConfiguration,
        ),
        (
            {
                // 20 * 4 < 100: an unsellable raise range.
                let mut c = base;
                c.soft_cap = 20 * SOL;
                c
            },
            ErrorCode::SoftCapTooLow,
        ),
        (
            {
                let mut c = base;
                c.amount_for_sale = 0;
                c
            },
            ErrorCode::InvalidAmount,
        ),
        (
            {
                let mut c = base;
                c.listing_rate = 0;
                c
            },
            ErrorCode::InvalidAmount,
        ),
        (
            {
                let mut c = base;
                c.minimum_buy = c.maximum_buy + 1;
                c
            },
            ErrorCode::InvalidBuyLimits,
        ),
        (
            {
                let mut c = base;
                c.percentage_for_team = 50;
                c
            },
            ErrorCode::InvalidPercentageSplit,
        ),
        (
            {
                let mut c = base;
                c.percentage_for_liquidity = 50;
                c.percentage_for_team = 50;
                c
            },
            ErrorCode::LiquidityPercentageTooLow,
        ),
        (
            {
                let mut c = base;
                c.end_date = c.start_date;
                c
            },
            ErrorCode::InvalidSchedule,
        ),
    ];

    for (config, expected) in cases {
        let mint = fixture.create_mint(9);
        let setup = fixture.prepare_launch(config, mint, 0);

        let (ix, _, _) = build_initialize_launch_ix(
            fixture.creator,
            setup.mint,
            setup.registry,
            setup.launch,
            setup.vault,
            setup.creator_token_account,
            setup.treasury,
            setup.index,
            setup.config,
        )
        .unwrap();

        fixture.process(&ix, &[Check::err(ProgramError::Custom(expected as u32))]);
    }

    // Nothing was deployed along the way.
    assert_eq!(fixture.deployed_count(), 0);
}

#[test]
fn test_initialize_launch_insufficient_fee_is_atomic() {
    let mut fixture = TestFixture::new();
    let config = fixture.default_config();
    let mint = fixture.create_mint(9);
    let setup = fixture.prepare_launch(config, mint, 0);

    // Enough for the rent of every account created on the way, one lamport
    // short of the creation fee on top.
    let rent = &fixture.mollusk.sysvars.rent;
    let creator_balance = rent.minimum_balance(8 + CreatorRegistry::INIT_SPACE)
        + rent.minimum_balance(8 + Launch::INIT_SPACE)
        + rent.minimum_balance(TokenAccount::LEN)
        + CREATION_FEE_LAMPORTS
        - 1;
    let creator = fixture.creator;
    fixture.set_lamports(&creator, creator_balance);

    let (ix, _, _) = build_initialize_launch_ix(
        fixture.creator,
        setup.mint,
        setup.registry,
        setup.launch,
        setup.vault,
        setup.creator_token_account,
        setup.treasury,
        setup.index,
        setup.config,
    )
    .unwrap();

    fixture.process(
        &ix,
        &[Check::err(ProgramError::Custom(
            ErrorCode::InsufficientCreationFee as u32,
        ))],
    );

    // Complete rollback: no registry entry, no escrow movement, no fee.
    assert_eq!(fixture.deployed_count(), 0);
    assert_eq!(fixture.lamports(&setup.treasury), 0);
    assert_eq!(fixture.lamports(&creator), creator_balance);
    assert_eq!(
        fixture.token_balance(&setup.creator_token_account),
        15_400_000_000_000
    );
}

#[test]
fn test_initialize_launch_rejects_stale_index() {
    let mut fixture = TestFixture::new();
    let config = fixture.default_config();
    fixture.initialize_launch(config);

    // The registry now holds one launch; only index 1 is acceptable.
    let mint = fixture.create_mint(9);
    let setup = fixture.prepare_launch(config, mint, 5);

    let (ix, _, _) = build_initialize_launch_ix(
        fixture.creator,
        setup.mint,
        setup.registry,
        setup.launch,
        setup.vault,
        setup.creator_token_account,
        setup.treasury,
        setup.index,
        setup.config,
    )
    .unwrap();

    fixture.process(
        &ix,
        &[Check::err(ProgramError::Custom(
            ErrorCode::InvalidLaunchIndex as u32,
        ))],
    );

    assert_eq!(fixture.deployed_count(), 1);
}
