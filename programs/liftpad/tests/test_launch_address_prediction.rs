#![cfg(feature = "test-sbf")]

use {
    liftpad_sdk::AddressFinder,
    liftpad_testing::TestFixture,
};

/// The launch address is a pure function of the creator and the registry
/// index, so deployments are predictable before they happen.
#[test]
fn test_launch_addresses_are_predictable() {
    let mut fixture = TestFixture::new();
    let finder = AddressFinder::default();

    // Predict the first three deployments up front.
    let predicted: Vec<_> = (0..3u64)
        .map(|index| finder.find_launch_address(&fixture.creator, index).0)
        .collect();

    let config = fixture.default_config();
    for (index, expected) in predicted.iter().enumerate() {
        let setup = fixture.initialize_launch(config);
        assert_eq!(setup.index, index as u64);
        assert_eq!(setup.launch, *expected);

        let launch = fixture.launch_state(&setup.launch);
        assert_eq!(launch.index, index as u64);
    }

    // The registry records them in deployment order.
    let (registry, _) = finder.find_registry_address(&fixture.creator);
    assert_eq!(fixture.registry_state(&registry).launches, predicted);
}

/// Different creators get independent address spaces: the same index never
/// collides across creators.
#[test]
fn test_launch_addresses_are_per_creator() {
    let finder = AddressFinder::default();
    let creator_a = solana_sdk::pubkey::Pubkey::new_unique();
    let creator_b = solana_sdk::pubkey::Pubkey::new_unique();

    for index in 0..4u64 {
        let (a, _) = finder.find_launch_address(&creator_a, index);
        let (b, _) = finder.find_launch_address(&creator_b, index);
        assert_ne!(a, b);
    }
}
