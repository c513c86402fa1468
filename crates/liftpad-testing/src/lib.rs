//! Shared mollusk fixture for liftpad tests.
//!
//! The fixture keeps a map of every account touched so far and writes the
//! resulting accounts back after each instruction, so multi-instruction
//! scenarios (buy, warp, claim) compose without manual account plumbing.

use std::collections::HashMap;

use anchor_lang::{
    prelude::Pubkey,
    solana_program::{program_option::COption, program_pack::Pack},
    AccountDeserialize, AccountSerialize,
};
use anchor_spl::token::{
    spl_token::{
        native_mint,
        state::{Account as SplTokenAccount, AccountState, Mint as SplMint},
    },
    ID as TOKEN_PROGRAM_ID,
};
use liftpad::{
    state::{Contribution, CreatorRegistry, Launch, LaunchConfig, LiquidityPool},
    ID as LIFTPAD_PROGRAM_ID,
};
use liftpad_sdk::{
    build_buy_tokens_ix, build_claim_refund_ix, build_claim_tokens_ix, build_deploy_liquidity_ix,
    build_initialize_launch_ix, build_withdraw_team_funds_ix, total_tokens_needed, AddressFinder,
};
use mollusk_svm::{
    program::keyed_account_for_system_program,
    result::{Check, InstructionResult},
    Mollusk,
};
use solana_sdk::{
    account::Account as SolanaAccount, instruction::Instruction,
    native_token::LAMPORTS_PER_SOL, system_program::ID as SYSTEM_PROGRAM_ID,
};

pub const SOL: u64 = LAMPORTS_PER_SOL;

/// Wall-clock origin every fixture starts at.
pub const BASE_TIMESTAMP: i64 = 1_700_000_000;

/// Default sale parameters: 30/100 SOL caps, 10_000 nine-decimal tokens for
/// sale at 90 tokens per SOL, 0.1..10 SOL per purchase, 60/40 split.
pub const DEFAULT_SOFT_CAP: u64 = 30 * SOL;
pub const DEFAULT_HARD_CAP: u64 = 100 * SOL;
pub const DEFAULT_AMOUNT_FOR_SALE: u64 = 10_000_000_000_000;
pub const DEFAULT_LISTING_RATE: u64 = 90_000_000_000;
pub const DEFAULT_MINIMUM_BUY: u64 = SOL / 10;
pub const DEFAULT_MAXIMUM_BUY: u64 = 10 * SOL;

/// Rent-exempt balances for SPL accounts created by direct packing.
const MINT_RENT: u64 = 1_461_600;
const TOKEN_ACCOUNT_RENT: u64 = 2_039_280;

/// Everything address-shaped about one initialized launch.
pub struct LaunchSetup {
    pub index: u64,
    pub config: LaunchConfig,
    pub mint: Pubkey,
    pub registry: Pubkey,
    pub launch: Pubkey,
    pub vault: Pubkey,
    pub treasury: Pubkey,
    pub creator_token_account: Pubkey,
}

pub struct TestFixture {
    pub mollusk: Mollusk,
    pub address_finder: AddressFinder,
    pub creator: Pubkey,
    accounts: HashMap<Pubkey, SolanaAccount>,
}

impl TestFixture {
    pub fn new() -> Self {
        let mut mollusk = Mollusk::new(&LIFTPAD_PROGRAM_ID, "liftpad");
        mollusk_svm_programs_token::token::add_program(&mut mollusk);
        mollusk.sysvars.clock.unix_timestamp = BASE_TIMESTAMP;

        let address_finder = AddressFinder::default();
        let creator = Pubkey::new_unique();

        let mut accounts = HashMap::new();
        accounts.insert(
            creator,
            SolanaAccount::new(100 * SOL, 0, &SYSTEM_PROGRAM_ID),
        );

        let (treasury, _) = address_finder.find_treasury_address();
        accounts.insert(treasury, SolanaAccount::new(0, 0, &SYSTEM_PROGRAM_ID));

        let mut fixture = Self {
            mollusk,
            address_finder,
            creator,
            accounts,
        };

        // The native mint participates in every liquidity pair.
        fixture.insert_mint(native_mint::ID, native_mint::DECIMALS);

        fixture
    }

    pub fn now(&self) -> i64 {
        self.mollusk.sysvars.clock.unix_timestamp
    }

    pub fn warp_to(&mut self, unix_timestamp: i64) {
        self.mollusk.sysvars.clock.unix_timestamp = unix_timestamp;
    }

    pub fn warp_into_sale(&mut self, setup: &LaunchSetup) {
        self.warp_to(setup.config.start_date);
    }

    pub fn warp_past_end(&mut self, setup: &LaunchSetup) {
        self.warp_to(setup.config.end_date);
    }

    pub fn airdrop(&mut self, to: &Pubkey, lamports: u64) {
        let account = self
            .accounts
            .entry(*to)
            .or_insert_with(|| SolanaAccount::new(0, 0, &SYSTEM_PROGRAM_ID));
        account.lamports += lamports;
    }

    pub fn set_lamports(&mut self, address: &Pubkey, lamports: u64) {
        let account = self
            .accounts
            .entry(*address)
            .or_insert_with(|| SolanaAccount::new(0, 0, &SYSTEM_PROGRAM_ID));
        account.lamports = lamports;
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts
            .get(address)
            .map(|account| account.lamports)
            .unwrap_or(0)
    }

    /// Process one instruction against the account store, validate the checks
    /// and write the resulting accounts back.
    pub fn process(&mut self, ix: &Instruction, checks: &[Check]) -> InstructionResult {
        let mut keyed_accounts: Vec<(Pubkey, SolanaAccount)> =
            Vec::with_capacity(ix.accounts.len());
        for meta in &ix.accounts {
            if keyed_accounts.iter().any(|(pubkey, _)| *pubkey == meta.pubkey) {
                continue;
            }
            let account = if meta.pubkey == SYSTEM_PROGRAM_ID {
                keyed_account_for_system_program().1
            } else if meta.pubkey == TOKEN_PROGRAM_ID {
                mollusk_svm_programs_token::token::keyed_account().1
            } else {
                self.accounts
                    .get(&meta.pubkey)
                    .cloned()
                    .unwrap_or_else(|| SolanaAccount::new(0, 0, &SYSTEM_PROGRAM_ID))
            };
            keyed_accounts.push((meta.pubkey, account));
        }

        let result = self
            .mollusk
            .process_and_validate_instruction(ix, &keyed_accounts, checks);

        for (pubkey, account) in &result.resulting_accounts {
            if *pubkey == SYSTEM_PROGRAM_ID || *pubkey == TOKEN_PROGRAM_ID {
                continue;
            }
            self.accounts.insert(*pubkey, account.clone());
        }

        result
    }

    pub fn create_mint(&mut self, decimals: u8) -> Pubkey {
        let mint = Pubkey::new_unique();
        self.insert_mint(mint, decimals);
        mint
    }

    fn insert_mint(&mut self, mint: Pubkey, decimals: u8) {
        let state = SplMint {
            mint_authority: COption::Some(self.creator),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        let mut data = vec![0u8; SplMint::LEN];
        SplMint::pack(state, &mut data).expect("failed to pack mint");

        self.accounts.insert(
            mint,
            SolanaAccount {
                lamports: MINT_RENT,
                data,
                owner: TOKEN_PROGRAM_ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn create_token_account(&mut self, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Pubkey {
        let address = Pubkey::new_unique();
        let state = SplTokenAccount {
            mint: *mint,
            owner: *owner,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0u8; SplTokenAccount::LEN];
        SplTokenAccount::pack(state, &mut data).expect("failed to pack token account");

        self.accounts.insert(
            address,
            SolanaAccount {
                lamports: TOKEN_ACCOUNT_RENT,
                data,
                owner: TOKEN_PROGRAM_ID,
                executable: false,
                rent_epoch: 0,
            },
        );

        address
    }

    pub fn token_balance(&self, token_account: &Pubkey) -> u64 {
        let account = self
            .accounts
            .get(token_account)
            .expect("token account not found");
        SplTokenAccount::unpack(&account.data)
            .expect("failed to unpack token account")
            .amount
    }

    pub fn launch_state(&self, launch: &Pubkey) -> Launch {
        self.deserialize(launch)
    }

    pub fn registry_state(&self, registry: &Pubkey) -> CreatorRegistry {
        self.deserialize(registry)
    }

    pub fn contribution_state(&self, contribution: &Pubkey) -> Contribution {
        self.deserialize(contribution)
    }

    /// Rewrite a contribution's recorded amount in place, for driving states
    /// an ordinary purchase sequence cannot reach.
    pub fn set_contribution_amount(&mut self, contribution: &Pubkey, amount: u64) {
        let account = self
            .accounts
            .get_mut(contribution)
            .expect("contribution account not found");
        let mut state = Contribution::try_deserialize(&mut account.data.as_slice())
            .expect("failed to deserialize contribution");
        state.amount = amount;

        let mut data = Vec::with_capacity(account.data.len());
        state
            .try_serialize(&mut data)
            .expect("failed to serialize contribution");
        data.resize(account.data.len(), 0);
        account.data = data;
    }

    pub fn pool_state(&self, pool: &Pubkey) -> LiquidityPool {
        self.deserialize(pool)
    }

    fn deserialize<T: AccountDeserialize>(&self, address: &Pubkey) -> T {
        let account = self.accounts.get(address).expect("account not found");
        T::try_deserialize(&mut account.data.as_slice()).expect("failed to deserialize account")
    }

    /// Next deployment index for the fixture creator, read from the registry
    /// exactly the way an off-chain deployer would.
    pub fn deployed_count(&self) -> u64 {
        let (registry, _) = self.address_finder.find_registry_address(&self.creator);
        match self.accounts.get(&registry) {
            Some(account) if !account.data.is_empty() => {
                CreatorRegistry::try_deserialize(&mut account.data.as_slice())
                    .expect("failed to deserialize registry")
                    .launches
                    .len() as u64
            }
            _ => 0,
        }
    }

    /// Sale parameters used across the test suite unless a scenario says
    /// otherwise, scheduled relative to the current fixture clock.
    pub fn default_config(&self) -> LaunchConfig {
        LaunchConfig {
            soft_cap: DEFAULT_SOFT_CAP,
            hard_cap: DEFAULT_HARD_CAP,
            amount_for_sale: DEFAULT_AMOUNT_FOR_SALE,
            listing_rate: DEFAULT_LISTING_RATE,
            minimum_buy: DEFAULT_MINIMUM_BUY,
            maximum_buy: DEFAULT_MAXIMUM_BUY,
            percentage_for_liquidity: 60,
            percentage_for_team: 40,
            start_date: self.now() + 100,
            end_date: self.now() + 1_000,
        }
    }

    /// Create a fresh mint, fund the creator with exactly the escrow
    /// requirement and initialize a launch at the next registry index.
    pub fn initialize_launch(&mut self, config: LaunchConfig) -> LaunchSetup {
        let mint = self.create_mint(9);
        self.initialize_launch_with_mint(config, mint)
    }

    pub fn initialize_launch_with_mint(
        &mut self,
        config: LaunchConfig,
        mint: Pubkey,
    ) -> LaunchSetup {
        let index = self.deployed_count();
        let setup = self.prepare_launch(config, mint, index);

        let (ix, _, _) = build_initialize_launch_ix(
            self.creator,
            setup.mint,
            setup.registry,
            setup.launch,
            setup.vault,
            setup.creator_token_account,
            setup.treasury,
            setup.index,
            setup.config,
        )
        .expect("failed to build initialize_launch instruction");

        self.process(&ix, &[Check::success()]);

        setup
    }

    /// Derive all the addresses and fund the creator token account without
    /// submitting anything, for tests that want to drive the instruction
    /// themselves.
    pub fn prepare_launch(&mut self, config: LaunchConfig, mint: Pubkey, index: u64) -> LaunchSetup {
        let (registry, _) = self.address_finder.find_registry_address(&self.creator);
        let (launch, _) = self.address_finder.find_launch_address(&self.creator, index);
        let (vault, _) = self.address_finder.find_vault_address(&launch);
        let (treasury, _) = self.address_finder.find_treasury_address();

        let tokens_needed = total_tokens_needed(
            config.hard_cap,
            config.amount_for_sale,
            config.percentage_for_liquidity,
            config.listing_rate,
        )
        .expect("escrow requirement overflowed");
        let creator = self.creator;
        let creator_token_account = self.create_token_account(&mint, &creator, tokens_needed);

        LaunchSetup {
            index,
            config,
            mint,
            registry,
            launch,
            vault,
            treasury,
            creator_token_account,
        }
    }

    pub fn buy(
        &mut self,
        setup: &LaunchSetup,
        buyer: &Pubkey,
        amount: u64,
        checks: &[Check],
    ) -> InstructionResult {
        let (contribution, _) = self
            .address_finder
            .find_contribution_address(&setup.launch, buyer);

        let (ix, _, _) = build_buy_tokens_ix(*buyer, setup.launch, contribution, amount)
            .expect("failed to build buy_tokens instruction");

        self.process(&ix, checks)
    }

    pub fn claim_tokens(
        &mut self,
        setup: &LaunchSetup,
        buyer: &Pubkey,
        buyer_token_account: &Pubkey,
        checks: &[Check],
    ) -> InstructionResult {
        let (contribution, _) = self
            .address_finder
            .find_contribution_address(&setup.launch, buyer);

        let (ix, _, _) = build_claim_tokens_ix(
            *buyer,
            setup.launch,
            contribution,
            setup.vault,
            *buyer_token_account,
        )
        .expect("failed to build claim_tokens instruction");

        self.process(&ix, checks)
    }

    pub fn claim_refund(
        &mut self,
        setup: &LaunchSetup,
        buyer: &Pubkey,
        checks: &[Check],
    ) -> InstructionResult {
        let (contribution, _) = self
            .address_finder
            .find_contribution_address(&setup.launch, buyer);

        let (ix, _, _) = build_claim_refund_ix(*buyer, setup.launch, contribution)
            .expect("failed to build claim_refund instruction");

        self.process(&ix, checks)
    }

    pub fn withdraw_team_funds(
        &mut self,
        setup: &LaunchSetup,
        checks: &[Check],
    ) -> InstructionResult {
        let (ix, _, _) = build_withdraw_team_funds_ix(self.creator, setup.launch)
            .expect("failed to build withdraw_team_funds instruction");

        self.process(&ix, checks)
    }

    /// Pair the sale mint against the native mint, ordered by pubkey, and
    /// deploy liquidity at the given fee tier. Returns the pool and its vault.
    pub fn deploy_liquidity(
        &mut self,
        setup: &LaunchSetup,
        fee_tier: u16,
        initial_sqrt_price_x96: u128,
        checks: &[Check],
    ) -> (Pubkey, Pubkey) {
        let (token_mint_0, token_mint_1) = ordered_pair(native_mint::ID, setup.mint);
        let (pool, _) = self
            .address_finder
            .find_pool_address(&token_mint_0, &token_mint_1, fee_tier);
        let (pool_vault, _) = self.address_finder.find_pool_vault_address(&pool);

        let (ix, _, _) = build_deploy_liquidity_ix(
            self.creator,
            setup.launch,
            setup.vault,
            setup.mint,
            token_mint_0,
            token_mint_1,
            pool,
            pool_vault,
            fee_tier,
            initial_sqrt_price_x96,
        )
        .expect("failed to build deploy_liquidity instruction");

        self.process(&ix, checks);

        (pool, pool_vault)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Order two mints by pubkey magnitude, the pool's canonical pair order.
pub fn ordered_pair(a: Pubkey, b: Pubkey) -> (Pubkey, Pubkey) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
