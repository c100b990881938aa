//! Property-based tests for the backing pool engine
//!
//! Properties tested:
//! - Token address derivation is deterministic
//! - Floor price never decreases when backing grows or supply is burned
//! - Zero circulating supply never divides by zero
//! - Burn-and-recover conserves backing exactly
//! - Non-native backing is always rejected

#![allow(clippy::disallowed_methods)]

use primitive_types::U256;
use proptest::prelude::*;
use smartdefi_common::{
    abi::encode_create_token_call,
    asset_backing::{AssetBackingError, BackingPool, TokenConfig},
    crypto::Address,
};
use smartdefi_precompile::{
    asset_backing::{derive_token_address, validate_token_config},
    backing_pool::{backing_for_amount, floor_price, get_backing_pool, redeem},
    AssetBackingPrecompile, CallContext, MemoryState, StateProvider,
};

fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::new)
}

fn u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256)
}

fn pool(backing: u128, supply: u128, burned: u128) -> BackingPool {
    BackingPool::native_with_burned(
        Address::new([1; 20]),
        U256::from(backing),
        U256::from(supply),
        U256::from(burned),
    )
}

proptest! {
    #[test]
    fn test_derivation_is_deterministic(
        creator in address(),
        nonce in any::<u64>(),
        name in "[a-zA-Z ]{0,16}",
        symbol in "[A-Z]{0,6}",
        supply in u256(),
    ) {
        let config = TokenConfig {
            name,
            symbol,
            total_supply: supply,
            ..Default::default()
        };

        let first = derive_token_address(&creator, nonce, &config);
        prop_assert_eq!(first, derive_token_address(&creator, nonce, &config.clone()));
    }
}

proptest! {
    #[test]
    fn test_floor_price_grows_with_backing(
        backing in 0u128..=u128::MAX / 2,
        extra in 0u128..=u128::MAX / 2,
        supply in 1u128..=u128::MAX,
        burned_ratio in 0u128..100,
    ) {
        let burned = supply / 100 * burned_ratio;
        let before = floor_price(&pool(backing, supply, burned)).unwrap();
        let after = floor_price(&pool(backing + extra, supply, burned)).unwrap();
        prop_assert!(after >= before);
    }
}

proptest! {
    #[test]
    fn test_floor_price_grows_with_burns(
        backing in any::<u128>(),
        supply in 1u128..=u128::MAX,
        burned in any::<u128>(),
        more in any::<u128>(),
    ) {
        let burned = burned % supply;
        let more_burned = burned + more % (supply - burned);

        let before = floor_price(&pool(backing, supply, burned)).unwrap();
        let after = floor_price(&pool(backing, supply, more_burned)).unwrap();
        prop_assert!(after >= before);
    }
}

proptest! {
    #[test]
    fn test_zero_circulating_supply_is_safe(
        backing in u256(),
        supply in u256(),
        amount in u256(),
    ) {
        let empty = BackingPool::native(Address::zero(), backing, U256::zero());
        prop_assert_eq!(floor_price(&empty), Ok(U256::zero()));
        prop_assert_eq!(backing_for_amount(&empty, &amount), Ok(U256::zero()));

        let burned = BackingPool::native_with_burned(Address::zero(), backing, supply, supply);
        prop_assert_eq!(floor_price(&burned), Ok(U256::zero()));
        prop_assert_eq!(backing_for_amount(&burned, &amount), Ok(U256::zero()));
    }
}

proptest! {
    #[test]
    fn test_redeem_conserves_backing(
        backing in any::<u128>(),
        supply in 1u128..=u128::MAX,
        burned in any::<u128>(),
        amount in any::<u128>(),
    ) {
        let burned = burned % supply;
        let amount = amount % (supply - burned + 1);
        let before = pool(backing, supply, burned);

        let expected = backing_for_amount(&before, &U256::from(amount)).unwrap();
        let (after, recovered) = redeem(&before, &U256::from(amount)).unwrap();

        prop_assert_eq!(recovered, expected);
        prop_assert_eq!(after.total_backing + recovered, before.total_backing);
        prop_assert_eq!(after.burned_supply, before.burned_supply + U256::from(amount));
        prop_assert!(after.burned_supply <= after.total_supply);
    }
}

proptest! {
    #[test]
    fn test_burn_and_recover_moves_exact_backing(
        backing in 1u64..=u64::MAX,
        amount in 0u64..=1_000_000,
    ) {
        let precompile = AssetBackingPrecompile::default();
        let mut state = MemoryState::new();
        let caller = Address::new([0xa1; 20]);
        state.set_balance(caller, U256::from(backing));

        let config = TokenConfig {
            name: "Prop".into(),
            symbol: "PRP".into(),
            total_supply: U256::from(1_000_000),
            initial_backing: U256::from(backing),
            ..Default::default()
        };
        let token = derive_token_address(&caller, 0, &config);
        precompile
            .execute(&mut state, &CallContext::new(caller), &encode_create_token_call(&config), u64::MAX)
            .unwrap();

        let before = get_backing_pool(&state, &token).unwrap();
        let expected = backing_for_amount(&before, &U256::from(amount)).unwrap();

        precompile
            .execute(
                &mut state,
                &CallContext::new(caller),
                &smartdefi_common::abi::encode_burn_and_recover_call(&token, &U256::from(amount)),
                u64::MAX,
            )
            .unwrap();

        let after = get_backing_pool(&state, &token).unwrap();
        prop_assert_eq!(after.total_backing, before.total_backing - expected);
        prop_assert_eq!(state.get_balance(&caller).unwrap(), expected);
        prop_assert_eq!(
            state.get_balance(precompile.custodial_address()).unwrap(),
            after.total_backing
        );
    }
}

proptest! {
    #[test]
    fn test_non_native_backing_always_rejected(
        backing_asset in address().prop_filter("non-native", |a| !a.is_zero()),
        supply in u256(),
        fees in any::<[u64; 12]>(),
    ) {
        let mut config = TokenConfig {
            total_supply: supply.max(U256::one()),
            backing_asset,
            ..Default::default()
        };
        for (slot, fee) in config.fees.iter_mut().zip(fees) {
            *slot = U256::from(fee % 84);
        }

        prop_assert_eq!(
            validate_token_config(&config),
            Err(AssetBackingError::UnsupportedBackingAsset(backing_asset))
        );
    }
}
