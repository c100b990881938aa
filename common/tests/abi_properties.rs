//! Property-based tests for the call-payload codec
//!
//! Decoders face attacker-controlled bytes: they must reject, never panic.

#![allow(clippy::disallowed_methods)]

use proptest::prelude::*;
use smartdefi_common::{
    abi::{
        decode_address_amount_input, decode_create_token_input, decode_get_floor_price_input,
        encode_create_token_call, split_selector,
    },
    asset_backing::TokenConfig,
    crypto::Address,
    U256,
};

fn token_config() -> impl Strategy<Value = TokenConfig> {
    (
        ".{0,40}",
        ".{0,12}",
        any::<[u64; 4]>(),
        any::<[u8; 20]>(),
        any::<[u64; 4]>(),
        any::<[u16; 12]>(),
        any::<(bool, bool)>(),
        any::<[u8; 20]>(),
    )
        .prop_map(
            |(name, symbol, supply, asset, backing, fees, (only_sb, enable_lge), owner)| {
                TokenConfig {
                    name,
                    symbol,
                    total_supply: U256(supply),
                    backing_asset: Address::new(asset),
                    initial_backing: U256(backing),
                    fees: fees.map(U256::from),
                    only_sb,
                    owner: Address::new(owner),
                    enable_lge,
                }
            },
        )
}

proptest! {
    #[test]
    fn test_decoders_never_panic(input in prop::collection::vec(any::<u8>(), 0..1024)) {
        let _ = split_selector(&input);
        let _ = decode_create_token_input(&input);
        let _ = decode_address_amount_input(&input);
        let _ = decode_get_floor_price_input(&input);
    }
}

proptest! {
    #[test]
    fn test_config_survives_encoding(config in token_config()) {
        let input = encode_create_token_call(&config);
        prop_assert_eq!(input.len() % 32, 4);

        let (_, args) = split_selector(&input).unwrap();
        prop_assert_eq!(decode_create_token_input(args).unwrap(), config);
    }
}

proptest! {
    #[test]
    fn test_corrupted_offsets_are_rejected(config in token_config(), offset in 0x1000u64..) {
        let mut input = encode_create_token_call(&config);
        // Tuple offset word, low 8 bytes
        input[4 + 24..4 + 32].copy_from_slice(&offset.to_be_bytes());

        let (_, args) = split_selector(&input).unwrap();
        prop_assert!(decode_create_token_input(args).is_err());
    }
}
