use primitive_types::U256;
use smartdefi_common::{
    asset_backing::TokenConfig,
    crypto::{keccak256_concat, Address, ADDRESS_SIZE, HASH_SIZE},
};

/// Deterministic address of a token created by `creator`
///
/// `keccak256(creator ‖ nonce ‖ name ‖ symbol ‖ supply)` where `nonce` is a
/// 32-byte big-endian word and `supply` is the minimal big-endian encoding of
/// the total supply. The address is the low 20 bytes of the digest.
pub fn derive_token_address(creator: &Address, nonce: u64, config: &TokenConfig) -> Address {
    let nonce_word = U256::from(nonce).to_big_endian();
    let supply_word = config.total_supply.to_big_endian();
    let leading_zeros = supply_word.iter().take_while(|b| **b == 0).count();

    let digest = keccak256_concat(&[
        &creator.as_bytes()[..],
        &nonce_word[..],
        config.name.as_bytes(),
        config.symbol.as_bytes(),
        &supply_word[leading_zeros..],
    ]);

    let mut bytes = [0u8; ADDRESS_SIZE];
    bytes.copy_from_slice(&digest.as_bytes()[HASH_SIZE - ADDRESS_SIZE..]);
    Address::new(bytes)
}
