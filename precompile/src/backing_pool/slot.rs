use primitive_types::U256;
use smartdefi_common::{
    asset_backing::{BACKING_POOL_DOMAIN_TAG, FEE_STRUCTURE_DOMAIN_TAG, SLOT_BASE_MODULUS},
    crypto::{keccak256_concat, Address, Hash},
};

/// Deterministic slot base of a record kind for a token
///
/// `keccak256(token ‖ tag) mod 1e10`. Two tokens collide only with
/// negligible probability; collisions are not checked.
pub fn slot_base(token: &Address, domain_tag: &[u8]) -> u64 {
    let digest = keccak256_concat(&[&token.as_bytes()[..], domain_tag]);
    (digest.to_u256() % U256::from(SLOT_BASE_MODULUS)).low_u64()
}

/// Slot base of the backing pool of `token`
pub fn backing_pool_slot_base(token: &Address) -> u64 {
    slot_base(token, BACKING_POOL_DOMAIN_TAG)
}

/// Slot base of the fee structure of `token`
pub fn fee_slot_base(token: &Address) -> u64 {
    slot_base(token, FEE_STRUCTURE_DOMAIN_TAG)
}

/// Storage key of the slot at `base + offset`
pub fn slot_key(base: u64, offset: u64) -> Hash {
    Hash::from_u256(&(U256::from(base) + U256::from(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_base_is_deterministic_and_bounded() {
        let token = Address::new([0x5a; 20]);
        let base = backing_pool_slot_base(&token);

        assert_eq!(base, backing_pool_slot_base(&token));
        assert!(base < SLOT_BASE_MODULUS);
    }

    #[test]
    fn test_slot_base_matches_manual_computation() {
        let token = Address::new([0x01; 20]);
        let mut data = token.as_bytes().to_vec();
        data.extend_from_slice(b"SmartDeFi-BackingPool");
        let expected =
            smartdefi_common::crypto::keccak256(&data).to_u256() % U256::from(10_000_000_000u64);

        assert_eq!(backing_pool_slot_base(&token), expected.low_u64());
    }

    #[test]
    fn test_domains_are_separated() {
        let token = Address::new([0x02; 20]);
        assert_ne!(backing_pool_slot_base(&token), fee_slot_base(&token));
        assert_ne!(
            backing_pool_slot_base(&token),
            backing_pool_slot_base(&Address::new([0x03; 20]))
        );
    }

    #[test]
    fn test_slot_key_layout() {
        let key = slot_key(41, 1);
        assert_eq!(key.to_u256(), U256::from(42));
        assert!(key.as_bytes()[..31].iter().all(|b| *b == 0));
    }
}
