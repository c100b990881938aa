use log::trace;
use primitive_types::U256;
use smartdefi_common::{
    asset_backing::{
        FeeStructure, FEE_COMPONENTS, SLOT_FEE_ENABLE_LGE, SLOT_FEE_ONLY_SB, SLOT_FEE_OWNER,
    },
    crypto::{Address, Hash},
    error::StateError,
};

use crate::{
    backing_pool::{fee_slot_base, slot_key},
    state::StateProvider,
};

fn bool_word(value: bool) -> Hash {
    Hash::from_u256(&U256::from(value as u8))
}

/// Persist the fee settings of `token` into its account
///
/// Fee words go to `base + 0..11`, then onlySB, owner and enableLGE.
pub fn store_fee_structure<S: StateProvider + ?Sized>(
    state: &mut S,
    token: &Address,
    fees: &FeeStructure,
) -> Result<(), StateError> {
    let base = fee_slot_base(token);

    let mut writes: Vec<(Hash, Hash)> = fees
        .fees
        .iter()
        .enumerate()
        .map(|(i, fee)| (slot_key(base, i as u64), Hash::from_u256(fee)))
        .collect();
    writes.push((slot_key(base, SLOT_FEE_ONLY_SB), bool_word(fees.only_sb)));
    writes.push((slot_key(base, SLOT_FEE_OWNER), fees.owner.to_word()));
    writes.push((
        slot_key(base, SLOT_FEE_ENABLE_LGE),
        bool_word(fees.enable_lge),
    ));

    trace!("write {} fee slots of {} at slot {}", writes.len(), token, base);
    state.set_state_batch(token, &writes)
}

/// Read the fee settings of `token`, all zero if none were stored
pub fn load_fee_structure<S: StateProvider + ?Sized>(
    state: &S,
    token: &Address,
) -> Result<FeeStructure, StateError> {
    let base = fee_slot_base(token);
    let read = |offset| state.get_state(token, &slot_key(base, offset));

    let mut fees = [U256::zero(); FEE_COMPONENTS];
    for (i, fee) in fees.iter_mut().enumerate() {
        *fee = read(i as u64)?.to_u256();
    }

    Ok(FeeStructure {
        fees,
        only_sb: !read(SLOT_FEE_ONLY_SB)?.is_zero(),
        owner: Address::from_word(&read(SLOT_FEE_OWNER)?),
        enable_lge: !read(SLOT_FEE_ENABLE_LGE)?.is_zero(),
    })
}
