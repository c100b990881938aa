use log::trace;
use smartdefi_common::{
    asset_backing::{
        BackingPool, SLOT_BACKING_ASSET, SLOT_BURNED_SUPPLY, SLOT_TOTAL_BACKING, SLOT_TOTAL_SUPPLY,
    },
    crypto::{Address, Hash},
    error::StateError,
};

use super::slot::{backing_pool_slot_base, slot_key};
use crate::state::StateProvider;

/// Read the pool record of `token`
///
/// Never fails for a missing pool: a token that was never created reads as
/// an all-zero pool. Use [`find_backing_pool`] when absence matters.
pub fn get_backing_pool<S: StateProvider + ?Sized>(
    state: &S,
    token: &Address,
) -> Result<BackingPool, StateError> {
    let base = backing_pool_slot_base(token);
    let read = |offset| state.get_state(token, &slot_key(base, offset));

    let total_backing = read(SLOT_TOTAL_BACKING)?.to_u256();
    let total_supply = read(SLOT_TOTAL_SUPPLY)?.to_u256();
    let burned_supply = read(SLOT_BURNED_SUPPLY)?.to_u256();
    let backing_asset = Address::from_word(&read(SLOT_BACKING_ASSET)?);

    trace!(
        "read pool of {} at slot {}: backing {}, supply {}, burned {}",
        token,
        base,
        total_backing,
        total_supply,
        burned_supply
    );

    let mut pool =
        BackingPool::native_with_burned(*token, total_backing, total_supply, burned_supply);
    pool.backing_asset = backing_asset;
    Ok(pool)
}

/// Read the pool record of `token`, `None` if it was never created
pub fn find_backing_pool<S: StateProvider + ?Sized>(
    state: &S,
    token: &Address,
) -> Result<Option<BackingPool>, StateError> {
    let pool = get_backing_pool(state, token)?;
    Ok(pool.exists().then_some(pool))
}

/// Persist a pool record into the storage of its token account
///
/// All fields go to the host as a single batch.
pub fn set_backing_pool<S: StateProvider + ?Sized>(
    state: &mut S,
    pool: &BackingPool,
) -> Result<(), StateError> {
    let base = backing_pool_slot_base(&pool.token_address);
    let writes: [(Hash, Hash); 4] = [
        (
            slot_key(base, SLOT_TOTAL_BACKING),
            Hash::from_u256(&pool.total_backing),
        ),
        (
            slot_key(base, SLOT_TOTAL_SUPPLY),
            Hash::from_u256(&pool.total_supply),
        ),
        (
            slot_key(base, SLOT_BURNED_SUPPLY),
            Hash::from_u256(&pool.burned_supply),
        ),
        (
            slot_key(base, SLOT_BACKING_ASSET),
            pool.backing_asset.to_word(),
        ),
    ];

    trace!(
        "write pool of {} at slot {}: backing {}, supply {}, burned {}",
        pool.token_address,
        base,
        pool.total_backing,
        pool.total_supply,
        pool.burned_supply
    );
    state.set_state_batch(&pool.token_address, &writes)
}
