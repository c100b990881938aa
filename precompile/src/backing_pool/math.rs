//! Backing arithmetic
//!
//! Pure functions over a [`BackingPool`] record. Nothing here touches state:
//! callers compute a new record and persist it explicitly.
//!
//! All products are computed in 512 bits before dividing, and every division
//! floors. Rounding therefore always favors the pool.

use primitive_types::{U256, U512};
use smartdefi_common::{
    asset_backing::{AssetBackingError, BackingInfo, BackingPool},
    config::PRICE_SCALE,
};

/// `(a × b) / divisor` with a full-width intermediate
///
/// `divisor` must be non-zero.
fn mul_div(a: U256, b: U256, divisor: U256) -> Result<U256, AssetBackingError> {
    let quotient = a.full_mul(b) / U512::from(divisor);
    U256::try_from(quotient).map_err(|_| AssetBackingError::Overflow)
}

/// Circulating supply, `None` when nothing can be redeemed against the pool
fn redeemable_supply(pool: &BackingPool) -> Option<U256> {
    if pool.total_supply.is_zero() {
        return None;
    }

    let circulating = pool.circulating_supply();
    (!circulating.is_zero()).then_some(circulating)
}

/// Native coin backing one token unit, scaled by 10^18
///
/// Zero when the pool has no circulating supply.
pub fn floor_price(pool: &BackingPool) -> Result<U256, AssetBackingError> {
    match redeemable_supply(pool) {
        Some(circulating) => mul_div(pool.total_backing, PRICE_SCALE, circulating),
        None => Ok(U256::zero()),
    }
}

/// Share of the backing redeemable for `amount` token units
///
/// `amount` is not checked against the circulating supply here.
pub fn backing_for_amount(pool: &BackingPool, amount: &U256) -> Result<U256, AssetBackingError> {
    match redeemable_supply(pool) {
        Some(circulating) => mul_div(*amount, pool.total_backing, circulating),
        None => Ok(U256::zero()),
    }
}

/// Pool after `amount` units are removed from circulation
pub fn burn(pool: &BackingPool, amount: &U256) -> Result<BackingPool, AssetBackingError> {
    let circulating = pool.circulating_supply();
    if *amount > circulating {
        return Err(AssetBackingError::BurnExceedsSupply {
            amount: *amount,
            circulating,
        });
    }

    let burned_supply = pool
        .burned_supply
        .checked_add(*amount)
        .ok_or(AssetBackingError::Overflow)?;

    Ok(BackingPool::native_with_burned(
        pool.token_address,
        pool.total_backing,
        pool.total_supply,
        burned_supply,
    ))
}

/// Burn `amount` units and release their share of the backing
///
/// The share is computed against the pre-burn circulating supply. Returns the
/// new pool and the released amount; the backing of the new pool is reduced
/// by exactly that amount.
pub fn redeem(pool: &BackingPool, amount: &U256) -> Result<(BackingPool, U256), AssetBackingError> {
    let recovered = backing_for_amount(pool, amount)?;
    let mut burned = burn(pool, amount)?;

    burned.total_backing = pool
        .total_backing
        .checked_sub(recovered)
        .ok_or(AssetBackingError::Underflow)?;
    burned.backing_amounts = vec![burned.total_backing];

    Ok((burned, recovered))
}

/// Pool after `amount` native coin was added to its collateral
pub fn with_added_backing(
    pool: &BackingPool,
    amount: &U256,
) -> Result<BackingPool, AssetBackingError> {
    let total_backing = pool
        .total_backing
        .checked_add(*amount)
        .ok_or(AssetBackingError::Overflow)?;

    Ok(BackingPool::native_with_burned(
        pool.token_address,
        total_backing,
        pool.total_supply,
        pool.burned_supply,
    ))
}

/// Aggregated view of a pool
pub fn backing_info(pool: &BackingPool) -> Result<BackingInfo, AssetBackingError> {
    Ok(BackingInfo {
        backing_asset: pool.backing_asset,
        total_backing: pool.total_backing,
        total_supply: pool.total_supply,
        burned_supply: pool.burned_supply,
        floor_price: floor_price(pool)?,
        backing_per_token: backing_for_amount(pool, &PRICE_SCALE)?,
    })
}
