//! Asset Backing Types
//!
//! Core data structures for asset-backed tokens.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::{config::NATIVE_COIN, crypto::Address};

use super::{FEE_COMPONENTS, FEE_COMPONENTS_PER_SIDE};

// ===== Token Configuration =====

/// Configuration of a token to create, decoded from the call payload
///
/// Only `total_supply`, `backing_asset`, `initial_backing` and `fees` take
/// part in validation; `name` and `symbol` feed the address derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    /// Must be the native coin (all-zero address)
    pub backing_asset: Address,
    /// Native coin locked as collateral at creation
    pub initial_backing: U256,
    /// Fee components in basis points, buy side then sell side
    pub fees: [U256; FEE_COMPONENTS],
    pub only_sb: bool,
    pub owner: Address,
    pub enable_lge: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply: U256::zero(),
            backing_asset: NATIVE_COIN,
            initial_backing: U256::zero(),
            fees: [U256::zero(); FEE_COMPONENTS],
            only_sb: false,
            owner: Address::zero(),
            enable_lge: false,
        }
    }
}

impl TokenConfig {
    /// Fee-related settings persisted next to the pool
    pub fn fee_structure(&self) -> FeeStructure {
        FeeStructure {
            fees: self.fees,
            only_sb: self.only_sb,
            owner: self.owner,
            enable_lge: self.enable_lge,
        }
    }
}

// ===== Fee Structure =====

/// Fee settings of a token as stored in its account
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStructure {
    pub fees: [U256; FEE_COMPONENTS],
    pub only_sb: bool,
    pub owner: Address,
    pub enable_lge: bool,
}

impl FeeStructure {
    pub fn buy_fees(&self) -> &[U256] {
        &self.fees[..FEE_COMPONENTS_PER_SIDE]
    }

    pub fn sell_fees(&self) -> &[U256] {
        &self.fees[FEE_COMPONENTS_PER_SIDE..]
    }
}

// ===== Backing Pool =====

/// Collateral record of a token
///
/// `token_address` is not stored: it is implied by the slots the record
/// lives at. `backing_assets`/`backing_amounts` are reserved for multi-asset
/// backing and always hold the single native-coin entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackingPool {
    pub token_address: Address,
    pub backing_asset: Address,
    /// Native coin currently locked as collateral
    pub total_backing: U256,
    /// Units issued at creation, immutable afterwards
    pub total_supply: U256,
    /// Units permanently removed from circulation, never decreases
    pub burned_supply: U256,
    pub backing_assets: Vec<Address>,
    pub backing_amounts: Vec<U256>,
}

impl BackingPool {
    /// Pool backed by the native coin only
    pub fn native(token_address: Address, total_backing: U256, total_supply: U256) -> Self {
        Self::native_with_burned(token_address, total_backing, total_supply, U256::zero())
    }

    pub fn native_with_burned(
        token_address: Address,
        total_backing: U256,
        total_supply: U256,
        burned_supply: U256,
    ) -> Self {
        Self {
            token_address,
            backing_asset: NATIVE_COIN,
            total_backing,
            total_supply,
            burned_supply,
            backing_assets: vec![NATIVE_COIN],
            backing_amounts: vec![total_backing],
        }
    }

    /// A pool exists once it has been created with a non-zero supply
    pub fn exists(&self) -> bool {
        !self.total_supply.is_zero()
    }

    /// Total supply minus burned supply
    pub fn circulating_supply(&self) -> U256 {
        self.total_supply.saturating_sub(self.burned_supply)
    }
}

// ===== Backing Info =====

/// Aggregated view of a pool for host-side inspection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackingInfo {
    pub backing_asset: Address,
    pub total_backing: U256,
    pub total_supply: U256,
    pub burned_supply: U256,
    pub floor_price: U256,
    /// Backing redeemable for one whole token (1e18 units)
    pub backing_per_token: U256,
}
