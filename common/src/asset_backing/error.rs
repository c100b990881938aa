//! Asset Backing Error Codes
//!
//! Range: 0x0300 - 0x03FF
//! Format: BACKING_ERROR_<CATEGORY>_<SPECIFIC>
//!
//! Every variant is a reason for rejecting an operation. The codes are for
//! logs and host-side diagnostics: callers of the precompile only ever see
//! a reverted call.

use primitive_types::U256;
use thiserror::Error;

use crate::{abi::AbiError, crypto::Address, error::StateError};

// ===== Payload Errors (0x0300 - 0x030F) =====

pub const BACKING_ERROR_MALFORMED_PAYLOAD: u64 = 0x0300;
pub const BACKING_ERROR_UNKNOWN_SELECTOR: u64 = 0x0301;

// ===== Call Context Errors (0x0310 - 0x031F) =====

pub const BACKING_ERROR_ZERO_CALLER: u64 = 0x0310;
pub const BACKING_ERROR_READ_ONLY: u64 = 0x0311;
pub const BACKING_ERROR_NON_PAYABLE: u64 = 0x0312;
pub const BACKING_ERROR_OUT_OF_GAS: u64 = 0x0313;

// ===== Configuration Errors (0x0320 - 0x032F) =====

pub const BACKING_ERROR_ZERO_SUPPLY: u64 = 0x0320;
pub const BACKING_ERROR_BUY_FEES_TOO_HIGH: u64 = 0x0321;
pub const BACKING_ERROR_SELL_FEES_TOO_HIGH: u64 = 0x0322;
pub const BACKING_ERROR_UNSUPPORTED_BACKING_ASSET: u64 = 0x0323;

// ===== Pool Errors (0x0330 - 0x033F) =====

pub const BACKING_ERROR_INSUFFICIENT_BALANCE: u64 = 0x0330;
pub const BACKING_ERROR_TOKEN_EXISTS: u64 = 0x0331;
pub const BACKING_ERROR_POOL_NOT_FOUND: u64 = 0x0332;
pub const BACKING_ERROR_BURN_EXCEEDS_SUPPLY: u64 = 0x0333;
pub const BACKING_ERROR_OVERFLOW: u64 = 0x0334;
pub const BACKING_ERROR_UNDERFLOW: u64 = 0x0335;

// ===== Host Errors (0x03F0 - 0x03FF) =====

pub const BACKING_ERROR_STATE: u64 = 0x03F0;

/// Reasons an asset-backing operation is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetBackingError {
    // Payload
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] AbiError),
    #[error("Unknown method selector 0x{}", hex::encode(.0))]
    UnknownSelector([u8; 4]),

    // Call context
    #[error("Caller identity is required")]
    ZeroCaller,
    #[error("State mutation is not allowed in a read-only call")]
    ReadOnly,
    #[error("Method is not payable, received {0}")]
    NonPayable(U256),
    #[error("Out of gas: required {required}, limit {limit}")]
    OutOfGas { required: u64, limit: u64 },

    // Configuration
    #[error("Total supply must be greater than zero")]
    ZeroSupply,
    #[error("Buy-side fees {total} exceed the cap of {cap} bp")]
    BuyFeesTooHigh { total: U256, cap: u64 },
    #[error("Sell-side fees {total} exceed the cap of {cap} bp")]
    SellFeesTooHigh { total: U256, cap: u64 },
    #[error("Backing asset {0} is not the native coin")]
    UnsupportedBackingAsset(Address),

    // Pool
    #[error("Insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: U256, have: U256 },
    #[error("Token {0} already exists")]
    TokenExists(Address),
    #[error("No backing pool for token {0}")]
    PoolNotFound(Address),
    #[error("Burning {amount} exceeds circulating supply {circulating}")]
    BurnExceedsSupply { amount: U256, circulating: U256 },
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Arithmetic underflow")]
    Underflow,

    // Host
    #[error(transparent)]
    State(#[from] StateError),
}

impl AssetBackingError {
    /// Convert error to u64 error code
    pub fn to_code(&self) -> u64 {
        match self {
            Self::MalformedPayload(_) => BACKING_ERROR_MALFORMED_PAYLOAD,
            Self::UnknownSelector(_) => BACKING_ERROR_UNKNOWN_SELECTOR,

            Self::ZeroCaller => BACKING_ERROR_ZERO_CALLER,
            Self::ReadOnly => BACKING_ERROR_READ_ONLY,
            Self::NonPayable(_) => BACKING_ERROR_NON_PAYABLE,
            Self::OutOfGas { .. } => BACKING_ERROR_OUT_OF_GAS,

            Self::ZeroSupply => BACKING_ERROR_ZERO_SUPPLY,
            Self::BuyFeesTooHigh { .. } => BACKING_ERROR_BUY_FEES_TOO_HIGH,
            Self::SellFeesTooHigh { .. } => BACKING_ERROR_SELL_FEES_TOO_HIGH,
            Self::UnsupportedBackingAsset(_) => BACKING_ERROR_UNSUPPORTED_BACKING_ASSET,

            Self::InsufficientBalance { .. } => BACKING_ERROR_INSUFFICIENT_BALANCE,
            Self::TokenExists(_) => BACKING_ERROR_TOKEN_EXISTS,
            Self::PoolNotFound(_) => BACKING_ERROR_POOL_NOT_FOUND,
            Self::BurnExceedsSupply { .. } => BACKING_ERROR_BURN_EXCEEDS_SUPPLY,
            Self::Overflow => BACKING_ERROR_OVERFLOW,
            Self::Underflow => BACKING_ERROR_UNDERFLOW,

            // A write through a read-only view is the same rejection as a
            // mutating call made statically
            Self::State(StateError::WriteProtected) => BACKING_ERROR_READ_ONLY,
            Self::State(_) => BACKING_ERROR_STATE,
        }
    }
}
