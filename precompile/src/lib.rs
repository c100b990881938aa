//! SmartDeFi asset-backing precompile
//!
//! Protocol-level tokens whose redemption value is backed by the native
//! coin. The precompile keeps one backing pool per token inside the token's
//! account storage and moves native coin between callers and its custodial
//! account.
//!
//! The host engine provides state through [`state::StateProvider`] and calls
//! [`asset_backing::AssetBackingPrecompile::run`].

pub mod asset_backing;
pub mod backing_pool;
pub mod config;
pub mod state;

pub use asset_backing::{
    AssetBackingPrecompile, CallContext, GasSchedule, Method, PrecompileError, PrecompileOutput,
};
pub use config::AssetBackingConfig;
pub use state::{MemoryState, StateProvider};
