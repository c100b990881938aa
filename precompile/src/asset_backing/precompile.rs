//! Asset-backing precompile dispatcher
//!
//! # Architecture
//!
//! ```text
//! host call (caller, value, static flag, payload, gas limit)
//!     ↓
//! AssetBackingPrecompile::run / execute
//!     ↓ selector → Method, gas check, payability, static check
//!     ├─ mutating: StateOverlay ─→ create / burn_and_recover ─→ commit
//!     └─ view:     ReadOnlyState ─→ get_backing / get_floor_price
//!     ↓
//! ABI-encoded result (one word)
//! ```
//!
//! `execute` reports the precise rejection reason. `run` is the host-facing
//! boundary: every rejection becomes a plain revert.

use log::{debug, info};
use primitive_types::U256;
use smartdefi_common::{
    abi::{
        decode_address_amount_input, decode_create_token_input, decode_get_floor_price_input,
        encode_address_output, encode_u256_output, split_selector,
    },
    asset_backing::{AssetBackingError, BackingInfo, BackingPool},
    config::{ASSET_BACKING_PRECOMPILE_ADDRESS, ASSET_BACKING_PRECOMPILE_NAME},
    crypto::Address,
};
use thiserror::Error;

use super::{derive_token_address, store_fee_structure, validate_token_config, Method};
use crate::{
    backing_pool::{
        backing_for_amount, backing_info, find_backing_pool, floor_price, redeem,
        set_backing_pool, with_added_backing,
    },
    config::AssetBackingConfig,
    state::{ReadOnlyState, StateOverlay, StateProvider},
};

/// Per-call context supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Address,
    /// Native coin attached to the call
    pub value: U256,
    /// Set for static calls, which must not write state
    pub read_only: bool,
}

impl CallContext {
    pub fn new(caller: Address) -> Self {
        Self {
            caller,
            value: U256::zero(),
            read_only: false,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn into_static(mut self) -> Self {
        self.read_only = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecompileOutput {
    pub gas_used: u64,
    pub output: Vec<u8>,
}

/// Errors crossing the host boundary
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrecompileError {
    #[error("execution reverted")]
    ExecutionReverted,
    #[error("out of gas")]
    OutOfGas,
}

impl From<AssetBackingError> for PrecompileError {
    fn from(err: AssetBackingError) -> Self {
        match err {
            AssetBackingError::OutOfGas { .. } => Self::OutOfGas,
            _ => Self::ExecutionReverted,
        }
    }
}

/// Native asset-backed token precompile
///
/// Holds no state of its own: every call reads the host state again.
#[derive(Debug, Clone, Default)]
pub struct AssetBackingPrecompile {
    config: AssetBackingConfig,
}

impl AssetBackingPrecompile {
    pub fn new(config: AssetBackingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssetBackingConfig {
        &self.config
    }

    pub fn name(&self) -> &'static str {
        ASSET_BACKING_PRECOMPILE_NAME
    }

    /// Address the precompile is reachable at
    pub fn address(&self) -> Address {
        ASSET_BACKING_PRECOMPILE_ADDRESS
    }

    /// Account holding the locked backing
    pub fn custodial_address(&self) -> &Address {
        &self.config.custodial_address
    }

    /// Gas required by a payload, 0 if it carries no known selector
    pub fn required_gas(&self, input: &[u8]) -> u64 {
        self.config.gas.required_gas(input)
    }

    /// Host boundary: execute a call and collapse rejections to a revert
    pub fn run<S: StateProvider + ?Sized>(
        &self,
        state: &mut S,
        ctx: &CallContext,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<PrecompileOutput, PrecompileError> {
        self.execute(state, ctx, input, gas_limit)
            .map_err(PrecompileError::from)
    }

    /// Execute a call
    ///
    /// Writes reach `state` only if the call succeeds.
    pub fn execute<S: StateProvider + ?Sized>(
        &self,
        state: &mut S,
        ctx: &CallContext,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<PrecompileOutput, AssetBackingError> {
        let result = self.dispatch(state, ctx, input, gas_limit);
        if let Err(e) = &result {
            if log::log_enabled!(log::Level::Debug) {
                debug!(
                    "Asset backing call from {} rejected (code {:#06x}): {}",
                    ctx.caller,
                    e.to_code(),
                    e
                );
            }
        }
        result
    }

    fn dispatch<S: StateProvider + ?Sized>(
        &self,
        state: &mut S,
        ctx: &CallContext,
        input: &[u8],
        gas_limit: u64,
    ) -> Result<PrecompileOutput, AssetBackingError> {
        let (selector, args) = split_selector(input)?;
        let method =
            Method::from_selector(&selector).ok_or(AssetBackingError::UnknownSelector(selector))?;

        let gas_used = self.config.gas.cost(method, input.len());
        if gas_used > gas_limit {
            return Err(AssetBackingError::OutOfGas {
                required: gas_used,
                limit: gas_limit,
            });
        }

        if !ctx.value.is_zero() {
            return Err(AssetBackingError::NonPayable(ctx.value));
        }

        if method.is_mutating() && ctx.read_only {
            return Err(AssetBackingError::ReadOnly);
        }

        let output = if method.is_mutating() {
            let mut overlay = StateOverlay::new(state);
            let output = match method {
                Method::CreateToken => self.create(&mut overlay, ctx, args)?,
                _ => self.burn_and_recover(&mut overlay, ctx, args)?,
            };
            overlay.commit()?;
            output
        } else {
            let view = ReadOnlyState::new(&*state);
            match method {
                Method::GetBacking => self.get_backing(&view, args)?,
                _ => self.get_floor_price(&view, args)?,
            }
        };

        Ok(PrecompileOutput { gas_used, output })
    }

    fn create<S: StateProvider + ?Sized>(
        &self,
        state: &mut S,
        ctx: &CallContext,
        args: &[u8],
    ) -> Result<Vec<u8>, AssetBackingError> {
        if ctx.caller.is_zero() {
            return Err(AssetBackingError::ZeroCaller);
        }

        let config = decode_create_token_input(args)?;
        validate_token_config(&config)?;

        let initial_backing = config.initial_backing;
        if !initial_backing.is_zero() {
            let balance = state.get_balance(&ctx.caller)?;
            if balance < initial_backing {
                return Err(AssetBackingError::InsufficientBalance {
                    need: initial_backing,
                    have: balance,
                });
            }
        }

        let nonce = state.get_nonce(&ctx.caller)?;
        let token = derive_token_address(&ctx.caller, nonce, &config);
        if state.get_code_size(&token)? > 0 || find_backing_pool(&*state, &token)?.is_some() {
            return Err(AssetBackingError::TokenExists(token));
        }

        let pool = BackingPool::native(token, initial_backing, config.total_supply);
        set_backing_pool(state, &pool)?;

        if !initial_backing.is_zero() {
            state.sub_balance(&ctx.caller, &initial_backing)?;
            state.add_balance(&self.config.custodial_address, &initial_backing)?;
        }

        store_fee_structure(state, &token, &config.fee_structure())?;

        info!(
            "Created asset-backed token {} ({}) at {}: supply {}, backing {}",
            config.name, config.symbol, token, config.total_supply, initial_backing
        );
        Ok(encode_address_output(&token))
    }

    fn get_backing<S: StateProvider + ?Sized>(
        &self,
        state: &S,
        args: &[u8],
    ) -> Result<Vec<u8>, AssetBackingError> {
        let (token, amount) = decode_address_amount_input(args)?;
        let pool = Self::existing_pool(state, &token)?;
        Ok(encode_u256_output(&backing_for_amount(&pool, &amount)?))
    }

    fn burn_and_recover<S: StateProvider + ?Sized>(
        &self,
        state: &mut S,
        ctx: &CallContext,
        args: &[u8],
    ) -> Result<Vec<u8>, AssetBackingError> {
        let (token, amount) = decode_address_amount_input(args)?;
        let pool = Self::existing_pool(&*state, &token)?;

        let (pool, recovered) = redeem(&pool, &amount)?;
        set_backing_pool(state, &pool)?;

        if !recovered.is_zero() {
            state.sub_balance(&self.config.custodial_address, &recovered)?;
            state.add_balance(&ctx.caller, &recovered)?;
        }

        info!(
            "Burned {} of {} for {}: recovered {}, remaining backing {}",
            amount, token, ctx.caller, recovered, pool.total_backing
        );
        Ok(encode_u256_output(&recovered))
    }

    fn get_floor_price<S: StateProvider + ?Sized>(
        &self,
        state: &S,
        args: &[u8],
    ) -> Result<Vec<u8>, AssetBackingError> {
        let token = decode_get_floor_price_input(args)?;
        let pool = Self::existing_pool(state, &token)?;
        Ok(encode_u256_output(&floor_price(&pool)?))
    }

    fn existing_pool<S: StateProvider + ?Sized>(
        state: &S,
        token: &Address,
    ) -> Result<BackingPool, AssetBackingError> {
        find_backing_pool(state, token)?.ok_or(AssetBackingError::PoolNotFound(*token))
    }

    /// Add `amount` to the backing of an existing pool
    ///
    /// For host-side fee routing: the host credits the same amount of native
    /// coin to the custodial address. Not reachable from call payloads.
    pub fn credit_backing<S: StateProvider + ?Sized>(
        &self,
        state: &mut S,
        token: &Address,
        amount: &U256,
    ) -> Result<BackingPool, AssetBackingError> {
        let pool = Self::existing_pool(&*state, token)?;
        let pool = with_added_backing(&pool, amount)?;
        set_backing_pool(state, &pool)?;

        debug!(
            "Credited {} backing to {}, total {}",
            amount, token, pool.total_backing
        );
        Ok(pool)
    }

    /// Aggregated backing data of a token
    pub fn backing_info<S: StateProvider + ?Sized>(
        &self,
        state: &S,
        token: &Address,
    ) -> Result<BackingInfo, AssetBackingError> {
        backing_info(&Self::existing_pool(state, token)?)
    }
}
