//! Call-payload codec for the asset-backing precompile
//!
//! Payloads follow the Ethereum contract ABI: a 4-byte method selector
//! (first bytes of the Keccak-256 of the canonical signature) followed by
//! the arguments encoded as 32-byte words.

mod error;
mod reader;
mod writer;

pub use error::AbiError;
pub use reader::Reader;
pub use writer::{dynamic_size, padded_len, Writer};

use lazy_static::lazy_static;
use primitive_types::U256;

use crate::{
    asset_backing::{TokenConfig, FEE_COMPONENTS},
    crypto::{keccak256, Address},
};

pub const WORD_SIZE: usize = 32;
pub const SELECTOR_SIZE: usize = 4;

pub type Selector = [u8; SELECTOR_SIZE];

pub const CREATE_TOKEN_SIGNATURE: &str = "createAssetBackedToken((string,string,uint256,address,uint256,uint256[12],bool,address,bool))";
pub const GET_BACKING_SIGNATURE: &str = "getBacking(address,uint256)";
pub const BURN_AND_RECOVER_SIGNATURE: &str = "burnAndRecover(address,uint256)";
pub const GET_FLOOR_PRICE_SIGNATURE: &str = "getFloorPrice(address)";

lazy_static! {
    pub static ref CREATE_TOKEN_SELECTOR: Selector = selector(CREATE_TOKEN_SIGNATURE);
    pub static ref GET_BACKING_SELECTOR: Selector = selector(GET_BACKING_SIGNATURE);
    pub static ref BURN_AND_RECOVER_SELECTOR: Selector = selector(BURN_AND_RECOVER_SIGNATURE);
    pub static ref GET_FLOOR_PRICE_SELECTOR: Selector = selector(GET_FLOOR_PRICE_SIGNATURE);
}

// Words in the head of the token config tuple:
// name, symbol, totalSupply, backingAsset, initialBacking, fees[12], onlySB, owner, enableLGE
const TOKEN_CONFIG_HEAD_WORDS: usize = 8 + FEE_COMPONENTS;
const FEES_INDEX: usize = 5;

/// Method selector of a canonical function signature
pub fn selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; SELECTOR_SIZE];
    selector.copy_from_slice(&hash.as_bytes()[..SELECTOR_SIZE]);
    selector
}

/// Split a call payload into its selector and argument block
pub fn split_selector(input: &[u8]) -> Result<(Selector, &[u8]), AbiError> {
    if input.len() < SELECTOR_SIZE {
        return Err(AbiError::Truncated {
            needed: SELECTOR_SIZE,
            available: input.len(),
        });
    }

    let mut selector = [0u8; SELECTOR_SIZE];
    selector.copy_from_slice(&input[..SELECTOR_SIZE]);
    Ok((selector, &input[SELECTOR_SIZE..]))
}

// ===== Calls =====

pub fn encode_create_token_call(config: &TokenConfig) -> Vec<u8> {
    let name_offset = TOKEN_CONFIG_HEAD_WORDS * WORD_SIZE;
    let symbol_offset = name_offset + dynamic_size(config.name.len());
    let tuple_size = symbol_offset + dynamic_size(config.symbol.len());

    let mut writer = Writer::with_capacity(SELECTOR_SIZE + WORD_SIZE + tuple_size);
    writer.write_raw(&*CREATE_TOKEN_SELECTOR);
    // Single dynamic argument: offset of the tuple
    writer.write_usize(WORD_SIZE);

    writer.write_usize(name_offset);
    writer.write_usize(symbol_offset);
    writer.write_u256(&config.total_supply);
    writer.write_address(&config.backing_asset);
    writer.write_u256(&config.initial_backing);
    for fee in config.fees.iter() {
        writer.write_u256(fee);
    }
    writer.write_bool(config.only_sb);
    writer.write_address(&config.owner);
    writer.write_bool(config.enable_lge);

    writer.write_dynamic_bytes(config.name.as_bytes());
    writer.write_dynamic_bytes(config.symbol.as_bytes());

    writer.into_bytes()
}

/// Decode the argument block of `createAssetBackedToken`
pub fn decode_create_token_input(args: &[u8]) -> Result<TokenConfig, AbiError> {
    let reader = Reader::with_head(args, 1)?;
    let tuple = reader.read_tail(0)?;
    if tuple.len() < TOKEN_CONFIG_HEAD_WORDS * WORD_SIZE {
        return Err(AbiError::Truncated {
            needed: TOKEN_CONFIG_HEAD_WORDS * WORD_SIZE,
            available: tuple.len(),
        });
    }

    let mut fees = [U256::zero(); FEE_COMPONENTS];
    for (i, fee) in fees.iter_mut().enumerate() {
        *fee = tuple.read_u256(FEES_INDEX + i)?;
    }

    Ok(TokenConfig {
        name: tuple.read_string(0)?,
        symbol: tuple.read_string(1)?,
        total_supply: tuple.read_u256(2)?,
        backing_asset: tuple.read_address(3)?,
        initial_backing: tuple.read_u256(4)?,
        fees,
        only_sb: tuple.read_bool(FEES_INDEX + FEE_COMPONENTS)?,
        owner: tuple.read_address(FEES_INDEX + FEE_COMPONENTS + 1)?,
        enable_lge: tuple.read_bool(FEES_INDEX + FEE_COMPONENTS + 2)?,
    })
}

fn encode_address_amount_call(selector: &Selector, token: &Address, amount: &U256) -> Vec<u8> {
    let mut writer = Writer::with_capacity(SELECTOR_SIZE + 2 * WORD_SIZE);
    writer.write_raw(selector);
    writer.write_address(token);
    writer.write_u256(amount);
    writer.into_bytes()
}

pub fn encode_get_backing_call(token: &Address, amount: &U256) -> Vec<u8> {
    encode_address_amount_call(&GET_BACKING_SELECTOR, token, amount)
}

pub fn encode_burn_and_recover_call(token: &Address, amount: &U256) -> Vec<u8> {
    encode_address_amount_call(&BURN_AND_RECOVER_SELECTOR, token, amount)
}

pub fn encode_get_floor_price_call(token: &Address) -> Vec<u8> {
    let mut writer = Writer::with_capacity(SELECTOR_SIZE + WORD_SIZE);
    writer.write_raw(&*GET_FLOOR_PRICE_SELECTOR);
    writer.write_address(token);
    writer.into_bytes()
}

/// Decode `(address token, uint256 amount)`, shared by `getBacking` and `burnAndRecover`
pub fn decode_address_amount_input(args: &[u8]) -> Result<(Address, U256), AbiError> {
    let reader = Reader::with_head(args, 2)?;
    Ok((reader.read_address(0)?, reader.read_u256(1)?))
}

/// Decode `(address token)` of `getFloorPrice`
pub fn decode_get_floor_price_input(args: &[u8]) -> Result<Address, AbiError> {
    let reader = Reader::with_head(args, 1)?;
    reader.read_address(0)
}

// ===== Results =====

pub fn encode_address_output(address: &Address) -> Vec<u8> {
    address.to_word().to_bytes().to_vec()
}

pub fn encode_u256_output(value: &U256) -> Vec<u8> {
    value.to_big_endian().to_vec()
}

pub fn decode_address_output(output: &[u8]) -> Result<Address, AbiError> {
    Reader::with_head(output, 1)?.read_address(0)
}

pub fn decode_u256_output(output: &[u8]) -> Result<U256, AbiError> {
    Reader::with_head(output, 1)?.read_u256(0)
}
