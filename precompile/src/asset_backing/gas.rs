//! Gas schedule of the asset-backing precompile
//!
//! Every method has a fixed base cost. Token creation also pays per byte of
//! call arguments, since the configuration it persists has variable size.

use serde::{Deserialize, Serialize};
use smartdefi_common::{
    abi::{split_selector, SELECTOR_SIZE},
    config::{
        GAS_BURN_AND_RECOVER, GAS_CREATE_TOKEN, GAS_GET_BACKING, GAS_GET_FLOOR_PRICE, GAS_PER_BYTE,
    },
};

use super::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSchedule {
    pub create_token: u64,
    /// Charged per argument byte of `createAssetBackedToken`
    pub per_byte: u64,
    pub get_backing: u64,
    pub burn_and_recover: u64,
    pub get_floor_price: u64,
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            create_token: GAS_CREATE_TOKEN,
            per_byte: GAS_PER_BYTE,
            get_backing: GAS_GET_BACKING,
            burn_and_recover: GAS_BURN_AND_RECOVER,
            get_floor_price: GAS_GET_FLOOR_PRICE,
        }
    }
}

impl GasSchedule {
    /// Cost of calling `method` with a payload of `input_len` bytes
    /// (selector included)
    pub fn cost(&self, method: Method, input_len: usize) -> u64 {
        match method {
            Method::CreateToken => {
                let data_len = input_len.saturating_sub(SELECTOR_SIZE) as u64;
                self.create_token
                    .saturating_add(data_len.saturating_mul(self.per_byte))
            }
            Method::GetBacking => self.get_backing,
            Method::BurnAndRecover => self.burn_and_recover,
            Method::GetFloorPrice => self.get_floor_price,
        }
    }

    /// Gas required by a raw payload
    ///
    /// Payloads without a known selector cost nothing; they are rejected on
    /// execution instead.
    pub fn required_gas(&self, input: &[u8]) -> u64 {
        split_selector(input)
            .ok()
            .and_then(|(selector, _)| Method::from_selector(&selector))
            .map_or(0, |method| self.cost(method, input.len()))
    }
}
