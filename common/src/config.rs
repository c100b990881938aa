use crate::crypto::Address;
use primitive_types::U256;

pub const VERSION: &str = env!("BUILD_VERSION");

// Native coin identifier
// The all-zero address stands for the chain's base currency wherever an
// asset identifier is expected. It is the only accepted backing asset.
pub const NATIVE_COIN: Address = Address::zero();

// 18 decimals numbers
pub const COIN_DECIMALS: u8 = 18;
// 1 000 000 000 000 000 000 to represent 1 coin
pub const COIN_VALUE: u64 = 10u64.pow(COIN_DECIMALS as u32);

// Asset-backing precompile
// Deployed at 0x0000000000000000000000000000000000000100
pub const ASSET_BACKING_PRECOMPILE_ADDRESS: Address = Address::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00,
]);
pub const ASSET_BACKING_PRECOMPILE_NAME: &str = "SmartDeFi Asset Backing";

// Gas schedule of the precompile
// Token creation pays a base cost plus a surcharge per payload byte
// (selector excluded) for the configuration it persists.
pub const GAS_CREATE_TOKEN: u64 = 100_000;
pub const GAS_GET_BACKING: u64 = 5_000;
pub const GAS_BURN_AND_RECOVER: u64 = 30_000;
pub const GAS_GET_FLOOR_PRICE: u64 = GAS_GET_BACKING;
pub const GAS_PER_BYTE: u64 = 200;

// Fixed-point precision of the floor price (1e18)
pub const PRICE_SCALE: U256 = U256([COIN_VALUE, 0, 0, 0]);
