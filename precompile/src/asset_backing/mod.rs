//! Asset-backing precompile
//!
//! Creates tokens backed by locked native coin and lets holders burn them
//! for their share of that backing.
//!
//! # Methods
//!
//! | Method                   | Mutating | Gas                      |
//! |--------------------------|----------|--------------------------|
//! | `createAssetBackedToken` | yes      | 100 000 + 200 / arg byte |
//! | `getBacking`             | no       | 5 000                    |
//! | `burnAndRecover`         | yes      | 30 000                   |
//! | `getFloorPrice`          | no       | 5 000                    |
//!
//! - `deriver`: address of a new token
//! - `validator`: configuration rules
//! - `fees`: fee structure storage
//! - `gas`: gas schedule
//! - `precompile`: dispatcher and host entry points

mod deriver;
mod fees;
mod gas;
mod method;
mod precompile;
mod validator;

pub use deriver::derive_token_address;
pub use fees::{load_fee_structure, store_fee_structure};
pub use gas::GasSchedule;
pub use method::Method;
pub use precompile::{AssetBackingPrecompile, CallContext, PrecompileError, PrecompileOutput};
pub use validator::validate_token_config;
