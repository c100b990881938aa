// Allow some clippy lints for wire-format code
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod abi;
pub mod asset_backing;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logger;

// Re-exported so hosts do not need to pin their own version
pub use primitive_types::{U256, U512};
