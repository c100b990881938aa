//! Asset Backing Module
//!
//! Types shared by the asset-backing precompile: tokens whose redemption
//! value is backed 1:1 by the native coin.
//!
//! # Features
//!
//! - Token configuration and fee structure
//! - Backing pool record (backing, supply, burned supply)
//! - Storage layout constants
//! - Rejection reasons with stable diagnostic codes

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::*;
pub use types::*;
