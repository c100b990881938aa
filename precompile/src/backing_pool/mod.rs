//! Backing pool accounting
//!
//! One pool per token, stored inside the token's own account at slots derived
//! from its address.
//!
//! # Storage Layout
//!
//! ```text
//! base = keccak256(token ‖ "SmartDeFi-BackingPool") mod 1e10
//!
//! base + 0  total backing   (uint256)
//! base + 1  total supply    (uint256)
//! base + 2  burned supply   (uint256)
//! base + 3  backing asset   (address, left-padded)
//! ```
//!
//! - `slot`: slot base derivation
//! - `store`: reading and writing the record
//! - `math`: floor price, redemption and burn arithmetic

pub mod math;
pub mod slot;
pub mod store;

pub use math::{backing_for_amount, backing_info, burn, floor_price, redeem, with_added_backing};
pub use slot::{backing_pool_slot_base, fee_slot_base, slot_base, slot_key};
pub use store::{find_backing_pool, get_backing_pool, set_backing_pool};
