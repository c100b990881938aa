//! Host state access for the asset-backing precompile.
//!
//! The precompile never owns state: account storage, native-coin balances
//! and account metadata belong to the host execution engine and are reached
//! through [`StateProvider`].
//!
//! # Architecture
//!
//! ```text
//! Host engine state (trie, database, ...)
//!     ↓
//! StateProvider trait (this module)
//!     ↓
//! StateOverlay (buffers writes of one operation) / ReadOnlyState (views)
//!     ↓
//! Backing pool store, fee storage, dispatcher
//! ```
//!
//! - `overlay`: write buffer committed only when an operation succeeds
//! - `read_only`: view whose mutators fail, used for query operations
//! - `memory`: in-memory host used by tests and embedders

mod memory;
mod overlay;
mod read_only;

pub use memory::MemoryState;
pub use overlay::StateOverlay;
pub use read_only::ReadOnlyState;

use primitive_types::U256;
use smartdefi_common::{
    crypto::{Address, Hash},
    error::StateError,
};

/// Host state consumed by the precompile
///
/// Reads of storage slots that were never written return the zero word.
pub trait StateProvider {
    /// Read a storage word of `account`
    fn get_state(&self, account: &Address, key: &Hash) -> Result<Hash, StateError>;

    /// Write a storage word of `account`
    fn set_state(&mut self, account: &Address, key: Hash, value: Hash) -> Result<(), StateError>;

    /// Write several storage words of `account` as one mutation
    ///
    /// Hosts with their own batching should override this so that no reader
    /// can observe a partially applied batch.
    fn set_state_batch(
        &mut self,
        account: &Address,
        writes: &[(Hash, Hash)],
    ) -> Result<(), StateError> {
        for (key, value) in writes {
            self.set_state(account, *key, *value)?;
        }
        Ok(())
    }

    /// Native-coin balance of `account`
    fn get_balance(&self, account: &Address) -> Result<U256, StateError>;

    fn add_balance(&mut self, account: &Address, amount: &U256) -> Result<(), StateError>;

    /// Fails with an insufficient-balance error instead of going negative
    fn sub_balance(&mut self, account: &Address, amount: &U256) -> Result<(), StateError>;

    /// Transaction counter of `account`
    fn get_nonce(&self, account: &Address) -> Result<u64, StateError>;

    /// Size of the code deployed at `account` (0 = no code)
    fn get_code_size(&self, account: &Address) -> Result<usize, StateError>;
}
