use std::collections::HashMap;

use primitive_types::U256;
use smartdefi_common::{
    crypto::{Address, Hash},
    error::{BalanceError, StateError},
};

use super::StateProvider;

/// In-memory host state
///
/// Zero words are never stored: writing zero clears the slot, so
/// `storage_len` counts only live slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    storage: HashMap<Address, HashMap<Hash, Hash>>,
    balances: HashMap<Address, U256>,
    nonces: HashMap<Address, u64>,
    code_sizes: HashMap<Address, usize>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&mut self, account: Address, balance: U256) {
        self.balances.insert(account, balance);
    }

    pub fn set_nonce(&mut self, account: Address, nonce: u64) {
        self.nonces.insert(account, nonce);
    }

    pub fn set_code_size(&mut self, account: Address, size: usize) {
        self.code_sizes.insert(account, size);
    }

    /// Number of non-zero storage slots of `account`
    pub fn storage_len(&self, account: &Address) -> usize {
        self.storage.get(account).map_or(0, HashMap::len)
    }
}

impl StateProvider for MemoryState {
    fn get_state(&self, account: &Address, key: &Hash) -> Result<Hash, StateError> {
        Ok(self
            .storage
            .get(account)
            .and_then(|slots| slots.get(key))
            .copied()
            .unwrap_or_default())
    }

    fn set_state(&mut self, account: &Address, key: Hash, value: Hash) -> Result<(), StateError> {
        if value.is_zero() {
            if let Some(slots) = self.storage.get_mut(account) {
                slots.remove(&key);
            }
        } else {
            self.storage.entry(*account).or_default().insert(key, value);
        }
        Ok(())
    }

    fn get_balance(&self, account: &Address) -> Result<U256, StateError> {
        Ok(self.balances.get(account).copied().unwrap_or_default())
    }

    fn add_balance(&mut self, account: &Address, amount: &U256) -> Result<(), StateError> {
        let balance = self.balances.entry(*account).or_default();
        *balance = balance
            .checked_add(*amount)
            .ok_or(BalanceError::Overflow { account: *account })?;
        Ok(())
    }

    fn sub_balance(&mut self, account: &Address, amount: &U256) -> Result<(), StateError> {
        let balance = self.balances.entry(*account).or_default();
        *balance = balance
            .checked_sub(*amount)
            .ok_or(BalanceError::Insufficient {
                account: *account,
                need: *amount,
                have: *balance,
            })?;
        Ok(())
    }

    fn get_nonce(&self, account: &Address) -> Result<u64, StateError> {
        Ok(self.nonces.get(account).copied().unwrap_or_default())
    }

    fn get_code_size(&self, account: &Address) -> Result<usize, StateError> {
        Ok(self.code_sizes.get(account).copied().unwrap_or_default())
    }
}
