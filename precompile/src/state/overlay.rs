use indexmap::IndexMap;
use log::trace;
use primitive_types::U256;
use smartdefi_common::{
    crypto::{Address, Hash},
    error::{BalanceError, StateError},
};

use super::StateProvider;

/// Write buffer over a host state
///
/// Accumulates storage writes and balance changes of one operation. Reads
/// see the buffered values first. On success the buffer is flushed with
/// [`StateOverlay::commit`]; on failure it is dropped and the host state is
/// left untouched.
///
/// Buffered entries keep their insertion order so that commits replay
/// deterministically.
pub struct StateOverlay<'a, S: StateProvider + ?Sized> {
    inner: &'a mut S,
    /// Changes to be applied ((account, key) → value)
    storage: IndexMap<(Address, Hash), Hash>,
    /// Final balances of touched accounts
    balances: IndexMap<Address, U256>,
}

impl<'a, S: StateProvider + ?Sized> StateOverlay<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            storage: IndexMap::new(),
            balances: IndexMap::new(),
        }
    }

    /// Check if the overlay is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty() && self.balances.is_empty()
    }

    /// Number of buffered storage writes
    pub fn storage_writes(&self) -> usize {
        self.storage.len()
    }

    /// Flush every buffered change into the host state
    ///
    /// Storage writes are grouped per account and handed over as one batch.
    pub fn commit(self) -> Result<(), StateError> {
        let mut batches: IndexMap<Address, Vec<(Hash, Hash)>> = IndexMap::new();
        for ((account, key), value) in self.storage {
            batches.entry(account).or_default().push((key, value));
        }

        for (account, writes) in batches {
            trace!("committing {} storage writes for {}", writes.len(), account);
            self.inner.set_state_batch(&account, &writes)?;
        }

        for (account, balance) in self.balances {
            let current = self.inner.get_balance(&account)?;
            if balance > current {
                self.inner.add_balance(&account, &(balance - current))?;
            } else if balance < current {
                self.inner.sub_balance(&account, &(current - balance))?;
            }
        }

        Ok(())
    }
}

impl<'a, S: StateProvider + ?Sized> StateProvider for StateOverlay<'a, S> {
    fn get_state(&self, account: &Address, key: &Hash) -> Result<Hash, StateError> {
        match self.storage.get(&(*account, *key)) {
            Some(value) => Ok(*value),
            None => self.inner.get_state(account, key),
        }
    }

    fn set_state(&mut self, account: &Address, key: Hash, value: Hash) -> Result<(), StateError> {
        self.storage.insert((*account, key), value);
        Ok(())
    }

    fn get_balance(&self, account: &Address) -> Result<U256, StateError> {
        match self.balances.get(account) {
            Some(balance) => Ok(*balance),
            None => self.inner.get_balance(account),
        }
    }

    fn add_balance(&mut self, account: &Address, amount: &U256) -> Result<(), StateError> {
        let balance = self
            .get_balance(account)?
            .checked_add(*amount)
            .ok_or(BalanceError::Overflow { account: *account })?;
        self.balances.insert(*account, balance);
        Ok(())
    }

    fn sub_balance(&mut self, account: &Address, amount: &U256) -> Result<(), StateError> {
        let current = self.get_balance(account)?;
        let balance = current
            .checked_sub(*amount)
            .ok_or(BalanceError::Insufficient {
                account: *account,
                need: *amount,
                have: current,
            })?;
        self.balances.insert(*account, balance);
        Ok(())
    }

    fn get_nonce(&self, account: &Address) -> Result<u64, StateError> {
        self.inner.get_nonce(account)
    }

    fn get_code_size(&self, account: &Address) -> Result<usize, StateError> {
        self.inner.get_code_size(account)
    }
}
