use primitive_types::U256;
use smartdefi_common::{
    crypto::{Address, Hash},
    error::StateError,
};

use super::StateProvider;

/// View over a host state that refuses every mutation
pub struct ReadOnlyState<'a, S: StateProvider + ?Sized> {
    inner: &'a S,
}

impl<'a, S: StateProvider + ?Sized> ReadOnlyState<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self { inner }
    }
}

impl<'a, S: StateProvider + ?Sized> StateProvider for ReadOnlyState<'a, S> {
    fn get_state(&self, account: &Address, key: &Hash) -> Result<Hash, StateError> {
        self.inner.get_state(account, key)
    }

    fn set_state(&mut self, _: &Address, _: Hash, _: Hash) -> Result<(), StateError> {
        Err(StateError::WriteProtected)
    }

    fn set_state_batch(&mut self, _: &Address, _: &[(Hash, Hash)]) -> Result<(), StateError> {
        Err(StateError::WriteProtected)
    }

    fn get_balance(&self, account: &Address) -> Result<U256, StateError> {
        self.inner.get_balance(account)
    }

    fn add_balance(&mut self, _: &Address, _: &U256) -> Result<(), StateError> {
        Err(StateError::WriteProtected)
    }

    fn sub_balance(&mut self, _: &Address, _: &U256) -> Result<(), StateError> {
        Err(StateError::WriteProtected)
    }

    fn get_nonce(&self, account: &Address) -> Result<u64, StateError> {
        self.inner.get_nonce(account)
    }

    fn get_code_size(&self, account: &Address) -> Result<usize, StateError> {
        self.inner.get_code_size(account)
    }
}
