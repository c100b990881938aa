use primitive_types::U256;
use thiserror::Error;

use crate::crypto::Address;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Balance overflow for {account}")]
    Overflow { account: Address },

    #[error("Insufficient balance for {account}: need {need}, have {have}")]
    Insufficient {
        account: Address,
        need: U256,
        have: U256,
    },
}

/// Errors raised by the host state container
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error("State mutation attempted through a read-only view")]
    WriteProtected,

    #[error("State backend error: {0}")]
    Backend(String),
}
