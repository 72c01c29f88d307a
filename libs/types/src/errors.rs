//! Error types for the barter engine
//!
//! Swap errors carry the stable numeric codes emitted by the on-chain
//! contract in their display form, so log lines and revert strings match
//! across deployments.

use crate::currency::Funds;
use crate::ids::{Address, SwapId, TokenId};
use thiserror::Error;

/// Top-level swap engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// Code 1000: the referenced token is not registered
    #[error("1000: invalid token id {token_id}")]
    InvalidTokenId { token_id: TokenId },

    /// Code 1001: the caller is not the party this operation belongs to
    #[error("1001: permission denied for {caller}")]
    PermissionDenied { caller: Address },

    /// Code 1002: the swap reference or shape is unusable
    ///
    /// Raised for unknown identifiers on read paths, for an empty ledger,
    /// and for a maker trying to trade with themselves.
    #[error("1002: invalid swap")]
    InvalidSwap,

    /// Code 1003: the attached payment does not equal the required amount
    #[error("1003: invalid balance transferred: required {required}, attached {attached}")]
    InvalidBalanceTransferred { required: Funds, attached: Funds },

    /// Code 1004: the swap exists but is no longer open for this operation
    #[error("1004: swap {swap_id} is not pending")]
    SwapNotPending { swap_id: SwapId },

    /// Code 1005: escrow arithmetic would wrap
    #[error("1005: escrow balance overflow")]
    Overflow,

    /// A registry interaction failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl SwapError {
    /// Stable numeric code, None for pass-through registry failures
    pub fn code(&self) -> Option<u16> {
        match self {
            SwapError::InvalidTokenId { .. } => Some(1000),
            SwapError::PermissionDenied { .. } => Some(1001),
            SwapError::InvalidSwap => Some(1002),
            SwapError::InvalidBalanceTransferred { .. } => Some(1003),
            SwapError::SwapNotPending { .. } => Some(1004),
            SwapError::Overflow => Some(1005),
            SwapError::Registry(_) => None,
        }
    }
}

/// Asset registry errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown token: {token_id}")]
    UnknownToken { token_id: TokenId },

    #[error("Ownership mismatch for token {token_id}: expected {expected}, current {current}")]
    OwnershipMismatch {
        token_id: TokenId,
        expected: Address,
        current: Address,
    },
}
