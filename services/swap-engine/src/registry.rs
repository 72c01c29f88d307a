//! Asset registry collaborator
//!
//! The engine never holds assets itself. It reads current ownership and
//! orders transfers through this seam, and treats whatever sits behind it
//! as the live source of truth. Swaps only snapshot what the registry said
//! at initiation time.

use std::collections::HashMap;

use tracing::debug;
use types::errors::RegistryError;
use types::ids::{Address, TokenId};

/// Ownership lookup and transfer for registered assets
///
/// Implementations must behave transactionally per call: a failed transfer
/// leaves ownership untouched.
pub trait AssetRegistry {
    /// Current owner of a token
    fn owner_of(&self, token_id: TokenId) -> Result<Address, RegistryError>;

    /// Move a token between parties
    ///
    /// Fails with `OwnershipMismatch` if `from` is not the current owner.
    fn transfer(
        &mut self,
        token_id: TokenId,
        from: &Address,
        to: &Address,
    ) -> Result<(), RegistryError>;
}

/// In-memory registry for tests and single-process deployments
///
/// Token ids are dense: the first minted token gets id 0.
#[derive(Debug, Default)]
pub struct InMemoryAssetRegistry {
    owners: HashMap<TokenId, Address>,
    next_id: u64,
}

impl InMemoryAssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh token under `owner`, returning its id
    pub fn mint(&mut self, owner: Address) -> TokenId {
        let token_id = TokenId::new(self.next_id);
        self.next_id += 1;
        self.owners.insert(token_id, owner);
        token_id
    }

    /// Remove a token from the registry entirely
    pub fn burn(&mut self, token_id: TokenId) -> Result<(), RegistryError> {
        self.owners
            .remove(&token_id)
            .map(|_| ())
            .ok_or(RegistryError::UnknownToken { token_id })
    }

    /// Number of registered tokens
    pub fn token_count(&self) -> usize {
        self.owners.len()
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn owner_of(&self, token_id: TokenId) -> Result<Address, RegistryError> {
        self.owners
            .get(&token_id)
            .cloned()
            .ok_or(RegistryError::UnknownToken { token_id })
    }

    fn transfer(
        &mut self,
        token_id: TokenId,
        from: &Address,
        to: &Address,
    ) -> Result<(), RegistryError> {
        let current = self.owner_of(token_id)?;
        if current != *from {
            return Err(RegistryError::OwnershipMismatch {
                token_id,
                expected: from.clone(),
                current,
            });
        }
        self.owners.insert(token_id, to.clone());
        debug!(token_id = %token_id, from = %from, to = %to, "Token transferred");
        Ok(())
    }
}
