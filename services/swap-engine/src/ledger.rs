//! Append-only swap ledger
//!
//! Swaps live in a dense arena: a swap's id is its index, ids are issued in
//! insertion order, and records are never removed. Terminal swaps stay in
//! their slot so history queries keep working. Secondary views (by maker,
//! by taker, by token) are recomputed by scanning the arena, which keeps
//! them consistent with in-place updates like asset retargeting.

use tracing::debug;
use types::errors::SwapError;
use types::ids::{Address, SwapId, TokenId};
use types::swap::Swap;

/// Dense, append-only store of every swap ever created
#[derive(Debug, Default)]
pub struct SwapLedger {
    /// Ordered arena; a swap's id equals its slot index
    swaps: Vec<Swap>,
}

impl SwapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next created swap will receive
    pub fn next_id(&self) -> SwapId {
        SwapId::new(self.swaps.len() as u64)
    }

    /// Append a freshly built swap and return its id
    ///
    /// # Panics
    /// Panics if the record was not built with the next free id
    pub fn create(&mut self, swap: Swap) -> SwapId {
        assert_eq!(
            swap.swap_id,
            self.next_id(),
            "Swap id must be the next free index"
        );
        let swap_id = swap.swap_id;
        self.swaps.push(swap);
        debug!(swap_id = %swap_id, "Swap recorded");
        swap_id
    }

    /// Look up a swap by id
    pub fn get(&self, swap_id: SwapId) -> Option<&Swap> {
        self.swaps.get(swap_id.as_u64() as usize)
    }

    /// Overwrite a swap in place
    ///
    /// The record keeps its slot; version bookkeeping is the caller's
    /// responsibility and happens through the entity mutators.
    ///
    /// # Panics
    /// Panics if the replacement carries a different id
    pub fn replace(&mut self, swap_id: SwapId, swap: Swap) -> Result<(), SwapError> {
        assert_eq!(swap.swap_id, swap_id, "Replacement must keep the swap id");
        let slot = self
            .swaps
            .get_mut(swap_id.as_u64() as usize)
            .ok_or(SwapError::InvalidSwap)?;
        *slot = swap;
        Ok(())
    }

    /// Most recently created swap
    pub fn latest(&self) -> Option<&Swap> {
        self.swaps.last()
    }

    /// Full arena in creation order
    pub fn all(&self) -> &[Swap] {
        &self.swaps
    }

    /// Number of swaps ever created
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    /// True if no swap was ever created
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    // ───────────────────────── Secondary Views ─────────────────────────

    /// Ids of swaps with `maker` on the offering side, in creation order
    pub fn swaps_by_maker(&self, maker: &Address) -> Vec<SwapId> {
        self.swaps
            .iter()
            .filter(|swap| swap.maker == *maker)
            .map(|swap| swap.swap_id)
            .collect()
    }

    /// Ids of swaps with `taker` on the receiving side, in creation order
    pub fn swaps_by_taker(&self, taker: &Address) -> Vec<SwapId> {
        self.swaps
            .iter()
            .filter(|swap| swap.taker == *taker)
            .map(|swap| swap.swap_id)
            .collect()
    }

    /// Swaps referencing a token on either side, in creation order
    pub fn swaps_for_token(&self, token_id: TokenId) -> Vec<&Swap> {
        self.swaps
            .iter()
            .filter(|swap| swap.references_token(token_id))
            .collect()
    }

    /// Swaps with the party on either side, in creation order
    pub fn swaps_involving(&self, party: &Address) -> Vec<&Swap> {
        self.swaps
            .iter()
            .filter(|swap| swap.involves(party))
            .collect()
    }
}
