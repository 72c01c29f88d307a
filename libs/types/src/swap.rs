//! Swap lifecycle types
//!
//! A swap pairs one asset owned by the maker with one asset owned by the
//! taker, plus a signed value difference settled in native currency. Swaps
//! move through exactly one transition: `Pending` to either `Accepted` or
//! `Canceled`, both terminal.

use crate::currency::{Funds, ValueDifference};
use crate::ids::{Address, SwapId, TokenId};
use serde::{Deserialize, Serialize};

/// Swap status
///
/// State IDs match the on-chain enum ordering for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapStatus {
    /// State 0: open, awaiting taker acceptance or maker cancellation
    #[serde(rename = "PENDING")]
    Pending,

    /// State 1: settled by the taker (terminal)
    #[serde(rename = "ACCEPTED")]
    Accepted,

    /// State 2: withdrawn by the maker (terminal)
    #[serde(rename = "CANCELED")]
    Canceled,
}

impl SwapStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(self, SwapStatus::Accepted | SwapStatus::Canceled)
    }

    /// Check if the swap can still be mutated, canceled or accepted
    pub fn is_pending(&self) -> bool {
        matches!(self, SwapStatus::Pending)
    }

    /// Get the state ID for wire protocol
    pub fn state_id(&self) -> u8 {
        match self {
            SwapStatus::Pending => 0,
            SwapStatus::Accepted => 1,
            SwapStatus::Canceled => 2,
        }
    }
}

/// Complete swap record
///
/// `maker` and `taker` are ownership snapshots taken when the swap was
/// initiated. The registry is the live source of truth; a snapshot that no
/// longer matches it makes the swap stale, not invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub swap_id: SwapId,
    pub maker_token_id: TokenId,
    pub taker_token_id: TokenId,
    pub maker: Address,
    pub taker: Address,
    pub value_difference: ValueDifference,
    pub status: SwapStatus,
    pub version: u64, // Optimistic locking
}

impl Swap {
    /// Create a new pending swap
    pub fn new(
        swap_id: SwapId,
        maker_token_id: TokenId,
        taker_token_id: TokenId,
        maker: Address,
        taker: Address,
        value_difference: ValueDifference,
    ) -> Self {
        Self {
            swap_id,
            maker_token_id,
            taker_token_id,
            maker,
            taker,
            value_difference,
            status: SwapStatus::Pending,
            version: 0,
        }
    }

    /// Escrow currently locked in the vault for this swap
    ///
    /// Non-zero only while the swap is pending with a negative value
    /// difference; terminal swaps have already released their escrow.
    pub fn escrowed_amount(&self) -> Funds {
        if self.status.is_pending() {
            self.value_difference.required_escrow()
        } else {
            Funds::ZERO
        }
    }

    /// Check whether the party appears as maker or taker
    pub fn involves(&self, party: &Address) -> bool {
        self.maker == *party || self.taker == *party
    }

    /// Check whether the token appears on either side
    pub fn references_token(&self, token_id: TokenId) -> bool {
        self.maker_token_id == token_id || self.taker_token_id == token_id
    }

    /// Replace the value difference
    ///
    /// # Panics
    /// Panics if the swap is not pending
    pub fn set_value_difference(&mut self, value_difference: ValueDifference) {
        assert!(self.status.is_pending(), "Cannot reprice a non-pending swap");
        self.value_difference = value_difference;
        self.version += 1;
    }

    /// Replace the maker-side asset
    ///
    /// # Panics
    /// Panics if the swap is not pending
    pub fn set_maker_token(&mut self, token_id: TokenId) {
        assert!(self.status.is_pending(), "Cannot retarget a non-pending swap");
        self.maker_token_id = token_id;
        self.version += 1;
    }

    /// Replace the taker-side asset
    ///
    /// The taker snapshot is left untouched; staleness checks reconcile
    /// the new asset against the recorded taker.
    ///
    /// # Panics
    /// Panics if the swap is not pending
    pub fn set_taker_token(&mut self, token_id: TokenId) {
        assert!(self.status.is_pending(), "Cannot retarget a non-pending swap");
        self.taker_token_id = token_id;
        self.version += 1;
    }

    /// Withdraw the swap
    ///
    /// # Panics
    /// Panics if the swap is not pending
    pub fn cancel(&mut self) {
        assert!(self.status.is_pending(), "Cannot cancel a non-pending swap");
        self.status = SwapStatus::Canceled;
        self.version += 1;
    }

    /// Settle the swap
    ///
    /// # Panics
    /// Panics if the swap is not pending
    pub fn accept(&mut self) {
        assert!(self.status.is_pending(), "Cannot accept a non-pending swap");
        self.status = SwapStatus::Accepted;
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_swap() -> Swap {
        Swap::new(
            SwapId::new(0),
            TokenId::new(3),
            TokenId::new(1),
            Address::new("alice"),
            Address::new("bob"),
            ValueDifference::new(-25),
        )
    }

    #[test]
    fn test_swap_creation() {
        let swap = sample_swap();
        assert_eq!(swap.status, SwapStatus::Pending);
        assert_eq!(swap.version, 0);
        assert_eq!(swap.escrowed_amount(), Funds::new(25));
    }

    #[test]
    fn test_swap_involves() {
        let swap = sample_swap();
        assert!(swap.involves(&Address::new("alice")));
        assert!(swap.involves(&Address::new("bob")));
        assert!(!swap.involves(&Address::new("eve")));
    }

    #[test]
    fn test_swap_references_token() {
        let swap = sample_swap();
        assert!(swap.references_token(TokenId::new(3)));
        assert!(swap.references_token(TokenId::new(1)));
        assert!(!swap.references_token(TokenId::new(2)));
    }

    #[test]
    fn test_reprice_bumps_version() {
        let mut swap = sample_swap();
        swap.set_value_difference(ValueDifference::new(40));
        assert_eq!(swap.value_difference, ValueDifference::new(40));
        assert_eq!(swap.version, 1);
        assert_eq!(swap.escrowed_amount(), Funds::ZERO);
    }

    #[test]
    fn test_retarget_keeps_parties() {
        let mut swap = sample_swap();
        swap.set_taker_token(TokenId::new(9));
        assert_eq!(swap.taker_token_id, TokenId::new(9));
        assert_eq!(swap.taker, Address::new("bob"), "snapshot must survive");
        assert_eq!(swap.version, 1);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let mut swap = sample_swap();
        swap.cancel();
        assert_eq!(swap.status, SwapStatus::Canceled);
        assert!(swap.status.is_terminal());
        assert_eq!(swap.escrowed_amount(), Funds::ZERO, "escrow released");
    }

    #[test]
    fn test_accept_is_terminal() {
        let mut swap = sample_swap();
        swap.accept();
        assert_eq!(swap.status, SwapStatus::Accepted);
        assert!(swap.status.is_terminal());
    }

    #[test]
    #[should_panic(expected = "Cannot cancel a non-pending swap")]
    fn test_cancel_terminal_panics() {
        let mut swap = sample_swap();
        swap.accept();
        swap.cancel();
    }

    #[test]
    #[should_panic(expected = "Cannot reprice a non-pending swap")]
    fn test_reprice_terminal_panics() {
        let mut swap = sample_swap();
        swap.cancel();
        swap.set_value_difference(ValueDifference::ZERO);
    }

    #[test]
    fn test_status_state_ids() {
        assert_eq!(SwapStatus::Pending.state_id(), 0);
        assert_eq!(SwapStatus::Accepted.state_id(), 1);
        assert_eq!(SwapStatus::Canceled.state_id(), 2);
    }

    #[test]
    fn test_swap_serialization() {
        let swap = sample_swap();
        let json = serde_json::to_string(&swap).unwrap();
        assert!(json.contains("\"PENDING\""));

        let deserialized: Swap = serde_json::from_str(&json).unwrap();
        assert_eq!(swap, deserialized);
    }
}
