//! Swap engine core
//!
//! Main coordinator for the swap ledger, the escrow vault and the event
//! log. Every mutating operation runs the same discipline: validate
//! everything up front, apply internal state (vault balance, ledger
//! record), only then perform outward actions (asset transfers, payments),
//! and finish by emitting exactly one event. A failed validation returns
//! before any state has changed.
//!
//! Validation order is fixed across operations: existence, then
//! authorization, then lifecycle state, then attached funds, then effects.
//! Callers can rely on which error wins when several would apply.

use tracing::{info, warn};

use types::currency::{Funds, ValueDifference};
use types::errors::{RegistryError, SwapError};
use types::ids::{Address, SwapId, TokenId};
use types::swap::Swap;

use crate::auth;
use crate::events::{SwapEvent, SwapEventKind};
use crate::ledger::SwapLedger;
use crate::registry::AssetRegistry;
use crate::staleness;
use crate::vault::{EscrowDelta, EscrowVault};

/// Main swap engine
///
/// Owns the ledger, the vault and the event log. The asset registry is
/// deliberately not owned: it is passed into each call, mirroring how the
/// deployed engine talks to an external asset contract.
#[derive(Debug, Default)]
pub struct SwapEngine {
    /// Every swap ever created
    ledger: SwapLedger,
    /// Pooled escrow backing pending swaps
    vault: EscrowVault,
    /// Emitted events log (append-only)
    events: Vec<SwapEvent>,
    /// Sequence the next event will carry; survives event draining
    next_sequence: u64,
}

impl SwapEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────── Mutations ─────────────────────────

    /// Open a new swap offering `maker_token_id` against `taker_token_id`
    ///
    /// Validates: both tokens registered, `caller` currently owns the
    /// offered asset, the two current owners are distinct parties, and the
    /// attachment equals the required escrow exactly. Emits `SwapInitiated`.
    pub fn initiate_fixed_swap<R: AssetRegistry>(
        &mut self,
        registry: &R,
        maker_token_id: TokenId,
        taker_token_id: TokenId,
        value_difference: ValueDifference,
        caller: &Address,
        attached: Funds,
    ) -> Result<Swap, SwapError> {
        let maker = Self::resolve_owner(registry, maker_token_id)?;
        let taker = Self::resolve_owner(registry, taker_token_id)?;
        if *caller != maker {
            return Err(SwapError::PermissionDenied {
                caller: caller.clone(),
            });
        }
        if maker == taker {
            return Err(SwapError::InvalidSwap);
        }
        let required = value_difference.required_escrow();
        EscrowVault::check_attachment(required, attached)?;

        // Escrow lands before the record; deposit is the last fallible step
        if !required.is_zero() {
            self.vault.deposit(required)?;
        }
        let swap = Swap::new(
            self.ledger.next_id(),
            maker_token_id,
            taker_token_id,
            maker,
            taker,
            value_difference,
        );
        self.ledger.create(swap.clone());

        self.emit(SwapEventKind::SwapInitiated, swap.clone());
        Ok(swap)
    }

    /// Replace a pending swap's value difference
    ///
    /// The maker attaches exactly the additional escrow a deeper negative
    /// difference requires; a shallower one refunds the surplus to the
    /// maker. Emits `SwapUpdate`.
    pub fn update_swap_value(
        &mut self,
        swap_id: SwapId,
        value_difference: ValueDifference,
        caller: &Address,
        attached: Funds,
    ) -> Result<Swap, SwapError> {
        let mut swap = self.pending_swap(swap_id)?;
        auth::assert_is_maker(&swap, caller)?;

        let delta = EscrowVault::delta(swap.value_difference, value_difference);
        EscrowVault::check_attachment(EscrowVault::required_attachment(delta), attached)?;

        // Internal effects: vault balance, then the ledger record
        match delta {
            EscrowDelta::Deposit(amount) => self.vault.deposit(amount)?,
            EscrowDelta::Refund(amount) => self.vault.withdraw(amount)?,
            EscrowDelta::Unchanged => {}
        }
        swap.set_value_difference(value_difference);
        self.ledger.replace(swap_id, swap.clone())?;

        // Outward payment once the record reflects the new terms
        if let EscrowDelta::Refund(amount) = delta {
            self.vault.record_payment(&swap.maker, amount);
        }

        self.emit(SwapEventKind::SwapUpdate, swap.clone());
        Ok(swap)
    }

    /// Point a pending swap at a different maker-side asset
    ///
    /// The new token must be registered. The maker snapshot stays as it
    /// is; if the maker does not own the new asset the swap is merely
    /// stale. Emits `SwapUpdate`.
    pub fn update_swap_maker_token<R: AssetRegistry>(
        &mut self,
        registry: &R,
        swap_id: SwapId,
        maker_token_id: TokenId,
        caller: &Address,
    ) -> Result<Swap, SwapError> {
        let mut swap = self.pending_swap(swap_id)?;
        auth::assert_is_maker(&swap, caller)?;
        Self::resolve_owner(registry, maker_token_id)?;

        swap.set_maker_token(maker_token_id);
        self.ledger.replace(swap_id, swap.clone())?;

        self.emit(SwapEventKind::SwapUpdate, swap.clone());
        Ok(swap)
    }

    /// Point a pending swap at a different taker-side asset
    ///
    /// Only the maker may retarget, and only to a registered token. The
    /// taker snapshot is not re-derived from the new asset's owner; the
    /// recorded taker keeps the exclusive right to accept. Emits
    /// `SwapUpdate`.
    pub fn update_swap_taker_token<R: AssetRegistry>(
        &mut self,
        registry: &R,
        swap_id: SwapId,
        taker_token_id: TokenId,
        caller: &Address,
    ) -> Result<Swap, SwapError> {
        let mut swap = self.pending_swap(swap_id)?;
        auth::assert_is_maker(&swap, caller)?;
        Self::resolve_owner(registry, taker_token_id)?;

        swap.set_taker_token(taker_token_id);
        self.ledger.replace(swap_id, swap.clone())?;

        self.emit(SwapEventKind::SwapUpdate, swap.clone());
        Ok(swap)
    }

    /// Withdraw a pending swap
    ///
    /// Maker-only. Any escrow held for the swap goes back to the maker in
    /// full. Emits `SwapCanceled`.
    pub fn cancel_swap(&mut self, swap_id: SwapId, caller: &Address) -> Result<Swap, SwapError> {
        let mut swap = self.pending_swap(swap_id)?;
        auth::assert_is_maker(&swap, caller)?;

        // Escrow must be read before the status flip zeroes it
        let refund = swap.escrowed_amount();
        if !refund.is_zero() {
            self.vault.withdraw(refund)?;
        }
        swap.cancel();
        self.ledger.replace(swap_id, swap.clone())?;

        if !refund.is_zero() {
            self.vault.record_payment(&swap.maker, refund);
        }

        self.emit(SwapEventKind::SwapCanceled, swap.clone());
        Ok(swap)
    }

    /// Settle a pending swap
    ///
    /// Taker-only. `taker_token_id` must match the swap's current record,
    /// the attachment must equal the taker's side of the value difference,
    /// and both parties must still hold their snapshotted assets. On
    /// success the assets change hands, the currency leg settles, and the
    /// swap is terminal. Emits `SwapAccepted`.
    pub fn accept_swap<R: AssetRegistry>(
        &mut self,
        registry: &mut R,
        swap_id: SwapId,
        taker_token_id: TokenId,
        caller: &Address,
        attached: Funds,
    ) -> Result<Swap, SwapError> {
        let mut swap = self.pending_swap(swap_id)?;
        auth::assert_is_taker(&swap, caller)?;

        // The taker settles the swap as currently recorded, nothing else
        if taker_token_id != swap.taker_token_id {
            return Err(SwapError::InvalidTokenId {
                token_id: taker_token_id,
            });
        }
        EscrowVault::check_attachment(swap.value_difference.taker_payment(), attached)?;

        // Both sides must still hold their snapshot before anything moves
        Self::verify_holder(registry, swap.maker_token_id, &swap.maker)?;
        Self::verify_holder(registry, swap.taker_token_id, &swap.taker)?;

        // Internal effects: release escrow and flip the record
        let escrow_release = swap.escrowed_amount();
        if !escrow_release.is_zero() {
            self.vault.withdraw(escrow_release)?;
        }
        swap.accept();
        self.ledger.replace(swap_id, swap.clone())?;

        // Interactions: assets change hands, then the currency leg
        registry.transfer(swap.maker_token_id, &swap.maker, &swap.taker)?;
        registry.transfer(swap.taker_token_id, &swap.taker, &swap.maker)?;

        let taker_payment = swap.value_difference.taker_payment();
        if !taker_payment.is_zero() {
            self.vault.record_payment(&swap.maker, taker_payment);
        }
        if !escrow_release.is_zero() {
            self.vault.record_payment(&swap.taker, escrow_release);
        }

        self.emit(SwapEventKind::SwapAccepted, swap.clone());
        Ok(swap)
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Check whether a swap could settle right now
    ///
    /// Recomputed from live registry state on every call; see the
    /// staleness module for the exact rules.
    pub fn is_swap_possible<R: AssetRegistry>(
        &self,
        registry: &R,
        swap_id: SwapId,
    ) -> Result<bool, SwapError> {
        staleness::is_swap_possible(&self.ledger, registry, swap_id)
    }

    /// Fetch a swap by id
    pub fn get_swap_by_swap_id(&self, swap_id: SwapId) -> Result<Swap, SwapError> {
        self.ledger
            .get(swap_id)
            .cloned()
            .ok_or(SwapError::InvalidSwap)
    }

    /// Fetch the most recently created swap
    pub fn get_last_on_chain_swap(&self) -> Result<Swap, SwapError> {
        self.ledger.latest().cloned().ok_or(SwapError::InvalidSwap)
    }

    /// Ids of swaps where the party is maker, in creation order
    pub fn get_maker_swaps(&self, maker: &Address) -> Vec<SwapId> {
        self.ledger.swaps_by_maker(maker)
    }

    /// Ids of swaps where the party is taker, in creation order
    pub fn get_taker_swaps(&self, taker: &Address) -> Vec<SwapId> {
        self.ledger.swaps_by_taker(taker)
    }

    /// Swaps referencing the token on either side, in creation order
    pub fn list_swaps_for_token_id(&self, token_id: TokenId) -> Vec<Swap> {
        self.ledger
            .swaps_for_token(token_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Swaps with the party on either side, in creation order
    pub fn list_swaps_for_address(&self, party: &Address) -> Vec<Swap> {
        self.ledger
            .swaps_involving(party)
            .into_iter()
            .cloned()
            .collect()
    }

    // ───────────────────────── State Access ─────────────────────────

    /// Read-only view of the swap ledger
    pub fn ledger(&self) -> &SwapLedger {
        &self.ledger
    }

    /// Read-only view of the escrow vault
    pub fn vault(&self) -> &EscrowVault {
        &self.vault
    }

    /// Get all emitted events
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    /// Drain all events (consume and clear); sequence numbering continues
    pub fn drain_events(&mut self) -> Vec<SwapEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check escrow conservation: the vault holds exactly the sum of every
    /// pending swap's escrow
    pub fn check_invariant(&self) -> bool {
        let mut expected = Funds::ZERO;
        for swap in self.ledger.all() {
            expected = match expected.checked_add(swap.escrowed_amount()) {
                Some(total) => total,
                None => return false,
            };
        }
        expected == self.vault.held()
    }

    // ───────────────────────── Internal ─────────────────────────

    /// Load a swap that must still be open for mutation
    ///
    /// Unknown ids and terminal swaps both yield `SwapNotPending`, so
    /// mutating paths never reveal more than "not open".
    fn pending_swap(&self, swap_id: SwapId) -> Result<Swap, SwapError> {
        match self.ledger.get(swap_id) {
            Some(swap) if swap.status.is_pending() => Ok(swap.clone()),
            _ => Err(SwapError::SwapNotPending { swap_id }),
        }
    }

    /// Current owner lookup with unknown tokens mapped to the 1000 code
    fn resolve_owner<R: AssetRegistry>(
        registry: &R,
        token_id: TokenId,
    ) -> Result<Address, SwapError> {
        registry.owner_of(token_id).map_err(|err| match err {
            RegistryError::UnknownToken { token_id } => SwapError::InvalidTokenId { token_id },
            other => SwapError::Registry(other),
        })
    }

    /// Require `expected` to be the token's current owner
    fn verify_holder<R: AssetRegistry>(
        registry: &R,
        token_id: TokenId,
        expected: &Address,
    ) -> Result<(), SwapError> {
        let current = Self::resolve_owner(registry, token_id)?;
        if current != *expected {
            warn!(
                token_id = %token_id,
                expected = %expected,
                current = %current,
                "Ownership drifted from snapshot"
            );
            return Err(SwapError::Registry(RegistryError::OwnershipMismatch {
                token_id,
                expected: expected.clone(),
                current,
            }));
        }
        Ok(())
    }

    fn emit(&mut self, kind: SwapEventKind, swap: Swap) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        info!(
            sequence,
            kind = kind.label(),
            swap_id = %swap.swap_id,
            status = swap.status.state_id(),
            "Swap event"
        );
        self.events.push(SwapEvent {
            sequence,
            kind,
            swap,
        });
    }
}
