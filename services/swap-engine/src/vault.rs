//! Escrow vault for native currency
//!
//! The vault holds one pooled balance: the sum of every pending swap's
//! escrow. It never initiates anything on its own. The engine tells it how
//! much to absorb or release, and the vault's only job is to keep that
//! arithmetic exact and to record every outbound payment.
//!
//! Funding policy is exact-match: callers attach precisely the required
//! amount or the operation is rejected before any state changes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use types::currency::{Funds, ValueDifference};
use types::errors::SwapError;
use types::ids::Address;

/// Escrow movement implied by replacing one value difference with another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscrowDelta {
    /// The maker owes additional escrow and must attach it
    Deposit(Funds),
    /// Part of the held escrow goes back to the maker
    Refund(Funds),
    /// Escrow requirements are identical
    Unchanged,
}

/// Record of an outbound payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub to: Address,
    pub amount: Funds,
}

/// Pooled escrow balance plus an append-only payment log
#[derive(Debug, Default)]
pub struct EscrowVault {
    /// Currency currently locked for pending swaps
    held: Funds,
    /// Every payment ever ordered, in execution order
    payments: Vec<Payment>,
}

impl EscrowVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currency currently held in escrow
    pub fn held(&self) -> Funds {
        self.held
    }

    // ───────────────────────── Funding Policy ─────────────────────────

    /// Escrow movement when a pending swap's value difference changes
    pub fn delta(old: ValueDifference, new: ValueDifference) -> EscrowDelta {
        let old_escrow = old.required_escrow().get();
        let new_escrow = new.required_escrow().get();
        if new_escrow > old_escrow {
            EscrowDelta::Deposit(Funds::new(new_escrow - old_escrow))
        } else if old_escrow > new_escrow {
            EscrowDelta::Refund(Funds::new(old_escrow - new_escrow))
        } else {
            EscrowDelta::Unchanged
        }
    }

    /// Attachment a delta demands from the caller
    pub fn required_attachment(delta: EscrowDelta) -> Funds {
        match delta {
            EscrowDelta::Deposit(amount) => amount,
            EscrowDelta::Refund(_) | EscrowDelta::Unchanged => Funds::ZERO,
        }
    }

    /// Enforce the exact-match funding rule
    ///
    /// Anything other than `attached == required` is rejected, including a
    /// non-zero attachment when nothing is owed.
    pub fn check_attachment(required: Funds, attached: Funds) -> Result<(), SwapError> {
        if attached != required {
            warn!(required = %required, attached = %attached, "Attachment mismatch");
            return Err(SwapError::InvalidBalanceTransferred { required, attached });
        }
        Ok(())
    }

    // ───────────────────────── Escrow Accounting ─────────────────────────

    /// Absorb attached currency into the pooled balance
    pub fn deposit(&mut self, amount: Funds) -> Result<(), SwapError> {
        self.held = self.held.checked_add(amount).ok_or(SwapError::Overflow)?;
        debug!(amount = %amount, held = %self.held, "Escrow deposited");
        Ok(())
    }

    /// Release currency from the pooled balance
    ///
    /// The balance can never go negative; a shortfall means the engine's
    /// conservation accounting is broken and surfaces as `Overflow`.
    pub fn withdraw(&mut self, amount: Funds) -> Result<(), SwapError> {
        self.held = self.held.checked_sub(amount).ok_or(SwapError::Overflow)?;
        debug!(amount = %amount, held = %self.held, "Escrow released");
        Ok(())
    }

    // ───────────────────────── Payments ─────────────────────────

    /// Record an outbound payment to a party
    pub fn record_payment(&mut self, to: &Address, amount: Funds) {
        debug!(to = %to, amount = %amount, "Payment ordered");
        self.payments.push(Payment {
            to: to.clone(),
            amount,
        });
    }

    /// Every payment ordered so far, in execution order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }
}
