//! Swap events
//!
//! Every successful mutation emits exactly one event carrying the complete
//! post-mutation swap snapshot, so consumers never need a follow-up read
//! to learn the resulting state. Events are immutable once emitted and
//! sequenced in mutation order.

use serde::{Deserialize, Serialize};
use types::swap::Swap;

/// What happened to the swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapEventKind {
    /// A new pending swap entered the ledger
    SwapInitiated,
    /// A pending swap's value difference or asset reference changed
    SwapUpdate,
    /// The maker withdrew the swap
    SwapCanceled,
    /// The taker settled the swap
    SwapAccepted,
}

impl SwapEventKind {
    /// Wire-stable event name
    pub fn label(&self) -> &'static str {
        match self {
            SwapEventKind::SwapInitiated => "SwapInitiated",
            SwapEventKind::SwapUpdate => "SwapUpdate",
            SwapEventKind::SwapCanceled => "SwapCanceled",
            SwapEventKind::SwapAccepted => "SwapAccepted",
        }
    }
}

/// Immutable record of one swap mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    /// Position in the engine's emission order, starting at 0
    pub sequence: u64,
    pub kind: SwapEventKind,
    /// Complete snapshot taken after the mutation landed
    pub swap: Swap,
}
