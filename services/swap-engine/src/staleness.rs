//! Lazy staleness detection
//!
//! Pending swaps are never eagerly invalidated when assets move. Instead,
//! feasibility is recomputed on demand: a swap is possible exactly when it
//! is pending and both snapshotted parties still own their side's asset.
//! The check is read-only, so its answer only changes when the ledger or
//! the registry does, and a swap that went stale becomes possible again if
//! ownership drifts back.

use types::errors::SwapError;
use types::ids::SwapId;

use crate::ledger::SwapLedger;
use crate::registry::AssetRegistry;

/// Check whether a swap could settle right now
///
/// `false` covers every benign reason: the swap is terminal, an asset has
/// vanished from the registry, or ownership no longer matches a snapshot.
/// Only an unknown swap id is an error.
pub fn is_swap_possible<R: AssetRegistry>(
    ledger: &SwapLedger,
    registry: &R,
    swap_id: SwapId,
) -> Result<bool, SwapError> {
    let swap = ledger.get(swap_id).ok_or(SwapError::InvalidSwap)?;
    if !swap.status.is_pending() {
        return Ok(false);
    }

    let maker_holds = matches!(
        registry.owner_of(swap.maker_token_id),
        Ok(owner) if owner == swap.maker
    );
    let taker_holds = matches!(
        registry.owner_of(swap.taker_token_id),
        Ok(owner) if owner == swap.taker
    );

    Ok(maker_holds && taker_holds)
}
