//! Party authorization checks
//!
//! Authorization binds to the identities snapshotted on the swap, never to
//! current asset ownership. A maker who sold the offered asset elsewhere
//! can still cancel the swap; whoever bought that asset gains no rights
//! over it.

use types::errors::SwapError;
use types::ids::Address;
use types::swap::Swap;

/// Require `caller` to be the swap's maker
pub fn assert_is_maker(swap: &Swap, caller: &Address) -> Result<(), SwapError> {
    if swap.maker != *caller {
        return Err(SwapError::PermissionDenied {
            caller: caller.clone(),
        });
    }
    Ok(())
}

/// Require `caller` to be the swap's taker
pub fn assert_is_taker(swap: &Swap, caller: &Address) -> Result<(), SwapError> {
    if swap.taker != *caller {
        return Err(SwapError::PermissionDenied {
            caller: caller.clone(),
        });
    }
    Ok(())
}
