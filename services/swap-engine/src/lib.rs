//! Swap Engine Service
//!
//! Escrowed asset-for-asset trading: a maker offers one registered asset
//! against another plus a signed currency difference, and a taker settles
//! the pair atomically. Negative differences are backed by escrow held in
//! the engine's vault for as long as the swap is pending.
//!
//! **Key Invariants:**
//! - Validation order is fixed: existence, authorization, state, funds
//! - Internal state settles before any outward transfer or payment
//! - Pending is the only mutable state; Accepted and Canceled are terminal
//! - Vault balance equals the summed escrow of all pending swaps
//! - One event per mutation, carrying the post-mutation snapshot

pub mod auth;
pub mod engine;
pub mod events;
pub mod ledger;
pub mod registry;
pub mod staleness;
pub mod vault;

pub use engine::SwapEngine;
