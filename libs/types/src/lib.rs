//! Types library for the NFT barter engine
//!
//! This library provides all core type definitions shared across the barter
//! system, ensuring type safety and backward compatibility.
//!
//! # Version
//! v1.0.0 - Frozen specification compliant
//!
//! # Modules
//! - `ids`: Unique identifiers (SwapId, TokenId, Address)
//! - `currency`: Native-currency amounts (Funds, ValueDifference)
//! - `swap`: Swap lifecycle types
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod currency;
pub mod swap;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::currency::*;
    pub use crate::swap::*;
    pub use crate::errors::*;
}
