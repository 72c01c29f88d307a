//! Identifier types for barter entities
//!
//! Swap and token identifiers are dense `u64` indices: the ledger and the
//! asset registry both hand them out sequentially starting at zero, so an
//! identifier doubles as a position in the issuing store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a swap
///
/// Assigned by the swap ledger at creation time. Identifiers are issued
/// in insertion order and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwapId(u64);

impl SwapId {
    /// Create from a raw ledger index
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw index
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SwapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a registered asset
///
/// Assigned by the asset registry when the asset is minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    /// Create from a raw registry index
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw index
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Party identifier
///
/// An opaque account name. Parties own assets in the registry and appear
/// as maker or taker on swaps. The engine never interprets the contents
/// beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new Address from a string
    ///
    /// # Panics
    /// Panics if the string is empty
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        assert!(!s.is_empty(), "Address must not be empty");
        Self(s)
    }

    /// Try to create an Address, returning None if empty
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the account name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_id_ordering() {
        let first = SwapId::new(0);
        let second = SwapId::new(1);
        assert!(first < second, "SwapIds order by issue position");
        assert_eq!(second.as_u64(), 1);
    }

    #[test]
    fn test_swap_id_serialization() {
        let id = SwapId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let deserialized: SwapId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_token_id_creation() {
        let id1 = TokenId::new(0);
        let id2 = TokenId::new(1);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_token_id_serialization() {
        let id = TokenId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let deserialized: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_address_creation() {
        let addr = Address::new("alice");
        assert_eq!(addr.as_str(), "alice");
    }

    #[test]
    fn test_address_try_new() {
        assert!(Address::try_new("bob").is_some());
        assert!(Address::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "Address must not be empty")]
    fn test_address_empty() {
        Address::new("");
    }

    #[test]
    fn test_address_serialization() {
        let addr = Address::new("carol");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"carol\"");

        let deserialized: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, deserialized);
    }
}
