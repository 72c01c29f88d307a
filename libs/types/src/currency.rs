//! Currency amounts for escrow accounting
//!
//! All amounts are integer quantities of the single native currency.
//! Arithmetic is checked: the escrow vault refuses to wrap rather than
//! silently corrupting its ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unsigned amount of native currency
///
/// Used for attached payments, escrow balances and payouts. Construction
/// is unchecked; arithmetic is not.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Funds(u128);

impl Funds {
    /// The zero amount
    pub const ZERO: Funds = Funds(0);

    /// Create from a raw amount
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Get the raw amount
    pub fn get(&self) -> u128 {
        self.0
    }

    /// True if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition, None on overflow
    pub fn checked_add(self, other: Funds) -> Option<Funds> {
        self.0.checked_add(other.0).map(Funds)
    }

    /// Checked subtraction, None on underflow
    pub fn checked_sub(self, other: Funds) -> Option<Funds> {
        self.0.checked_sub(other.0).map(Funds)
    }
}

impl fmt::Display for Funds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed value difference between the two sides of a swap
///
/// Expressed from the maker's perspective: a positive difference means the
/// maker's asset is worth more and the taker owes the difference at
/// acceptance; a negative difference means the maker owes it and must keep
/// the absolute value escrowed while the swap is pending; zero means an
/// even trade.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ValueDifference(i128);

impl ValueDifference {
    /// The even-trade difference
    pub const ZERO: ValueDifference = ValueDifference(0);

    /// Create from a raw signed amount
    pub fn new(raw: i128) -> Self {
        Self(raw)
    }

    /// Get the raw signed amount
    pub fn get(&self) -> i128 {
        self.0
    }

    /// Escrow the maker must keep locked while the swap is pending
    ///
    /// `max(0, -difference)`: only negative differences are escrow-backed.
    pub fn required_escrow(&self) -> Funds {
        if self.0 < 0 {
            Funds(self.0.unsigned_abs())
        } else {
            Funds::ZERO
        }
    }

    /// Payment the taker must attach when accepting the swap
    ///
    /// `max(0, difference)`: only positive differences cost the taker.
    pub fn taker_payment(&self) -> Funds {
        if self.0 > 0 {
            Funds(self.0.unsigned_abs())
        } else {
            Funds::ZERO
        }
    }
}

impl fmt::Display for ValueDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_funds_checked_add() {
        let a = Funds::new(30);
        let b = Funds::new(12);
        assert_eq!(a.checked_add(b), Some(Funds::new(42)));
        assert_eq!(Funds::new(u128::MAX).checked_add(Funds::new(1)), None);
    }

    #[test]
    fn test_funds_checked_sub() {
        let a = Funds::new(30);
        let b = Funds::new(12);
        assert_eq!(a.checked_sub(b), Some(Funds::new(18)));
        assert_eq!(b.checked_sub(a), None, "underflow must not wrap");
    }

    #[test]
    fn test_funds_zero() {
        assert!(Funds::ZERO.is_zero());
        assert!(!Funds::new(1).is_zero());
    }

    #[test]
    fn test_required_escrow_signs() {
        assert_eq!(ValueDifference::new(-50).required_escrow(), Funds::new(50));
        assert_eq!(ValueDifference::new(0).required_escrow(), Funds::ZERO);
        assert_eq!(ValueDifference::new(50).required_escrow(), Funds::ZERO);
    }

    #[test]
    fn test_taker_payment_signs() {
        assert_eq!(ValueDifference::new(50).taker_payment(), Funds::new(50));
        assert_eq!(ValueDifference::new(0).taker_payment(), Funds::ZERO);
        assert_eq!(ValueDifference::new(-50).taker_payment(), Funds::ZERO);
    }

    #[test]
    fn test_extreme_difference() {
        // i128::MIN has no positive counterpart; unsigned_abs still holds it
        let v = ValueDifference::new(i128::MIN);
        assert_eq!(v.required_escrow(), Funds::new(i128::MIN.unsigned_abs()));
        assert_eq!(v.taker_payment(), Funds::ZERO);
    }

    #[test]
    fn test_serialization() {
        let v = ValueDifference::new(-7);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "-7");

        let f = Funds::new(7);
        assert_eq!(serde_json::to_string(&f).unwrap(), "7");
    }

    proptest! {
        /// At most one side of a swap ever owes currency
        #[test]
        fn prop_escrow_and_payment_exclusive(raw in any::<i128>()) {
            let v = ValueDifference::new(raw);
            let escrow = v.required_escrow();
            let payment = v.taker_payment();
            prop_assert!(escrow.is_zero() || payment.is_zero());
            if raw == 0 {
                prop_assert!(escrow.is_zero() && payment.is_zero());
            } else {
                prop_assert_eq!(
                    escrow.get().max(payment.get()),
                    raw.unsigned_abs()
                );
            }
        }
    }
}
