//! Money value object (whole currency units) and the rounding policy.
//!
//! Every subtotal in the rollup chain is rounded to a whole currency unit
//! the moment it is computed, so displayed line items always reconcile
//! with the totals derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// An amount in whole currency units. Negative amounts are legitimate
/// (credit line items) and are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero currency units.
    pub const ZERO: Self = Self(0);

    /// Creates a Money from an exact number of currency units.
    pub fn new(units: i64) -> Self {
        Self(units)
    }

    /// Rounds a raw value to the nearest whole currency unit.
    ///
    /// Halves round up (toward positive infinity), so `2.5` becomes `3`
    /// and `-2.5` becomes `-2`. Non-finite values are treated as zero.
    pub fn rounded(value: f64) -> Self {
        Self(round_whole(value) as i64)
    }

    /// Returns the amount in whole currency units.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the amount as a float, for ratio computations.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Rounds to the nearest whole number, halves up (toward positive
/// infinity). Non-finite values are treated as zero.
pub fn round_whole(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value + 0.5).floor()
}

/// Rounds a percentage (or any ratio output) to two decimal places,
/// with the same half-up policy as [`Money::rounded`].
///
/// Non-finite values are treated as zero.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0 + 0.5).floor() / 100.0
}
