//! Exact non-negative decimal money values
//!
//! Balances are money, not floats: addition and subtraction never introduce
//! rounding error, whatever the precision of the inputs. Internally a value
//! is a `rust_decimal::Decimal` (integer mantissa plus scale), so arithmetic
//! carries the maximum precision of its operands. Precision is discarded in
//! exactly one place: [`Money::truncated`], which cuts a value down to the
//! two fractional digits reported to callers, truncating toward zero. A
//! caller must never see money they do not have.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fractional digits of the externally reported balance.
pub const DISPLAY_SCALE: u32 = 2;

/// Maximum fractional digits accepted on input amounts.
///
/// `Decimal` carries 28 significant digits; bounding input scale keeps
/// balances exact under arbitrarily long sequences of additions.
pub const MAX_FRACTIONAL_DIGITS: u32 = 13;

/// Reason an input amount was rejected by [`Money::try_new`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount is negative")]
    Negative,

    #[error("amount carries more than {MAX_FRACTIONAL_DIGITS} fractional digits")]
    PrecisionExceeded,
}

/// An exact non-negative decimal amount of a single currency.
///
/// Equivalent representations compare equal: `10.5 == 10.50 == 10.500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Validate a raw decimal as a money value.
    ///
    /// Accepts any non-negative decimal of at most
    /// [`MAX_FRACTIONAL_DIGITS`] fractional digits and preserves its full
    /// precision (`0.1` stays scale 1, `0.100` stays scale 3).
    pub fn try_new(value: Decimal) -> Result<Self, MoneyError> {
        if value < Decimal::ZERO {
            return Err(MoneyError::Negative);
        }
        if value.scale() > MAX_FRACTIONAL_DIGITS {
            return Err(MoneyError::PrecisionExceeded);
        }
        Ok(Self(value))
    }

    /// Exact sum. The result carries the larger scale of the two operands,
    /// so `0.1 + 0.001` yields `0.101` and `9.99 + 0.01` yields `10.00`.
    #[must_use]
    pub fn add(&self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    /// Exact difference.
    ///
    /// # Panics
    /// Panics if `other` exceeds `self`; callers must check via [`Money::gte`]
    /// first. Money values are never negative.
    #[must_use]
    pub fn sub(&self, other: Money) -> Money {
        assert!(self.0 >= other.0, "subtrahend exceeds minuend");
        Money(self.0 - other.0)
    }

    /// Numeric greater-or-equal, the comparison backing every withdrawal.
    pub fn gte(&self, other: &Money) -> bool {
        self.0 >= other.0
    }

    /// The externally reported form: exactly two fractional digits,
    /// truncated toward zero. `0.0099` reports as `0.00`, `123.456` as
    /// `123.45`. This is the only lossy operation on money.
    pub fn truncated(&self) -> Decimal {
        let mut reported = self.0.trunc_with_scale(DISPLAY_SCALE);
        reported.rescale(DISPLAY_SCALE);
        reported
    }

    /// The exact inner value, full precision retained.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    /// Renders the truncated two-digit form, e.g. `10.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.truncated())
    }
}
