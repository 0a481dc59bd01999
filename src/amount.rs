use std::fmt;
use std::iter::Sum;

/// Monetary value backed by a plain `f64`.
///
/// No rounding is applied anywhere: arithmetic follows IEEE-754 semantics.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Strictly greater than zero. NaN is never positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Positive and finite: the only amounts a ledger movement accepts.
    pub fn is_valid_movement(self) -> bool {
        self.is_positive() && self.is_finite()
    }

    /// `pct` percent of this amount.
    pub fn percentage(self, pct: f64) -> Self {
        Amount(self.0 * (pct / 100.0))
    }

    pub fn min(self, other: Self) -> Self {
        Amount(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Amount(self.0.max(other.0))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}
