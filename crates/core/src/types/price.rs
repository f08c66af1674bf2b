//! Type-safe money representation using decimal arithmetic.
//!
//! Amounts are exact decimals in the currency's standard unit (dollars, not
//! cents). Nothing is rounded until the amount is displayed, so sums, tax and
//! change computed from the same inputs always agree with each other.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// ```
/// use adventure_works_core::Price;
/// use rust_decimal::Decimal;
///
/// let chain = Price::usd(Decimal::new(3499, 2));
/// assert_eq!(chain.times(3).to_string(), "$104.97");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in US dollars, the store's only currency.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// A zero amount in US dollars.
    #[must_use]
    pub const fn zero() -> Self {
        Self::usd(Decimal::ZERO)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Multiply the amount by a rate, e.g. `0.13` for a 13% tax.
    #[must_use]
    pub fn scaled(&self, rate: Decimal) -> Self {
        Self::new(self.amount * rate, self.currency_code)
    }

    /// Amount rounded to cents for display, as a bare number (`"2199.00"`).
    #[must_use]
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.rounded())
    }

    /// Amount rounded half away from zero to whole cents.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Amount with symbol and code, as printed on invoices (`"$2199.00 USD"`).
    #[must_use]
    pub fn with_code(&self) -> String {
        format!("{self} {}", self.currency_code.code())
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.rounded();
        if cents.is_sign_negative() && !cents.is_zero() {
            write!(f, "-{}{:.2}", self.currency_code.symbol(), -cents)
        } else {
            write!(f, "{}{:.2}", self.currency_code.symbol(), cents.abs())
        }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.amount - rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Currency symbol used in front of amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Price {
        Price::usd(Decimal::new(cents, 2))
    }

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::usd(Decimal::from(2199)).to_string(), "$2199.00");
        assert_eq!(usd(4599).to_string(), "$45.99");
        assert_eq!(Price::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_sub_cent_amounts() {
        // 13% of 45.99 is 5.9787
        let tax = usd(4599).scaled(Decimal::new(13, 2));
        assert_eq!(tax.amount, Decimal::new(59787, 4));
        assert_eq!(tax.to_string(), "$5.98");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!((usd(1000) - usd(2550)).to_string(), "-$15.50");
    }

    #[test]
    fn test_times_and_sum() {
        let lines = [usd(3499).times(2), usd(8999).times(1)];
        let total: Price = lines.into_iter().sum();
        assert_eq!(total, usd(15997));
    }

    #[test]
    fn test_with_code() {
        assert_eq!(usd(129_900).with_code(), "$1299.00 USD");
        assert_eq!(usd(129_900).to_fixed(), "1299.00");
    }

    #[test]
    fn test_zero_checks() {
        assert!(Price::zero().is_zero());
        assert!(!Price::zero().is_negative());
        assert!((usd(1) - usd(2)).is_negative());
    }
}
