//! Naira amounts using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in Nigerian Naira.
///
/// Wholesale rates are quoted per unit in whole Naira, but the type uses
/// [`Decimal`] so arithmetic never loses precision. Negative amounts can be
/// represented (e.g., parsed from input) and are rejected at the validation
/// boundaries that require non-negative prices.
///
/// ## Examples
///
/// ```
/// use estee_core::Naira;
///
/// let kongo_rate = Naira::from_whole(1800);
/// let two_kongos = kongo_rate.times(2);
/// assert_eq!(two_kongos, Naira::from_whole(3600));
/// assert_eq!(two_kongos.to_string(), "₦3,600");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Naira(Decimal);

impl Naira {
    /// Zero Naira.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount from a decimal value.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from a whole number of Naira.
    #[must_use]
    pub fn from_whole(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiply the amount by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Naira {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Naira {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Naira {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Naira {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Naira {
    /// Format with the ₦ symbol and thousands separators, e.g. `₦48,000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        let text = normalized.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, fr)) => (i, Some(fr)),
            None => (digits, None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        let chars: Vec<char> = int_part.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*c);
        }

        match frac_part {
            Some(fr) => write!(f, "₦{sign}{grouped}.{fr}"),
            None => write!(f, "₦{sign}{grouped}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_whole() {
        assert_eq!(Naira::from_whole(1800).amount(), Decimal::from(1800));
    }

    #[test]
    fn test_times() {
        assert_eq!(Naira::from_whole(1800).times(2), Naira::from_whole(3600));
        assert_eq!(Naira::from_whole(1800).times(0), Naira::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Naira = [Naira::from_whole(100), Naira::from_whole(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Naira::from_whole(350));
    }

    #[test]
    fn test_is_negative() {
        assert!(Naira::from_whole(-1).is_negative());
        assert!(!Naira::ZERO.is_negative());
        assert!(!Naira::from_whole(5).is_negative());
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Naira::from_whole(0).to_string(), "₦0");
        assert_eq!(Naira::from_whole(900).to_string(), "₦900");
        assert_eq!(Naira::from_whole(1800).to_string(), "₦1,800");
        assert_eq!(Naira::from_whole(48000).to_string(), "₦48,000");
        assert_eq!(Naira::from_whole(1234567).to_string(), "₦1,234,567");
        assert_eq!(Naira::from_whole(-55000).to_string(), "₦-55,000");
    }

    #[test]
    fn test_display_fractional() {
        let amount = Naira::new(Decimal::new(150050, 2)); // 1500.50
        assert_eq!(amount.to_string(), "₦1,500.5");
    }

    #[test]
    fn test_serde_roundtrip() {
        let amount = Naira::from_whole(16500);
        let json = serde_json::to_string(&amount).unwrap();
        let back: Naira = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
