//! Type-safe price representation using integer minor units.
//!
//! Catalog prices are whole numbers in the smallest unit the shop charges in,
//! so arithmetic stays exact without a decimal type. The currency is a
//! display concern and is supplied when formatting.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

/// A non-negative amount of money in the smallest currency unit.
///
/// Serialized as a bare integer so persisted cart lines keep the
/// `"price": 150` shape.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Amount in the smallest currency unit.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Sum of two prices, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Format for display in the given currency (e.g., "₹150").
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format!("{}{}", currency.symbol(), self.0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_times_and_sum() {
        let price = Price::new(150);
        assert_eq!(price.times(5), Price::new(750));
        let total: Price = [Price::new(150), Price::new(140).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), 430);
    }

    #[test]
    fn test_price_saturates_instead_of_overflowing() {
        let price = Price::new(u64::MAX);
        assert_eq!(price.times(2).amount(), u64::MAX);
        assert_eq!(price.saturating_add(Price::new(1)).amount(), u64::MAX);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(150).display(CurrencyCode::INR), "₹150");
        assert_eq!(Price::new(0).display(CurrencyCode::USD), "$0");
    }

    #[test]
    fn test_price_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Price::new(150)).unwrap(), "150");
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("inr".parse::<CurrencyCode>().unwrap(), CurrencyCode::INR);
        assert_eq!("GBP".parse::<CurrencyCode>().unwrap().code(), "GBP");
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
