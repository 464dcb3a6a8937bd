//! Reward display currencies keyed by the user's country.
//!
//! Amounts are only formatted, never converted.
//!
//! # Examples
//! ```
//! use storyverse_core::Currency;
//!
//! let currency = Currency::for_country("Nigeria");
//! assert_eq!(currency, Currency::Ngn);
//! assert_eq!(currency.format_amount(149.6), "₦150");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currencies rewards can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    /// Indian rupee, also the fallback.
    #[default]
    Inr,
    /// US dollar.
    Usd,
    /// Pound sterling.
    Gbp,
    /// Nigerian naira.
    Ngn,
    /// Indonesian rupiah.
    Idr,
}

impl Currency {
    /// Pick the display currency for a country name.
    ///
    /// Unknown countries fall back to [`Currency::Inr`].
    #[must_use]
    pub fn for_country(country: &str) -> Self {
        match country.trim() {
            "United States" => Self::Usd,
            "United Kingdom" => Self::Gbp,
            "Nigeria" => Self::Ngn,
            "Indonesia" => Self::Idr,
            _ => Self::Inr,
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Ngn => "NGN",
            Self::Idr => "IDR",
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Ngn => "₦",
            Self::Idr => "Rp",
        }
    }

    /// Render `amount` rounded to a whole unit behind the currency symbol.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "adding zero folds negative zero into zero after rounding"
    )]
    pub fn format_amount(self, amount: f64) -> String {
        let rounded = amount.round() + 0.0;
        format!("{}{rounded}", self.symbol())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("India", Currency::Inr)]
    #[case("United States", Currency::Usd)]
    #[case("United Kingdom", Currency::Gbp)]
    #[case("Nigeria", Currency::Ngn)]
    #[case("Indonesia", Currency::Idr)]
    #[case("Atlantis", Currency::Inr)]
    fn maps_countries(#[case] country: &str, #[case] expected: Currency) {
        assert_eq!(Currency::for_country(country), expected);
    }

    #[rstest]
    #[case(Currency::Inr, 50.0, "₹50")]
    #[case(Currency::Usd, 9.6, "$10")]
    #[case(Currency::Gbp, 0.2, "£0")]
    #[case(Currency::Idr, 1500.0, "Rp1500")]
    #[case(Currency::Inr, -0.2, "₹0")]
    fn formats_rounded_amounts(
        #[case] currency: Currency,
        #[case] amount: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(currency.format_amount(amount), expected);
    }
}
