//! Brands and the per-brand priority weights used during ranking.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commercial tier a brand is on.
///
/// # Examples
/// ```
/// use storyverse_core::BrandTier;
///
/// assert_eq!(BrandTier::MidTier.as_str(), "mid-tier");
/// assert_eq!("Premium".parse::<BrandTier>(), Ok(BrandTier::Premium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BrandTier {
    /// Top paying brands.
    Premium,
    /// Mid-market brands.
    MidTier,
    /// Everyone else.
    #[default]
    Regular,
}

impl BrandTier {
    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::MidTier => "mid-tier",
            Self::Regular => "regular",
        }
    }
}

impl std::fmt::Display for BrandTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BrandTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "premium" => Ok(Self::Premium),
            "mid-tier" => Ok(Self::MidTier),
            "regular" => Ok(Self::Regular),
            _ => Err(format!("unknown brand tier '{s}'")),
        }
    }
}

/// A brand record as supplied by the brand source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brand {
    /// Stable brand identifier.
    pub id: String,
    /// Display name, matched case-insensitively against task brand names.
    pub name: String,
    /// Commercial tier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tier: BrandTier,
    /// Priority weight applied when ranking the brand's tasks.
    #[cfg_attr(feature = "serde", serde(default = "default_brand_weight"))]
    pub weight: f64,
    /// Inactive brands contribute no weight.
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub active: bool,
}

#[cfg(feature = "serde")]
const fn default_brand_weight() -> f64 {
    BrandWeights::DEFAULT_WEIGHT
}

#[cfg(feature = "serde")]
const fn default_active() -> bool {
    true
}

/// Errors raised when recording a brand weight.
#[derive(Debug, Error, PartialEq)]
pub enum BrandWeightError {
    /// Weights must be finite and strictly positive.
    #[error("weight {weight} for brand '{brand}' must be finite and positive")]
    InvalidWeight {
        /// Brand the weight was meant for.
        brand: String,
        /// Rejected weight.
        weight: f64,
    },
}

/// Case-insensitive brand name to priority weight mapping.
///
/// Brands without an entry weigh [`BrandWeights::DEFAULT_WEIGHT`].
///
/// # Examples
/// ```
/// use storyverse_core::BrandWeights;
///
/// # fn main() -> Result<(), storyverse_core::BrandWeightError> {
/// let weights = BrandWeights::new().with_weight("Acme", 3.0)?;
/// assert_eq!(weights.weight("ACME"), 3.0);
/// assert_eq!(weights.weight("Globex"), 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrandWeights {
    weights: HashMap<String, f64>,
}

impl BrandWeights {
    /// Weight assumed for brands without an entry.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Construct an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build weights from brand records.
    ///
    /// Inactive brands are ignored. Brands with a non-positive or
    /// non-finite weight are skipped with a warning and fall back to the
    /// default weight.
    #[must_use]
    pub fn from_brands<'a, I>(brands: I) -> Self
    where
        I: IntoIterator<Item = &'a Brand>,
    {
        let mut weights = Self::new();
        for brand in brands.into_iter().filter(|brand| brand.active) {
            if let Err(err) = weights.try_set_weight(&brand.name, brand.weight) {
                log::warn!("skipping brand {}: {err}", brand.id);
            }
        }
        weights
    }

    /// Insert or update the weight for `brand`.
    ///
    /// # Errors
    /// Returns [`BrandWeightError::InvalidWeight`] when `weight` is zero,
    /// negative, or not finite. The mapping is left unchanged.
    pub fn try_set_weight(&mut self, brand: &str, weight: f64) -> Result<(), BrandWeightError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(BrandWeightError::InvalidWeight {
                brand: brand.to_owned(),
                weight,
            });
        }
        self.weights.insert(normalise_brand(brand), weight);
        Ok(())
    }

    /// Add a weight while returning `self` for chaining.
    ///
    /// # Errors
    /// Propagates [`BrandWeights::try_set_weight`] failures.
    pub fn with_weight(mut self, brand: &str, weight: f64) -> Result<Self, BrandWeightError> {
        self.try_set_weight(brand, weight)?;
        Ok(self)
    }

    /// Return the weight for `brand`, defaulting to
    /// [`BrandWeights::DEFAULT_WEIGHT`].
    #[must_use]
    pub fn weight(&self, brand: &str) -> f64 {
        self.weights
            .get(&normalise_brand(brand))
            .copied()
            .unwrap_or(Self::DEFAULT_WEIGHT)
    }

    /// Number of brands with an explicit weight.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether no brand has an explicit weight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

fn normalise_brand(brand: &str) -> String {
    brand.trim().to_lowercase()
}
