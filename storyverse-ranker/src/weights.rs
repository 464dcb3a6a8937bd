//! Tunable weights for the scoring blend and weighted selection.
#![forbid(unsafe_code)]

use crate::{RankerError, ScoreBreakdown};

/// Relative weight of each ranking factor in the combined score.
///
/// The defaults sum to one, but the combined score is not clamped: a large
/// brand weight or reward can push it past one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FactorWeights {
    /// Multiplier for the interest match factor.
    pub interest: f64,
    /// Multiplier for the location relevance factor.
    pub location: f64,
    /// Multiplier for the freshness factor.
    pub freshness: f64,
    /// Multiplier for the brand priority plus reward factor.
    pub priority: f64,
    /// Multiplier for the engagement boost factor.
    pub engagement: f64,
}

impl FactorWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankerError::InvalidFactorWeights`] when any value is not
    /// finite or negative, or when the total weight is zero.
    pub fn validate(self) -> Result<Self, RankerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(RankerError::InvalidFactorWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_positive_total()
    }

    const fn has_finite_values(self) -> bool {
        self.interest.is_finite()
            && self.location.is_finite()
            && self.freshness.is_finite()
            && self.priority.is_finite()
            && self.engagement.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.interest >= 0.0
            && self.location >= 0.0
            && self.freshness >= 0.0
            && self.priority >= 0.0
            && self.engagement >= 0.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a positive total"
    )]
    const fn has_positive_total(self) -> bool {
        (self.interest + self.location + self.freshness + self.priority + self.engagement) > 0.0
    }

    /// Blend the factor sub-scores into a single score.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the combined score is a weighted sum of factors"
    )]
    pub fn combine(self, breakdown: &ScoreBreakdown) -> f64 {
        breakdown.interest * self.interest
            + breakdown.location * self.location
            + breakdown.freshness * self.freshness
            + breakdown.priority * self.priority
            + breakdown.engagement * self.engagement
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            interest: 0.40,
            location: 0.20,
            freshness: 0.20,
            priority: 0.15,
            engagement: 0.05,
        }
    }
}

/// Mix of relevance and priority used when drawing tasks at random.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectionWeights {
    /// Multiplier for the relevance score.
    pub relevance: f64,
    /// Multiplier for the priority score.
    pub priority: f64,
}

impl SelectionWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankerError::InvalidSelectionWeights`] when either value is
    /// not finite or negative, or when both are zero.
    pub fn validate(self) -> Result<Self, RankerError> {
        let finite = self.relevance.is_finite() && self.priority.is_finite();
        let non_negative = self.relevance >= 0.0 && self.priority >= 0.0;
        let non_zero = self.relevance > 0.0 || self.priority > 0.0;
        if finite && non_negative && non_zero {
            Ok(self)
        } else {
            Err(RankerError::InvalidSelectionWeights)
        }
    }

    /// Draw weight for a candidate: `brand_weight × (relevance mix)`.
    ///
    /// Non-finite or negative results collapse to zero so they are never
    /// drawn ahead of valid candidates.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "selection weight is a weighted product"
    )]
    pub fn draw_weight(self, brand_weight: f64, relevance: f64, priority: f64) -> f64 {
        let weight = brand_weight * (relevance * self.relevance + priority * self.priority);
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        }
    }
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            relevance: 0.6,
            priority: 0.4,
        }
    }
}
