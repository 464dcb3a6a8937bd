//! Error types raised while configuring the recommender.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when building a [`TaskRecommender`](crate::TaskRecommender).
///
/// Ranking itself never fails; only configuration is validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankerError {
    /// Factor weights were negative, non-finite, or summed to zero.
    #[error("factor weights must be finite, non-negative, and sum to a positive value")]
    InvalidFactorWeights,
    /// Selection weights were negative, non-finite, or summed to zero.
    #[error("selection weights must be finite, non-negative, and sum to a positive value")]
    InvalidSelectionWeights,
}
