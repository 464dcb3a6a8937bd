//! Facade crate for the StoryVerse task ranking engine.
//!
//! This crate re-exports the domain types from `storyverse-core` and the
//! recommender from `storyverse-ranker`, so callers can depend on a single
//! crate.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use storyverse_engine::{
//!     BrandWeights, CandidateFilter, RankingInputs, Task, TaskRecommender, UserProfile,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let now = Utc::now();
//! let tasks = vec![
//!     Task::new("t-1", "Acme", 10.0, now - Duration::days(1), now + Duration::days(7))?,
//!     Task::new("t-2", "Acme", 10.0, now - Duration::days(1), now + Duration::days(7))?,
//! ];
//! let profile = UserProfile::new("user-1");
//! let candidates = CandidateFilter::new(&profile)
//!     .with_completed(["t-2"])
//!     .eligible(&tasks);
//! let brands = BrandWeights::new();
//! let inputs = RankingInputs::new(&candidates, &profile, &brands, now);
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let feed = TaskRecommender::new().recommended_tasks(&inputs, 10, &mut rng);
//! assert_eq!(feed.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use storyverse_core::{
    Brand, BrandTier, BrandWeightError, BrandWeights, CandidateFilter, Currency, ResponseCounts,
    Task, TaskError, TaskVisibility, UserProfile,
};
pub use storyverse_ranker::{
    DEFAULT_RECOMMENDATION_LIMIT, EngagementSource, FactorWeights, PROMO_POOL_SIZE, RankerError,
    RankingInputs, ScoreBreakdown, ScoredTask, SelectionWeights, SimulatedEngagement,
    TaskRecommender,
};

#[cfg(feature = "test-support")]
pub use storyverse_core::test_support;
