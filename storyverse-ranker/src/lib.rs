//! Task recommendation for the StoryVerse feed.
//!
//! The crate ranks brand feedback tasks for a user with a weighted blend of
//! five factors:
//! - **Interest match** (40%) compares task tags with the user's interests
//!   using a symmetric, case-insensitive substring test.
//! - **Location relevance** (20%) is neutral until tasks record locality.
//! - **Freshness** (20%) decays linearly over thirty days to a floor.
//! - **Brand priority and reward** (15%) grows with brand weight and reward.
//! - **Engagement boost** (5%) favours tasks with few responses.
//!
//! [`TaskRecommender`] filters out inactive tasks, scores the rest, sorts
//! them stably by descending score, and truncates to a limit. It also
//! rotates a featured promo out of the top five and draws weighted random
//! samples without replacement. Every random draw uses a generator supplied
//! by the caller, so seeded generators make results reproducible.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use storyverse_core::{BrandWeights, Task, UserProfile};
//! use storyverse_ranker::{RankingInputs, TaskRecommender};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let now = Utc::now();
//! let tasks = vec![
//!     Task::new("t-1", "Acme", 20.0, now - Duration::days(2), now + Duration::days(5))?
//!         .with_tags(["tech"]),
//! ];
//! let profile = UserProfile::new("user-1").with_interests(["technology"]);
//! let brands = BrandWeights::new().with_weight("acme", 3.0)?;
//! let inputs = RankingInputs::new(&tasks, &profile, &brands, now);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let promo = TaskRecommender::new().rotating_promo(&inputs, &mut rng);
//! assert_eq!(promo.map(|scored| scored.task.id), Some("t-1".to_owned()));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engagement;
mod error;
pub mod factors;
mod recommender;
mod weights;

pub use engagement::{EngagementSource, SIMULATED_RESPONSE_CEILING, SimulatedEngagement};
pub use error::RankerError;
pub use factors::ScoreBreakdown;
pub use recommender::{
    DEFAULT_RECOMMENDATION_LIMIT, PROMO_POOL_SIZE, RankingInputs, ScoredTask, TaskRecommender,
};
pub use weights::{FactorWeights, SelectionWeights};
