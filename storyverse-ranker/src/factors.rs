//! The five ranking factors computed per active task.
//!
//! Each factor is total: missing data selects a neutral default instead of
//! failing. Factors are roughly normalised to `0.0..=1.0`, except brand
//! priority, which grows linearly with brand weight and reward.

use chrono::{DateTime, Utc};
use serde::Serialize;
use storyverse_core::{Task, UserProfile};

/// Score used when there is nothing to compare against.
pub const NEUTRAL_SCORE: f64 = 0.5;
/// Days over which freshness decays from one to its floor.
pub const FRESHNESS_WINDOW_DAYS: f64 = 30.0;
/// Lowest freshness any active task can have.
pub const FRESHNESS_FLOOR: f64 = 0.1;
/// Lowest engagement boost any task can have.
pub const ENGAGEMENT_FLOOR: f64 = 0.1;

const INTEREST_BASE: f64 = 0.3;
const INTEREST_SPAN: f64 = 0.7;
const BRAND_WEIGHT_DIVISOR: f64 = 5.0;
const REWARD_DIVISOR: f64 = 100.0;
const ENGAGEMENT_SATURATION: f64 = 100.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Per-factor sub-scores for one task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Overlap between task tags and user interests.
    pub interest: f64,
    /// Locality of the task to the user.
    pub location: f64,
    /// Recency of the task's start.
    pub freshness: f64,
    /// Brand weight plus reward.
    pub priority: f64,
    /// Boost for tasks with few responses.
    pub engagement: f64,
}

/// Interest match between a task's tags and the user's interests.
///
/// Returns [`NEUTRAL_SCORE`] when the task is untagged or the user declared
/// no (non-blank) interests. Otherwise a tag matches when it contains an
/// interest or an interest contains it, ignoring case, and the score is
/// `0.3 + 0.7 × matching / total`, capped at one.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use storyverse_core::{Task, UserProfile};
/// use storyverse_ranker::factors::interest_match;
///
/// # fn main() -> Result<(), storyverse_core::TaskError> {
/// let now = Utc::now();
/// let task = Task::new("t", "Acme", 5.0, now, now + Duration::days(1))?.with_tags(["tech"]);
/// let profile = UserProfile::new("u").with_interests(["Technology"]);
/// assert_eq!(interest_match(&task, &profile), 1.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "interest match is a linear function of the match ratio"
)]
pub fn interest_match(task: &Task, profile: &UserProfile) -> f64 {
    let interests: Vec<String> = profile
        .interests
        .iter()
        .map(|interest| interest.trim().to_lowercase())
        .filter(|interest| !interest.is_empty())
        .collect();
    if task.tags.is_empty() || interests.is_empty() {
        return NEUTRAL_SCORE;
    }

    let matching = task
        .tags
        .iter()
        .filter(|tag| {
            let lowered = tag.to_lowercase();
            interests.iter().any(|interest| {
                interest.contains(lowered.as_str()) || lowered.contains(interest.as_str())
            })
        })
        .count();
    let ratio = count_as_f64(matching) / count_as_f64(task.tags.len());
    (INTEREST_BASE + ratio * INTEREST_SPAN).min(1.0)
}

/// Location relevance of a task for the user.
///
/// Tasks carry no locality yet, so every task is treated as global and
/// scores [`NEUTRAL_SCORE`] whether or not the user has a location.
#[must_use]
#[expect(
    clippy::match_same_arms,
    reason = "located users keep the global score until tasks carry a country"
)]
pub fn location_relevance(_task: &Task, profile: &UserProfile) -> f64 {
    match profile.location() {
        None => NEUTRAL_SCORE,
        // TODO: score local tasks at 1.0 once tasks record a target country.
        Some(_) => NEUTRAL_SCORE,
    }
}

/// Freshness of a task at `now`.
///
/// Decays linearly from one at `active_from` to [`FRESHNESS_FLOOR`] after
/// [`FRESHNESS_WINDOW_DAYS`]. Tasks that have not started yet score one.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "freshness is a linear decay over fractional days"
)]
pub fn freshness(task: &Task, now: DateTime<Utc>) -> f64 {
    let elapsed_ms = now.signed_duration_since(task.active_from).num_milliseconds();
    let days = elapsed_ms as f64 / MILLIS_PER_DAY;
    (1.0 - days / FRESHNESS_WINDOW_DAYS).clamp(FRESHNESS_FLOOR, 1.0)
}

/// Brand priority plus reward: `brand_weight / 5 + reward / 100`.
///
/// Unbounded above. Negative or non-finite rewards count as zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "priority is a linear sum of brand weight and reward"
)]
pub fn brand_priority(task: &Task, brand_weight: f64) -> f64 {
    let reward = if task.reward_amount.is_finite() {
        task.reward_amount.max(0.0)
    } else {
        0.0
    };
    brand_weight / BRAND_WEIGHT_DIVISOR + reward / REWARD_DIVISOR
}

/// Engagement boost for a task with `responses` responses.
///
/// `max(0.1, 1 − responses / 100)`: tasks with fewer responses rank higher.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "engagement is a linear decay over response counts"
)]
pub fn engagement_boost(responses: u32) -> f64 {
    (1.0 - f64::from(responses) / ENGAGEMENT_SATURATION).max(ENGAGEMENT_FLOOR)
}

fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
