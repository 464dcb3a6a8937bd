//! Task ranking, promo rotation, and weighted random selection.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use serde::Serialize;
use storyverse_core::{BrandWeights, Task, UserProfile};

use crate::engagement::{EngagementSource, SimulatedEngagement};
use crate::factors::{self, ScoreBreakdown};
use crate::{FactorWeights, RankerError, SelectionWeights};

/// Number of tasks returned by a feed request when the caller has no
/// preference.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;
/// Size of the top-ranked pool the rotating promo is drawn from.
pub const PROMO_POOL_SIZE: usize = 5;

/// Read-only inputs for one ranking call.
///
/// Every collaborator is passed explicitly; the recommender never reaches
/// for ambient state, including the clock.
#[derive(Debug, Clone, Copy)]
pub struct RankingInputs<'a> {
    /// Candidate tasks, already filtered for visibility and completion.
    pub tasks: &'a [Task],
    /// Profile of the user being served.
    pub profile: &'a UserProfile,
    /// Priority weight per brand.
    pub brand_weights: &'a BrandWeights,
    /// Instant the active window and freshness are evaluated at.
    pub now: DateTime<Utc>,
}

impl<'a> RankingInputs<'a> {
    /// Bundle the inputs for a ranking call.
    #[must_use]
    pub const fn new(
        tasks: &'a [Task],
        profile: &'a UserProfile,
        brand_weights: &'a BrandWeights,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            tasks,
            profile,
            brand_weights,
            now,
        }
    }
}

/// A task annotated with the scores computed for one ranking call.
///
/// `relevance_score` and `priority_score` both carry the combined score;
/// weighted selection mixes them, which reduces to scaling by the combined
/// score until the two are given distinct meanings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    /// The ranked task.
    pub task: Task,
    /// Combined weighted score.
    pub score: f64,
    /// Relevance score used by weighted selection.
    pub relevance_score: f64,
    /// Priority score used by weighted selection.
    pub priority_score: f64,
    /// Individual factor values.
    pub breakdown: ScoreBreakdown,
}

/// Multi-factor task recommender.
///
/// The recommender is stateless between calls: it holds only validated
/// weights and an engagement source, and it never mutates its inputs. All
/// randomness flows through the generator supplied by the caller.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use storyverse_core::{BrandWeights, ResponseCounts, Task, UserProfile};
/// use storyverse_ranker::{RankingInputs, TaskRecommender};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Utc::now();
/// let tasks = vec![
///     Task::new("a", "Acme", 5.0, now - Duration::days(20), now + Duration::days(5))?,
///     Task::new("b", "Acme", 5.0, now - Duration::days(1), now + Duration::days(5))?,
/// ];
/// let profile = UserProfile::new("user-1");
/// let brands = BrandWeights::new();
/// let recommender = TaskRecommender::with_engagement(ResponseCounts::new());
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let ranked = recommender.recommended_tasks(
///     &RankingInputs::new(&tasks, &profile, &brands, now),
///     10,
///     &mut rng,
/// );
/// assert_eq!(ranked[0].task.id, "b");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TaskRecommender<E = SimulatedEngagement> {
    factor_weights: FactorWeights,
    selection_weights: SelectionWeights,
    engagement: E,
}

impl TaskRecommender<SimulatedEngagement> {
    /// Construct a recommender with default weights and simulated
    /// engagement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engagement(SimulatedEngagement)
    }
}

impl Default for TaskRecommender<SimulatedEngagement> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EngagementSource> TaskRecommender<E> {
    /// Construct a recommender with default weights and the given
    /// engagement source.
    #[must_use]
    pub fn with_engagement(engagement: E) -> Self {
        Self {
            factor_weights: FactorWeights::default(),
            selection_weights: SelectionWeights::default(),
            engagement,
        }
    }

    /// Construct a recommender with explicit weights.
    ///
    /// # Errors
    /// Returns [`RankerError`] when either weight set fails validation.
    pub fn with_weights(
        engagement: E,
        factor_weights: FactorWeights,
        selection_weights: SelectionWeights,
    ) -> Result<Self, RankerError> {
        Ok(Self {
            factor_weights: factor_weights.validate()?,
            selection_weights: selection_weights.validate()?,
            engagement,
        })
    }

    /// Factor weights in use.
    #[must_use]
    pub const fn factor_weights(&self) -> FactorWeights {
        self.factor_weights
    }

    /// Score a single task, regardless of whether it is active.
    #[must_use]
    pub fn score_task<R: RngCore>(
        &self,
        task: &Task,
        inputs: &RankingInputs<'_>,
        rng: &mut R,
    ) -> ScoredTask {
        let brand_weight = inputs.brand_weights.weight(&task.brand_name);
        let breakdown = ScoreBreakdown {
            interest: factors::interest_match(task, inputs.profile),
            location: factors::location_relevance(task, inputs.profile),
            freshness: factors::freshness(task, inputs.now),
            priority: factors::brand_priority(task, brand_weight),
            engagement: sanitise(self.engagement.engagement(task, rng)),
        };
        let score = sanitise(self.factor_weights.combine(&breakdown));
        ScoredTask {
            task: task.clone(),
            score,
            relevance_score: score,
            priority_score: score,
            breakdown,
        }
    }

    /// Score every active task and sort by descending score.
    ///
    /// Inactive tasks are dropped before scoring. The sort is stable, so
    /// equal scores keep their input order.
    #[must_use]
    pub fn rank_active<R: RngCore>(&self, inputs: &RankingInputs<'_>, rng: &mut R) -> Vec<ScoredTask> {
        let mut scored: Vec<ScoredTask> = inputs
            .tasks
            .iter()
            .filter(|task| task.is_active_at(inputs.now))
            .map(|task| self.score_task(task, inputs, rng))
            .collect();
        scored.sort_by(|left, right| descending(left.score, right.score));
        log::debug!(
            "ranked {} active tasks out of {} candidates for user {}",
            scored.len(),
            inputs.tasks.len(),
            inputs.profile.user_id
        );
        scored
    }

    /// Return up to `limit` active tasks, best first.
    ///
    /// Callers without a preference should pass
    /// [`DEFAULT_RECOMMENDATION_LIMIT`].
    #[must_use]
    pub fn recommended_tasks<R: RngCore>(
        &self,
        inputs: &RankingInputs<'_>,
        limit: usize,
        rng: &mut R,
    ) -> Vec<ScoredTask> {
        let mut ranked = self.rank_active(inputs, rng);
        ranked.truncate(limit);
        ranked
    }

    /// Pick one featured task uniformly from the top
    /// [`PROMO_POOL_SIZE`] recommendations.
    ///
    /// Returns `None` when no task is active.
    #[must_use]
    pub fn rotating_promo<R: RngCore>(
        &self,
        inputs: &RankingInputs<'_>,
        rng: &mut R,
    ) -> Option<ScoredTask> {
        let mut pool = self.recommended_tasks(inputs, PROMO_POOL_SIZE, rng);
        if pool.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..pool.len());
        Some(pool.swap_remove(index))
    }

    /// Draw up to `count` distinct tasks from `scored`, each draw weighted by
    /// `brand_weight × (0.6 × relevance + 0.4 × priority)` among the tasks
    /// still remaining.
    ///
    /// Returns `min(count, scored.len())` tasks in draw order and never the
    /// same entry twice.
    #[must_use]
    pub fn weighted_random_select<R: RngCore>(
        &self,
        scored: &[ScoredTask],
        count: usize,
        brand_weights: &BrandWeights,
        rng: &mut R,
    ) -> Vec<ScoredTask> {
        let mut pool: Vec<(f64, &ScoredTask)> = scored
            .iter()
            .map(|candidate| {
                let weight = self.selection_weights.draw_weight(
                    brand_weights.weight(&candidate.task.brand_name),
                    candidate.relevance_score,
                    candidate.priority_score,
                );
                (weight, candidate)
            })
            .collect();

        let draws = count.min(pool.len());
        let mut selected = Vec::with_capacity(draws);
        while selected.len() < draws {
            let index = roulette_index(&pool, rng);
            let (_, chosen) = pool.remove(index);
            selected.push(chosen.clone());
        }
        selected
    }
}

/// Pick an index with probability proportional to its weight.
///
/// Falls back to a uniform draw when no candidate has positive weight.
/// `pool` must not be empty.
#[expect(
    clippy::float_arithmetic,
    reason = "roulette selection walks cumulative weights"
)]
fn roulette_index<R: RngCore>(pool: &[(f64, &ScoredTask)], rng: &mut R) -> usize {
    let total: f64 = pool.iter().map(|(weight, _)| weight).sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.gen_range(0..pool.len());
    }

    let mut remaining = rng.gen_range(0.0..total);
    let mut last_positive = 0;
    for (index, (weight, _)) in pool.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }
        if remaining < *weight {
            return index;
        }
        remaining -= weight;
        last_positive = index;
    }
    // Rounding can leave a sliver of `remaining`; it belongs to the last
    // candidate that carried weight.
    last_positive
}

fn descending(left: f64, right: f64) -> Ordering {
    right.total_cmp(&left)
}

fn sanitise(score: f64) -> f64 {
    if score.is_finite() { score.max(0.0) } else { 0.0 }
}
