//! Integration coverage for ranking through the public API.
#![expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point scores within a tolerance"
)]

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::{fixture, rstest};
use storyverse_core::test_support::{active_task, reference_now};
use storyverse_core::{BrandWeights, ResponseCounts, Task, UserProfile};
use storyverse_ranker::factors::interest_match;
use storyverse_ranker::{DEFAULT_RECOMMENDATION_LIMIT, RankingInputs, TaskRecommender};

#[fixture]
fn now() -> DateTime<Utc> {
    reference_now()
}

fn example_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        active_task("2", "Acme", &["food"], 10.0, now, 29),
        active_task("1", "Acme", &["tech"], 50.0, now, 2),
    ]
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn fresher_matching_task_outranks_stale_one(now: DateTime<Utc>, #[case] seed: u64) {
    let tasks = example_tasks(now);
    let profile = UserProfile::new("u").with_interests(["tech"]);
    let brands = BrandWeights::new().with_weight("acme", 3.0).expect("valid weight");
    let inputs = RankingInputs::new(&tasks, &profile, &brands, now);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let ranked = TaskRecommender::new().recommended_tasks(&inputs, 2, &mut rng);

    let order: Vec<&str> = ranked.iter().map(|scored| scored.task.id.as_str()).collect();
    assert_eq!(order, ["1", "2"]);
    assert!(ranked.iter().all(|scored| scored.score.is_finite()));
}

#[rstest]
fn unlisted_brand_scores_like_unit_weight(now: DateTime<Utc>) {
    let tasks = [active_task("t", "Globex", &["tech"], 20.0, now, 3)];
    let profile = UserProfile::new("u").with_interests(["tech"]);
    let empty = BrandWeights::new();
    let explicit = BrandWeights::new().with_weight("globex", 1.0).expect("valid weight");
    let recommender = TaskRecommender::with_engagement(ResponseCounts::new());
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let implicit_score = recommender
        .recommended_tasks(&RankingInputs::new(&tasks, &profile, &empty, now), 1, &mut rng)
        .first()
        .map(|scored| scored.score);
    let explicit_score = recommender
        .recommended_tasks(&RankingInputs::new(&tasks, &profile, &explicit, now), 1, &mut rng)
        .first()
        .map(|scored| scored.score);

    assert!(implicit_score.is_some());
    assert_eq!(implicit_score, explicit_score);
}

#[rstest]
fn substring_interest_beats_unrelated_tag(now: DateTime<Utc>) {
    let profile = UserProfile::new("u").with_interests(["technology"]);
    let tech = active_task("tech", "Acme", &["tech"], 10.0, now, 0);
    let sports = active_task("sports", "Acme", &["sports"], 10.0, now, 0);

    assert!(interest_match(&tech, &profile) > 0.3);
    assert!((interest_match(&sports, &profile) - 0.3).abs() < 1e-9);
}

#[rstest]
fn default_limit_caps_large_feeds(now: DateTime<Utc>) {
    let tasks: Vec<Task> = (0..25)
        .map(|n| active_task(&format!("t{n}"), "Acme", &[], 5.0, now, n))
        .collect();
    let profile = UserProfile::new("u");
    let brands = BrandWeights::new();
    let inputs = RankingInputs::new(&tasks, &profile, &brands, now);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let ranked =
        TaskRecommender::new().recommended_tasks(&inputs, DEFAULT_RECOMMENDATION_LIMIT, &mut rng);

    assert_eq!(ranked.len(), DEFAULT_RECOMMENDATION_LIMIT);
}

#[rstest]
fn ranking_leaves_inputs_untouched(now: DateTime<Utc>) {
    let tasks = example_tasks(now);
    let snapshot = tasks.clone();
    let profile = UserProfile::new("u").with_interests(["tech"]);
    let brands = BrandWeights::new();
    let inputs = RankingInputs::new(&tasks, &profile, &brands, now);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let _ranked = TaskRecommender::new().recommended_tasks(&inputs, 10, &mut rng);

    assert_eq!(tasks, snapshot);
}

#[rstest]
fn recommender_is_shareable_across_threads(now: DateTime<Utc>) {
    let tasks = example_tasks(now);
    let profile = UserProfile::new("u").with_interests(["tech"]);
    let brands = BrandWeights::new();
    let recommender = TaskRecommender::with_engagement(ResponseCounts::new());

    let results: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4_u64)
            .map(|seed| {
                let shared = &recommender;
                let inputs = RankingInputs::new(&tasks, &profile, &brands, now);
                scope.spawn(move || {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    shared
                        .recommended_tasks(&inputs, 10, &mut rng)
                        .into_iter()
                        .map(|scored| scored.task.id)
                        .collect::<Vec<String>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("ranking thread"))
            .collect()
    });

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
