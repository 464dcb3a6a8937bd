//! Test-only task fixtures shared by unit, behaviour, and property tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{Task, TaskVisibility};

/// Fixed instant used as "now" across fixtures.
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Build a global task that became active `age_days` before `now` and stays
/// active for another 30 days.
#[must_use]
pub fn active_task(
    id: &str,
    brand: &str,
    tags: &[&str],
    reward_amount: f64,
    now: DateTime<Utc>,
    age_days: i64,
) -> Task {
    Task {
        id: id.to_owned(),
        brand_name: brand.to_owned(),
        question: String::new(),
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
        reward_amount,
        active_from: now - Duration::days(age_days),
        active_to: now + Duration::days(30),
        visibility: TaskVisibility::Global,
        user_target: None,
    }
}

/// Build a task whose window ended `days_ago` days before `now`.
#[must_use]
pub fn expired_task(id: &str, brand: &str, now: DateTime<Utc>, days_ago: i64) -> Task {
    let mut task = active_task(id, brand, &[], 10.0, now, days_ago + 7);
    task.active_to = now - Duration::days(days_ago);
    task
}

/// Build a task that opens `days_ahead` days after `now`.
#[must_use]
pub fn upcoming_task(id: &str, brand: &str, now: DateTime<Utc>, days_ahead: i64) -> Task {
    let mut task = active_task(id, brand, &[], 10.0, now, 0);
    task.active_from = now + Duration::days(days_ahead);
    task.active_to = task.active_from + Duration::days(30);
    task
}
