//! Caller-side eligibility pass run before ranking.
//!
//! The ranking engine assumes its candidates are already visible to the
//! user and not yet answered by them. [`CandidateFilter`] performs that
//! pre-filtering over in-memory records: it drops completed tasks, tasks
//! that have reached their response target, and local tasks from brands
//! outside the user's country.

use std::collections::HashSet;

use crate::{ResponseCounts, Task, TaskVisibility, UserProfile};

/// Filters a raw task list down to the candidates a user may be shown.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use storyverse_core::{CandidateFilter, Task, UserProfile};
///
/// # fn main() -> Result<(), storyverse_core::TaskError> {
/// let now = Utc::now();
/// let tasks = vec![
///     Task::new("done", "Acme", 5.0, now, now + Duration::days(3))?,
///     Task::new("open", "Acme", 5.0, now, now + Duration::days(3))?,
/// ];
/// let profile = UserProfile::new("user-1");
/// let eligible = CandidateFilter::new(&profile)
///     .with_completed(["done"])
///     .eligible(&tasks);
/// assert_eq!(eligible.len(), 1);
/// assert_eq!(eligible[0].id, "open");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CandidateFilter<'a> {
    profile: &'a UserProfile,
    completed: HashSet<String>,
    responses: Option<&'a ResponseCounts>,
}

impl<'a> CandidateFilter<'a> {
    /// Create a filter for `profile` with no completion or response data.
    #[must_use]
    pub fn new(profile: &'a UserProfile) -> Self {
        Self {
            profile,
            completed: HashSet::new(),
            responses: None,
        }
    }

    /// Exclude the given task ids, already answered by the user.
    #[must_use]
    pub fn with_completed<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.completed.extend(task_ids.into_iter().map(Into::into));
        self
    }

    /// Use `responses` to drop tasks that have met their response target.
    #[must_use]
    pub const fn with_responses(mut self, responses: &'a ResponseCounts) -> Self {
        self.responses = Some(responses);
        self
    }

    /// Report whether `task` may be shown to the user.
    #[must_use]
    pub fn is_eligible(&self, task: &Task) -> bool {
        !self.completed.contains(&task.id) && self.is_visible(task) && self.has_capacity(task)
    }

    /// Return clones of the eligible tasks, preserving input order.
    #[must_use]
    pub fn eligible(&self, tasks: &[Task]) -> Vec<Task> {
        let kept: Vec<Task> = tasks
            .iter()
            .filter(|task| self.is_eligible(task))
            .cloned()
            .collect();
        log::debug!(
            "candidate filter kept {} of {} tasks for user {}",
            kept.len(),
            tasks.len(),
            self.profile.user_id
        );
        kept
    }

    fn is_visible(&self, task: &Task) -> bool {
        match task.visibility {
            TaskVisibility::Global => true,
            TaskVisibility::Local => self
                .profile
                .country
                .as_deref()
                .map(str::trim)
                .filter(|country| !country.is_empty())
                .is_some_and(|country| {
                    task.brand_name
                        .to_lowercase()
                        .contains(&country.to_lowercase())
                }),
        }
    }

    fn has_capacity(&self, task: &Task) -> bool {
        let Some(target) = task.user_target else {
            return true;
        };
        let received = self
            .responses
            .map_or(0, |responses| responses.count(&task.id));
        received < target
    }
}
