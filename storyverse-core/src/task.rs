//! Brand-submitted feedback tasks and their active window.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who may see a task.
///
/// # Examples
/// ```
/// use storyverse_core::TaskVisibility;
///
/// assert_eq!(TaskVisibility::default(), TaskVisibility::Global);
/// assert_eq!(TaskVisibility::Local.as_str(), "local");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TaskVisibility {
    /// Shown to every user.
    #[default]
    Global,
    /// Shown only to users whose country matches the brand.
    Local,
}

impl TaskVisibility {
    /// Return the visibility as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Local => "local",
        }
    }
}

/// A feedback request published by a brand.
///
/// Tags are free-form interest labels. An empty tag list means the task is
/// untagged and receives the neutral interest score.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use storyverse_core::Task;
///
/// # fn main() -> Result<(), storyverse_core::TaskError> {
/// let now = Utc::now();
/// let task = Task::new("t-1", "Acme", 25.0, now - Duration::days(1), now + Duration::days(6))?
///     .with_tags(["tech", "gadgets"]);
/// assert!(task.is_active_at(now));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    /// Stable task identifier.
    pub id: String,
    /// Display name of the publishing brand.
    pub brand_name: String,
    /// Question shown to the user.
    #[cfg_attr(feature = "serde", serde(default))]
    pub question: String,
    /// Interest labels attached by the brand.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Reward paid for a completed response.
    pub reward_amount: f64,
    /// Start of the active window (inclusive).
    pub active_from: DateTime<Utc>,
    /// End of the active window (exclusive).
    pub active_to: DateTime<Utc>,
    /// Audience restriction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility: TaskVisibility,
    /// Maximum number of responses the brand wants, if capped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_target: Option<u32>,
}

/// Errors returned by [`Task::new`].
#[derive(Debug, Error, PartialEq)]
pub enum TaskError {
    /// The reward was negative, NaN, or infinite.
    #[error("reward amount {amount} must be finite and non-negative")]
    InvalidReward {
        /// Rejected reward.
        amount: f64,
    },
    /// The active window was empty or inverted.
    #[error("task must become active before it expires ({from} >= {to})")]
    EmptyWindow {
        /// Requested start.
        from: DateTime<Utc>,
        /// Requested end.
        to: DateTime<Utc>,
    },
}

impl Task {
    /// Validate and construct a global, untagged [`Task`].
    ///
    /// # Errors
    /// Returns [`TaskError::InvalidReward`] for negative or non-finite
    /// rewards and [`TaskError::EmptyWindow`] when `active_from` is not
    /// strictly before `active_to`.
    pub fn new(
        id: impl Into<String>,
        brand_name: impl Into<String>,
        reward_amount: f64,
        active_from: DateTime<Utc>,
        active_to: DateTime<Utc>,
    ) -> Result<Self, TaskError> {
        if !reward_amount.is_finite() || reward_amount < 0.0 {
            return Err(TaskError::InvalidReward {
                amount: reward_amount,
            });
        }
        if active_from >= active_to {
            return Err(TaskError::EmptyWindow {
                from: active_from,
                to: active_to,
            });
        }
        Ok(Self {
            id: id.into(),
            brand_name: brand_name.into(),
            question: String::new(),
            tags: Vec::new(),
            reward_amount,
            active_from,
            active_to,
            visibility: TaskVisibility::Global,
            user_target: None,
        })
    }

    /// Replace the tag list while returning `self` for chaining.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the question text.
    #[must_use]
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Set the audience restriction.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: TaskVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Cap the number of responses the task accepts.
    #[must_use]
    pub const fn with_user_target(mut self, target: u32) -> Self {
        self.user_target = Some(target);
        self
    }

    /// Report whether the task is active at `now`.
    ///
    /// The window is half-open: `active_from <= now < active_to`.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.active_from <= now && now < self.active_to
    }
}
