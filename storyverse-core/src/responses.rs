//! Per-task response tallies.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of responses each task has received, keyed by task id.
///
/// Tasks without an entry have received no responses.
///
/// # Examples
/// ```
/// use storyverse_core::ResponseCounts;
///
/// let counts = ResponseCounts::new().with_count("t-1", 12);
/// assert_eq!(counts.count("t-1"), 12);
/// assert_eq!(counts.count("t-2"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResponseCounts {
    counts: HashMap<String, u32>,
}

impl ResponseCounts {
    /// Construct an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the count for a task.
    pub fn set_count(&mut self, task_id: impl Into<String>, count: u32) {
        self.counts.insert(task_id.into(), count);
    }

    /// Add a count while returning `self` for chaining.
    #[must_use]
    pub fn with_count(mut self, task_id: impl Into<String>, count: u32) -> Self {
        self.set_count(task_id, count);
        self
    }

    /// Record one more response for a task.
    pub fn record(&mut self, task_id: &str) {
        let entry = self.counts.entry(task_id.to_owned()).or_default();
        *entry = entry.saturating_add(1);
    }

    /// Return the number of responses recorded for `task_id`.
    #[must_use]
    pub fn count(&self, task_id: &str) -> u32 {
        self.counts.get(task_id).copied().unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for ResponseCounts {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(id, n)| (id.into(), n)).collect(),
        }
    }
}
