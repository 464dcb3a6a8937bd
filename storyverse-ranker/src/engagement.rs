//! Sources of the engagement boost factor.
//!
//! The boost favours tasks with few responses. Real tallies come from
//! [`ResponseCounts`]. [`SimulatedEngagement`] draws a pseudo response count
//! per call from the caller's random number generator.

use rand::{Rng, RngCore};
use storyverse_core::{ResponseCounts, Task};

use crate::factors::engagement_boost;

/// Upper bound (exclusive) of the simulated response count.
pub const SIMULATED_RESPONSE_CEILING: u32 = 50;

/// Supplies the engagement boost for a task.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a recommender
/// can be shared across threads. The method is infallible and must return
/// a finite value in `0.0..=1.0`.
pub trait EngagementSource: Send + Sync {
    /// Return the engagement boost for `task`.
    fn engagement(&self, task: &Task, rng: &mut dyn RngCore) -> f64;
}

/// Draws a pseudo response count uniformly from
/// `0..SIMULATED_RESPONSE_CEILING` on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedEngagement;

impl EngagementSource for SimulatedEngagement {
    fn engagement(&self, _task: &Task, rng: &mut dyn RngCore) -> f64 {
        engagement_boost(rng.gen_range(0..SIMULATED_RESPONSE_CEILING))
    }
}

impl EngagementSource for ResponseCounts {
    fn engagement(&self, task: &Task, _rng: &mut dyn RngCore) -> f64 {
        engagement_boost(self.count(&task.id))
    }
}

impl<T: EngagementSource + ?Sized> EngagementSource for Box<T> {
    fn engagement(&self, task: &Task, rng: &mut dyn RngCore) -> f64 {
        (**self).engagement(task, rng)
    }
}

impl<T: EngagementSource + ?Sized> EngagementSource for &T {
    fn engagement(&self, task: &Task, rng: &mut dyn RngCore) -> f64 {
        (**self).engagement(task, rng)
    }
}
