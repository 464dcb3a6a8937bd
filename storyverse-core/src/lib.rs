//! Core domain types for the StoryVerse task ranking engine.
//!
//! These records describe what the ranking engine consumes: brand tasks,
//! user profiles, brand weights, and response tallies. They are plain
//! in-memory values supplied by the task, brand, and profile sources; no
//! type here performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod brand;
pub mod candidates;
pub mod currency;
pub mod profile;
pub mod responses;
pub mod task;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use brand::{Brand, BrandTier, BrandWeightError, BrandWeights};
pub use candidates::CandidateFilter;
pub use currency::Currency;
pub use profile::UserProfile;
pub use responses::ResponseCounts;
pub use task::{Task, TaskError, TaskVisibility};
