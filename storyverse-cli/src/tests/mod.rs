//! Shared test harness modules for the StoryVerse CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]
#![expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point scores within a tolerance"
)]

use super::*;

mod helpers;
mod unit;
