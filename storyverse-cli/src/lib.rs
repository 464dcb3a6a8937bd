//! Command-line interface for ranking StoryVerse feedback tasks.
//!
//! Every subcommand loads the same JSON inputs, runs the candidate filter,
//! and then asks the recommender for a ranked feed, a featured promo, or a
//! weighted random sample.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;
mod telemetry;

pub use error::CliError;
pub use telemetry::{DEFAULT_LOG_FILTER, init_logging};

use rank::{RankArgs, RankMode};

const ARG_TASKS: &str = "tasks";
const ARG_PROFILE: &str = "profile";
const ARG_BRANDS: &str = "brands";
const ARG_RESPONSES: &str = "responses";
const ARG_COMPLETED: &str = "completed";
const ARG_LIMIT: &str = "limit";
const ARG_SEED: &str = "seed";
const ARG_NOW: &str = "now";
const ARG_FORMAT: &str = "format";
/// Command name that scopes the `[cmds.rank]` config table and the
/// `STORYVERSE_CMDS_RANK_*` environment variables.
const RANK_COMMAND: &str = "rank";
const ENV_TASKS: &str = "STORYVERSE_CMDS_RANK_TASKS";
const ENV_PROFILE: &str = "STORYVERSE_CMDS_RANK_PROFILE";

/// Run the StoryVerse CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs, or output
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let (mode, args) = cli.command.into_parts();
    let mut stdout = std::io::stdout().lock();
    rank::run_rank(mode, args, &mut stdout)
}

#[derive(Debug, Parser)]
#[command(
    name = "storyverse",
    about = "Rank StoryVerse feedback tasks for a user",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the highest-scoring active tasks.
    Recommend(RankArgs),
    /// Print one featured task drawn from the top five.
    Promo(RankArgs),
    /// Print a weighted random sample of the active tasks.
    Sample(RankArgs),
}

impl Command {
    fn into_parts(self) -> (RankMode, RankArgs) {
        match self {
            Self::Recommend(args) => (RankMode::Recommend, args),
            Self::Promo(args) => (RankMode::Promo, args),
            Self::Sample(args) => (RankMode::Sample, args),
        }
    }
}

#[cfg(test)]
mod tests;
