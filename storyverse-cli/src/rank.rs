//! Ranking subcommands for the StoryVerse CLI.
//!
//! `recommend`, `promo`, and `sample` share one argument set and one input
//! pipeline; they differ only in which recommender operation runs last.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storyverse_core::{
    Brand, BrandWeights, CandidateFilter, Currency, ResponseCounts, Task, UserProfile,
};
use storyverse_fs::{InputKind, open_utf8_file, probe_input};
use storyverse_ranker::{
    DEFAULT_RECOMMENDATION_LIMIT, EngagementSource, RankingInputs, ScoredTask,
    SimulatedEngagement, TaskRecommender,
};

use crate::{
    ARG_BRANDS, ARG_COMPLETED, ARG_FORMAT, ARG_LIMIT, ARG_NOW, ARG_PROFILE, ARG_RESPONSES,
    ARG_SEED, ARG_TASKS, CliError, ENV_PROFILE, ENV_TASKS, RANK_COMMAND,
};

/// Which recommender operation a subcommand runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RankMode {
    /// Top tasks by score.
    Recommend,
    /// One task drawn from the top five.
    Promo,
    /// Weighted random draws over every active task.
    Sample,
}

impl RankMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Recommend => "recommend",
            Self::Promo => "promo",
            Self::Sample => "sample",
        }
    }
}

/// Rendering of the ranked tasks on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON array of scored tasks.
    #[default]
    Json,
    /// One human-readable line per task.
    Text,
}

/// CLI arguments shared by the ranking subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = RANK_COMMAND,
    long_about = "Load tasks, a user profile, and optional brand, response, \
                 and completion data from JSON files, then rank the tasks \
                 for that user. Paths can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank tasks for a user"
)]
#[ortho_config(prefix = "STORYVERSE")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of tasks.
    #[arg(long = ARG_TASKS, value_name = "path")]
    #[serde(default)]
    pub(crate) tasks: Option<Utf8PathBuf>,
    /// Path to a JSON user profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Path to a JSON array of brands providing priority weights.
    #[arg(long = ARG_BRANDS, value_name = "path")]
    #[serde(default)]
    pub(crate) brands: Option<Utf8PathBuf>,
    /// Path to a JSON object of response counts keyed by task id.
    #[arg(long = ARG_RESPONSES, value_name = "path")]
    #[serde(default)]
    pub(crate) responses: Option<Utf8PathBuf>,
    /// Path to a JSON array of task ids the user already answered.
    #[arg(long = ARG_COMPLETED, value_name = "path")]
    #[serde(default)]
    pub(crate) completed: Option<Utf8PathBuf>,
    /// Maximum number of tasks to print (default 10).
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Seed for reproducible random draws.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Evaluate activity and freshness at this RFC 3339 instant.
    #[arg(long = ARG_NOW, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) now: Option<String>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved ranking configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) tasks: Utf8PathBuf,
    pub(crate) profile: Utf8PathBuf,
    pub(crate) brands: Option<Utf8PathBuf>,
    pub(crate) responses: Option<Utf8PathBuf>,
    pub(crate) completed: Option<Utf8PathBuf>,
    pub(crate) limit: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) now: DateTime<Utc>,
    pub(crate) format: OutputFormat,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.tasks, ARG_TASKS)?;
        Self::require_existing(&self.profile, ARG_PROFILE)?;
        for (path, field) in [
            (&self.brands, ARG_BRANDS),
            (&self.responses, ARG_RESPONSES),
            (&self.completed, ARG_COMPLETED),
        ] {
            if let Some(existing) = path {
                Self::require_existing(existing, field)?;
            }
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match probe_input(path) {
            Ok(InputKind::File) => Ok(()),
            Ok(InputKind::Other) => Err(CliError::InputPathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Ok(InputKind::Missing) => Err(CliError::MissingInputFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingInputFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectInputPath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let tasks = args.tasks.ok_or(CliError::MissingArgument {
            field: ARG_TASKS,
            env: ENV_TASKS,
        })?;
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_PROFILE,
        })?;
        let now = args.now.map_or_else(|| Ok(Utc::now()), |value| parse_now(&value))?;

        Ok(Self {
            tasks,
            profile,
            brands: args.brands,
            responses: args.responses,
            completed: args.completed,
            limit: args.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
            seed: args.seed,
            now,
            format: args.format.unwrap_or_default(),
        })
    }
}

fn parse_now(value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| CliError::InvalidTimestamp {
            value: value.to_owned(),
            source,
        })
}

/// Decoded JSON inputs for one ranking run.
#[derive(Debug, Clone)]
pub(crate) struct LoadedInputs {
    pub(crate) tasks: Vec<Task>,
    pub(crate) profile: UserProfile,
    pub(crate) brand_weights: BrandWeights,
    pub(crate) responses: Option<ResponseCounts>,
    pub(crate) completed: Vec<String>,
}

impl LoadedInputs {
    pub(crate) fn load(config: &RankConfig) -> Result<Self, CliError> {
        let tasks: Vec<Task> = load_json(&config.tasks, ARG_TASKS)?;
        let profile: UserProfile = load_json(&config.profile, ARG_PROFILE)?;
        let brands: Vec<Brand> = load_optional(config.brands.as_deref(), ARG_BRANDS)?
            .unwrap_or_default();
        let responses = load_optional(config.responses.as_deref(), ARG_RESPONSES)?;
        let completed = load_optional(config.completed.as_deref(), ARG_COMPLETED)?
            .unwrap_or_default();
        log::info!(
            "loaded {} tasks and {} brands for user {}",
            tasks.len(),
            brands.len(),
            profile.user_id
        );
        Ok(Self {
            tasks,
            profile,
            brand_weights: BrandWeights::from_brands(&brands),
            responses,
            completed,
        })
    }

    /// Tasks the user may be shown, in input order.
    pub(crate) fn candidates(&self) -> Vec<Task> {
        let mut filter = CandidateFilter::new(&self.profile)
            .with_completed(self.completed.iter().map(String::as_str));
        if let Some(counts) = &self.responses {
            filter = filter.with_responses(counts);
        }
        filter.eligible(&self.tasks)
    }

    /// Real response counts when supplied, otherwise simulated engagement.
    pub(crate) fn engagement(&self) -> &dyn EngagementSource {
        if let Some(counts) = &self.responses {
            return counts;
        }
        &SimulatedEngagement
    }

    /// Currency rewards are displayed in for this user.
    pub(crate) fn currency(&self) -> Currency {
        Currency::for_country(self.profile.country.as_deref().unwrap_or_default())
    }
}

/// Loads a JSON document of type `T` from disk.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn load_optional<T: DeserializeOwned>(
    path: Option<&Utf8Path>,
    field: &'static str,
) -> Result<Option<T>, CliError> {
    path.map(|existing| load_json(existing, field)).transpose()
}

pub(crate) fn run_rank(
    mode: RankMode,
    args: RankArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    run_with_config(mode, &config, writer)
}

pub(crate) fn run_with_config(
    mode: RankMode,
    config: &RankConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let inputs = LoadedInputs::load(config)?;
    let ranked = execute_rank(mode, config, &inputs);
    write_ranked(writer, config.format, &ranked, inputs.currency())
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Run the recommender operation selected by `mode`.
pub(crate) fn execute_rank(
    mode: RankMode,
    config: &RankConfig,
    inputs: &LoadedInputs,
) -> Vec<ScoredTask> {
    let candidates = inputs.candidates();
    let ranking = RankingInputs::new(
        &candidates,
        &inputs.profile,
        &inputs.brand_weights,
        config.now,
    );
    let recommender = TaskRecommender::with_engagement(inputs.engagement());
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let ranked = match mode {
        RankMode::Recommend => recommender.recommended_tasks(&ranking, config.limit, &mut rng),
        RankMode::Promo => recommender
            .rotating_promo(&ranking, &mut rng)
            .into_iter()
            .collect(),
        RankMode::Sample => {
            let scored = recommender.rank_active(&ranking, &mut rng);
            recommender.weighted_random_select(
                &scored,
                config.limit,
                &inputs.brand_weights,
                &mut rng,
            )
        }
    };
    log::info!(
        "{} returned {} of {} candidate tasks",
        mode.as_str(),
        ranked.len(),
        candidates.len()
    );
    ranked
}

fn write_ranked(
    writer: &mut dyn Write,
    format: OutputFormat,
    ranked: &[ScoredTask],
    currency: Currency,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(ranked).map_err(CliError::SerializeOutput)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
        }
        OutputFormat::Text => {
            for (position, entry) in (1_usize..).zip(ranked) {
                write_text_line(writer, position, entry, currency)?;
            }
        }
    }
    Ok(())
}

fn write_text_line(
    writer: &mut dyn Write,
    position: usize,
    entry: &ScoredTask,
    currency: Currency,
) -> Result<(), CliError> {
    let task = &entry.task;
    write!(
        writer,
        "{position}. {} [{}] score {:.3} reward {}",
        task.id,
        task.brand_name,
        entry.score,
        currency.format_amount(task.reward_amount)
    )
    .map_err(CliError::WriteOutput)?;
    if !task.question.is_empty() {
        write!(writer, " | {}", task.question).map_err(CliError::WriteOutput)?;
    }
    writeln!(writer).map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
