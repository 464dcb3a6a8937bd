//! Focused unit tests covering ranking CLI configuration.

use super::helpers::{InputFiles, REFERENCE_NOW};
use super::*;
use crate::rank::{OutputFormat, RankArgs, RankConfig, config_from_layers_for_test};
use camino::Utf8PathBuf;
use rstest::rstest;

#[rstest]
#[case(None, Some(Utf8PathBuf::from("profile.json")), ARG_TASKS, ENV_TASKS)]
#[case(Some(Utf8PathBuf::from("tasks.json")), None, ARG_PROFILE, ENV_PROFILE)]
fn converting_without_required_fields_errors(
    #[case] tasks: Option<Utf8PathBuf>,
    #[case] profile: Option<Utf8PathBuf>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RankArgs {
        tasks,
        profile,
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults() {
    let args = RankArgs {
        tasks: Some(Utf8PathBuf::from("tasks.json")),
        profile: Some(Utf8PathBuf::from("profile.json")),
        now: Some("2024-05-01T14:00:00+02:00".to_owned()),
        ..RankArgs::default()
    };

    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.limit, 10);
    assert_eq!(config.seed, None);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.now.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    assert!(config.brands.is_none());
}

#[rstest]
#[case("yesterday")]
#[case("2024-05-01")]
#[case("")]
fn conversion_rejects_malformed_timestamps(#[case] value: &str) {
    let args = RankArgs {
        tasks: Some(Utf8PathBuf::from("tasks.json")),
        profile: Some(Utf8PathBuf::from("profile.json")),
        now: Some(value.to_owned()),
        ..RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("timestamp should be rejected");
    match err {
        CliError::InvalidTimestamp { value: rejected, .. } => assert_eq!(rejected, value),
        other => panic!("expected InvalidTimestamp, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_accepts_existing_inputs() {
    let files = InputFiles::new();
    files
        .full_config()
        .validate_sources()
        .expect("all inputs exist");
}

#[rstest]
#[case::tasks(ARG_TASKS)]
#[case::profile(ARG_PROFILE)]
#[case::brands(ARG_BRANDS)]
#[case::responses(ARG_RESPONSES)]
#[case::completed(ARG_COMPLETED)]
fn validate_sources_reports_missing_inputs(#[case] missing: &'static str) {
    let files = InputFiles::new();
    let absent = files.root.join("absent.json");
    let mut config = files.full_config();
    match missing {
        ARG_TASKS => config.tasks = absent,
        ARG_PROFILE => config.profile = absent,
        ARG_BRANDS => config.brands = Some(absent),
        ARG_RESPONSES => config.responses = Some(absent),
        _ => config.completed = Some(absent),
    }

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingInputFile { field, .. } => assert_eq!(field, missing),
        other => panic!("expected MissingInputFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_directories() {
    let files = InputFiles::new();
    let nested = files.root.join("tasks.d");
    std::fs::create_dir(nested.as_std_path()).expect("create directory");
    let config = RankConfig {
        tasks: nested.clone(),
        ..files.full_config()
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::InputPathNotFile { field, path } => {
            assert_eq!(field, ARG_TASKS);
            assert_eq!(path, nested);
        }
        other => panic!("expected InputPathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_skips_absent_optional_inputs() {
    let files = InputFiles::new();
    std::fs::remove_file(files.brands.as_std_path()).expect("remove brands");
    let config = files.minimal_config();
    config.validate_sources().expect("optional inputs are not required");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "tasks": "file-tasks.json",
            "profile": "file-profile.json",
            "limit": 3,
            "format": "text",
        }),
        None,
    );
    composer.push_environment(json!({
        "profile": "env-profile.json",
        "seed": 99,
    }));
    composer.push_cli(json!({
        "limit": 5,
        "now": REFERENCE_NOW,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.tasks, Utf8PathBuf::from("file-tasks.json"));
    assert_eq!(config.profile, Utf8PathBuf::from("env-profile.json"));
    assert_eq!(config.limit, 5);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.now.to_rfc3339(), "2024-05-01T12:00:00+00:00");
}

#[rstest]
fn env_names_follow_the_rank_subcommand_prefix() {
    use clap::CommandFactory;
    use ortho_config::OrthoConfig;
    use ortho_config::subcommand::{CmdName, Prefix};

    let command = RankArgs::command();
    assert_eq!(command.get_name(), RANK_COMMAND);

    // Mirrors how `SubcmdConfigMerge::load_and_merge` scopes environment keys.
    let name = CmdName::new(command.get_name());
    let prefix = Prefix::new(<RankArgs as OrthoConfig>::prefix());
    let env_prefix = format!("{}CMDS_{}_", prefix.raw(), name.env_key());

    assert_eq!(env_prefix, "STORYVERSE_CMDS_RANK_");
    assert_eq!(ENV_TASKS, format!("{env_prefix}TASKS"));
    assert_eq!(ENV_PROFILE, format!("{env_prefix}PROFILE"));
}
