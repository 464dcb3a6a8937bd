//! Test helpers for writing ranking inputs to a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::rank::{OutputFormat, RankConfig};

pub(super) const REFERENCE_NOW: &str = "2024-05-01T12:00:00Z";

const TASKS_JSON: &str = r#"[
  {
    "id": "stale-food",
    "brand_name": "Acme",
    "question": "How was lunch?",
    "tags": ["food"],
    "reward_amount": 10.0,
    "active_from": "2024-04-02T12:00:00Z",
    "active_to": "2024-05-31T12:00:00Z"
  },
  {
    "id": "fresh-tech",
    "brand_name": "Acme",
    "question": "Rate our new phone",
    "tags": ["tech"],
    "reward_amount": 50.0,
    "active_from": "2024-04-29T12:00:00Z",
    "active_to": "2024-05-31T12:00:00Z"
  },
  {
    "id": "expired",
    "brand_name": "Globex",
    "tags": ["tech"],
    "reward_amount": 80.0,
    "active_from": "2024-03-01T12:00:00Z",
    "active_to": "2024-04-01T12:00:00Z"
  },
  {
    "id": "answered",
    "brand_name": "Globex",
    "tags": ["tech"],
    "reward_amount": 80.0,
    "active_from": "2024-04-30T12:00:00Z",
    "active_to": "2024-05-31T12:00:00Z"
  },
  {
    "id": "nigeria-only",
    "brand_name": "Lagos Foods Nigeria",
    "tags": ["food"],
    "reward_amount": 30.0,
    "active_from": "2024-04-30T12:00:00Z",
    "active_to": "2024-05-31T12:00:00Z",
    "visibility": "local"
  },
  {
    "id": "saturated",
    "brand_name": "Initech",
    "tags": ["tech"],
    "reward_amount": 90.0,
    "active_from": "2024-04-30T12:00:00Z",
    "active_to": "2024-05-31T12:00:00Z",
    "user_target": 5
  }
]"#;

const PROFILE_JSON: &str = r#"{
  "user_id": "user-1",
  "interests": ["technology"],
  "country": "United States"
}"#;

const BRANDS_JSON: &str = r#"[
  { "id": "b-1", "name": "Acme", "tier": "premium", "weight": 3.0 },
  { "id": "b-2", "name": "Globex", "tier": "regular", "weight": 1.0, "active": false }
]"#;

const RESPONSES_JSON: &str = r#"{ "saturated": 5, "fresh-tech": 12 }"#;

const COMPLETED_JSON: &str = r#"["answered"]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// Scratch directory holding one file per ranking input.
pub(super) struct InputFiles {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) tasks: Utf8PathBuf,
    pub(super) profile: Utf8PathBuf,
    pub(super) brands: Utf8PathBuf,
    pub(super) responses: Utf8PathBuf,
    pub(super) completed: Utf8PathBuf,
}

impl InputFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let tasks = root.join("tasks.json");
        let profile = root.join("profile.json");
        let brands = root.join("brands.json");
        let responses = root.join("responses.json");
        let completed = root.join("completed.json");
        for (path, contents) in [
            (&tasks, TASKS_JSON),
            (&profile, PROFILE_JSON),
            (&brands, BRANDS_JSON),
            (&responses, RESPONSES_JSON),
            (&completed, COMPLETED_JSON),
        ] {
            write_utf8(path, contents.as_bytes());
        }
        Self {
            _dir: dir,
            root,
            tasks,
            profile,
            brands,
            responses,
            completed,
        }
    }

    /// Configuration using every input, a fixed clock, and a fixed seed.
    pub(super) fn full_config(&self) -> RankConfig {
        RankConfig {
            tasks: self.tasks.clone(),
            profile: self.profile.clone(),
            brands: Some(self.brands.clone()),
            responses: Some(self.responses.clone()),
            completed: Some(self.completed.clone()),
            limit: 10,
            seed: Some(7),
            now: chrono::DateTime::parse_from_rfc3339(REFERENCE_NOW)
                .expect("reference timestamp")
                .with_timezone(&chrono::Utc),
            format: OutputFormat::Json,
        }
    }

    /// Configuration with only the required inputs.
    pub(super) fn minimal_config(&self) -> RankConfig {
        RankConfig {
            brands: None,
            responses: None,
            completed: None,
            ..self.full_config()
        }
    }
}
