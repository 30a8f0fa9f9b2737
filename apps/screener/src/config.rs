use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::screening::status::StatusThresholds;

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration, built once at startup and passed by reference.
/// Fails before any file I/O if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub rust_log: String,
    pub paths: PathConfig,
    pub jobs: JobRegistry,
    pub thresholds: StatusThresholds,
}

/// Where the batch reads applicants and resumes from, and where it writes its outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PathConfig {
    pub applicants_csv: PathBuf,
    pub updated_csv: PathBuf,
    pub results_json: PathBuf,
    pub resumes_dir: PathBuf,
}

impl PathConfig {
    /// Conventional layout: inputs under `data_dir`, the JSON document under `results_dir`.
    pub fn under(data_dir: &Path, results_dir: &Path) -> Self {
        Self {
            applicants_csv: data_dir.join("applicants.csv"),
            updated_csv: data_dir.join("applicants_updated.csv"),
            results_json: results_dir.join("applicant_results.json"),
            resumes_dir: data_dir.join("resumes"),
        }
    }

    pub fn resume_path(&self, resume_file: &str) -> PathBuf {
        self.resumes_dir.join(resume_file)
    }
}

/// Fixed mapping from job_id to the job description file on disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRegistry {
    entries: BTreeMap<String, PathBuf>,
}

impl JobRegistry {
    /// The registry shipped with the tool: one IT support role.
    pub fn with_defaults(data_dir: &Path) -> Self {
        let mut registry = Self::default();
        registry.insert("IT_SUPPORT", data_dir.join("job_it_support.txt"));
        registry
    }

    pub fn insert(&mut self, job_id: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(job_id.into(), path.into());
    }

    pub fn get(&self, job_id: &str) -> Option<&Path> {
        self.entries.get(job_id).map(PathBuf::as_path)
    }

    pub fn job_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Config {
    /// Loads credentials from the environment (and `.env`) and layout from CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = require_env("OPENAI_API_KEY")
            .context("Missing OPENAI_API_KEY. Add it to your environment or .env file")?;

        let mut config = Config::new(openai_api_key, cli.path_config(), cli.job_registry());
        if let Some(model) = optional_env("OPENAI_MODEL") {
            config.openai_model = model;
        }
        if let Some(base_url) = optional_env("OPENAI_BASE_URL") {
            config.openai_base_url = base_url;
        }
        if let Some(level) = optional_env("RUST_LOG") {
            config.rust_log = level;
        }
        Ok(config)
    }

    /// Builds a configuration with default model, endpoint and thresholds, without
    /// touching the environment.
    pub fn new(openai_api_key: impl Into<String>, paths: PathConfig, jobs: JobRegistry) -> Self {
        Config {
            openai_api_key: openai_api_key.into(),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            rust_log: "info".to_string(),
            paths,
            jobs,
            thresholds: StatusThresholds::default(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_config_conventional_layout() {
        let paths = PathConfig::under(Path::new("data"), Path::new("results"));
        assert_eq!(paths.applicants_csv, PathBuf::from("data/applicants.csv"));
        assert_eq!(paths.updated_csv, PathBuf::from("data/applicants_updated.csv"));
        assert_eq!(
            paths.results_json,
            PathBuf::from("results/applicant_results.json")
        );
        assert_eq!(
            paths.resume_path("jane.txt"),
            PathBuf::from("data/resumes/jane.txt")
        );
    }

    #[test]
    fn test_default_registry_has_it_support() {
        let jobs = JobRegistry::with_defaults(Path::new("data"));
        assert_eq!(jobs.job_ids().count(), 1);
        assert_eq!(
            jobs.get("IT_SUPPORT"),
            Some(Path::new("data/job_it_support.txt"))
        );
        assert!(jobs.get("HR_ASSISTANT").is_none());
    }

    #[test]
    fn test_registry_lookup_is_exact() {
        let jobs = JobRegistry::with_defaults(Path::new("data"));
        assert!(jobs.get("it_support").is_none());
        assert!(jobs.get(" IT_SUPPORT").is_none());
    }

    #[test]
    fn test_registry_insert_overrides() {
        let mut jobs = JobRegistry::with_defaults(Path::new("data"));
        jobs.insert("IT_SUPPORT", "/srv/jobs/it.txt");
        jobs.insert("HR_ASSISTANT", "/srv/jobs/hr.txt");
        assert_eq!(jobs.get("IT_SUPPORT"), Some(Path::new("/srv/jobs/it.txt")));
        assert_eq!(jobs.job_ids().collect::<Vec<_>>(), vec!["HR_ASSISTANT", "IT_SUPPORT"]);
    }

    #[test]
    fn test_new_config_uses_default_model() {
        let config = Config::new(
            "sk-test",
            PathConfig::under(Path::new("data"), Path::new("results")),
            JobRegistry::default(),
        );
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.thresholds, StatusThresholds::default());
    }
}
