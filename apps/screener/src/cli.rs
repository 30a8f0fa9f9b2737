use std::path::PathBuf;

use clap::Parser;

use crate::config::{JobRegistry, PathConfig};

#[derive(Debug, Parser)]
#[command(name = "screener")]
#[command(about = "Screen new applicants against job descriptions with an LLM")]
pub struct Cli {
    /// Directory holding applicants.csv, job descriptions and resumes/
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory the JSON results document is written to
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Applicants table (defaults to <data-dir>/applicants.csv)
    #[arg(long)]
    pub applicants: Option<PathBuf>,

    /// Updated applicants table (defaults to <data-dir>/applicants_updated.csv)
    #[arg(long)]
    pub updated: Option<PathBuf>,

    /// Results document (defaults to <results-dir>/applicant_results.json)
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Resume directory (defaults to <data-dir>/resumes)
    #[arg(long)]
    pub resumes_dir: Option<PathBuf>,

    /// Register a job description, e.g. --job HR_ASSISTANT=data/job_hr.txt (repeatable)
    #[arg(long = "job", value_name = "ID=PATH", value_parser = parse_job_entry)]
    pub jobs: Vec<(String, PathBuf)>,
}

impl Cli {
    pub fn path_config(&self) -> PathConfig {
        let mut paths = PathConfig::under(&self.data_dir, &self.results_dir);
        if let Some(p) = &self.applicants {
            paths.applicants_csv = p.clone();
        }
        if let Some(p) = &self.updated {
            paths.updated_csv = p.clone();
        }
        if let Some(p) = &self.results {
            paths.results_json = p.clone();
        }
        if let Some(p) = &self.resumes_dir {
            paths.resumes_dir = p.clone();
        }
        paths
    }

    pub fn job_registry(&self) -> JobRegistry {
        let mut registry = JobRegistry::with_defaults(&self.data_dir);
        for (job_id, path) in &self.jobs {
            registry.insert(job_id.clone(), path.clone());
        }
        registry
    }
}

fn parse_job_entry(raw: &str) -> Result<(String, PathBuf), String> {
    let (job_id, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=PATH, got '{raw}'"))?;
    let job_id = job_id.trim();
    let path = path.trim();
    if job_id.is_empty() || path.is_empty() {
        return Err(format!("expected ID=PATH, got '{raw}'"));
    }
    Ok((job_id.to_string(), PathBuf::from(path)))
}
