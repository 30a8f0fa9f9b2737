//! Screening pipeline — one sequential pass over the applicants table.
//!
//! Flow per applicant: status gate → job lookup → read job description + resume →
//!       build prompt → evaluator → normalize → classify → annotate row.
//!
//! Every input row reaches the updated table, in order. Only evaluated applicants
//! produce a result record. Evaluator failures end the run; nothing is written.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::intake::{load_applicants, read_text};
use crate::models::applicant::ApplicantRow;
use crate::models::evaluation::{HiringStatus, ResultRecord};
use crate::output::{write_results_json, write_updated_table};
use crate::screening::evaluator::CandidateEvaluator;
use crate::screening::normalizer::normalize;
use crate::screening::prompts::build_evaluation_prompt;
use crate::screening::status::classify;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Why an applicant was passed through without evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    NotNew,
    UnknownJob,
    MissingFile,
}

/// What happened to a single applicant.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    Skipped(SkipReason),
    Evaluated(ResultRecord),
}

/// Everything a run produced, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ResultRecord>,
    pub updated_rows: Vec<ApplicantRow>,
    pub skip_counts: HashMap<SkipReason, usize>,
    /// False when there were no rows, so no updated table was written.
    pub wrote_updated_table: bool,
}

impl BatchReport {
    pub fn skipped(&self, reason: SkipReason) -> usize {
        self.skip_counts.get(&reason).copied().unwrap_or(0)
    }

    pub fn count_status(&self, status: HiringStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full batch and writes both output artifacts.
///
/// Fails before evaluating anyone if the applicants table is missing or lacks a
/// required column.
pub async fn run_batch(
    config: &Config,
    evaluator: &dyn CandidateEvaluator,
) -> Result<BatchReport, AppError> {
    let applicants = load_applicants(&config.paths.applicants_csv).await?;
    info!("Loaded {} applicant(s)", applicants.len());

    let mut report = BatchReport::default();

    for row in applicants {
        match screen_applicant(&row, config, evaluator).await? {
            Disposition::Skipped(reason) => {
                *report.skip_counts.entry(reason).or_insert(0) += 1;
                report.updated_rows.push(row);
            }
            Disposition::Evaluated(record) => {
                report.updated_rows.push(annotate_row(&row, &record));
                report.results.push(record);
            }
        }
    }

    write_results_json(&report.results, &config.paths.results_json).await?;
    report.wrote_updated_table =
        write_updated_table(&report.updated_rows, &config.paths.updated_csv).await?;

    info!(
        "Run complete: {} evaluated ({} shortlisted, {} screened, {} rejected); skipped {} not new, {} unknown job, {} missing file",
        report.results.len(),
        report.count_status(HiringStatus::Shortlisted),
        report.count_status(HiringStatus::Screened),
        report.count_status(HiringStatus::Rejected),
        report.skipped(SkipReason::NotNew),
        report.skipped(SkipReason::UnknownJob),
        report.skipped(SkipReason::MissingFile)
    );

    Ok(report)
}

/// Decides and, when eligible, evaluates one applicant.
/// Only evaluator failures and unexpected I/O errors are returned as `Err`.
pub async fn screen_applicant(
    row: &ApplicantRow,
    config: &Config,
    evaluator: &dyn CandidateEvaluator,
) -> Result<Disposition, AppError> {
    let job_id = row.job_id();
    info!(
        "Applicant: {} | Job: {} | Current status: {}",
        row.name(),
        job_id,
        row.status()
    );

    if !row.is_new() {
        info!("Skipping (not New)");
        return Ok(Disposition::Skipped(SkipReason::NotNew));
    }

    let Some(job_path) = config.jobs.get(job_id) else {
        warn!("Unknown job_id: {job_id}. Register it with --job {job_id}=PATH. Skipping.");
        return Ok(Disposition::Skipped(SkipReason::UnknownJob));
    };

    let resume_path = config.paths.resume_path(row.resume_file());
    let (job_description, resume) = match read_inputs(job_path, &resume_path).await {
        Ok(texts) => texts,
        Err(e) if e.is_missing_file() => {
            warn!("{e}. Skipping.");
            return Ok(Disposition::Skipped(SkipReason::MissingFile));
        }
        Err(e) => return Err(e),
    };

    let prompt = build_evaluation_prompt(&job_description, &resume);
    let completion = evaluator.complete(&prompt).await?;
    debug!("Raw model output: {}", completion.text);

    let evaluation = normalize(&completion.text);
    if evaluation.raw_output.is_some() {
        warn!(
            "Model output for {} was not valid JSON ({} bytes); using fallback evaluation",
            row.name(),
            completion.text.len()
        );
    }

    let status = classify(evaluation.score, &config.thresholds);
    let record = ResultRecord {
        name: row.name().to_string(),
        email: row.email().to_string(),
        job_id: job_id.to_string(),
        score: evaluation.score,
        summary: evaluation.summary,
        strengths: evaluation.strengths,
        gaps: evaluation.gaps,
        recommendation: evaluation.recommendation,
        status,
    };

    info!(
        "Result: score={} -> {} ({})",
        record
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string()),
        record.status,
        record.recommendation
    );

    Ok(Disposition::Evaluated(record))
}

/// Job description first, then resume; the first missing file wins.
async fn read_inputs(job_path: &Path, resume_path: &Path) -> Result<(String, String), AppError> {
    let job_description = read_text(job_path).await?;
    let resume = read_text(resume_path).await?;
    Ok((job_description, resume))
}

/// Copy of the original row with score, recommendation, updated_status and summary set.
/// A column the table already carries under one of those names is overwritten in place.
fn annotate_row(row: &ApplicantRow, record: &ResultRecord) -> ApplicantRow {
    let mut updated = row.clone();
    updated.set(
        "score",
        record.score.map(|s| s.to_string()).unwrap_or_default(),
    );
    updated.set("recommendation", record.recommendation.as_str());
    updated.set("updated_status", record.status.as_str());
    updated.set("summary", record.summary.as_str());
    updated
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
