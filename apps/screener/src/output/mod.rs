//! Output artifacts of a run: the JSON results document and the updated applicants table.
//! Both are overwritten on every run.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::applicant::ApplicantRow;
use crate::models::evaluation::ResultRecord;

/// Writes result records as an indented JSON array, creating the parent directory first.
/// An empty run still produces `[]`.
pub async fn write_results_json(results: &[ResultRecord], path: &Path) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(results)?;
    write_file(path, body.as_bytes()).await?;
    info!("Wrote {} result record(s) to {}", results.len(), path.display());
    Ok(())
}

/// Writes the updated applicants table. With no rows, nothing is written and `false` is returned.
///
/// Header order is the first row's columns, then any column first seen on a later row.
/// A row missing one of those columns gets an empty cell.
pub async fn write_updated_table(rows: &[ApplicantRow], path: &Path) -> Result<bool, AppError> {
    if rows.is_empty() {
        return Ok(false);
    }

    let header = table_header(rows);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;
    for row in rows {
        writer.write_record(header.iter().map(|column| row.get(column).unwrap_or("")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;

    write_file(path, &bytes).await?;
    info!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(true)
}

fn table_header(rows: &[ApplicantRow]) -> Vec<String> {
    let mut header: Vec<String> = Vec::new();
    for row in rows {
        for column in row.columns() {
            if !header.iter().any(|h| h == column) {
                header.push(column.to_string());
            }
        }
    }
    header
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluation::HiringStatus;

    fn row(pairs: &[(&str, &str)]) -> ApplicantRow {
        ApplicantRow::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn record(name: &str, score: Option<i64>) -> ResultRecord {
        ResultRecord {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            job_id: "IT_SUPPORT".to_string(),
            score,
            summary: "Résumé shows strong helpdesk work.".to_string(),
            strengths: vec!["Ticketing".to_string()],
            gaps: vec![],
            recommendation: "Good Fit".to_string(),
            status: HiringStatus::Screened,
        }
    }

    #[tokio::test]
    async fn test_results_json_is_indented_and_keeps_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("applicant_results.json");

        write_results_json(&[record("Jane", Some(70)), record("Omar", None)], &path)
            .await
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"name\": \"Jane\""));
        assert!(text.contains("Résumé"));
        let parsed: Vec<ResultRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0].name, "Jane");
        assert_eq!(parsed[1].score, None);
    }

    #[tokio::test]
    async fn test_results_json_empty_run_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applicant_results.json");

        write_results_json(&[], &path).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_updated_table_no_rows_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applicants_updated.csv");

        assert!(!write_updated_table(&[], &path).await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_updated_table_appends_later_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("applicants_updated.csv");
        let rows = vec![
            row(&[("name", "Ann"), ("status", "Interviewed")]),
            row(&[
                ("name", "Ben"),
                ("status", "New"),
                ("score", "81"),
                ("updated_status", "Shortlisted"),
            ]),
        ];

        assert!(write_updated_table(&rows, &path).await.unwrap());

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "name,status,score,updated_status");
        assert_eq!(lines[1], "Ann,Interviewed,,");
        assert_eq!(lines[2], "Ben,New,81,Shortlisted");
    }

    #[tokio::test]
    async fn test_updated_table_quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applicants_updated.csv");
        let rows = vec![row(&[("name", "Smith, John"), ("summary", "Good, but junior")])];

        write_updated_table(&rows, &path).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Smith, John\",\"Good, but junior\""));
    }
}
