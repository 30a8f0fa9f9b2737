use std::path::Path;

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::applicant::{ApplicantRow, REQUIRED_COLUMNS};

/// Loads the applicants table.
///
/// Fails with `MissingFile` if the table is absent, and with `MissingColumns` if the
/// header lacks any required column. The header is checked before any row is returned.
/// Short rows are padded with empty cells; cells beyond the header are dropped.
pub async fn load_applicants(path: &Path) -> Result<Vec<ApplicantRow>, AppError> {
    if !path.exists() {
        return Err(AppError::missing_file(path));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    check_required_columns(&headers)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            warn!(
                "Row {} has {} cells but the header has {}; extra cells dropped",
                index + 1,
                record.len(),
                headers.len()
            );
        }
        let fields = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(ApplicantRow::new(fields));
    }

    debug!("Read {} applicant row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

fn check_required_columns(headers: &[String]) -> Result<(), AppError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == required))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns {
            required: REQUIRED_COLUMNS.to_vec(),
            missing,
        })
    }
}
