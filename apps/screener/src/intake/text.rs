use std::io::ErrorKind;
use std::path::Path;

use crate::errors::AppError;

/// Reads a job description or resume as UTF-8 with surrounding whitespace trimmed.
/// A path that does not exist, or is not a regular file, yields `AppError::MissingFile`
/// carrying that path. Content that is not valid UTF-8 is an `AppError::Io` error.
pub async fn read_text(path: &Path) -> Result<String, AppError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(AppError::missing_file(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::missing_file(path)),
        Err(e) => return Err(AppError::Io(e)),
    }
    let content = tokio::fs::read_to_string(path).await?;
    Ok(content.trim().to_string())
}
