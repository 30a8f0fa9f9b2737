/// Columns every applicants table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "email", "job_id", "resume_file", "status"];

/// Lifecycle marker for applicants that have not been screened yet.
pub const NEW_STATUS: &str = "new";

/// One row of the applicants table, kept as ordered column → value pairs so that
/// extra columns and the original column order survive the round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantRow {
    fields: Vec<(String, String)>,
}

impl ApplicantRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Raw (untrimmed) value of a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of an existing column in place, or appends a new column.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k == column) {
            Some((_, v)) => *v = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    fn trimmed(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.trimmed("name")
    }

    pub fn email(&self) -> &str {
        self.trimmed("email")
    }

    pub fn job_id(&self) -> &str {
        self.trimmed("job_id")
    }

    pub fn resume_file(&self) -> &str {
        self.trimmed("resume_file")
    }

    pub fn status(&self) -> &str {
        self.trimmed("status")
    }

    /// Only applicants still marked "New" (any case) are screened.
    pub fn is_new(&self) -> bool {
        self.status().eq_ignore_ascii_case(NEW_STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> ApplicantRow {
        ApplicantRow::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_accessors_trim_values() {
        let r = row(&[("name", "  Jane Doe "), ("job_id", "IT_SUPPORT ")]);
        assert_eq!(r.name(), "Jane Doe");
        assert_eq!(r.job_id(), "IT_SUPPORT");
        assert_eq!(r.get("name"), Some("  Jane Doe "));
    }

    #[test]
    fn test_missing_column_reads_as_empty() {
        let r = row(&[("name", "Jane")]);
        assert_eq!(r.email(), "");
        assert!(r.get("email").is_none());
    }

    #[test]
    fn test_is_new_case_insensitive() {
        assert!(row(&[("status", "New")]).is_new());
        assert!(row(&[("status", " NEW ")]).is_new());
        assert!(!row(&[("status", "Interviewed")]).is_new());
        assert!(!row(&[("status", "")]).is_new());
    }

    #[test]
    fn test_set_appends_then_replaces() {
        let mut r = row(&[("name", "Jane"), ("status", "New")]);
        r.set("score", "85");
        r.set("status", "Done");
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["name", "status", "score"]);
        assert_eq!(r.get("status"), Some("Done"));
        assert_eq!(r.columns().count(), 3);
    }
}
