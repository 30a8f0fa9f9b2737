pub mod applicant;
pub mod evaluation;
