// Input side of a screening run: the applicants table plus the job description
// and resume text files it points at.

pub mod applicants;
pub mod text;

pub use applicants::load_applicants;
pub use text::read_text;
