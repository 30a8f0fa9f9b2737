// Prompt template for candidate evaluation.

use crate::llm_client::prompts::{FAIRNESS_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::models::evaluation::RECOMMENDATIONS;

/// Evaluation prompt template.
/// Replace: {json_only}, {output_keys}, {fairness}, {job_description}, {resume}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an experienced recruiter. Evaluate the candidate's resume against the job description.

{json_only} Use exactly these keys:
{output_keys}

{fairness}

JOB DESCRIPTION:
{job_description}

CANDIDATE RESUME:
{resume}"#;

/// Renders the evaluation prompt. Both texts are embedded verbatim.
pub fn build_evaluation_prompt(job_description: &str, resume: &str) -> String {
    // Resume goes in before the job description: it sits after the job description
    // placeholder, so the first `{job_description}` match is always the template's own.
    EVALUATION_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{output_keys}", &output_keys())
        .replace("{fairness}", FAIRNESS_INSTRUCTION)
        .replacen("{resume}", resume, 1)
        .replacen("{job_description}", job_description, 1)
}

fn output_keys() -> String {
    let labels = RECOMMENDATIONS
        .iter()
        .map(|r| format!("\"{r}\""))
        .collect::<Vec<_>>()
        .join(" | ");
    [
        "- score (integer 0-100)".to_string(),
        "- summary (string, 2-4 sentences)".to_string(),
        "- strengths (array of strings)".to_string(),
        "- gaps (array of strings)".to_string(),
        format!("- recommendation (string: {labels})"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_output_key() {
        let prompt = build_evaluation_prompt("JD", "CV");
        for key in ["score", "summary", "strengths", "gaps", "recommendation"] {
            assert!(prompt.contains(&format!("- {key} (")), "missing key {key}");
        }
        assert!(prompt.contains(r#""Strong Fit" | "Good Fit" | "Needs Development" | "Not a Fit""#));
    }

    #[test]
    fn test_prompt_states_role_and_fairness() {
        let prompt = build_evaluation_prompt("JD", "CV");
        assert!(prompt.starts_with("You are an experienced recruiter."));
        assert!(prompt.contains("avoid sensitive demographic assumptions"));
        assert!(prompt.contains("Return ONLY valid JSON."));
    }

    #[test]
    fn test_prompt_embeds_inputs_after_headers() {
        let prompt = build_evaluation_prompt("Support 200 users.", "Jane Doe\nHelpdesk");
        let jd_at = prompt.find("JOB DESCRIPTION:\nSupport 200 users.").unwrap();
        let cv_at = prompt.find("CANDIDATE RESUME:\nJane Doe\nHelpdesk").unwrap();
        assert!(jd_at < cv_at);
        assert!(prompt.ends_with("Jane Doe\nHelpdesk"));
    }

    #[test]
    fn test_placeholders_inside_inputs_are_left_alone() {
        let prompt = build_evaluation_prompt("Knows {resume} templating", "Uses {json_only}");
        assert!(prompt.contains("JOB DESCRIPTION:\nKnows {resume} templating"));
        assert!(prompt.contains("CANDIDATE RESUME:\nUses {json_only}"));
    }

    #[test]
    fn test_no_unfilled_placeholders() {
        let prompt = build_evaluation_prompt("JD", "CV");
        for placeholder in ["{json_only}", "{output_keys}", "{fairness}", "{job_description}", "{resume}"] {
            assert!(!prompt.contains(placeholder), "left {placeholder}");
        }
    }
}
